//! Scripted batch execution.
//!
//! Pressing execute does no real work: the "batch" advances through a fixed
//! progress sequence with a timed pause before each step, emitting toasts
//! along the way. The sequence is modeled as a small state machine
//! (Idle -> Running(step) -> Done) so the toast side effects can be tested
//! without real time passing; the pause itself sits behind the
//! [`StepScheduler`] trait and the rendering behind [`PanelView`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::models::Notice;
use crate::services::batch_service::BatchPanel;
use crate::utils::errors::PanelError;
use crate::utils::format;

/// Progress percentages visited by every batch run, in order.
pub const PROGRESS_STEPS: [u8; 6] = [0, 20, 40, 60, 80, 100];

const PAYMASTER_STEP: u8 = 40;
const BUNDLED_STEP: u8 = 80;

/// Pause between progress steps. The production impl really sleeps; tests
/// inject one that returns immediately.
#[async_trait]
pub trait StepScheduler: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Scheduler backed by the tokio timer.
pub struct TokioScheduler;

#[async_trait]
impl StepScheduler for TokioScheduler {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Rendering target for progress updates and toast notifications.
pub trait PanelView {
    fn progress(&mut self, pct: u8);
    fn notify(&mut self, notice: &Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running(usize),
    Done,
}

/// What one step of the sequence produces.
#[derive(Debug)]
pub struct StepOutcome {
    pub progress: u8,
    pub notices: Vec<Notice>,
}

/// One batch run. Selected count, total gas and gasless mode are captured
/// at invocation time; later panel edits cannot affect a run in flight.
pub struct BatchExecution {
    selected_count: usize,
    total_gas: u64,
    gasless: bool,
    phase: Phase,
}

impl BatchExecution {
    pub fn new(selected_count: usize, total_gas: u64, gasless: bool) -> Self {
        BatchExecution {
            selected_count,
            total_gas,
            gasless,
            phase: Phase::Idle,
        }
    }

    /// Advance to the next progress step, or None once the sequence has
    /// visited every step.
    pub fn advance(&mut self) -> Option<StepOutcome> {
        let next = match self.phase {
            Phase::Idle => 0,
            Phase::Running(i) if i + 1 < PROGRESS_STEPS.len() => i + 1,
            Phase::Running(_) => {
                self.phase = Phase::Done;
                return None;
            }
            Phase::Done => return None,
        };

        self.phase = Phase::Running(next);
        let progress = PROGRESS_STEPS[next];

        let mut notices = Vec::new();
        if progress == PAYMASTER_STEP && self.gasless {
            notices.push(Notice::info(
                "Paymaster Activated! ⚡",
                "Gas fees are being sponsored for your transactions.",
            ));
        }
        if progress == BUNDLED_STEP {
            notices.push(Notice::info(
                "Transactions Bundled 📦",
                &format!("{} transactions batched successfully.", self.selected_count),
            ));
        }

        Some(StepOutcome { progress, notices })
    }

    /// Final toast once the sequence has run to completion.
    pub fn completion_notice(&self) -> Notice {
        if self.gasless {
            Notice::success(
                "Batch Complete! ✨",
                "All transactions executed gaslessly via paymaster.",
            )
        } else {
            Notice::success(
                "Batch Complete! ✨",
                &format!(
                    "Batch executed. Total gas used: {}",
                    format::thousands(self.total_gas)
                ),
            )
        }
    }
}

/// Run the batch animation against the panel.
///
/// With nothing selected this emits a single warning toast and leaves the
/// panel untouched. Once started the sequence runs to completion; there is
/// no cancellation.
pub async fn execute_batch<S, V>(
    panel: &mut BatchPanel,
    config: &Config,
    scheduler: &S,
    view: &mut V,
) -> Result<(), PanelError>
where
    S: StepScheduler + ?Sized,
    V: PanelView,
{
    if panel.processing {
        return Err(PanelError::BatchInFlight);
    }

    if panel.selected_count() == 0 {
        view.notify(&Notice::warning(
            "No transactions selected",
            "Please select at least one transaction to batch.",
        ));
        return Ok(());
    }

    let mut execution = BatchExecution::new(panel.selected_count(), panel.total_gas(), panel.gasless);
    info!(
        "Executing batch: {} transactions, {} total gas, gasless={}",
        panel.selected_count(),
        panel.total_gas(),
        panel.gasless
    );

    panel.processing = true;
    panel.progress = 0;
    let delay = Duration::from_millis(config.step_delay_ms);

    while let Some(outcome) = execution.advance() {
        scheduler.pause(delay).await;
        panel.progress = outcome.progress;
        view.progress(outcome.progress);
        for notice in &outcome.notices {
            view.notify(notice);
        }
    }

    panel.processing = false;
    view.notify(&execution.completion_notice());
    info!("Batch complete");
    Ok(())
}
