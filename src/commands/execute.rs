use crate::config::Config;
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::{self, TokioScheduler};
use crate::view::TerminalView;

pub async fn execute(
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    config: &Config,
) -> Result<(), String> {
    executor_service::execute_batch(panel, config, &TokioScheduler, view)
        .await
        .map_err(|e| e.to_string())
}
