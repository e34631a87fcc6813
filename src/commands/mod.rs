pub mod add;
pub mod execute;
pub mod export;
pub mod gasless;
pub mod help;
pub mod home;
pub mod queue;
pub mod remove;
pub mod toggle;

use tracing::warn;

use crate::config::Config;
use crate::models::Notice;
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::PanelView;
use crate::utils::errors::PanelError;
use crate::view::TerminalView;

/// Parse one input line and dispatch it. Words without a known `$command`
/// are ignored silently. Returns false when the session should end.
pub async fn handle_line(
    line: &str,
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    config: &Config,
) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return true;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "$home" => home::execute(view),
        "$queue" | "$q" => queue::execute(panel, view, config),
        "$toggle" | "$t" => toggle::execute(panel, view, args),
        "$remove" | "$rm" => remove::execute(panel, view, args),
        "$add" => add::toggle_form(panel, view),
        "$set" => add::set_field(panel, view, args),
        "$submit" => add::submit(panel, view),
        "$gasless" => gasless::execute(panel, view, config, args),
        "$execute" | "$run" => execute::execute(panel, view, config).await,
        "$export" => export::execute(panel, view),
        "$help" => help::execute(view),
        "$exit" | "$quit" => return false,
        _ => return true,
    };

    if let Err(e) = result {
        warn!("Error executing command {}: {}", command, e);
        view.notify(&Notice::error("Command Error", &e));
    }

    true
}

/// Resolve user input to a full record id. Exact ids win; otherwise a
/// unique id prefix is accepted. The panel operations themselves stay
/// exact-match, so this convenience never changes their no-op semantics.
pub(crate) fn resolve_record_id(panel: &BatchPanel, needle: &str) -> Result<String, PanelError> {
    if panel.records().iter().any(|tx| tx.id == needle) {
        return Ok(needle.to_string());
    }

    let matches: Vec<&str> = panel
        .records()
        .iter()
        .filter(|tx| tx.id.starts_with(needle))
        .map(|tx| tx.id.as_str())
        .collect();

    match matches.len() {
        0 => Err(PanelError::UnknownId(needle.to_string())),
        1 => Ok(matches[0].to_string()),
        n => Err(PanelError::AmbiguousId(needle.to_string(), n)),
    }
}
