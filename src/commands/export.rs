use crate::services::batch_service::BatchPanel;
use crate::view::TerminalView;

/// Dump the current queue as JSON. A session convenience for piping into
/// other tools; nothing is ever written to disk.
pub fn execute(panel: &BatchPanel, view: &mut TerminalView) -> Result<(), String> {
    let json = serde_json::to_string_pretty(panel.records())
        .map_err(|e| format!("Failed to serialize queue: {}", e))?;
    view.print_block(&json);
    Ok(())
}
