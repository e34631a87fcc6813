use crate::commands::resolve_record_id;
use crate::models::Notice;
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::PanelView;
use crate::utils::format;
use crate::view::TerminalView;

pub fn execute(
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    args: &[&str],
) -> Result<(), String> {
    if args.is_empty() {
        view.notify(&Notice::info(
            "🗑️ Remove Command",
            "Delete a transaction from the queue permanently (no undo).\n\
             Usage: $remove <id or id prefix>",
        ));
        return Ok(());
    }

    let id = resolve_record_id(panel, args[0]).map_err(|e| e.to_string())?;
    if let Some(removed) = panel.remove(&id) {
        view.notify(&Notice::success(
            "Transaction Removed",
            &format!(
                "{} to {} is gone.",
                removed.kind,
                format::short_address(&removed.to)
            ),
        ));
    }

    Ok(())
}
