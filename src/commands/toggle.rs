use crate::commands::resolve_record_id;
use crate::models::Notice;
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::PanelView;
use crate::view::TerminalView;

pub fn execute(
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    args: &[&str],
) -> Result<(), String> {
    if args.is_empty() {
        view.notify(&Notice::info(
            "🔘 Toggle Command",
            "Include or exclude a transaction from the batch.\n\
             Usage: $toggle <id or id prefix>\n\
             Ids are shown in the $queue listing.",
        ));
        return Ok(());
    }

    let id = resolve_record_id(panel, args[0]).map_err(|e| e.to_string())?;
    let record_kind = panel
        .records()
        .iter()
        .find(|tx| tx.id == id)
        .map(|tx| tx.kind.clone())
        .unwrap_or_default();

    match panel.toggle_selection(&id) {
        Some(true) => view.notify(&Notice::info(
            "Transaction Selected",
            &format!("{} added to the batch.", record_kind),
        )),
        Some(false) => view.notify(&Notice::info(
            "Transaction Deselected",
            &format!("{} removed from the batch.", record_kind),
        )),
        None => {}
    }

    Ok(())
}
