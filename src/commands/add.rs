//! The add-transaction form: `$add` opens/closes it, `$set` edits the
//! draft, `$submit` appends the record.

use crate::commands::queue::render_add_form;
use crate::models::{DraftField, Notice};
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::PanelView;
use crate::utils::format;
use crate::view::TerminalView;

pub fn toggle_form(panel: &mut BatchPanel, view: &mut TerminalView) -> Result<(), String> {
    panel.toggle_add_form();
    if panel.show_add_form {
        view.print_block(&render_add_form(panel));
    } else {
        view.print_block("  Add form closed.\n");
    }
    Ok(())
}

pub fn set_field(
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    args: &[&str],
) -> Result<(), String> {
    if args.len() < 2 {
        view.notify(&Notice::info(
            "✏️ Set Command",
            "Fill in one field of the add form.\n\
             Usage: $set <kind|to|amount> <value>\n\
             Example: $set kind Transfer",
        ));
        return Ok(());
    }

    let field: DraftField = args[0].parse().map_err(|e: crate::utils::PanelError| e.to_string())?;
    let value = args[1..].join(" ");
    panel.set_draft_field(field, &value);

    if panel.show_add_form {
        view.print_block(&render_add_form(panel));
    }
    Ok(())
}

pub fn submit(panel: &mut BatchPanel, view: &mut TerminalView) -> Result<(), String> {
    // An incomplete draft is dropped without a word.
    if let Some(record) = panel.submit_draft() {
        let description = format!(
            "{} to {} queued with an estimated {} gas.",
            record.kind,
            format::short_address(&record.to),
            format::thousands(record.gas_estimate)
        );
        view.notify(&Notice::success("Transaction Added", &description));
    }
    Ok(())
}
