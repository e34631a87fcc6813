use crate::config::Config;
use crate::services::batch_service::BatchPanel;
use crate::utils::format;
use crate::utils::Table;
use crate::view::TerminalView;

/// Render the transaction queue: stats header, the list itself, the
/// gasless banner and, while it is open, the add form.
pub fn execute(
    panel: &BatchPanel,
    view: &mut TerminalView,
    config: &Config,
) -> Result<(), String> {
    let mut out = String::new();

    out.push_str(&format!(
        "  Selected: {}   Gas Est: {}   Cost: {}\n\n",
        panel.selected_count(),
        format::kilo_gas(panel.total_gas()),
        format::usd(panel.displayed_cost_usd(config)),
    ));

    out.push_str("  Transaction Queue — select transactions to batch together\n\n");

    let mut table = Table::new(&["#", "ID", "Type", "To", "Amount", "Gas", "Sel"]);
    for (index, tx) in panel.records().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            tx.id.chars().take(8).collect(),
            tx.kind.clone(),
            format::short_address(&tx.to),
            format!("{} ETH", tx.amount),
            format::kilo_gas(tx.gas_estimate),
            if tx.selected { "[x]" } else { "[ ]" }.to_string(),
        ]);
    }
    out.push_str(&table.render());
    out.push('\n');

    if panel.gasless {
        out.push_str("  Gasless Transactions: ON  ⚡ Paymaster Active\n");
    } else {
        out.push_str("  Gasless Transactions: OFF\n");
    }

    if panel.show_add_form {
        out.push('\n');
        out.push_str(&render_add_form(panel));
    }

    view.print_block(&out);
    Ok(())
}

pub(crate) fn render_add_form(panel: &BatchPanel) -> String {
    let field = |value: &str| {
        if value.is_empty() {
            "<empty>".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "  Add Transaction — $set kind|to|amount <value>, then $submit\n    \
         kind:   {}\n    \
         to:     {}\n    \
         amount: {}\n",
        field(&panel.draft.kind),
        field(&panel.draft.to),
        field(&panel.draft.amount),
    )
}
