use crate::config::Config;
use crate::models::Notice;
use crate::services::batch_service::BatchPanel;
use crate::services::executor_service::PanelView;
use crate::utils::format;
use crate::view::TerminalView;

pub fn execute(
    panel: &mut BatchPanel,
    view: &mut TerminalView,
    config: &Config,
    args: &[&str],
) -> Result<(), String> {
    panel.gasless = match args.first() {
        None => !panel.gasless,
        Some(&"on") => true,
        Some(&"off") => false,
        Some(other) => return Err(format!("Expected on or off, got '{}'", other)),
    };

    if panel.gasless {
        view.notify(&Notice::info(
            "Paymaster Active ⚡",
            "Gas fees will be sponsored for your transactions. Displayed cost: $0.00",
        ));
    } else {
        view.notify(&Notice::info(
            "Gasless Disabled",
            &format!(
                "You pay your own gas. Estimated cost for the current batch: {}",
                format::usd(panel.displayed_cost_usd(config))
            ),
        ));
    }
    Ok(())
}
