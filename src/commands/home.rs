use crate::services::shell_service;
use crate::view::TerminalView;

pub fn execute(view: &mut TerminalView) -> Result<(), String> {
    view.print_block(&shell_service::render_home());
    Ok(())
}
