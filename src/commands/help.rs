use crate::view::TerminalView;

pub fn execute(view: &mut TerminalView) -> Result<(), String> {
    let help = "\
  📖 Ohmy7702 Commands
  Ohmy7702 — gasless batching transactions powered by EIP-7702.
  Everything here is a local simulation; nothing touches a chain.

  🏠 Page
    $home                      - Show the landing page
    $help                      - Show this help message

  📋 Queue
    $queue, $q                 - List transactions and batch stats
    $toggle <id>, $t           - Include/exclude a transaction
    $remove <id>, $rm          - Delete a transaction (no undo)
    $export                    - Print the queue as JSON

  ➕ Add form
    $add                       - Open/close the add form
    $set <kind|to|amount> <v>  - Fill in a draft field
    $submit                    - Queue the drafted transaction

  ⚡ Batching
    $gasless [on|off]          - Toggle paymaster sponsorship
    $execute, $run             - Run the batch animation

  🚪 Session
    $exit, $quit               - Leave the demo
";
    view.print_block(help);
    Ok(())
}
