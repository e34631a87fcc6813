pub mod errors;
pub mod format;
pub mod table;

pub use errors::PanelError;
pub use table::Table;
