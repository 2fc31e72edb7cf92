mod command;
mod host;
mod utils;

// Re-export public types and functions
pub use command::{CommandLine, CommandOutput};
pub use host::{Host, SystemHost};
pub use utils::find_in_path;
