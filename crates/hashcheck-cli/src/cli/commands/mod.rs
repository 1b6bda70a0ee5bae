//! CLI command handlers. Each command is in its own file.

mod algorithms;
mod completions;
mod digest;
mod interactive;
mod open;
mod share;
mod source;
mod verify;

pub use algorithms::run_algorithms;
pub use completions::run_completions;
pub use digest::run_digest;
pub use interactive::run_interactive;
pub use open::run_open;
pub use share::run_share;
pub use verify::run_verify;
