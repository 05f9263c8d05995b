mod args;
mod commands;
mod handlers;
mod source;
mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use source::{Mailbox, available_fields, load_mailbox};
pub use types::OutputFormat;
