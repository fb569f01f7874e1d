//! Command implementations, one module per subcommand.

pub mod completions;
pub mod list;
pub mod reveal;
pub mod save;
pub mod wipe;
