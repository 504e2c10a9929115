pub mod cli;
pub mod logging;
pub mod summary;

pub use cli::{Cli, LogFormatArg, LogLevelArg};
pub use logging::{LogConfig, LogFormat, init_logging};
pub use summary::print_summary;
