pub mod options;
pub mod parser;
pub mod session;

pub use options::{OptionError, SessionOptions};
pub use parser::{parse_command, Command};
pub use session::{process_line, run_session, run_stdio, Session};
