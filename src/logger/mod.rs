//! Level-filtered file logging.
//!
//! [`FileLogger`] writes records to its own file. [`Diagnostics`] routes the
//! crate's internal notices through `tracing`; see `bin/logger_demo.rs`.

mod diagnostics;
mod file_logger;
mod level;
mod macros;

pub use diagnostics::*;
pub use file_logger::*;
pub use level::*;

pub use tracing::{debug, error, info, trace, warn};
