//! `quo-driver`: the command-line front end for the Quo-to-C++ pipeline.
//!
//! [`run_cli`] lexes, parses, and translates one `.quo` file, then stages the
//! translated C++ and hands it to a discovered compiler. `main.rs` is a thin
//! wrapper that formats whatever error comes back and sets the process exit
//! code.

mod cli;
mod compile;
mod error;
mod toolchain;
mod wrapper;

pub use cli::{run_cli, Cli};
pub use error::{exit_code, DriverError, ExternalToolError};
