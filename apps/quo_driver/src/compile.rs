//! Staging the translated C++ and invoking the discovered compiler on it.

use std::io::Write as _;
use std::path::Path;
use std::process::Command;

use crate::error::{DriverError, ExternalToolError};
use crate::toolchain::discover_compiler;

/// Writes `cpp_source` to a temp file and compiles it with the discovered
/// C++ compiler. `output`, if given, is passed through as `-o <output>`;
/// otherwise the compiler picks its own default artifact name.
pub fn compile(cpp_source: &str, output: Option<&Path>) -> Result<(), DriverError> {
    let mut cpp_file = tempfile::Builder::new()
        .suffix(".cpp")
        .tempfile()
        .map_err(|e| DriverError::Io(format!("creating temp file: {e}")))?;
    cpp_file
        .write_all(cpp_source.as_bytes())
        .map_err(|e| DriverError::Io(format!("writing temp file: {e}")))?;

    let compiler = discover_compiler()?;

    let mut cmd = Command::new(&compiler);
    cmd.arg(cpp_file.path());
    if let Some(out) = output {
        cmd.arg("-o").arg(out);
    }

    let status = cmd
        .status()
        .map_err(|_| DriverError::from(ExternalToolError::CompilerNotFound))?;

    if !status.success() {
        return Err(DriverError::from(ExternalToolError::CompilerFailed { status }));
    }
    Ok(())
}
