//! Locating a C++ compiler to hand the translated output to.
//!
//! `CXX`, if set and non-empty, always wins. Otherwise the first of these
//! found on `PATH`, in this order: `c++`, `g++`, `clang++`.

use crate::error::ExternalToolError;

const CANDIDATES: &[&str] = &["c++", "g++", "clang++"];

pub fn discover_compiler() -> Result<String, ExternalToolError> {
    if let Ok(cxx) = std::env::var("CXX") {
        if !cxx.trim().is_empty() {
            return Ok(cxx);
        }
    }
    for candidate in CANDIDATES {
        if on_path(candidate) {
            return Ok((*candidate).to_string());
        }
    }
    Err(ExternalToolError::CompilerNotFound)
}

fn on_path(name: &str) -> bool {
    let Ok(path_var) = std::env::var("PATH") else {
        return false;
    };
    std::env::split_paths(&path_var).any(|dir| dir.join(name).is_file())
}
