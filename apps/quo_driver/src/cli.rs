//! Command-line surface and pipeline sequencing.

use std::path::PathBuf;

use clap::Parser;
use quo_base::Interner;
use quo_syntax::{parse_module, tokenize};

use crate::compile::compile;
use crate::error::DriverError;
use crate::wrapper::wrap_module;

/// Compiles a Quo source file to C++ and hands it to a C++ compiler.
#[derive(Debug, Parser)]
#[command(name = "quo-driver", version, about)]
pub struct Cli {
    /// Quo source file to compile.
    pub input: PathBuf,

    /// Where the compiler should write its output artifact.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Print the token stream and stop; does not invoke a compiler.
    #[arg(long, conflicts_with_all = ["emit_ast", "emit_cpp"])]
    pub emit_tokens: bool,

    /// Print the parsed AST and stop; does not invoke a compiler.
    #[arg(long, conflicts_with_all = ["emit_tokens", "emit_cpp"])]
    pub emit_ast: bool,

    /// Print the translated C++ and stop; does not invoke a compiler.
    #[arg(long, conflicts_with_all = ["emit_tokens", "emit_ast"])]
    pub emit_cpp: bool,
}

/// Parses arguments from `std::env::args` and runs the full pipeline.
pub fn run_cli() -> Result<(), DriverError> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), DriverError> {
    let source = std::fs::read_to_string(&cli.input)
        .map_err(|e| DriverError::Io(format!("reading {}: {e}", cli.input.display())))?;

    let mut interner = Interner::new();
    let tokens = tokenize(&source, &mut interner).map_err(DriverError::Lex)?;
    if cli.emit_tokens {
        for token in &tokens {
            println!("{token:?}");
        }
        return Ok(());
    }

    let module = parse_module(tokens).map_err(DriverError::Parse)?;
    if cli.emit_ast {
        println!("{module:#?}");
        return Ok(());
    }

    let cpp_members = quo_cxxgen::translate_module(&module, &interner).map_err(DriverError::Translate)?;
    let cpp_source = wrap_module(&cpp_members);
    if cli.emit_cpp {
        println!("{cpp_source}");
        return Ok(());
    }

    compile(&cpp_source, cli.output.as_deref())
}
