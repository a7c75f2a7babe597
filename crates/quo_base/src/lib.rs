//! # quo-base
//!
//! Pure structural atoms shared by every stage of the Quo pipeline.
//!
//! This crate provides the foundational types the lexer, parser, and C++
//! translator all build on:
//!
//! - [`Interner`]/[`Symbol`] — string interning for O(1) identifier equality
//! - [`Span`]/[`Line`] — source location tracking
//! - [`SpannedError`]/[`Result`] — errors annotated with a source line
//!
//! # Design Principles
//!
//! This crate knows nothing about Quo's grammar or C++ output. It provides
//! only generic, reusable infrastructure that the higher-level crates build
//! upon.

pub mod error;
pub mod intern;
pub mod span;

pub use error::{Result, SpannedError};
pub use intern::{Interner, Symbol, SymbolEq};
pub use span::{Line, Span};
