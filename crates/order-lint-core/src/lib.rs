//! # order-lint-core
//!
//! Core framework for the order-lint ordering checks.
//!
//! This crate provides the foundational traits and types for building
//! ordering lints over Kotlin syntax:
//!
//! - [`Rule`] trait with per-node entry points and a violation sink
//! - A tagged-variant syntax [`model`] produced by a front-end adapter
//! - [`BindingContext`] for resolved symbol information, with the
//!   hash-map backed [`SymbolTable`] implementation
//! - [`Violation`] / [`LintResult`] for representing findings
//! - Shared rule utilities: identifier normalization, order validation,
//!   and the annotated-ancestor breadth-first search
//!
//! ## Example
//!
//! ```ignore
//! use order_lint_core::{Rule, SymbolTable};
//!
//! let mut sink = |violation| println!("{violation}");
//! rule.check_call(&ctx, &call, &bindings, &mut sink);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod rule;
mod types;

/// Syntax model consumed by rules.
pub mod model;
/// Binding context and symbol types.
pub mod resolve;
/// Utility modules for rule implementations.
pub mod utils;

pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use resolve::{BindingContext, CallableSymbol, ParameterSymbol, SymbolTable, TypeSymbol};
pub use rule::{Rule, RuleBox, ViolationSink};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
