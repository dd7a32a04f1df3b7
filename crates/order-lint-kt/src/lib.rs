//! # order-lint-kt
//!
//! Tree-sitter based Kotlin front-end for order-lint.
//!
//! This crate turns Kotlin source into the `order-lint-core` syntax model
//! and derives a file-local binding table, so the ordering rules can run
//! without a compiler:
//!
//! - [`KotlinParser`] parses `.kt`/`.kts` source into a
//!   [`KtFile`](order_lint_core::model::KtFile)
//! - [`FileBindings`] builds a
//!   [`SymbolTable`](order_lint_core::SymbolTable) from the parsed file
//!   plus the built-in Kotlin stdlib vararg-factory signatures

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bindings;
mod parser;

pub use bindings::FileBindings;
pub use parser::{KotlinParser, ParseError};
