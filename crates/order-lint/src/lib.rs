//! # order-lint
//!
//! Alphabetical-ordering lints for Kotlin sources, driven by marker
//! annotations.
//!
//! This is the facade crate: it re-exports the core framework, the
//! built-in rules, and the Kotlin front-end, and provides the [`Analyzer`]
//! batch driver.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_lint::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src/main/kotlin")
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```
//!
//! A call site or sealed type opts into checking by carrying one of the
//! configured marker annotations (default `io.orderlint.Sorted`):
//!
//! ```kotlin
//! val fruits = @Sorted listOf("apple", "banana", "cherry")
//!
//! @Sorted
//! sealed class Fruit {
//!     object Apple : Fruit()
//!     object Banana : Fruit()
//! }
//! ```
//!
//! Configure via `order-lint.toml`:
//!
//! ```toml
//! [rules.ordered-vararg-arguments]
//! markers = ["com.acme.Alphabetical"]
//! severity = "error"
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use order_lint_core::*;

/// Built-in ordering rules.
pub mod rules {
    pub use order_lint_rules::*;
}

/// Kotlin front-end: parser and file-local bindings.
pub mod kt {
    pub use order_lint_kt::*;
}

mod analyzer;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
