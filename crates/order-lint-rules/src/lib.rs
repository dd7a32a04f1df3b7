//! # order-lint-rules
//!
//! Built-in ordering rules for order-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | OL001 | `ordered-vararg-arguments` | Requires vararg call arguments to be in alphabetical order |
//! | OL002 | `ordered-sealed-subclasses` | Requires sealed subclasses to be declared in alphabetical order |
//!
//! Both rules are opt-in per site: a call or sealed type only gets checked
//! when it carries (directly, or via a supertype for OL002) one of the
//! configured marker annotations. The default marker is
//! [`DEFAULT_MARKER`].
//!
//! ## Usage
//!
//! ```ignore
//! use order_lint_rules::{OrderedSealedSubclasses, OrderedVarargArguments};
//!
//! let rule = OrderedVarargArguments::new().markers(["com.acme.Sorted"]);
//! rule.check_call(&ctx, &call, &bindings, &mut sink);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ordered_sealed_subclasses;
pub mod ordered_vararg_arguments;
mod presets;

pub use ordered_sealed_subclasses::OrderedSealedSubclasses;
pub use ordered_vararg_arguments::OrderedVarargArguments;
pub use presets::{all_rules, recommended_rules, rules_from_config};

/// Re-export core types for convenience.
pub use order_lint_core::{Rule, Severity, Violation};

/// Default marker annotation: the fully qualified name a site must carry
/// (directly or via an ancestor) to opt into the ordering checks.
pub const DEFAULT_MARKER: &str = "io.orderlint.Sorted";
