//! Rule trait for defining ordering lint rules.

use crate::context::FileContext;
use crate::model::{CallSite, ClassDecl};
use crate::resolve::BindingContext;
use crate::types::{Severity, Violation};

/// Sink for violations emitted during a check.
///
/// Each per-node entry point emits zero or one violation; diagnostics are
/// only emitted at validated violations, never before.
pub type ViolationSink<'a> = dyn FnMut(Violation) + 'a;

/// A lint rule over the flattened syntax model.
///
/// The driver invokes [`Rule::check_call`] once per call expression and
/// [`Rule::check_class`] once per class-like declaration (including nested
/// ones). Rules are stateless across invocations apart from their
/// immutable configuration, so a rule set may be shared across files.
///
/// # Example
///
/// ```ignore
/// use order_lint_core::{FileContext, Rule, Severity, Violation};
///
/// pub struct NoEmptyObjects;
///
/// impl Rule for NoEmptyObjects {
///     fn name(&self) -> &'static str { "no-empty-objects" }
///     fn code(&self) -> &'static str { "OL099" }
///
///     fn check_class(&self, ctx: &FileContext, class: &ClassDecl,
///                    bindings: &dyn BindingContext, sink: &mut ViolationSink) {
///         // inspect `class`, emit through `sink`
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "ordered-vararg-arguments").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "OL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single call site.
    fn check_call(
        &self,
        ctx: &FileContext,
        call: &CallSite,
        bindings: &dyn BindingContext,
        sink: &mut ViolationSink,
    ) {
        let _ = (ctx, call, bindings, sink);
    }

    /// Checks a single class-like declaration.
    fn check_class(
        &self,
        ctx: &FileContext,
        class: &ClassDecl,
        bindings: &dyn BindingContext,
        sink: &mut ViolationSink,
    ) {
        let _ = (ctx, class, bindings, sink);
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
