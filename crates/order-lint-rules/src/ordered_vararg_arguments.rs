//! Rule requiring alphabetical order for single-vararg call arguments.
//!
//! # Detected Patterns
//!
//! ```kotlin
//! val fruits = @Sorted listOf("banana", "apple", "cherry")
//! ```
//!
//! # Good Patterns
//!
//! ```kotlin
//! val fruits = @Sorted listOf("apple", "banana", "cherry")
//! ```
//!
//! The comparison key is each argument's exact source text, so a quoted
//! literal sorts by its quote character: `"a"` precedes bare `b`. Only
//! calls wrapped in a marker annotation and resolving to a callable with
//! exactly one variadic parameter are checked; multi-parameter calls are
//! never checked because positional meaning could matter there.

use order_lint_core::model::CallSite;
use order_lint_core::utils::ident::strip_backticks;
use order_lint_core::utils::order::{first_divergence, Candidate};
use order_lint_core::{
    BindingContext, FileContext, Rule, Severity, Suggestion, Violation, ViolationSink,
};
use tracing::debug;

/// Rule code for ordered-vararg-arguments.
pub const CODE: &str = "OL001";

/// Rule name for ordered-vararg-arguments.
pub const NAME: &str = "ordered-vararg-arguments";

/// Requires vararg call arguments to be in alphabetical order.
#[derive(Debug, Clone)]
pub struct OrderedVarargArguments {
    /// Severity level.
    pub severity: Severity,
    markers: Vec<String>,
}

impl Default for OrderedVarargArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedVarargArguments {
    /// Creates a new rule with the default marker annotation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            markers: vec![crate::DEFAULT_MARKER.to_string()],
        }
    }

    /// Sets the marker annotation FQNs that opt a call site in. An empty
    /// list means nothing is ever in scope.
    #[must_use]
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn is_marked(&self, call: &CallSite, bindings: &dyn BindingContext) -> bool {
        call.annotations.iter().any(|a| {
            bindings
                .resolve_annotation(&a.name)
                .is_some_and(|fqn| self.markers.contains(&fqn))
        })
    }
}

impl Rule for OrderedVarargArguments {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires vararg call arguments to be in alphabetical order"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_call(
        &self,
        ctx: &FileContext,
        call: &CallSite,
        bindings: &dyn BindingContext,
        sink: &mut ViolationSink,
    ) {
        // A bare call is not the operand of an annotated expression.
        if call.annotations.is_empty() || !self.is_marked(call, bindings) {
            return;
        }

        let callee_name = strip_backticks(&call.callee.text);
        let Some(callee) = bindings.resolve_callable(callee_name) else {
            debug!(callee = callee_name, "callee did not resolve, skipping");
            return;
        };

        // Positional meaning could matter for non-last parameters, so the
        // check is restricted to callables with a lone vararg parameter.
        if !callee.is_single_vararg() {
            return;
        }

        if call.args.len() < 2 {
            return;
        }

        let candidates: Vec<Candidate> = call
            .args
            .iter()
            .map(|a| Candidate::new(a.text.clone(), a.span.clone()))
            .collect();

        let Some(divergence) = first_divergence(&candidates) else {
            return;
        };

        let location = divergence.actual.span.location(ctx.relative_path.clone());
        let message = format!(
            "Arguments to `{}` are not in alphabetical order. Reorder so that `{}` is before `{}`.",
            callee_name, divergence.expected.key, divergence.actual.key,
        );

        sink(
            Violation::new(CODE, NAME, self.severity, location, message).with_suggestion(
                Suggestion::new("Sort the arguments so each one precedes the next alphabetically"),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_lint_core::model::{AnnotationUse, Argument, Identifier, Span};
    use order_lint_core::{CallableSymbol, SymbolTable};
    use std::path::Path;

    const MARKER: &str = crate::DEFAULT_MARKER;

    fn make_call(callee: &str, annotations: &[&str], args: &[&str]) -> CallSite {
        CallSite {
            callee: Identifier::new(callee, Span::at(1, 14)),
            annotations: annotations
                .iter()
                .map(|a| AnnotationUse {
                    name: (*a).to_string(),
                    span: Span::at(1, 5),
                })
                .collect(),
            args: args
                .iter()
                .enumerate()
                .map(|(i, a)| Argument {
                    text: (*a).to_string(),
                    span: Span::at(1, 21 + i * 10),
                })
                .collect(),
            span: Span::at(1, 14),
        }
    }

    fn bindings() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.insert_annotation("Sorted", MARKER);
        table.insert_callable(
            "listOf",
            CallableSymbol::single_vararg("kotlin.collections.listOf", "elements"),
        );
        table
    }

    fn check(rule: &OrderedVarargArguments, call: &CallSite, table: &SymbolTable) -> Vec<Violation> {
        let content = "";
        let ctx = FileContext::new(Path::new("Fruits.kt"), content, Path::new("."));
        let mut violations = Vec::new();
        rule.check_call(&ctx, call, table, &mut |v| violations.push(v));
        violations
    }

    #[test]
    fn detects_out_of_order_arguments() {
        let call = make_call("listOf", &["Sorted"], &[r#""banana""#, r#""apple""#, r#""cherry""#]);
        let violations = check(&OrderedVarargArguments::new(), &call, &bindings());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(
            violations[0].message,
            r#"Arguments to `listOf` are not in alphabetical order. Reorder so that `"apple"` is before `"banana"`."#
        );
    }

    #[test]
    fn sorted_arguments_pass() {
        let call = make_call("listOf", &["Sorted"], &[r#""apple""#, r#""banana""#, r#""cherry""#]);
        assert!(check(&OrderedVarargArguments::new(), &call, &bindings()).is_empty());
    }

    #[test]
    fn unwrapped_call_is_out_of_scope() {
        let call = make_call("listOf", &[], &[r#""banana""#, r#""apple""#]);
        assert!(check(&OrderedVarargArguments::new(), &call, &bindings()).is_empty());
    }

    #[test]
    fn unresolved_annotation_is_out_of_scope() {
        let call = make_call("listOf", &["Mystery"], &[r#""banana""#, r#""apple""#]);
        assert!(check(&OrderedVarargArguments::new(), &call, &bindings()).is_empty());
    }

    #[test]
    fn qualified_annotation_use_resolves() {
        let call = make_call("listOf", &[MARKER], &[r#""banana""#, r#""apple""#]);
        assert_eq!(check(&OrderedVarargArguments::new(), &call, &bindings()).len(), 1);
    }

    #[test]
    fn unresolved_callee_is_skipped() {
        let call = make_call("mysteryOf", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        assert!(check(&OrderedVarargArguments::new(), &call, &bindings()).is_empty());
    }

    #[test]
    fn multi_parameter_callee_is_never_checked() {
        let mut table = bindings();
        table.insert_callable(
            "joinTo",
            CallableSymbol {
                qualified_name: "com.acme.joinTo".to_string(),
                parameters: vec![
                    order_lint_core::ParameterSymbol {
                        name: "separator".to_string(),
                        is_vararg: false,
                    },
                    order_lint_core::ParameterSymbol {
                        name: "parts".to_string(),
                        is_vararg: true,
                    },
                ],
            },
        );
        let call = make_call("joinTo", &["Sorted"], &[r#""b""#, r#""a""#]);
        assert!(check(&OrderedVarargArguments::new(), &call, &table).is_empty());
    }

    #[test]
    fn zero_or_one_argument_passes() {
        let none = make_call("listOf", &["Sorted"], &[]);
        let one = make_call("listOf", &["Sorted"], &[r#""zebra""#]);
        assert!(check(&OrderedVarargArguments::new(), &none, &bindings()).is_empty());
        assert!(check(&OrderedVarargArguments::new(), &one, &bindings()).is_empty());
    }

    #[test]
    fn quoted_literal_sorts_before_bare_identifier() {
        // Raw source text is the key: '"' precedes letters.
        let sorted = make_call("listOf", &["Sorted"], &[r#""a""#, "b"]);
        assert!(check(&OrderedVarargArguments::new(), &sorted, &bindings()).is_empty());

        let swapped = make_call("listOf", &["Sorted"], &["b", r#""a""#]);
        let violations = check(&OrderedVarargArguments::new(), &swapped, &bindings());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains(r#"`"a"` is before `b`"#));
    }

    #[test]
    fn anchor_is_the_out_of_order_argument() {
        let call = make_call("listOf", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        let violations = check(&OrderedVarargArguments::new(), &call, &bindings());
        // First argument (column 21) is where declared order first
        // disagrees with sorted order.
        assert_eq!(violations[0].location.column, 21);
    }

    #[test]
    fn empty_marker_list_disables_the_rule() {
        let rule = OrderedVarargArguments::new().markers(Vec::<String>::new());
        let call = make_call("listOf", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        assert!(check(&rule, &call, &bindings()).is_empty());
    }

    #[test]
    fn custom_marker_list_is_honored() {
        let mut table = bindings();
        table.insert_annotation("Alpha", "com.acme.Alpha");
        let rule = OrderedVarargArguments::new().markers(["com.acme.Alpha"]);

        let call = make_call("listOf", &["Alpha"], &[r#""banana""#, r#""apple""#]);
        assert_eq!(check(&rule, &call, &table).len(), 1);

        // The default marker is no longer in scope.
        let default_marked = make_call("listOf", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        assert!(check(&rule, &default_marked, &table).is_empty());
    }

    #[test]
    fn check_is_idempotent() {
        let call = make_call("listOf", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        let rule = OrderedVarargArguments::new();
        let table = bindings();
        let first = check(&rule, &call, &table);
        let second = check(&rule, &call, &table);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].message, second[0].message);
    }

    #[test]
    fn backticked_callee_is_normalized_for_resolution() {
        let call = make_call("`listOf`", &["Sorted"], &[r#""banana""#, r#""apple""#]);
        let violations = check(&OrderedVarargArguments::new(), &call, &bindings());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.starts_with("Arguments to `listOf`"));
    }
}
