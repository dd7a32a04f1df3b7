//! Rule requiring alphabetical order for sealed subclass declarations.
//!
//! # Detected Patterns
//!
//! ```kotlin
//! @Sorted
//! sealed class Fruit {
//!     object Banana : Fruit()
//!     object Apple : Fruit()
//! }
//! ```
//!
//! # Good Patterns
//!
//! ```kotlin
//! @Sorted
//! sealed class Fruit {
//!     object Apple : Fruit()
//!     object Banana : Fruit()
//! }
//! ```
//!
//! The marker annotation may sit on the sealed type itself or on any
//! ancestor reachable through the supertype graph; the nearest annotated
//! ancestor (found breadth-first) is named in the diagnostic. Members that
//! do not extend the sealed type — helper functions, unrelated nested
//! declarations — are not candidates.

use order_lint_core::model::{ClassDecl, Declaration};
use order_lint_core::utils::ident::{comparable_name, strip_backticks};
use order_lint_core::utils::order::{first_divergence, Candidate};
use order_lint_core::utils::supertypes::find_annotated_ancestor;
use order_lint_core::{
    BindingContext, FileContext, Rule, Severity, Suggestion, TypeSymbol, Violation, ViolationSink,
};
use tracing::debug;

/// Rule code for ordered-sealed-subclasses.
pub const CODE: &str = "OL002";

/// Rule name for ordered-sealed-subclasses.
pub const NAME: &str = "ordered-sealed-subclasses";

/// Requires sealed subclasses to be declared in alphabetical order.
#[derive(Debug, Clone)]
pub struct OrderedSealedSubclasses {
    /// Severity level.
    pub severity: Severity,
    markers: Vec<String>,
}

impl Default for OrderedSealedSubclasses {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedSealedSubclasses {
    /// Creates a new rule with the default marker annotation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            markers: vec![crate::DEFAULT_MARKER.to_string()],
        }
    }

    /// Sets the marker annotation FQNs that opt a sealed type in. An
    /// empty list means nothing is ever in scope.
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
}

/// Resolves a supertype reference as written, falling back to the trailing
/// member name for qualified references like `produce.Fruit`.
fn resolve_supertype<'a>(
    bindings: &'a dyn BindingContext,
    written: &str,
) -> Option<&'a TypeSymbol> {
    bindings
        .resolve_type(written)
        .or_else(|| bindings.resolve_type(comparable_name(written)))
}

impl Rule for OrderedSealedSubclasses {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires sealed subclasses to be declared in alphabetical order"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_class(
        &self,
        ctx: &FileContext,
        class: &ClassDecl,
        bindings: &dyn BindingContext,
        sink: &mut ViolationSink,
    ) {
        // Cheap exit before any resolution work.
        if !class.is_sealed() {
            return;
        }

        let sealed_name = strip_backticks(&class.name.text);
        let Some(sealed_symbol) = bindings.resolve_type(sealed_name) else {
            debug!(class = sealed_name, "sealed type did not resolve, skipping");
            return;
        };

        let Some(ancestor) = find_annotated_ancestor(sealed_symbol, bindings, &self.markers)
        else {
            return;
        };

        // Candidates are direct lexical members whose supertype resolves
        // back to the sealed type being checked.
        let mut candidates = Vec::new();
        for member in &class.members {
            let Declaration::Class(subclass) = member else {
                continue;
            };
            let extends_sealed = subclass.supertypes.iter().any(|st| {
                resolve_supertype(bindings, &st.name)
                    .is_some_and(|t| t.qualified_name == sealed_symbol.qualified_name)
            });
            if !extends_sealed {
                continue;
            }
            candidates.push(Candidate::new(
                strip_backticks(&subclass.name.text),
                subclass.name.span.clone(),
            ));
        }

        let Some(divergence) = first_divergence(&candidates) else {
            return;
        };

        let qualifier = if ancestor.on_self {
            String::new()
        } else {
            format!(" (which implements `{}`)", ancestor.symbol.simple_name())
        };

        let location = divergence.actual.span.location(ctx.relative_path.clone());
        let message = format!(
            "Sealed subclasses for class `{}`{} are not declared in alphabetical order. Reorder so that `{}` is before `{}`.",
            sealed_name, qualifier, divergence.expected.key, divergence.actual.key,
        );

        sink(
            Violation::new(CODE, NAME, self.severity, location, message).with_suggestion(
                Suggestion::new("Declare the subclasses in alphabetical order"),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_lint_core::model::{
        AnnotationUse, ClassKind, FunctionDecl, Identifier, Span, SuperTypeRef,
    };
    use order_lint_core::SymbolTable;
    use std::path::Path;

    const MARKER: &str = crate::DEFAULT_MARKER;

    fn subclass(name: &str, supertype: &str, line: usize) -> Declaration {
        Declaration::Class(ClassDecl {
            name: Identifier::new(name, Span::at(line, 12)),
            kind: ClassKind::Object,
            modifiers: vec![],
            annotations: vec![],
            supertypes: vec![SuperTypeRef {
                name: supertype.to_string(),
                span: Span::at(line, 20),
            }],
            members: vec![],
            span: Span::at(line, 5),
        })
    }

    fn helper_fun(name: &str, line: usize) -> Declaration {
        Declaration::Function(FunctionDecl {
            name: Identifier::new(name, Span::at(line, 9)),
            params: vec![],
            span: Span::at(line, 5),
        })
    }

    fn sealed_class(name: &str, members: Vec<Declaration>) -> ClassDecl {
        ClassDecl {
            name: Identifier::new(name, Span::at(2, 14)),
            kind: ClassKind::Class,
            modifiers: vec!["sealed".to_string()],
            annotations: vec![AnnotationUse {
                name: "Sorted".to_string(),
                span: Span::at(1, 1),
            }],
            supertypes: vec![],
            members,
            span: Span::at(1, 1),
        }
    }

    fn bindings_with_marked_fruit() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.insert_annotation("Sorted", MARKER);
        table.insert_type("Fruit", TypeSymbol::new("com.acme.Fruit").annotated(MARKER));
        table
    }

    fn check(
        rule: &OrderedSealedSubclasses,
        class: &ClassDecl,
        table: &SymbolTable,
    ) -> Vec<Violation> {
        let content = "";
        let ctx = FileContext::new(Path::new("Fruits.kt"), content, Path::new("."));
        let mut violations = Vec::new();
        rule.check_class(&ctx, class, table, &mut |v| violations.push(v));
        violations
    }

    #[test]
    fn detects_out_of_order_subclasses() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(
            violations[0].message,
            "Sealed subclasses for class `Fruit` are not declared in alphabetical order. \
             Reorder so that `Apple` is before `Banana`."
        );
    }

    #[test]
    fn sorted_subclasses_pass() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Apple", "Fruit", 3), subclass("Banana", "Fruit", 4)],
        );
        assert!(check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit()
        )
        .is_empty());
    }

    #[test]
    fn zero_or_one_subclass_passes() {
        let empty = sealed_class("Fruit", vec![]);
        let single = sealed_class("Fruit", vec![subclass("Zucchini", "Fruit", 3)]);
        let table = bindings_with_marked_fruit();
        assert!(check(&OrderedSealedSubclasses::new(), &empty, &table).is_empty());
        assert!(check(&OrderedSealedSubclasses::new(), &single, &table).is_empty());
    }

    #[test]
    fn non_sealed_class_exits_before_resolution() {
        let mut class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        class.modifiers.clear();
        // Even with an empty binding table the check must not fire.
        assert!(check(&OrderedSealedSubclasses::new(), &class, &SymbolTable::new()).is_empty());
    }

    #[test]
    fn unresolved_sealed_type_is_skipped() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        assert!(check(&OrderedSealedSubclasses::new(), &class, &SymbolTable::new()).is_empty());
    }

    #[test]
    fn unmarked_sealed_type_is_out_of_scope() {
        let mut table = SymbolTable::new();
        table.insert_type("Fruit", TypeSymbol::new("com.acme.Fruit"));
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        assert!(check(&OrderedSealedSubclasses::new(), &class, &table).is_empty());
    }

    #[test]
    fn marker_on_ancestor_adds_qualifier() {
        let mut table = SymbolTable::new();
        table.insert_annotation("Sorted", MARKER);
        table.insert_type(
            "Fruit",
            TypeSymbol::new("com.acme.Fruit").extends("com.acme.Produce"),
        );
        table.insert_type(
            "Produce",
            TypeSymbol::new("com.acme.Produce").extends("com.acme.Grocery"),
        );
        table.insert_type(
            "Grocery",
            TypeSymbol::new("com.acme.Grocery").annotated(MARKER),
        );

        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        let violations = check(&OrderedSealedSubclasses::new(), &class, &table);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Sealed subclasses for class `Fruit` (which implements `Grocery`) are not declared \
             in alphabetical order. Reorder so that `Apple` is before `Banana`."
        );
    }

    #[test]
    fn marker_on_self_omits_qualifier() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );
        assert!(!violations[0].message.contains("which implements"));
    }

    #[test]
    fn unrelated_members_are_not_candidates() {
        let unrelated = Declaration::Class(ClassDecl {
            name: Identifier::new("Basket", Span::at(5, 12)),
            kind: ClassKind::Class,
            modifiers: vec![],
            annotations: vec![],
            supertypes: vec![],
            members: vec![],
            span: Span::at(5, 5),
        });
        let class = sealed_class(
            "Fruit",
            vec![
                subclass("Banana", "Fruit", 3),
                helper_fun("describe", 4),
                unrelated,
                subclass("Apple", "Fruit", 6),
            ],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );

        // Only Banana and Apple are candidates; the first divergence is
        // at index 0 where Apple is expected.
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("`Apple` is before `Banana`"));
    }

    #[test]
    fn members_extending_a_different_type_are_excluded() {
        let mut table = bindings_with_marked_fruit();
        table.insert_type("Veg", TypeSymbol::new("com.acme.Veg"));
        let class = sealed_class(
            "Fruit",
            vec![
                subclass("Banana", "Fruit", 3),
                subclass("Artichoke", "Veg", 4),
                subclass("Cherry", "Fruit", 5),
            ],
        );
        // Candidates [Banana, Cherry] are already sorted.
        assert!(check(&OrderedSealedSubclasses::new(), &class, &table).is_empty());
    }

    #[test]
    fn qualified_supertype_reference_matches() {
        let class = sealed_class(
            "Fruit",
            vec![
                subclass("Banana", "produce.Fruit", 3),
                subclass("Apple", "produce.Fruit", 4),
            ],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn backticked_subclass_names_are_normalized() {
        let class = sealed_class(
            "Fruit",
            vec![
                subclass("`kiwi fruit`", "Fruit", 3),
                subclass("Apple", "Fruit", 4),
            ],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );
        // "Apple" < "kiwi fruit" by code point (uppercase first).
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("`Apple` is before `kiwi fruit`"));
    }

    #[test]
    fn anchor_is_the_out_of_order_subclass_name() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        let violations = check(
            &OrderedSealedSubclasses::new(),
            &class,
            &bindings_with_marked_fruit(),
        );
        assert_eq!(violations[0].location.line, 3);
        assert_eq!(violations[0].location.column, 12);
    }

    #[test]
    fn empty_marker_list_disables_the_rule() {
        let rule = OrderedSealedSubclasses::new().markers(Vec::<String>::new());
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        assert!(check(&rule, &class, &bindings_with_marked_fruit()).is_empty());
    }

    #[test]
    fn check_is_idempotent() {
        let class = sealed_class(
            "Fruit",
            vec![subclass("Banana", "Fruit", 3), subclass("Apple", "Fruit", 4)],
        );
        let rule = OrderedSealedSubclasses::new();
        let table = bindings_with_marked_fruit();
        let first = check(&rule, &class, &table);
        let second = check(&rule, &class, &table);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].message, second[0].message);
    }
}
