//! Breadth-first search for the nearest annotated ancestor in a supertype
//! graph.

use std::collections::{HashSet, VecDeque};

use crate::resolve::{BindingContext, TypeSymbol};

/// Result of the ancestor search.
#[derive(Debug)]
pub struct AnnotatedAncestor<'a> {
    /// The nearest symbol carrying a marker annotation.
    pub symbol: &'a TypeSymbol,
    /// The marker annotation FQN that matched.
    pub marker: String,
    /// Whether the match is the start symbol itself.
    pub on_self: bool,
}

/// Searches breadth-first from `start` over resolved supertype edges for
/// the first symbol carrying one of the `markers` annotations.
///
/// The start symbol is visited first, so a directly annotated type always
/// wins over an annotated ancestor. A visited set keyed by qualified name
/// deduplicates diamond-shaped hierarchies and guards against cycles.
/// Supertypes the binding context cannot resolve are skipped.
#[must_use]
pub fn find_annotated_ancestor<'a>(
    start: &'a TypeSymbol,
    bindings: &'a dyn BindingContext,
    markers: &[String],
) -> Option<AnnotatedAncestor<'a>> {
    if markers.is_empty() {
        return None;
    }

    let mut queue: VecDeque<&'a TypeSymbol> = VecDeque::new();
    let mut visited: HashSet<&'a str> = HashSet::new();
    queue.push_back(start);
    visited.insert(&start.qualified_name);

    while let Some(symbol) = queue.pop_front() {
        if let Some(marker) = symbol
            .annotations
            .iter()
            .find(|a| markers.iter().any(|m| m == *a))
        {
            return Some(AnnotatedAncestor {
                symbol,
                marker: marker.clone(),
                on_self: symbol.qualified_name == start.qualified_name,
            });
        }

        for fqn in &symbol.supertypes {
            if visited.insert(fqn) {
                if let Some(sup) = bindings.type_by_qualified_name(fqn) {
                    queue.push_back(sup);
                }
            }
        }
    }

    None
}
