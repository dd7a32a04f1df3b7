//! Binding context: resolved symbol information supplied by the host.
//!
//! Rules never consult ambient state; every check receives a read-only
//! [`BindingContext`] and treats any failed lookup as "not in scope".

use std::collections::HashMap;

use crate::utils::ident::member_name;

/// A resolved parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSymbol {
    /// Parameter name.
    pub name: String,
    /// Whether the parameter is variadic.
    pub is_vararg: bool,
}

/// A resolved callable (function) symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableSymbol {
    /// Fully qualified name, e.g. `kotlin.collections.listOf`.
    pub qualified_name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSymbol>,
}

impl CallableSymbol {
    /// Creates a callable with a single variadic parameter.
    #[must_use]
    pub fn single_vararg(qualified_name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            parameters: vec![ParameterSymbol {
                name: param.into(),
                is_vararg: true,
            }],
        }
    }

    /// Whether the callable has exactly one parameter and it is variadic.
    #[must_use]
    pub fn is_single_vararg(&self) -> bool {
        matches!(self.parameters.as_slice(), [p] if p.is_vararg)
    }
}

/// A resolved type symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    /// Fully qualified name, e.g. `com.acme.Fruit`.
    pub qualified_name: String,
    /// Fully qualified names of annotations on the declaration.
    pub annotations: Vec<String>,
    /// Fully qualified names of declared supertypes.
    pub supertypes: Vec<String>,
}

impl TypeSymbol {
    /// Creates a type symbol with no annotations or supertypes.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Adds an annotation FQN.
    #[must_use]
    pub fn annotated(mut self, fqn: impl Into<String>) -> Self {
        self.annotations.push(fqn.into());
        self
    }

    /// Adds a supertype FQN.
    #[must_use]
    pub fn extends(mut self, fqn: impl Into<String>) -> Self {
        self.supertypes.push(fqn.into());
        self
    }

    /// Trailing segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        member_name(&self.qualified_name)
    }
}

/// Read-only resolution capability supplied by the host environment.
pub trait BindingContext {
    /// Resolves a callable reference by its written name.
    fn resolve_callable(&self, name: &str) -> Option<&CallableSymbol>;

    /// Resolves an annotation use (as written, without `@`) to its fully
    /// qualified name.
    fn resolve_annotation(&self, name: &str) -> Option<String>;

    /// Resolves a type reference by its written name.
    fn resolve_type(&self, name: &str) -> Option<&TypeSymbol>;

    /// Looks a type up by its fully qualified name.
    fn type_by_qualified_name(&self, fqn: &str) -> Option<&TypeSymbol>;
}

/// Hash-map backed [`BindingContext`] implementation.
///
/// The front-end populates one table per file; tests build small tables by
/// hand. Lookups that miss simply return `None`, which rules treat as
/// out-of-scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    callables: HashMap<String, CallableSymbol>,
    annotations: HashMap<String, String>,
    type_names: HashMap<String, String>,
    types: HashMap<String, TypeSymbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callable under a written name.
    pub fn insert_callable(&mut self, written: impl Into<String>, symbol: CallableSymbol) {
        self.callables.insert(written.into(), symbol);
    }

    /// Registers an annotation: written name to fully qualified name.
    pub fn insert_annotation(&mut self, written: impl Into<String>, fqn: impl Into<String>) {
        self.annotations.insert(written.into(), fqn.into());
    }

    /// Registers a type symbol, reachable both by the given written name
    /// and by its qualified name.
    pub fn insert_type(&mut self, written: impl Into<String>, symbol: TypeSymbol) {
        let fqn = symbol.qualified_name.clone();
        self.type_names.insert(written.into(), fqn.clone());
        self.type_names.insert(fqn.clone(), fqn.clone());
        self.types.insert(fqn, symbol);
    }
}

impl BindingContext for SymbolTable {
    fn resolve_callable(&self, name: &str) -> Option<&CallableSymbol> {
        self.callables.get(name)
    }

    fn resolve_annotation(&self, name: &str) -> Option<String> {
        if let Some(fqn) = self.annotations.get(name) {
            return Some(fqn.clone());
        }
        // A dotted use is already qualified; the file-local front-end has
        // no compiler to second-guess it.
        if name.contains('.') {
            return Some(name.to_string());
        }
        None
    }

    fn resolve_type(&self, name: &str) -> Option<&TypeSymbol> {
        let fqn = self.type_names.get(name)?;
        self.types.get(fqn)
    }

    fn type_by_qualified_name(&self, fqn: &str) -> Option<&TypeSymbol> {
        self.types.get(fqn)
    }
}
