//! Syntax model for the ordering checks.
//!
//! Node kinds relevant to the checks are represented as plain structs and
//! a tagged [`Declaration`] variant, matched explicitly by rules. The model
//! is produced by a front-end (e.g. the Tree-sitter Kotlin adapter) and is
//! read-only from the rules' point of view: every entity lives for a single
//! traversal and is never mutated.

use crate::types::Location;
use std::path::PathBuf;

/// Source span of a node: 1-indexed line/column plus byte offset/length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span from line/column only.
    #[must_use]
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Converts this span into a [`Location`] within the given file.
    #[must_use]
    pub fn location(&self, file: PathBuf) -> Location {
        Location::new(file, self.line, self.column).with_span(self.offset, self.length)
    }
}

/// An identifier as written in source. May be backtick-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Raw source text, including backticks if present.
    pub text: String,
    /// Span of the identifier.
    pub span: Span,
}

impl Identifier {
    /// Creates an identifier from raw text and a span.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// An annotation use site, e.g. `@Sorted` or `@com.acme.Sorted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationUse {
    /// Name as written, without the leading `@`.
    pub name: String,
    /// Span of the annotation.
    pub span: Span,
}

/// A single value argument of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Exact source text of the argument expression. For OL001 this text
    /// is the comparison key: a string literal keeps its quotes.
    pub text: String,
    /// Span of the argument.
    pub span: Span,
}

/// A call expression together with the annotations wrapping it.
///
/// `annotations` holds the annotations of the enclosing annotated
/// expression when the call is its immediate operand, and is empty for a
/// bare call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// The invoked callee, as written.
    pub callee: Identifier,
    /// Annotations wrapping this call.
    pub annotations: Vec<AnnotationUse>,
    /// Value arguments in declaration order.
    pub args: Vec<Argument>,
    /// Span of the whole call expression.
    pub span: Span,
}

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// `class Foo`
    Class,
    /// `interface Foo`
    Interface,
    /// `object Foo`
    Object,
    /// `enum class Foo`
    EnumClass,
    /// `annotation class Foo`
    AnnotationClass,
}

/// A supertype entry in a class declaration, e.g. `Fruit()` or `Edible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperTypeRef {
    /// Type name as written, with constructor-call and generic suffixes
    /// stripped (`Fruit()` and `Container<T>` both keep only the name).
    pub name: String,
    /// Span of the supertype entry.
    pub span: Span,
}

/// A class, interface, or object declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Declared name, raw (may be backticked).
    pub name: Identifier,
    /// Kind of declaration.
    pub kind: ClassKind,
    /// Modifier keywords in source order (`sealed`, `data`, ...).
    pub modifiers: Vec<String>,
    /// Annotations on the declaration, as written.
    pub annotations: Vec<AnnotationUse>,
    /// Declared supertypes.
    pub supertypes: Vec<SuperTypeRef>,
    /// Direct lexical member declarations.
    pub members: Vec<Declaration>,
    /// Span of the whole declaration.
    pub span: Span,
}

impl ClassDecl {
    /// Whether this declaration carries the `sealed` modifier.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.modifiers.iter().any(|m| m == "sealed")
    }
}

/// A function parameter with its variadic flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Whether the parameter is declared `vararg`.
    pub is_vararg: bool,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Declared name.
    pub name: Identifier,
    /// Parameters in declaration order.
    pub params: Vec<Parameter>,
    /// Span of the declaration.
    pub span: Span,
}

/// A declaration relevant to the ordering checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A class, interface, or object declaration.
    Class(ClassDecl),
    /// A function declaration.
    Function(FunctionDecl),
}

/// An import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Fully qualified import path.
    pub path: String,
    /// Span of the statement.
    pub span: Span,
}

/// A parsed source file, flattened for rule consumption.
///
/// `calls` collects every call expression found anywhere in the file —
/// top level, property initializers, function bodies — each already
/// paired with its wrapper annotations, so rules never walk expression
/// trees themselves.
#[derive(Debug, Clone, Default)]
pub struct KtFile {
    /// Package header, if present.
    pub package: Option<String>,
    /// Import statements.
    pub imports: Vec<Import>,
    /// Top-level declarations.
    pub declarations: Vec<Declaration>,
    /// All call sites in the file.
    pub calls: Vec<CallSite>,
}

impl KtFile {
    /// All class declarations in the file, outer-first, including nested
    /// members.
    #[must_use]
    pub fn classes(&self) -> Vec<&ClassDecl> {
        let mut out = Vec::new();
        collect_classes(&self.declarations, &mut out);
        out
    }
}

fn collect_classes<'a>(decls: &'a [Declaration], out: &mut Vec<&'a ClassDecl>) {
    for decl in decls {
        if let Declaration::Class(class) = decl {
            out.push(class);
            collect_classes(&class.members, out);
        }
    }
}
