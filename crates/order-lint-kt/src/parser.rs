//! Kotlin source extraction using Tree-sitter.
//!
//! Produces the flattened [`KtFile`] model: package header, imports,
//! class/object declarations with modifiers, annotations, supertypes and
//! nested members, function declarations with `vararg` flags, and every
//! call expression with its wrapper annotations and exact argument texts.
//!
//! Grammar node kinds vary slightly between Kotlin grammar releases, so
//! extraction accepts the known spellings for each construct and falls
//! back to skipping nodes it does not recognize.

use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

use order_lint_core::model::{
    AnnotationUse, Argument, CallSite, ClassDecl, ClassKind, Declaration, FunctionDecl,
    Identifier, Import, KtFile, Parameter, Span, SuperTypeRef,
};

/// Errors produced while parsing Kotlin source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar failed to load into the parser.
    #[error("failed to load Kotlin grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser returned no syntax tree.
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Parses Kotlin source into the order-lint syntax model.
pub struct KotlinParser {
    language: Language,
}

impl KotlinParser {
    /// Creates a new Kotlin parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }

    /// Parses a source file.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser
    /// yields no tree. Partially malformed source still produces a model
    /// for the parts Tree-sitter recovered.
    pub fn parse(&self, source: &str) -> Result<KtFile, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        let mut file = KtFile::default();

        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "package_header" => file.package = qualified_child(&node, src),
                "import" | "import_header" => {
                    if let Some(import) = extract_import(&node, src) {
                        file.imports.push(import);
                    }
                }
                "class_declaration" | "object_declaration" => {
                    if let Some(class) = extract_class(&node, src) {
                        file.declarations.push(Declaration::Class(class));
                    }
                }
                "function_declaration" => {
                    if let Some(function) = extract_function(&node, src) {
                        file.declarations.push(Declaration::Function(function));
                    }
                }
                _ => {}
            }
        }

        collect_calls(&root, src, &mut file.calls);

        Ok(file)
    }
}

impl Default for KotlinParser {
    fn default() -> Self {
        Self::new()
    }
}

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
}

fn span(node: &Node<'_>) -> Span {
    let start = node.start_position();
    Span {
        line: start.row + 1,
        column: start.column + 1,
        offset: node.start_byte(),
        length: node.end_byte() - node.start_byte(),
    }
}

/// Join identifier children of a `qualified_identifier` node with dots.
fn qualified_id(node: &Node<'_>, src: &[u8]) -> String {
    let mut parts = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "identifier" | "simple_identifier") {
            parts.push(text(&child, src).to_owned());
        }
    }
    parts.join(".")
}

/// Qualified identifier below a header node, or a bare identifier.
fn qualified_child(node: &Node<'_>, src: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "qualified_identifier" => return Some(qualified_id(&child, src)),
            "identifier" | "simple_identifier" => return Some(text(&child, src).to_owned()),
            _ => {}
        }
    }
    None
}

fn extract_import(node: &Node<'_>, src: &[u8]) -> Option<Import> {
    let path = qualified_child(node, src)?;
    Some(Import {
        path,
        span: span(node),
    })
}

/// Annotation name as written: `@field:Sorted(...)` becomes `field:Sorted`
/// minus the target and arguments, i.e. `Sorted`.
fn annotation_name(raw: &str) -> &str {
    let raw = raw.trim_start_matches('@');
    let raw = raw.split('(').next().unwrap_or(raw);
    match raw.rfind(':') {
        Some(i) => raw[i + 1..].trim(),
        None => raw.trim(),
    }
}

fn annotation_use(node: &Node<'_>, src: &[u8]) -> AnnotationUse {
    AnnotationUse {
        name: annotation_name(text(node, src)).to_owned(),
        span: span(node),
    }
}

/// Supertype entry with constructor-call and generic suffixes stripped.
fn supertype_ref(node: &Node<'_>, src: &[u8]) -> Option<SuperTypeRef> {
    let raw = text(node, src);
    let name = raw
        .split(['(', '<'])
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    Some(SuperTypeRef {
        name: name.to_owned(),
        span: span(node),
    })
}

fn extract_class(node: &Node<'_>, src: &[u8]) -> Option<ClassDecl> {
    let mut name = None;
    let mut modifiers: Vec<String> = Vec::new();
    let mut annotations: Vec<AnnotationUse> = Vec::new();
    let mut supertypes: Vec<SuperTypeRef> = Vec::new();
    let mut members: Vec<Declaration> = Vec::new();
    let mut has_interface = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "identifier" | "simple_identifier" | "type_identifier" => {
                if name.is_none() {
                    name = Some(Identifier::new(text(&child, src), span(&child)));
                }
            }
            "interface" => has_interface = true,
            "modifiers" => {
                let mut mod_cursor = child.walk();
                for mod_child in child.children(&mut mod_cursor) {
                    if mod_child.kind() == "annotation" {
                        annotations.push(annotation_use(&mod_child, src));
                    } else {
                        modifiers.push(text(&mod_child, src).to_owned());
                    }
                }
            }
            "annotation" => annotations.push(annotation_use(&child, src)),
            "delegation_specifier" | "constructor_invocation" | "user_type" => {
                if let Some(st) = supertype_ref(&child, src) {
                    supertypes.push(st);
                }
            }
            "delegation_specifiers" => {
                let mut spec_cursor = child.walk();
                for spec in child.children(&mut spec_cursor) {
                    if spec.is_named() {
                        if let Some(st) = supertype_ref(&spec, src) {
                            supertypes.push(st);
                        }
                    }
                }
            }
            "class_body" | "enum_class_body" => {
                let mut body_cursor = child.walk();
                for item in child.children(&mut body_cursor) {
                    match item.kind() {
                        "class_declaration" | "object_declaration" => {
                            if let Some(nested) = extract_class(&item, src) {
                                members.push(Declaration::Class(nested));
                            }
                        }
                        "function_declaration" => {
                            if let Some(function) = extract_function(&item, src) {
                                members.push(Declaration::Function(function));
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    let name = name?;
    let kind = classify(node.kind(), has_interface, &modifiers);

    Some(ClassDecl {
        name,
        kind,
        modifiers,
        annotations,
        supertypes,
        members,
        span: span(node),
    })
}

fn classify(node_kind: &str, has_interface: bool, modifiers: &[String]) -> ClassKind {
    if node_kind == "object_declaration" {
        ClassKind::Object
    } else if has_interface {
        ClassKind::Interface
    } else if modifiers.iter().any(|m| m == "enum") {
        ClassKind::EnumClass
    } else if modifiers.iter().any(|m| m == "annotation") {
        ClassKind::AnnotationClass
    } else {
        ClassKind::Class
    }
}

fn extract_function(node: &Node<'_>, src: &[u8]) -> Option<FunctionDecl> {
    let mut name = None;
    let mut params: Vec<Parameter> = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "identifier" | "simple_identifier" => {
                if name.is_none() {
                    name = Some(Identifier::new(text(&child, src), span(&child)));
                }
            }
            "function_value_parameters" | "value_parameters" | "parameters" => {
                let mut param_cursor = child.walk();
                for param in child.children(&mut param_cursor) {
                    if matches!(param.kind(), "parameter" | "function_value_parameter") {
                        if let Some(p) = extract_parameter(&param, src) {
                            params.push(p);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Some(FunctionDecl {
        name: name?,
        params,
        span: span(node),
    })
}

fn extract_parameter(node: &Node<'_>, src: &[u8]) -> Option<Parameter> {
    let mut name = None;
    let mut is_vararg = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if text(&child, src) == "vararg" {
            is_vararg = true;
        } else if child.kind().contains("modifier") {
            let mut mod_cursor = child.walk();
            for mod_child in child.children(&mut mod_cursor) {
                if text(&mod_child, src) == "vararg" {
                    is_vararg = true;
                }
            }
        } else if matches!(child.kind(), "identifier" | "simple_identifier") && name.is_none() {
            name = Some(text(&child, src).to_owned());
        }
    }

    Some(Parameter {
        name: name?,
        is_vararg,
    })
}

fn collect_calls(node: &Node<'_>, src: &[u8], out: &mut Vec<CallSite>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "call_expression" {
            if let Some(call) = extract_call(&child, src) {
                out.push(call);
            }
        }
        collect_calls(&child, src, out);
    }
}

fn extract_call(node: &Node<'_>, src: &[u8]) -> Option<CallSite> {
    let callee_node = node.child(0)?;
    // Calls through a receiver (`x.map(..)`) keep their full written text;
    // resolution decides whether the callee is known.
    let callee = Identifier::new(text(&callee_node, src), span(&callee_node));

    let args = extract_arguments(node, src)?;
    let annotations = wrapper_annotations(node, src);

    Some(CallSite {
        callee,
        annotations,
        args,
        span: span(node),
    })
}

fn extract_arguments(call: &Node<'_>, src: &[u8]) -> Option<Vec<Argument>> {
    let arguments = find_value_arguments(call)?;

    let mut out = Vec::new();
    let mut cursor = arguments.walk();
    for child in arguments.children(&mut cursor) {
        if !child.is_named() {
            continue;
        }
        // Trailing lambdas are not positional value arguments. Grammar
        // versions differ on whether children are `value_argument` nodes
        // or inlined expressions; both carry the exact source text.
        if matches!(child.kind(), "annotated_lambda" | "lambda_literal") {
            continue;
        }
        out.push(Argument {
            text: text(&child, src).trim().to_owned(),
            span: span(&child),
        });
    }
    Some(out)
}

fn find_value_arguments<'t>(call: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = call.walk();
    for child in call.children(&mut cursor) {
        match child.kind() {
            "value_arguments" => return Some(child),
            "call_suffix" => {
                let mut suffix_cursor = child.walk();
                for suffix_child in child.children(&mut suffix_cursor) {
                    if suffix_child.kind() == "value_arguments" {
                        return Some(suffix_child);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Annotations wrapping a call: either on an enclosing annotated
/// expression, or inlined as immediately preceding annotation siblings.
fn wrapper_annotations(call: &Node<'_>, src: &[u8]) -> Vec<AnnotationUse> {
    let mut out = Vec::new();

    if let Some(parent) = call.parent() {
        if parent.kind() == "annotated_expression" {
            let mut cursor = parent.walk();
            for child in parent.children(&mut cursor) {
                if child.kind() == "annotation" {
                    out.push(annotation_use(&child, src));
                }
            }
        }
    }

    let mut sibling = call.prev_sibling();
    while let Some(s) = sibling {
        if s.kind() == "annotation" {
            out.push(annotation_use(&s, src));
            sibling = s.prev_sibling();
        } else {
            break;
        }
    }

    out
}
