//! File-local binding table construction.
//!
//! A real compiler front-end would supply resolved symbols; this adapter
//! approximates it from what a single file declares: imports, classes
//! (package-qualified, nested ones dotted through their lexical path),
//! annotation classes, and top-level functions, plus a built-in table of
//! Kotlin stdlib single-vararg collection factories. Names the file does
//! not explain stay absent from the table, and the rules treat those
//! sites as out of scope.

use std::collections::HashMap;

use order_lint_core::model::{ClassDecl, ClassKind, Declaration, KtFile};
use order_lint_core::utils::ident::{comparable_name, member_name, strip_backticks};
use order_lint_core::{BindingContext, CallableSymbol, ParameterSymbol, SymbolTable, TypeSymbol};

/// Kotlin stdlib factories declared as `fun <T> f(vararg ...): ...`.
const STDLIB_SINGLE_VARARG: &[(&str, &str, &str)] = &[
    ("listOf", "kotlin.collections.listOf", "elements"),
    ("mutableListOf", "kotlin.collections.mutableListOf", "elements"),
    ("arrayListOf", "kotlin.collections.arrayListOf", "elements"),
    ("listOfNotNull", "kotlin.collections.listOfNotNull", "elements"),
    ("setOf", "kotlin.collections.setOf", "elements"),
    ("mutableSetOf", "kotlin.collections.mutableSetOf", "elements"),
    ("hashSetOf", "kotlin.collections.hashSetOf", "elements"),
    ("linkedSetOf", "kotlin.collections.linkedSetOf", "elements"),
    ("sortedSetOf", "kotlin.collections.sortedSetOf", "elements"),
    ("setOfNotNull", "kotlin.collections.setOfNotNull", "elements"),
    ("mapOf", "kotlin.collections.mapOf", "pairs"),
    ("mutableMapOf", "kotlin.collections.mutableMapOf", "pairs"),
    ("hashMapOf", "kotlin.collections.hashMapOf", "pairs"),
    ("linkedMapOf", "kotlin.collections.linkedMapOf", "pairs"),
    ("sortedMapOf", "kotlin.collections.sortedMapOf", "pairs"),
    ("arrayOf", "kotlin.arrayOf", "elements"),
    ("intArrayOf", "kotlin.intArrayOf", "elements"),
    ("longArrayOf", "kotlin.longArrayOf", "elements"),
    ("shortArrayOf", "kotlin.shortArrayOf", "elements"),
    ("byteArrayOf", "kotlin.byteArrayOf", "elements"),
    ("charArrayOf", "kotlin.charArrayOf", "elements"),
    ("doubleArrayOf", "kotlin.doubleArrayOf", "elements"),
    ("floatArrayOf", "kotlin.floatArrayOf", "elements"),
    ("booleanArrayOf", "kotlin.booleanArrayOf", "elements"),
    ("sequenceOf", "kotlin.sequences.sequenceOf", "elements"),
];

/// Builds a [`SymbolTable`] for a single parsed file.
pub struct FileBindings;

impl FileBindings {
    /// Derives the binding table for `file`.
    #[must_use]
    pub fn for_file(file: &KtFile) -> SymbolTable {
        let mut table = SymbolTable::new();

        for (name, fqn, param) in STDLIB_SINGLE_VARARG {
            table.insert_callable(*name, CallableSymbol::single_vararg(*fqn, *param));
        }

        let pkg = file.package.clone().unwrap_or_default();

        let mut imported: HashMap<String, String> = HashMap::new();
        for import in &file.imports {
            let simple = member_name(&import.path);
            if simple == "*" {
                continue;
            }
            imported.insert(simple.to_owned(), import.path.clone());
            table.insert_annotation(simple, import.path.clone());
        }

        // Pass 1: every class in the file with its qualified name, so
        // supertype references resolve regardless of declaration order.
        let mut collected: Vec<(String, Vec<String>, &ClassDecl)> = Vec::new();
        let mut path = Vec::new();
        collect_classes(&file.declarations, &pkg, &mut path, &mut collected);

        let mut local_names: HashMap<String, String> = HashMap::new();
        for (fqn, lexical, class) in &collected {
            let simple = strip_backticks(&class.name.text);
            local_names.insert(simple.to_owned(), fqn.clone());
            local_names.insert(lexical.join("."), fqn.clone());
            if class.kind == ClassKind::AnnotationClass {
                table.insert_annotation(simple, fqn.clone());
                table.insert_annotation(lexical.join("."), fqn.clone());
            }
        }

        // Pass 2: type symbols with annotations and supertypes resolved.
        for (fqn, lexical, class) in &collected {
            let mut symbol = TypeSymbol::new(fqn.clone());
            for annotation in &class.annotations {
                if let Some(resolved) = table.resolve_annotation(&annotation.name) {
                    symbol.annotations.push(resolved);
                }
            }
            for supertype in &class.supertypes {
                if let Some(resolved) = resolve_type_name(&supertype.name, &local_names, &imported)
                {
                    symbol.supertypes.push(resolved);
                }
            }
            table.insert_type(strip_backticks(&class.name.text), symbol.clone());
            table.insert_type(lexical.join("."), symbol);
        }

        for decl in &file.declarations {
            if let Declaration::Function(function) = decl {
                let name = strip_backticks(&function.name.text);
                let qualified = if pkg.is_empty() {
                    name.to_owned()
                } else {
                    format!("{pkg}.{name}")
                };
                table.insert_callable(
                    name,
                    CallableSymbol {
                        qualified_name: qualified,
                        parameters: function
                            .params
                            .iter()
                            .map(|p| ParameterSymbol {
                                name: p.name.clone(),
                                is_vararg: p.is_vararg,
                            })
                            .collect(),
                    },
                );
            }
        }

        table
    }
}

fn collect_classes<'a>(
    decls: &'a [Declaration],
    pkg: &str,
    path: &mut Vec<String>,
    out: &mut Vec<(String, Vec<String>, &'a ClassDecl)>,
) {
    for decl in decls {
        let Declaration::Class(class) = decl else {
            continue;
        };
        path.push(strip_backticks(&class.name.text).to_owned());

        let lexical = path.join(".");
        let fqn = if pkg.is_empty() {
            lexical
        } else {
            format!("{pkg}.{lexical}")
        };
        out.push((fqn, path.clone(), class));

        collect_classes(&class.members, pkg, path, out);
        path.pop();
    }
}

fn resolve_type_name(
    written: &str,
    local: &HashMap<String, String>,
    imported: &HashMap<String, String>,
) -> Option<String> {
    let written = written.trim();
    if let Some(fqn) = local.get(written) {
        return Some(fqn.clone());
    }
    let simple = comparable_name(written);
    if let Some(fqn) = local.get(simple) {
        return Some(fqn.clone());
    }
    if let Some(fqn) = imported.get(simple) {
        return Some(fqn.clone());
    }
    if written.contains('.') {
        return Some(written.to_owned());
    }
    None
}
