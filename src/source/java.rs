use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Parser};

use crate::error::{IoError, Result, SourceError};
use crate::model::{
    Declaration, ExecutableDecl, ExecutableKind, Modifier, Namespace, OtherDecl, PackageDecl,
    TypeDecl, TypeKind, TypeRef, VariableDecl, VariableKind,
};

const PACKAGE_INFO: &str = "package-info.java";

/// Simple names visible without an import.
const JAVA_LANG: &[&str] = &[
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "Enum",
    "Error",
    "Exception",
    "Double",
    "Float",
    "Integer",
    "Iterable",
    "Long",
    "Math",
    "Number",
    "Object",
    "Record",
    "Runnable",
    "RuntimeException",
    "Short",
    "String",
    "StringBuilder",
    "System",
    "Thread",
    "Throwable",
    "Void",
];

/// Reads Java compilation units into declaration roots.
pub struct JavaSource {
    parser: Parser,
}

impl JavaSource {
    pub fn new() -> std::result::Result<Self, SourceError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|_| SourceError::language_setup_failed("java"))?;
        Ok(Self { parser })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<Vec<Declaration>> {
        let text = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        let roots = self.parse(&text, path)?;
        debug!(path = %path.display(), roots = roots.len(), "parsed java source");
        Ok(roots)
    }

    /// Extracts the roots of one compilation unit. `path` names the unit in
    /// errors and decides whether it is a `package-info.java`.
    pub fn parse(&mut self, text: &str, path: &Path) -> std::result::Result<Vec<Declaration>, SourceError> {
        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| SourceError::parse_failed(path))?;
        let root = tree.root_node();
        if root.has_error() {
            warn!(path = %path.display(), "syntax errors in source, extracting what parsed");
        }

        let unit = CompilationUnit::scan(root, text.as_bytes());
        let mut roots = Vec::new();
        for child in named_children(root) {
            match child.kind() {
                "module_declaration" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| unit.compact_text(n))
                        .unwrap_or_default();
                    roots.push(OtherDecl::new(name, None).into());
                }
                kind if type_kind(kind).is_some() => {
                    if let Some(ty) = unit.type_decl(child, None) {
                        roots.push(ty.into());
                    }
                }
                _ => {}
            }
        }

        let is_package_info = path.file_name().is_some_and(|n| n == PACKAGE_INFO);
        if is_package_info {
            roots.push(PackageDecl::new(unit.namespace.clone()).into());
        }
        Ok(roots)
    }
}

/// Per-file name resolution state.
struct CompilationUnit<'s> {
    source: &'s [u8],
    namespace: Namespace,
    /// Simple name to qualified name, from single-type imports.
    imports: HashMap<String, String>,
    /// Top-level types declared in this file.
    local_types: HashSet<String>,
}

impl<'s> CompilationUnit<'s> {
    fn scan(root: Node<'_>, source: &'s [u8]) -> Self {
        let mut unit = Self {
            source,
            namespace: Namespace::unnamed(),
            imports: HashMap::new(),
            local_types: HashSet::new(),
        };

        for child in named_children(root) {
            match child.kind() {
                "package_declaration" => {
                    if let Some(name) = unit.qualified_name(child) {
                        unit.namespace = Namespace::parse(&name);
                    }
                }
                "import_declaration" => unit.add_import(child),
                kind if type_kind(kind).is_some() => {
                    if let Some(name) = child.child_by_field_name("name") {
                        unit.local_types.insert(unit.text(name).to_string());
                    }
                }
                _ => {}
            }
        }
        trace!(
            namespace = %unit.namespace,
            imports = unit.imports.len(),
            "scanned compilation unit"
        );
        unit
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.source).unwrap_or("")
    }

    /// Node text with whitespace removed, for dotted names split over lines.
    fn compact_text(&self, node: Node<'_>) -> String {
        self.text(node).split_whitespace().collect()
    }

    fn qualified_name(&self, node: Node<'_>) -> Option<String> {
        named_children(node)
            .into_iter()
            .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
            .map(|c| self.compact_text(c))
    }

    fn add_import(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let on_demand_or_static = node
            .children(&mut cursor)
            .any(|c| matches!(c.kind(), "static" | "asterisk"));
        if on_demand_or_static {
            return;
        }
        if let Some(qualified) = self.qualified_name(node) {
            let simple = qualified.rsplit('.').next().unwrap_or(&qualified).to_string();
            self.imports.insert(simple, qualified);
        }
    }

    fn type_decl(&self, node: Node<'_>, outer: Option<&TypeDecl>) -> Option<TypeDecl> {
        let kind = type_kind(node.kind())?;
        let name = self.text(node.child_by_field_name("name")?);
        let mut ty = match outer {
            Some(outer) => outer.nested(kind, name),
            None => TypeDecl::new(kind, self.namespace.clone(), name),
        };
        ty.modifiers = self.modifiers(node);
        if outer.is_some_and(is_interface_like) {
            ty.modifiers.extend([Modifier::Public, Modifier::Static]);
        }

        if kind == TypeKind::Record {
            if let Some(params) = node.child_by_field_name("parameters") {
                for param in named_children(params) {
                    if param.kind() != "formal_parameter" {
                        continue;
                    }
                    let Some(name) = param.child_by_field_name("name") else {
                        continue;
                    };
                    let component = VariableDecl {
                        name: self.text(name).to_string(),
                        kind: VariableKind::RecordComponent,
                        ty: self.parameter_type(param),
                        modifiers: [Modifier::Private, Modifier::Final].into(),
                        namespace: self.namespace.clone(),
                    };
                    ty.members.push(component.into());
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.members(&mut ty, body);
        }
        trace!(binary_name = %ty.binary_name, members = ty.members.len(), "extracted type");
        Some(ty)
    }

    fn members(&self, ty: &mut TypeDecl, body: Node<'_>) {
        let in_interface = is_interface_like(ty);
        for member in named_children(body) {
            let kind = member.kind();
            match kind {
                "method_declaration" | "annotation_type_element_declaration" => {
                    let mut method = self.executable(ty, member, ExecutableKind::Method);
                    if in_interface && !method.has_modifier(Modifier::Private) {
                        method.modifiers.insert(Modifier::Public);
                    }
                    ty.members.push(method.into());
                }
                "constructor_declaration" | "compact_constructor_declaration" => {
                    let ctor = self.executable(ty, member, ExecutableKind::Constructor);
                    ty.members.push(ctor.into());
                }
                "static_initializer" => {
                    let init = self.executable(ty, member, ExecutableKind::StaticInit);
                    ty.members.push(init.into());
                }
                "block" => {
                    let init = self.executable(ty, member, ExecutableKind::InstanceInit);
                    ty.members.push(init.into());
                }
                "field_declaration" | "constant_declaration" => {
                    for field in self.fields(ty, member, in_interface) {
                        ty.members.push(field.into());
                    }
                }
                "enum_constant" => {
                    if let Some(name) = member.child_by_field_name("name") {
                        let canonical = ty.binary_name.replace('$', ".");
                        let constant = VariableDecl {
                            name: self.text(name).to_string(),
                            kind: VariableKind::EnumConstant,
                            ty: TypeRef::new(canonical),
                            modifiers: [Modifier::Public, Modifier::Static, Modifier::Final].into(),
                            namespace: self.namespace.clone(),
                        };
                        ty.members.push(constant.into());
                    }
                }
                "enum_body_declarations" => self.members(ty, member),
                _ if type_kind(kind).is_some() => {
                    if let Some(nested) = self.type_decl(member, Some(&*ty)) {
                        ty.members.push(nested.into());
                    }
                }
                _ => {}
            }
        }
    }

    fn executable(&self, ty: &TypeDecl, node: Node<'_>, kind: ExecutableKind) -> ExecutableDecl {
        let (name, return_type, parameters) = match kind {
            ExecutableKind::Method => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or_default();
                let return_type = node
                    .child_by_field_name("type")
                    .map(|t| with_dimensions(self.type_ref(t), self.dimensions(node)))
                    .unwrap_or_else(TypeRef::void);
                let parameters = node
                    .child_by_field_name("parameters")
                    .map(|p| self.parameters(p))
                    .unwrap_or_default();
                (name, return_type, parameters)
            }
            ExecutableKind::Constructor => {
                let parameters = node
                    .child_by_field_name("parameters")
                    .map(|p| self.parameters(p))
                    .unwrap_or_default();
                ("<init>", TypeRef::void(), parameters)
            }
            ExecutableKind::StaticInit => ("<clinit>", TypeRef::void(), Vec::new()),
            ExecutableKind::InstanceInit => ("", TypeRef::void(), Vec::new()),
        };

        ty.method(name, return_type, parameters)
            .with_kind(kind)
            .with_modifiers(self.modifiers(node))
    }

    fn fields(&self, ty: &TypeDecl, node: Node<'_>, in_interface: bool) -> Vec<VariableDecl> {
        let Some(base) = node.child_by_field_name("type").map(|t| self.type_ref(t)) else {
            return Vec::new();
        };
        let mut modifiers = self.modifiers(node);
        if in_interface {
            modifiers.extend([Modifier::Public, Modifier::Static, Modifier::Final]);
        }

        named_children(node)
            .into_iter()
            .filter(|c| c.kind() == "variable_declarator")
            .filter_map(|declarator| {
                let name = self.text(declarator.child_by_field_name("name")?);
                let field_type = with_dimensions(base.clone(), self.dimensions(declarator));
                Some(
                    ty.field(name, field_type)
                        .with_modifiers(modifiers.iter().copied()),
                )
            })
            .collect()
    }

    fn parameters(&self, node: Node<'_>) -> Vec<TypeRef> {
        named_children(node)
            .into_iter()
            .filter_map(|param| match param.kind() {
                "formal_parameter" => Some(self.parameter_type(param)),
                "spread_parameter" => named_children(param)
                    .into_iter()
                    .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))
                    .map(|t| self.type_ref(t).array()),
                _ => None,
            })
            .collect()
    }

    fn parameter_type(&self, param: Node<'_>) -> TypeRef {
        let base = param
            .child_by_field_name("type")
            .map(|t| self.type_ref(t))
            .unwrap_or_else(|| TypeRef::new(""));
        with_dimensions(base, self.dimensions(param))
    }

    /// Array dimensions written after a declarator, as in `String args[]`.
    fn dimensions(&self, node: Node<'_>) -> usize {
        named_children(node)
            .into_iter()
            .filter(|c| c.kind() == "dimensions")
            .map(|c| self.text(c).matches('[').count())
            .sum()
    }

    fn type_ref(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            "array_type" => {
                let element = node
                    .child_by_field_name("element")
                    .map(|e| self.type_ref(e))
                    .unwrap_or_else(|| TypeRef::new(""));
                let dims = node
                    .child_by_field_name("dimensions")
                    .map(|d| self.text(d).matches('[').count())
                    .unwrap_or(1);
                with_dimensions(element, dims)
            }
            "generic_type" => match node.named_child(0) {
                Some(raw) => self.type_ref(raw),
                None => TypeRef::new(self.resolve(&erase_generics(self.text(node)))),
            },
            "annotated_type" => match node.named_child(node.named_child_count().saturating_sub(1)) {
                Some(inner) => self.type_ref(inner),
                None => TypeRef::new(self.compact_text(node)),
            },
            "type_identifier" | "scoped_type_identifier" => {
                TypeRef::new(self.resolve(&erase_generics(self.text(node))))
            }
            "void_type" => TypeRef::void(),
            _ => TypeRef::new(self.compact_text(node)),
        }
    }

    /// Qualifies a type name written in source: imports first, then types of
    /// this file, then `java.lang`, then the current package.
    fn resolve(&self, name: &str) -> String {
        let (first, rest) = match name.split_once('.') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        if let Some(qualified) = self.imports.get(first) {
            return match rest {
                Some(rest) => format!("{qualified}.{rest}"),
                None => qualified.clone(),
            };
        }
        if self.local_types.contains(first) {
            return self.namespace.qualify(name);
        }
        match rest {
            None if JAVA_LANG.contains(&first) => format!("java.lang.{name}"),
            None => self.namespace.qualify(name),
            Some(_) => name.to_string(),
        }
    }

    fn modifiers(&self, node: Node<'_>) -> std::collections::BTreeSet<Modifier> {
        let mut cursor = node.walk();
        let Some(modifiers) = node.children(&mut cursor).find(|c| c.kind() == "modifiers") else {
            return Default::default();
        };
        let mut cursor = modifiers.walk();
        modifiers
            .children(&mut cursor)
            .filter_map(|c| Modifier::from_keyword(c.kind()))
            .collect()
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn type_kind(node_kind: &str) -> Option<TypeKind> {
    match node_kind {
        "class_declaration" => Some(TypeKind::Class),
        "interface_declaration" => Some(TypeKind::Interface),
        "enum_declaration" => Some(TypeKind::Enum),
        "record_declaration" => Some(TypeKind::Record),
        "annotation_type_declaration" => Some(TypeKind::Annotation),
        _ => None,
    }
}

fn is_interface_like(ty: &TypeDecl) -> bool {
    matches!(ty.kind, TypeKind::Interface | TypeKind::Annotation)
}

fn with_dimensions(mut ty: TypeRef, dims: usize) -> TypeRef {
    for _ in 0..dims {
        ty = ty.array();
    }
    ty
}

/// `Map<String, List<X>>` -> `Map`, `a . B<T>.C` -> `a.B.C`
fn erase_generics(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => out.push(c),
            _ => {}
        }
    }
    out
}
