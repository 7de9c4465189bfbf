use crate::model::{
    Declaration, Element, ExecutableDecl, OtherDecl, PackageDecl, TypeDecl, VariableDecl,
};

/// Traversal over a declaration forest.
///
/// [`visit`](DeclarationVisitor::visit) routes each node to the handler for
/// its kind. Every handler falls back to
/// [`default_action`](DeclarationVisitor::default_action), which does nothing
/// unless overridden. Type handlers do not descend on their own; an override
/// that needs members calls [`walk_members`].
pub trait DeclarationVisitor {
    fn default_action(&mut self, _element: &dyn Element) {}

    fn visit_package(&mut self, package: &PackageDecl) {
        self.default_action(package);
    }

    fn visit_type(&mut self, ty: &TypeDecl) {
        self.default_action(ty);
    }

    fn visit_executable(&mut self, executable: &ExecutableDecl) {
        self.default_action(executable);
    }

    fn visit_variable(&mut self, variable: &VariableDecl) {
        self.default_action(variable);
    }

    fn visit_other(&mut self, other: &OtherDecl) {
        self.default_action(other);
    }

    fn visit(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Package(p) => self.visit_package(p),
            Declaration::Type(t) => self.visit_type(t),
            Declaration::Executable(e) => self.visit_executable(e),
            Declaration::Variable(v) => self.visit_variable(v),
            Declaration::Other(o) => self.visit_other(o),
        }
    }

    fn visit_roots(&mut self, roots: &[Declaration]) {
        for root in roots {
            self.visit(root);
        }
    }
}

/// Visits the members of `ty` in declaration order.
pub fn walk_members<V: DeclarationVisitor + ?Sized>(visitor: &mut V, ty: &TypeDecl) {
    for member in &ty.members {
        visitor.visit(member);
    }
}
