use super::prefix::{join, CommonPrefix};
use super::visitor::DeclarationVisitor;
use super::Resolver;
use crate::error::ResolutionError;
use crate::model::Element;

/// Narrowest package shared by every declaration visited, used for
/// `Automatic-Module-Name`.
#[derive(Debug, Default)]
pub struct NamespaceResolver {
    prefix: CommonPrefix<String>,
}

impl NamespaceResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeclarationVisitor for NamespaceResolver {
    fn default_action(&mut self, element: &dyn Element) {
        // Module declarations and the like have no package; they must not
        // collapse the prefix.
        if let Some(namespace) = element.package_of() {
            self.prefix.apply(namespace.components().to_vec());
        }
    }
}

impl Resolver for NamespaceResolver {
    fn finalize(&self) -> Result<String, ResolutionError> {
        let components = self.prefix.components();
        if components.is_empty() {
            return Err(ResolutionError::NoCommonNamespace);
        }
        Ok(join(components, '.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, OtherDecl, PackageDecl, TypeDecl};

    fn resolve(roots: &[Declaration]) -> Result<String, ResolutionError> {
        let mut resolver = NamespaceResolver::new();
        resolver.visit_roots(roots);
        resolver.finalize()
    }

    #[test]
    fn test_single_type() {
        let roots = vec![TypeDecl::class("com.example.app", "Main").into()];
        assert_eq!(resolve(&roots).unwrap(), "com.example.app");
    }

    #[test]
    fn test_narrows_to_common_prefix() {
        let roots = vec![
            TypeDecl::class("com.example.app", "Main").into(),
            TypeDecl::class("com.example.app.util", "Strings").into(),
            TypeDecl::class("com.example.lib", "Lib").into(),
        ];
        assert_eq!(resolve(&roots).unwrap(), "com.example");
    }

    #[test]
    fn test_package_roots_participate() {
        let roots = vec![
            PackageDecl::new("org.acme").into(),
            TypeDecl::class("org.acme.core", "Core").into(),
        ];
        assert_eq!(resolve(&roots).unwrap(), "org.acme");
    }

    #[test]
    fn test_unnamed_package_collapses() {
        let roots = vec![
            TypeDecl::class("com.example", "Main").into(),
            TypeDecl::class("", "Loose").into(),
            TypeDecl::class("com.example", "Other").into(),
        ];
        assert_eq!(resolve(&roots), Err(ResolutionError::NoCommonNamespace));
    }

    #[test]
    fn test_disjoint_roots() {
        let roots = vec![
            TypeDecl::class("com.example", "A").into(),
            TypeDecl::class("org.example", "B").into(),
        ];
        assert_eq!(resolve(&roots), Err(ResolutionError::NoCommonNamespace));
    }

    #[test]
    fn test_nodes_without_package_are_skipped() {
        let roots = vec![
            OtherDecl::new("com.example.app", None).into(),
            TypeDecl::class("com.example.app", "Main").into(),
        ];
        assert_eq!(resolve(&roots).unwrap(), "com.example.app");
    }

    #[test]
    fn test_nothing_visited() {
        assert_eq!(resolve(&[]), Err(ResolutionError::NoCommonNamespace));
    }

    #[test]
    fn test_accumulates_across_rounds() {
        let mut resolver = NamespaceResolver::new();
        resolver.visit_roots(&[TypeDecl::class("a.b.c", "X").into()]);
        resolver.visit_roots(&[TypeDecl::class("a.b.d", "Y").into()]);
        assert_eq!(resolver.finalize().unwrap(), "a.b");
    }
}
