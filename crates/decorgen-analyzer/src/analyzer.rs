//! Structural analysis of marked types.
//!
//! Checks the members a decorator actually declares against the partial
//! methods its generated half requires: one accessor per declared interface
//! and the four hooks. Analysis is independent of generation and runs over
//! the same [`Compilation`].

use crate::diagnostic::{Diagnostic, DiagnosticDescriptor, Severity, rules};
use crate::signatures::{implements_accessor, implements_hook};
use decorgen_core::{GeneratorConfig, Hook};
use decorgen_introspector::{
    Compilation, DisplayStyle, InterfaceMember, TypeKind, TypeSymbol, display_type, resolve_accessors,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Diagnostics for one analysis, sorted by location then rule id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Types that carried the marker
    pub analyzed: usize,
    /// Reported diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Number of error-severity diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-severity diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Returns `true` if any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Diagnostics with the given rule id.
    pub fn with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.id == id)
    }
}

/// Analyzer for generic decorator declarations.
///
/// # Examples
///
/// ```
/// use decorgen_analyzer::StructuralAnalyzer;
/// use decorgen_core::GeneratorConfig;
/// use decorgen_introspector::{Compilation, InterfaceSymbol, TypeRef, TypeSymbol};
///
/// let compilation = Compilation::new()
///     .with_interface(InterfaceSymbol::new(Some("Shop"), "IStore"))
///     .with_type(
///         TypeSymbol::class(Some("Shop"), "StoreDecorator")
///             .attribute("Decorgen.GenericDecoratorAttribute")
///             .implements(TypeRef::named(Some("Shop"), "IStore")),
///     );
///
/// let report = StructuralAnalyzer::new(GeneratorConfig::default()).analyze(&compilation);
///
/// // One accessor and four hooks are missing
/// assert_eq!(report.error_count(), 5);
/// assert_eq!(
///     report.diagnostics[0].message,
///     "Implement Shop.IStore GetInnerIStore() on Shop.StoreDecorator"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StructuralAnalyzer {
    config: GeneratorConfig,
}

impl StructuralAnalyzer {
    /// Creates an analyzer.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Configuration the analyzer runs with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Analyzes every type carrying the marker.
    #[must_use]
    pub fn analyze(&self, compilation: &Compilation) -> AnalysisReport {
        let marker = self.config.marker_full_name();
        let marked: Vec<&TypeSymbol> = compilation.marked_types(&marker).collect();

        let mut diagnostics = self.analyze_all(compilation, &marked);
        diagnostics.sort_by(|a, b| a.location.cmp(&b.location).then_with(|| a.id.cmp(&b.id)));

        let report = AnalysisReport {
            analyzed: marked.len(),
            diagnostics,
        };
        info!(
            analyzed = report.analyzed,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "analysis complete"
        );
        report
    }

    #[cfg(feature = "parallel")]
    fn analyze_all(&self, compilation: &Compilation, marked: &[&TypeSymbol]) -> Vec<Diagnostic> {
        use rayon::prelude::*;

        marked
            .par_iter()
            .flat_map_iter(|ty| self.analyze_type(compilation, ty))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_all(&self, compilation: &Compilation, marked: &[&TypeSymbol]) -> Vec<Diagnostic> {
        marked
            .iter()
            .flat_map(|ty| self.analyze_type(compilation, ty))
            .collect()
    }

    /// Analyzes one type, whether or not it carries the marker.
    ///
    /// Diagnostics come out in rule order: missing interface, accessor
    /// collisions, unsupported members, then missing partial methods
    /// (accessors before hooks).
    #[must_use]
    pub fn analyze_type(&self, compilation: &Compilation, ty: &TypeSymbol) -> Vec<Diagnostic> {
        if ty.kind == TypeKind::Error {
            return Vec::new();
        }

        let type_name = ty.display_name();
        let report = |descriptor: &DiagnosticDescriptor, args: &[&str]| {
            Diagnostic::new(descriptor, ty.location.clone(), args)
        };

        if ty.interfaces.is_empty() {
            debug!(target_type = %type_name, "no interfaces declared");
            return vec![report(&rules::MUST_DECLARE_INTERFACE, &[])];
        }

        let mut diagnostics = Vec::new();
        let accessors = resolve_accessors(ty, &self.config);
        let interface_names: Vec<String> = ty
            .interfaces
            .iter()
            .map(|i| display_type(i, DisplayStyle::Qualified))
            .collect();

        for group in &accessors.collisions {
            let interfaces = join(group.iter().map(|&i| interface_names[i].as_str()));
            let chosen = join(group.iter().map(|&i| accessors.names[i].as_str()));
            diagnostics.push(report(&rules::ACCESSOR_NAME_COLLISION, &[&interfaces, &chosen]));
        }

        for (reference, interface_name) in ty.interfaces.iter().zip(&interface_names) {
            let Some(resolved) = compilation.resolve_interface(reference) else {
                continue;
            };
            for member in &resolved.members {
                if matches!(member, InterfaceMember::Method(_)) {
                    continue;
                }
                let member_name = format!("{interface_name}.{}", member.name());
                diagnostics.push(report(
                    &rules::UNSUPPORTED_INTERFACE_MEMBER,
                    &[member.kind_name(), &member_name, &type_name],
                ));
            }
        }

        for ((reference, interface_name), accessor_name) in ty
            .interfaces
            .iter()
            .zip(&interface_names)
            .zip(&accessors.names)
        {
            if !ty
                .methods
                .iter()
                .any(|m| implements_accessor(m, reference, accessor_name))
            {
                let signature = format!("{interface_name} {accessor_name}()");
                diagnostics.push(report(&rules::MUST_IMPLEMENT_PARTIAL_METHOD, &[&signature, &type_name]));
            }
        }

        for hook in Hook::ALL {
            if !ty.methods.iter().any(|m| implements_hook(m, hook)) {
                diagnostics.push(report(
                    &rules::MUST_IMPLEMENT_PARTIAL_METHOD,
                    &[hook.display_signature(), &type_name],
                ));
            }
        }

        debug!(target_type = %type_name, diagnostics = diagnostics.len(), "analyzed type");
        diagnostics
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use decorgen_introspector::{InterfaceSymbol, MethodSymbol, TypeRef, well_known};

    const MARKER: &str = "Decorgen.GenericDecoratorAttribute";

    fn analyzer() -> StructuralAnalyzer {
        StructuralAnalyzer::new(GeneratorConfig::default())
    }

    #[test]
    fn test_unmarked_type_is_not_analyzed() {
        let compilation = Compilation::new().with_type(TypeSymbol::class(Some("A"), "Plain"));
        let report = analyzer().analyze(&compilation);
        assert_eq!(report.analyzed, 0);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_error_kind_is_skipped() {
        let mut ty = TypeSymbol::class(Some("A"), "Broken").attribute(MARKER);
        ty.kind = TypeKind::Error;
        assert!(analyzer().analyze_type(&Compilation::new(), &ty).is_empty());
    }

    #[test]
    fn test_unresolved_interface_still_requires_accessor() {
        let ty = TypeSymbol::class(Some("A"), "Deco")
            .attribute(MARKER)
            .implements(TypeRef::named(Some("A"), "IMissing"));
        let diagnostics = analyzer().analyze_type(&Compilation::new(), &ty);
        assert_eq!(diagnostics.len(), 5);
        assert_eq!(diagnostics[0].message, "Implement A.IMissing GetInnerIMissing() on A.Deco");
    }

    #[test]
    fn test_custom_accessor_prefix() {
        let config = GeneratorConfig::builder().accessor_prefix("Inner").build().unwrap();
        let ty = TypeSymbol::class(Some("A"), "Deco")
            .attribute(MARKER)
            .implements(TypeRef::named(Some("A"), "IFoo"))
            .method(MethodSymbol::new("InnerIFoo", TypeRef::named(Some("A"), "IFoo")).implemented());
        let diagnostics = StructuralAnalyzer::new(config).analyze_type(&Compilation::new(), &ty);
        assert_eq!(diagnostics.len(), 4);
        assert!(diagnostics.iter().all(|d| !d.message.contains("IFoo")));
    }

    #[test]
    fn test_events_reported_as_unsupported() {
        let compilation = Compilation::new().with_interface(
            InterfaceSymbol::new(Some("A"), "IFoo").event("Changed", well_known::action()),
        );
        let ty = TypeSymbol::class(Some("A"), "Deco")
            .attribute(MARKER)
            .implements(TypeRef::named(Some("A"), "IFoo"));
        let diagnostics = analyzer().analyze_type(&compilation, &ty);
        assert_eq!(diagnostics[0].id, "GDG0003");
        assert_eq!(
            diagnostics[0].message,
            "The event A.IFoo.Changed is not forwarded by A.Deco; implement it on the decorator"
        );
    }
}
