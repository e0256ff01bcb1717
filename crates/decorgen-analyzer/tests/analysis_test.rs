//! Integration tests for decorgen-analyzer
//!
//! These tests walk a decorator through the states a user passes while
//! writing it and check the diagnostics reported at each step.

use decorgen_analyzer::{Severity, StructuralAnalyzer};
use decorgen_core::GeneratorConfig;
use decorgen_introspector::{
    Compilation, InterfaceSymbol, Location, MethodSymbol, TypeRef, TypeSymbol, well_known,
};
use serde_json::json;

const MARKER: &str = "Decorgen.GenericDecoratorAttribute";

fn analyzer() -> StructuralAnalyzer {
    StructuralAnalyzer::new(GeneratorConfig::default())
}

fn my_interface() -> InterfaceSymbol {
    InterfaceSymbol::new(Some("MyNamespace"), "IMyInterface").method(
        MethodSymbol::new("GetStuffAsync", well_known::task_of(well_known::string()))
            .param("arg1", well_known::int()),
    )
}

fn decorator() -> TypeSymbol {
    TypeSymbol::class(Some("MyNamespace"), "GenericFooDecorator")
        .attribute(MARKER)
        .at(Location::new("GenericFooDecorator.cs", 6, 22))
}

fn t() -> TypeRef {
    TypeRef::type_parameter("T")
}

/// The four hooks, implemented.
fn hooks() -> Vec<MethodSymbol> {
    vec![
        MethodSymbol::new("Decorate", TypeRef::Void)
            .param("doInner", well_known::action())
            .implemented(),
        MethodSymbol::new("Decorate", t())
            .type_parameter("T")
            .param("doInner", well_known::func(t()))
            .implemented(),
        MethodSymbol::new("DecorateAsync", well_known::task())
            .param("doInner", well_known::func(well_known::task()))
            .implemented(),
        MethodSymbol::new("DecorateAsync", well_known::task_of(t()))
            .type_parameter("T")
            .param("doInner", well_known::func(well_known::task_of(t())))
            .implemented(),
    ]
}

fn with_methods(mut ty: TypeSymbol, methods: Vec<MethodSymbol>) -> TypeSymbol {
    ty.methods.extend(methods);
    ty
}

/// Tests that a marked type without interfaces gets exactly one warning
#[test]
fn test_missing_interface() {
    let compilation = Compilation::new().with_type(decorator());
    let report = analyzer().analyze(&compilation);

    assert_eq!(report.analyzed, 1);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.id, "GDG0001");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert!(diagnostic.message.contains("interface"));
    assert_eq!(diagnostic.location, Location::new("GenericFooDecorator.cs", 6, 22));
}

/// Tests the five errors reported once an interface is declared
#[test]
fn test_interface_declared_without_partials() {
    let compilation = Compilation::new().with_interface(my_interface()).with_type(
        decorator().implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
    );
    let report = analyzer().analyze(&compilation);

    let messages: Vec<&str> = report.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Implement MyNamespace.IMyInterface GetInnerIMyInterface() on MyNamespace.GenericFooDecorator",
            "Implement void Decorate(Action doInner) on MyNamespace.GenericFooDecorator",
            "Implement T Decorate<T>(Func<T> doInner) on MyNamespace.GenericFooDecorator",
            "Implement Task DecorateAsync(Func<Task> doInner) on MyNamespace.GenericFooDecorator",
            "Implement Task<T> DecorateAsync<T>(Func<Task<T>> doInner) on MyNamespace.GenericFooDecorator",
        ]
    );
    assert!(report.diagnostics.iter().all(|d| d.id == "GDG8795"));
    assert_eq!(report.error_count(), 5);
    assert!(report.has_errors());
}

/// Tests that a complete decorator reports nothing
#[test]
fn test_complete_decorator() {
    let mut methods = hooks();
    methods.push(
        MethodSymbol::new("GetInnerIMyInterface", TypeRef::named(Some("MyNamespace"), "IMyInterface"))
            .implemented(),
    );
    let ty = with_methods(
        decorator().implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
        methods,
    );
    let compilation = Compilation::new().with_interface(my_interface()).with_type(ty);

    let report = analyzer().analyze(&compilation);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
}

/// Tests that a hook with the right name but wrong parameter type is still missing
#[test]
fn test_wrong_hook_signature_still_reported() {
    let mut methods = hooks();
    methods[0] = MethodSymbol::new("Decorate", TypeRef::Void)
        .param("doInner", well_known::func(well_known::object()))
        .implemented();
    methods.push(
        MethodSymbol::new("GetInnerIMyInterface", TypeRef::named(Some("MyNamespace"), "IMyInterface"))
            .implemented(),
    );
    let ty = with_methods(
        decorator().implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
        methods,
    );
    let compilation = Compilation::new().with_interface(my_interface()).with_type(ty);

    let report = analyzer().analyze(&compilation);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].message,
        "Implement void Decorate(Action doInner) on MyNamespace.GenericFooDecorator"
    );
}

/// Tests that generated declarations without implementation parts do not count
#[test]
fn test_declaration_only_is_missing() {
    let methods = hooks()
        .into_iter()
        .map(|mut m| {
            m.has_implementation_part = false;
            m
        })
        .collect();
    let ty = with_methods(
        decorator().implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
        methods,
    );
    let compilation = Compilation::new().with_interface(my_interface()).with_type(ty);

    assert_eq!(analyzer().analyze(&compilation).error_count(), 5);
}

/// Tests the collision warning and the qualified accessor names it reports
#[test]
fn test_accessor_collision() {
    let compilation = Compilation::new()
        .with_interface(InterfaceSymbol::new(Some("Billing"), "IStore"))
        .with_interface(InterfaceSymbol::new(Some("Shipping"), "IStore"))
        .with_type(
            decorator()
                .implements(TypeRef::named(Some("Billing"), "IStore"))
                .implements(TypeRef::named(Some("Shipping"), "IStore")),
        );
    let report = analyzer().analyze(&compilation);

    let collision: Vec<_> = report.with_id("GDG0002").collect();
    assert_eq!(collision.len(), 1);
    assert_eq!(
        collision[0].message,
        "Interfaces Billing.IStore, Shipping.IStore map to the same accessor name; using GetInnerBilling_IStore, GetInnerShipping_IStore"
    );

    let accessors: Vec<_> = report
        .with_id("GDG8795")
        .filter(|d| d.message.contains("GetInner"))
        .map(|d| d.message.clone())
        .collect();
    assert_eq!(
        accessors,
        vec![
            "Implement Billing.IStore GetInnerBilling_IStore() on MyNamespace.GenericFooDecorator",
            "Implement Shipping.IStore GetInnerShipping_IStore() on MyNamespace.GenericFooDecorator",
        ]
    );
}

/// Tests that interface properties are reported as not forwarded
#[test]
fn test_property_warning() {
    let interface = my_interface().property("Name", well_known::string());
    let compilation = Compilation::new().with_interface(interface).with_type(
        decorator().implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
    );
    let report = analyzer().analyze(&compilation);

    let unsupported: Vec<_> = report.with_id("GDG0003").collect();
    assert_eq!(unsupported.len(), 1);
    assert_eq!(
        unsupported[0].message,
        "The property MyNamespace.IMyInterface.Name is not forwarded by MyNamespace.GenericFooDecorator; implement it on the decorator"
    );
    assert_eq!(report.warning_count(), 1);
}

/// Tests that a constructed generic interface needs an accessor returning that construction
#[test]
fn test_generic_interface_accessor() {
    let repo = InterfaceSymbol::new(Some("Data"), "IRepo")
        .type_parameter("T")
        .method(MethodSymbol::new("Get", TypeRef::type_parameter("T")));
    let repo_int = TypeRef::generic(Some("Data"), "IRepo", vec![well_known::int()]);
    let repo_string = TypeRef::generic(Some("Data"), "IRepo", vec![well_known::string()]);

    let mut methods = hooks();
    methods.push(MethodSymbol::new("GetInnerIRepo_int", repo_string).implemented());
    let ty = with_methods(decorator().implements(repo_int), methods);
    let compilation = Compilation::new().with_interface(repo).with_type(ty);

    let report = analyzer().analyze(&compilation);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].message,
        "Implement Data.IRepo<int> GetInnerIRepo_int() on MyNamespace.GenericFooDecorator"
    );
}

/// Tests ordering across types by location, then rule id
#[test]
fn test_diagnostics_sorted_by_location() {
    let late = TypeSymbol::class(Some("A"), "Late")
        .attribute(MARKER)
        .at(Location::new("A.cs", 40, 1));
    let early = TypeSymbol::class(Some("A"), "Early")
        .attribute(MARKER)
        .implements(TypeRef::named(Some("A"), "IMissing"))
        .at(Location::new("A.cs", 2, 1));
    let compilation = Compilation::new().with_type(late).with_type(early);

    let report = analyzer().analyze(&compilation);
    assert_eq!(report.diagnostics.len(), 6);
    assert!(report.diagnostics[..5].iter().all(|d| d.location.line == 2));
    assert_eq!(report.diagnostics[5].id, "GDG0001");
}

/// Tests analysis of a snapshot loaded from JSON
#[test]
fn test_analyze_json_snapshot() {
    let snapshot = json!({
        "types": [{
            "namespace": "MyNamespace",
            "name": "GenericFooDecorator",
            "attributes": ["global::Decorgen.GenericDecoratorAttribute"],
            "interfaces": [{"kind": "named", "namespace": "MyNamespace", "name": "IMyInterface"}],
            "methods": [{
                "name": "GetInnerIMyInterface",
                "return_type": {"kind": "named", "namespace": "MyNamespace", "name": "IMyInterface"},
                "has_implementation_part": true
            }],
            "location": {"file": "GenericFooDecorator.cs", "line": 6, "column": 22}
        }],
        "interfaces": [{"namespace": "MyNamespace", "name": "IMyInterface"}]
    });
    let compilation = Compilation::from_json(&snapshot.to_string()).unwrap();

    let report = analyzer().analyze(&compilation);
    assert_eq!(report.error_count(), 4);
    assert!(report.diagnostics.iter().all(|d| !d.message.contains("GetInner")));
}

/// Tests that a large snapshot yields the same sorted report on every run
#[test]
fn test_many_types_report_is_sorted_and_stable() {
    let types: Vec<TypeSymbol> = (0..40)
        .rev()
        .map(|i| {
            TypeSymbol::class(Some("MyNamespace"), format!("Decorator{i:02}"))
                .attribute(MARKER)
                .implements(TypeRef::named(Some("MyNamespace"), "IMyInterface"))
                .at(Location::new(format!("Decorator{i:02}.cs"), 3, 15))
        })
        .collect();
    let compilation = Compilation::new().with_interface(my_interface());
    let compilation = types.into_iter().fold(compilation, Compilation::with_type);

    let report = analyzer().analyze(&compilation);
    assert_eq!(report.analyzed, 40);
    assert_eq!(report.error_count(), 40 * 5);
    assert!(
        report
            .diagnostics
            .windows(2)
            .all(|pair| (&pair[0].location, &pair[0].id) <= (&pair[1].location, &pair[1].id))
    );
    assert_eq!(report.diagnostics[0].location.file, "Decorator00.cs");
    assert!(report.diagnostics[0].message.contains("GetInnerIMyInterface"));

    let again = analyzer().analyze(&compilation);
    assert_eq!(report, again);
}
