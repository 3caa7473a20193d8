//! Service registry tests

use cfm_application::registry::ServiceRegistry;
use cfm_domain::{Error, ServiceType};
use std::sync::Arc;

trait Counter: Send + Sync {
    fn count(&self) -> usize;
}

struct Fixed(usize);

impl Counter for Fixed {
    fn count(&self) -> usize {
        self.0
    }
}

#[test]
fn test_register_then_resolve_trait_object() {
    let counter = ServiceType::new("test:counter");
    let mut registry = ServiceRegistry::new();
    registry.register(counter.clone(), Arc::new(Fixed(7)) as Arc<dyn Counter>);

    let resolved: Arc<dyn Counter> = registry.resolve(&counter);
    assert_eq!(resolved.count(), 7);
    assert!(registry.contains(&counter));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_last_registration_wins() {
    let name = ServiceType::new("test:name");
    let mut registry = ServiceRegistry::new();
    registry.register(name.clone(), String::from("first"));
    registry.register(name.clone(), String::from("second"));

    let resolved: String = registry.resolve(&name);
    assert_eq!(resolved, "second");
    assert_eq!(registry.len(), 1);
}

#[test]
#[should_panic(expected = "Service not registered: test:missing")]
fn test_resolve_unregistered_panics() {
    let registry = ServiceRegistry::new();
    let _: String = registry.resolve(&ServiceType::new("test:missing"));
}

#[test]
fn test_try_resolve_reports_unregistered() {
    let registry = ServiceRegistry::new();
    let err = registry
        .try_resolve::<String>(&ServiceType::new("test:missing"))
        .unwrap_err();
    assert!(matches!(err, Error::UnregisteredService { .. }));
}

#[test]
fn test_try_resolve_reports_type_mismatch() {
    let port = ServiceType::new("test:port");
    let mut registry = ServiceRegistry::new();
    registry.register(port.clone(), 8080_u16);

    let err = registry.try_resolve::<String>(&port).unwrap_err();
    match err {
        Error::ServiceTypeMismatch {
            service_type,
            expected,
        } => {
            assert_eq!(service_type, port);
            assert!(expected.contains("String"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_resolve_optional() {
    let port = ServiceType::new("test:port");
    let mut registry = ServiceRegistry::new();
    assert_eq!(registry.resolve_optional::<u16>(&port), None);

    registry.register(port.clone(), 8080_u16);
    assert_eq!(registry.resolve_optional::<u16>(&port), Some(8080));
    // Wrong type reads as absent
    assert_eq!(registry.resolve_optional::<u32>(&port), None);
}

#[test]
fn test_service_types_are_sorted() {
    let mut registry = ServiceRegistry::new();
    assert!(registry.is_empty());
    registry.register(ServiceType::new("b:two"), 2_u8);
    registry.register(ServiceType::new("a:one"), 1_u8);

    let types: Vec<&str> = registry
        .service_types()
        .into_iter()
        .map(ServiceType::as_str)
        .collect();
    assert_eq!(types, vec!["a:one", "b:two"]);
}
