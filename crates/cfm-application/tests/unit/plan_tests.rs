//! Assembly plan tests

use cfm_application::ports::ServiceAssembly;
use cfm_application::use_cases::{AssemblerState, ServiceAssembler};
use cfm_domain::{Error, ServiceType};

struct Declared {
    name: &'static str,
    provides: Vec<&'static str>,
    requires: Vec<&'static str>,
}

impl ServiceAssembly for Declared {
    fn name(&self) -> &str {
        self.name
    }

    fn provides(&self) -> Vec<ServiceType> {
        self.provides.iter().map(|s| ServiceType::new(*s)).collect()
    }

    fn requires(&self) -> Vec<ServiceType> {
        self.requires.iter().map(|s| ServiceType::new(*s)).collect()
    }
}

fn declared(
    name: &'static str,
    provides: &[&'static str],
    requires: &[&'static str],
) -> Declared {
    Declared {
        name,
        provides: provides.to_vec(),
        requires: requires.to_vec(),
    }
}

fn diamond() -> ServiceAssembler {
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(declared("app", &[], &["left", "right"]))
        .unwrap();
    assembler
        .register(declared("left", &["left"], &["base"]))
        .unwrap();
    assembler
        .register(declared("right", &["right"], &["base"]))
        .unwrap();
    assembler.register(declared("base", &["base"], &[])).unwrap();
    assembler
}

#[test]
fn test_plan_groups_independent_assemblies() {
    let assembler = diamond();
    let plan = assembler.plan().expect("plan");

    assert_eq!(
        plan.levels,
        vec![
            vec!["base".to_string()],
            vec!["left".to_string(), "right".to_string()],
            vec!["app".to_string()],
        ]
    );
    assert_eq!(plan.position("base"), Some(0));
    assert_eq!(plan.position("app"), Some(3));
    assert_eq!(plan.providers_of("app"), vec!["left", "right"]);
    assert_eq!(plan.dependencies.len(), 4);
}

#[test]
fn test_plan_has_no_side_effects() {
    let assembler = diamond();
    let _ = assembler.plan().expect("plan");

    assert_eq!(assembler.state(), AssemblerState::Unassembled);
    assert!(assembler.registry().is_empty());
    assert!(assembler.startup_order().is_empty());
}

#[test]
fn test_plan_order_matches_assembly() {
    let mut assembler = diamond();
    let planned = assembler.plan().expect("plan").order;

    assembler.assemble().expect("assemble");
    assert_eq!(assembler.startup_order(), planned);
}

#[test]
fn test_plan_reports_missing_dependency() {
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(declared("api", &[], &["store"]))
        .unwrap();

    assert!(matches!(
        assembler.plan(),
        Err(Error::MissingDependency { .. })
    ));
}

#[test]
fn test_plan_display_lists_order_and_levels() {
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(declared("api", &[], &["store"]))
        .unwrap();
    assembler
        .register(declared("store", &["store"], &[]))
        .unwrap();

    let rendered = assembler.plan().expect("plan").to_string();
    assert_eq!(
        rendered,
        "Startup order:\n  1. store\n  2. api (after store)\nLevels:\n  0: store\n  1: api\n"
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(declared("store", &["store"], &[]))
        .unwrap();

    let json = serde_json::to_value(assembler.plan().expect("plan")).expect("json");
    assert_eq!(json["order"], serde_json::json!(["store"]));
    assert_eq!(json["levels"], serde_json::json!([["store"]]));
}
