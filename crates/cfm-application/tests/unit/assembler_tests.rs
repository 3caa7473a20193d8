//! Service assembler lifecycle tests

use cfm_application::ports::{ConfigSourceExt, ServiceAssembly, ServiceContext, StaticConfigSource};
use cfm_application::use_cases::{AssemblerState, ServiceAssembler};
use cfm_domain::{Error, LifecyclePhase, Result, RuntimeMode, ServiceType};
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<String>>>;

/// Assembly that records every callback as `phase:name`
struct Recorder {
    name: String,
    provides: Vec<ServiceType>,
    requires: Vec<ServiceType>,
    fail_at: Option<LifecyclePhase>,
    log: Log,
}

impl Recorder {
    fn new(name: &str, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            provides: Vec::new(),
            requires: Vec::new(),
            fail_at: None,
            log: Arc::clone(log),
        }
    }

    fn provides(mut self, service_type: &str) -> Self {
        self.provides.push(ServiceType::new(service_type));
        self
    }

    fn requires(mut self, service_type: &str) -> Self {
        self.requires.push(ServiceType::new(service_type));
        self
    }

    fn fail_at(mut self, phase: LifecyclePhase) -> Self {
        self.fail_at = Some(phase);
        self
    }

    fn record(&self, phase: LifecyclePhase) -> Result<()> {
        self.log
            .lock()
            .expect("log lock")
            .push(format!("{phase}:{}", self.name));
        if self.fail_at == Some(phase) {
            return Err(Error::internal(format!("{} refused to {phase}", self.name)));
        }
        Ok(())
    }
}

impl ServiceAssembly for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> Vec<ServiceType> {
        self.provides.clone()
    }

    fn requires(&self) -> Vec<ServiceType> {
        self.requires.clone()
    }

    fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
        for service_type in &self.provides {
            ctx.register(service_type.clone(), self.name.clone());
        }
        for service_type in &self.requires {
            let _: String = ctx.resolve(service_type);
        }
        self.record(LifecyclePhase::Init)
    }

    fn prepare(&mut self, _ctx: &mut ServiceContext<'_>) -> Result<()> {
        self.record(LifecyclePhase::Prepare)
    }

    fn start(&mut self, _ctx: &mut ServiceContext<'_>) -> Result<()> {
        self.record(LifecyclePhase::Start)
    }

    fn finalize(&mut self) -> Result<()> {
        self.record(LifecyclePhase::Finalize)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.record(LifecyclePhase::Shutdown)
    }
}

fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().expect("log lock").clone()
}

#[test]
fn test_provider_starts_before_consumer_registered_first() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("Q", &log).requires("svcX"))
        .unwrap();
    assembler
        .register(Recorder::new("P", &log).provides("svcX"))
        .unwrap();

    assembler.assemble().expect("assemble");

    assert_eq!(assembler.state(), AssemblerState::Running);
    assert_eq!(assembler.startup_order(), vec!["P", "Q"]);
    assert_eq!(
        entries(&log),
        vec![
            "init:P", "init:Q", "prepare:P", "prepare:Q", "start:P", "start:Q"
        ]
    );
    let provider: String = assembler.registry().resolve(&ServiceType::new("svcX"));
    assert_eq!(provider, "P");
}

#[test]
fn test_each_phase_completes_before_the_next() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("api", &log).requires("db").requires("cache"))
        .unwrap();
    assembler
        .register(Recorder::new("cache", &log).provides("cache").requires("db"))
        .unwrap();
    assembler
        .register(Recorder::new("db", &log).provides("db"))
        .unwrap();

    assembler.assemble().expect("assemble");

    assert_eq!(assembler.startup_order(), vec!["db", "cache", "api"]);
    let log = entries(&log);
    let last_init = log.iter().rposition(|e| e.starts_with("init:")).unwrap();
    let first_prepare = log.iter().position(|e| e.starts_with("prepare:")).unwrap();
    let last_prepare = log.iter().rposition(|e| e.starts_with("prepare:")).unwrap();
    let first_start = log.iter().position(|e| e.starts_with("start:")).unwrap();
    assert!(last_init < first_prepare);
    assert!(last_prepare < first_start);
    assert_eq!(log.len(), 9);
}

#[test]
fn test_missing_dependency_fails_before_any_callback() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("P", &log).provides("svcX"))
        .unwrap();
    assembler
        .register(Recorder::new("Q", &log).requires("svcY"))
        .unwrap();

    let err = assembler.assemble().unwrap_err();

    match &err {
        Error::MissingDependency {
            assembly,
            service_type,
        } => {
            assert_eq!(assembly, "Q");
            assert_eq!(service_type.as_str(), "svcY");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_configuration_defect());
    assert!(entries(&log).is_empty());
    assert_eq!(assembler.state(), AssemblerState::AssemblyFailed);
}

#[test]
fn test_cycle_fails_before_any_callback() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("M", &log).provides("a").requires("b"))
        .unwrap();
    assembler
        .register(Recorder::new("N", &log).provides("b").requires("a"))
        .unwrap();

    let err = assembler.assemble().unwrap_err();

    let Error::CyclicDependency { path } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(path.len(), 3);
    assert_eq!(path.first(), path.last());
    assert!(path.contains(&"M".to_string()));
    assert!(path.contains(&"N".to_string()));
    assert!(entries(&log).is_empty());
    assert!(assembler.startup_order().is_empty());
}

#[test]
fn test_self_requirement_is_a_cycle() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("loop", &log).provides("a").requires("a"))
        .unwrap();

    let err = assembler.assemble().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cyclic dependency between assemblies: loop -> loop"
    );
}

#[test]
fn test_duplicate_names_are_rejected() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler.register(Recorder::new("dup", &log)).unwrap();
    assembler.register(Recorder::new("dup", &log)).unwrap();

    let err = assembler.assemble().unwrap_err();
    assert!(matches!(err, Error::DuplicateAssembly { ref name } if name == "dup"));
    assert!(entries(&log).is_empty());
}

#[test]
fn test_failure_mid_phase_aborts_without_unwinding() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("A", &log).provides("svc"))
        .unwrap();
    assembler
        .register(
            Recorder::new("B", &log)
                .requires("svc")
                .fail_at(LifecyclePhase::Prepare),
        )
        .unwrap();

    let err = assembler.assemble().unwrap_err();

    match &err {
        Error::LifecyclePhase {
            assembly, phase, ..
        } => {
            assert_eq!(assembly, "B");
            assert_eq!(*phase, LifecyclePhase::Prepare);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.assembly(), Some("B"));
    assert_eq!(
        entries(&log),
        vec!["init:A", "init:B", "prepare:A", "prepare:B"]
    );
    assert_eq!(assembler.state(), AssemblerState::AssemblyFailed);
    assert!(assembler.shutdown().is_err());
}

#[test]
fn test_shutdown_runs_in_startup_order() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Recorder::new("Q", &log).requires("svcX"))
        .unwrap();
    assembler
        .register(Recorder::new("P", &log).provides("svcX"))
        .unwrap();
    assembler.assemble().expect("assemble");
    log.lock().unwrap().clear();

    assembler.shutdown().expect("shutdown");

    assert_eq!(assembler.state(), AssemblerState::Shutdown);
    assert_eq!(
        entries(&log),
        vec!["finalize:P", "finalize:Q", "shutdown:P", "shutdown:Q"]
    );
}

#[test]
fn test_finalize_failure_skips_shutdown_pass() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(
            Recorder::new("P", &log)
                .provides("svc")
                .fail_at(LifecyclePhase::Finalize),
        )
        .unwrap();
    assembler
        .register(Recorder::new("Q", &log).requires("svc"))
        .unwrap();
    assembler.assemble().expect("assemble");
    log.lock().unwrap().clear();

    let err = assembler.shutdown().unwrap_err();

    assert!(matches!(
        err,
        Error::ShutdownPhase {
            phase: LifecyclePhase::Finalize,
            ..
        }
    ));
    assert_eq!(entries(&log), vec!["finalize:P"]);
    assert_eq!(assembler.state(), AssemblerState::ShutdownFailed);
    assert!(assembler.state().is_terminal());
}

#[test]
fn test_operations_out_of_order_are_rejected() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();

    let err = assembler.shutdown().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot shut down while assembler is unassembled"
    );

    assembler.register(Recorder::new("P", &log)).unwrap();
    assembler.assemble().expect("assemble");

    assert!(matches!(
        assembler.register(Recorder::new("late", &log)),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(
        assembler.assemble(),
        Err(Error::InvalidState { .. })
    ));
    assert_eq!(assembler.len(), 1);
}

#[test]
fn test_empty_assembler_runs() {
    let mut assembler = ServiceAssembler::default();
    assert!(assembler.is_empty());
    assembler.assemble().expect("assemble");
    assert_eq!(assembler.state(), AssemblerState::Running);
    assembler.shutdown().expect("shutdown");
    assert_eq!(assembler.state(), AssemblerState::Shutdown);
}

struct ConfigReader {
    seen: Arc<Mutex<Option<(String, RuntimeMode)>>>,
}

impl ServiceAssembly for ConfigReader {
    fn name(&self) -> &str {
        "config-reader"
    }

    fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
        let url = ctx
            .config()
            .get_string("vault.url")
            .ok_or_else(|| Error::config("vault.url missing"))?;
        *self.seen.lock().expect("seen lock") = Some((url, ctx.mode()));
        Ok(())
    }
}

#[test]
fn test_context_exposes_config_and_mode() {
    let seen = Arc::new(Mutex::new(None));
    let config = StaticConfigSource::new().with("vault.url", "http://vault:8200");
    let mut assembler = ServiceAssembler::new(Arc::new(config), RuntimeMode::Development);
    assembler
        .register(ConfigReader {
            seen: Arc::clone(&seen),
        })
        .unwrap();

    assembler.assemble().expect("assemble");

    assert_eq!(
        seen.lock().unwrap().clone(),
        Some(("http://vault:8200".to_string(), RuntimeMode::Development))
    );
    assert_eq!(assembler.mode(), RuntimeMode::Development);
}

#[test]
fn test_assembly_names_keep_registration_order() {
    let log = new_log();
    let mut assembler = ServiceAssembler::default();
    assembler.register(Recorder::new("z", &log)).unwrap();
    assembler
        .register_boxed(Box::new(Recorder::new("a", &log)))
        .unwrap();

    assert_eq!(assembler.assembly_names(), vec!["z", "a"]);
    assert!(assembler.startup_order().is_empty());
}
