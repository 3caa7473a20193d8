//! Run loop tests

use cfm::application::ports::ShutdownCoordinator;
use cfm::infrastructure::DefaultShutdownCoordinator;
use cfm::{AssemblerState, Error, ServiceAssembler, ServiceAssembly, ServiceType};
use std::sync::Arc;
use std::time::Duration;

struct Named(&'static str, Vec<ServiceType>);

impl ServiceAssembly for Named {
    fn name(&self) -> &str {
        self.0
    }

    fn requires(&self) -> Vec<ServiceType> {
        self.1.clone()
    }
}

#[tokio::test]
async fn test_run_shuts_down_when_coordinator_fires() {
    let mut assembler = ServiceAssembler::default();
    assembler.register(Named("solo", Vec::new())).unwrap();
    let coordinator = Arc::new(DefaultShutdownCoordinator::new());

    let trigger = Arc::clone(&coordinator);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.signal_shutdown();
    });

    tokio::time::timeout(Duration::from_secs(2), cfm::run(&mut assembler, &coordinator))
        .await
        .expect("run should return after shutdown signal")
        .expect("run");

    assert_eq!(assembler.state(), AssemblerState::Shutdown);
}

#[tokio::test]
async fn test_run_returns_assembly_error_without_waiting() {
    let mut assembler = ServiceAssembler::default();
    assembler
        .register(Named("orphan", vec![ServiceType::new("cfm:none")]))
        .unwrap();
    let coordinator = DefaultShutdownCoordinator::new();

    let err = tokio::time::timeout(Duration::from_secs(2), cfm::run(&mut assembler, &coordinator))
        .await
        .expect("run should not wait")
        .unwrap_err();

    assert!(matches!(err, Error::MissingDependency { .. }));
    assert!(!coordinator.is_shutting_down());
}
