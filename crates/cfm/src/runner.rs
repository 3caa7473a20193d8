//! Run loop
//!
//! Assemble, wait for a termination request, shut down. The assembler stays
//! synchronous; only the wait suspends.

use cfm_application::ports::ShutdownCoordinator;
use cfm_application::use_cases::ServiceAssembler;
use cfm_domain::error::Result;
use cfm_infrastructure::infrastructure::DefaultShutdownCoordinator;
use tracing::{error, info};

/// Assemble every registered assembly, block until Ctrl-C or the coordinator
/// fires, then shut everything down
///
/// Returns the assembly error without waiting if startup fails.
pub async fn run(
    assembler: &mut ServiceAssembler,
    coordinator: &DefaultShutdownCoordinator,
) -> Result<()> {
    assembler.assemble()?;
    info!("Services running, waiting for shutdown signal");

    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => info!("Received interrupt, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to listen for shutdown signal");
                coordinator.wait_for_shutdown().await;
            }
        },
        () = coordinator.wait_for_shutdown() => info!("Shutdown requested"),
    }

    coordinator.signal_shutdown();
    assembler.shutdown()
}
