//! Shutdown coordination

/// Shutdown coordinator for triggering teardown of the hosting process
///
/// The engine itself never waits on this; the hosting process does, and
/// calls `ServiceAssembler::shutdown` once it fires.
///
/// # Example
///
/// ```no_run
/// use cfm_application::ports::ShutdownCoordinator;
/// use std::sync::Arc;
///
/// fn handle_shutdown(coordinator: Arc<dyn ShutdownCoordinator>) {
///     if coordinator.is_shutting_down() {
///         println!("Shutdown in progress, stopping work");
///     }
///
///     // To trigger shutdown (e.g., from a failing background task)
///     coordinator.signal_shutdown();
/// }
/// ```
pub trait ShutdownCoordinator: Send + Sync {
    /// Signal the hosting process to begin shutdown
    fn signal_shutdown(&self);

    /// Check if shutdown has been signaled
    fn is_shutting_down(&self) -> bool;
}
