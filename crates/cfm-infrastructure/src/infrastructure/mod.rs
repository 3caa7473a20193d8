//! Infrastructure services
//!
//! Default implementations of application ports that need a runtime.

pub mod shutdown;

pub use shutdown::DefaultShutdownCoordinator;
