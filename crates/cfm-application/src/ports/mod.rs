//! Ports
//!
//! Contracts between the assembly engine and the components and hosting
//! process around it.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceAssembly`] | A pluggable component with declared capabilities and lifecycle callbacks |
//! | [`ServiceContext`] | What an assembly sees during `init`, `prepare` and `start` |
//! | [`ConfigSource`] | Opaque configuration lookup handed to assemblies |
//! | [`ShutdownCoordinator`] | Signals the hosting process to tear down |

pub mod assembly;
pub mod config;
pub mod shutdown;

pub use assembly::{ServiceAssembly, ServiceContext};
pub use config::{ConfigSource, ConfigSourceExt, StaticConfigSource};
pub use shutdown::ShutdownCoordinator;
