//! Error handling types

use crate::constants::CYCLE_PATH_SEPARATOR;
use crate::value_objects::{LifecyclePhase, ServiceType};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by an assembly callback
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the CFM assembly engine
#[derive(Error, Debug)]
pub enum Error {
    /// An assembly requires a service type that no registered assembly provides
    #[error("Assembly '{assembly}' requires service '{service_type}' which no assembly provides")]
    MissingDependency {
        /// Name of the requiring assembly
        assembly: String,
        /// The unmet service type
        service_type: ServiceType,
    },

    /// The dependency graph between assemblies contains a cycle
    #[error("Cyclic dependency between assemblies: {}", .path.join(CYCLE_PATH_SEPARATOR))]
    CyclicDependency {
        /// Assembly names forming the cycle; the first name is repeated at the end.
        /// Empty when the cycle was only detected by the ordering pass.
        path: Vec<String>,
    },

    /// Two registered assemblies share the same name
    #[error("Duplicate assembly name: {name}")]
    DuplicateAssembly {
        /// The duplicated name
        name: String,
    },

    /// An `init`, `prepare` or `start` callback failed
    #[error("{phase} failed for assembly '{assembly}': {source}")]
    LifecyclePhase {
        /// Name of the failing assembly
        assembly: String,
        /// Phase that was running
        phase: LifecyclePhase,
        /// Error returned by the assembly
        #[source]
        source: BoxedError,
    },

    /// A `finalize` or `shutdown` callback failed
    #[error("{phase} failed for assembly '{assembly}': {source}")]
    ShutdownPhase {
        /// Name of the failing assembly
        assembly: String,
        /// Phase that was running
        phase: LifecyclePhase,
        /// Error returned by the assembly
        #[source]
        source: BoxedError,
    },

    /// A service type was resolved before anything registered it
    #[error("Service not registered: {service_type}")]
    UnregisteredService {
        /// The service type that was looked up
        service_type: ServiceType,
    },

    /// A registered instance does not have the type the caller asked for
    #[error("Service '{service_type}' is not of type {expected}")]
    ServiceTypeMismatch {
        /// The service type that was looked up
        service_type: ServiceType,
        /// Name of the requested Rust type
        expected: &'static str,
    },

    /// An operation was invoked out of lifecycle order
    #[error("Cannot {operation} while assembler is {state}")]
    InvalidState {
        /// The rejected operation
        operation: &'static str,
        /// Current state description
        state: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Generic string-based error
    #[error("{0}")]
    String(String),
}

// Dependency resolution error creation methods
impl Error {
    /// Create a missing dependency error
    pub fn missing_dependency<S: Into<String>>(assembly: S, service_type: ServiceType) -> Self {
        Self::MissingDependency {
            assembly: assembly.into(),
            service_type,
        }
    }

    /// Create a cyclic dependency error carrying the cycle path
    pub fn cyclic_dependency(path: Vec<String>) -> Self {
        Self::CyclicDependency { path }
    }

    /// Create a duplicate assembly error
    pub fn duplicate_assembly<S: Into<String>>(name: S) -> Self {
        Self::DuplicateAssembly { name: name.into() }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Wrap an error returned by an `init`, `prepare` or `start` callback
    pub fn lifecycle<S, E>(assembly: S, phase: LifecyclePhase, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxedError>,
    {
        Self::LifecyclePhase {
            assembly: assembly.into(),
            phase,
            source: source.into(),
        }
    }

    /// Wrap an error returned by a `finalize` or `shutdown` callback
    pub fn shutdown<S, E>(assembly: S, phase: LifecyclePhase, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxedError>,
    {
        Self::ShutdownPhase {
            assembly: assembly.into(),
            phase,
            source: source.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state<S: std::fmt::Display>(operation: &'static str, state: S) -> Self {
        Self::InvalidState {
            operation,
            state: state.to_string(),
        }
    }
}

// Registry error creation methods
impl Error {
    /// Create an unregistered service error
    pub fn unregistered_service(service_type: ServiceType) -> Self {
        Self::UnregisteredService { service_type }
    }

    /// Create a type mismatch error for a registered service
    pub fn service_type_mismatch(service_type: ServiceType, expected: &'static str) -> Self {
        Self::ServiceTypeMismatch {
            service_type,
            expected,
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// True for errors detected before any lifecycle callback ran
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            Self::MissingDependency { .. }
                | Self::CyclicDependency { .. }
                | Self::DuplicateAssembly { .. }
        )
    }

    /// Name of the assembly this error is attributed to, if any
    pub fn assembly(&self) -> Option<&str> {
        match self {
            Self::MissingDependency { assembly, .. }
            | Self::LifecyclePhase { assembly, .. }
            | Self::ShutdownPhase { assembly, .. } => Some(assembly),
            Self::DuplicateAssembly { name } => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
