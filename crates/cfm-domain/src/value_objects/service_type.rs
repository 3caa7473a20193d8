//! Capability keys

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque string identifying a capability contract
///
/// A `ServiceType` names what an assembly provides or requires; it says nothing
/// about the concrete Rust type stored in the registry under that key.
///
/// ```
/// use cfm_domain::value_objects::ServiceType;
///
/// const VAULT: ServiceType = ServiceType::from_static("cfm:vault");
/// assert_eq!(VAULT.as_str(), "cfm:vault");
/// assert_eq!(ServiceType::new("cfm:vault"), VAULT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceType(std::borrow::Cow<'static, str>);

impl ServiceType {
    /// Create a service type from any string
    pub fn new(value: impl Into<String>) -> Self {
        Self(std::borrow::Cow::Owned(value.into()))
    }

    /// Create a service type usable in `const` items
    pub const fn from_static(value: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(value))
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServiceType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for ServiceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ServiceType {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
