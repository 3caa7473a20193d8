//! Figment-backed configuration source

use cfm_application::ports::ConfigSource;
use figment::Figment;
use serde_json::Value;

/// [`ConfigSource`] over a merged [`Figment`]
///
/// Keys are figment's dotted paths, so `CFM_VAULT__URL` and a `[vault] url`
/// table entry are both visible as `vault.url`.
#[derive(Debug, Clone)]
pub struct FigmentConfigSource {
    figment: Figment,
}

impl FigmentConfigSource {
    /// Wrap a merged figment
    pub fn new(figment: Figment) -> Self {
        Self { figment }
    }

    /// The underlying figment
    pub fn figment(&self) -> &Figment {
        &self.figment
    }
}

impl From<Figment> for FigmentConfigSource {
    fn from(figment: Figment) -> Self {
        Self::new(figment)
    }
}

impl ConfigSource for FigmentConfigSource {
    fn value(&self, key: &str) -> Option<Value> {
        self.figment.extract_inner(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        self.figment.contains(key)
    }
}
