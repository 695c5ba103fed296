//! IdentityDescriptor - who is asking the wallet provider.
//!
//! Immutable, process-wide configuration. Constructed once by the host and
//! injected through [`crate::bridge::BridgeConfig`], never read from ambient
//! global state.

use serde::{Deserialize, Serialize};

/// Identity shown to the wallet provider during association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDescriptor {
    /// Display name presented in the provider's consent UI.
    pub name: String,
    /// Identity URI the provider verifies the request against.
    pub uri: String,
    /// Icon location, relative to `uri`.
    pub icon: String,
}

impl IdentityDescriptor {
    pub fn new(name: impl Into<String>, uri: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { name: name.into(), uri: uri.into(), icon: icon.into() }
    }

    /// Absolute icon location, resolved relative to the identity URI.
    pub fn icon_uri(&self) -> String {
        let base = self.uri.trim_end_matches('/');
        let icon = self.icon.trim_start_matches('/');
        format!("{}/{}", base, icon)
    }
}
