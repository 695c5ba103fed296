//! Activity capability resolution.
//!
//! The provider's UI handshake can only be launched through a sender bound to
//! a live host activity. The bridge receives the caller's handle as an opaque
//! `&dyn Any`, checks it is the expected host type with a pre-initialized
//! sender, and refuses to dispatch otherwise. The check is synchronous: the
//! sender's validity is tied to the handle's identity and cannot be
//! reconstructed later from a background task.

use std::any::Any;
use std::sync::Arc;

use crate::error::BridgeError;

/// Opaque token bound to a live host activity. The provider uses it to open
/// its consent UI; the bridge never looks inside.
#[derive(Debug, Clone)]
pub struct ActivitySender {
    tag: Arc<str>,
}

impl ActivitySender {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self { tag: Arc::from(tag.as_ref()) }
    }

    /// Host-assigned tag, for diagnostics only.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Caller-side handle. The platform layer constructs one per foreground
/// activity and attaches the sender once the activity is live.
#[derive(Debug, Default)]
pub struct HostActivity {
    sender: Option<ActivitySender>,
}

impl HostActivity {
    /// A live activity with an initialized sender.
    pub fn with_sender(sender: ActivitySender) -> Self {
        Self { sender: Some(sender) }
    }

    /// An activity whose sender was never initialized. Resolution fails.
    pub fn detached() -> Self {
        Self { sender: None }
    }
}

/// A usable, validated capability. Borrows nothing from the handle: the
/// sender token is cloned into the session and dropped at settlement.
#[derive(Debug, Clone)]
pub struct ActivityCapability {
    sender: ActivitySender,
}

impl ActivityCapability {
    pub fn sender(&self) -> &ActivitySender {
        &self.sender
    }
}

/// Resolve a caller handle into an activity capability.
///
/// Fails with [`BridgeError::CapabilityUnavailable`] when the handle is not a
/// [`HostActivity`] or its sender is missing. No side effects beyond a
/// diagnostic log.
pub fn resolve_activity(handle: &dyn Any) -> Result<ActivityCapability, BridgeError> {
    let Some(host) = handle.downcast_ref::<HostActivity>() else {
        tracing::warn!("caller handle is not a host activity");
        return Err(BridgeError::CapabilityUnavailable(
            "handle is not a host activity".into(),
        ));
    };
    match &host.sender {
        Some(sender) => Ok(ActivityCapability { sender: sender.clone() }),
        None => {
            tracing::warn!("host activity has no initialized sender");
            Err(BridgeError::CapabilityUnavailable(
                "activity sender not initialized".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_live_activity() {
        let host = HostActivity::with_sender(ActivitySender::new("main"));
        let cap = resolve_activity(&host).expect("should resolve");
        assert_eq!(cap.sender().tag(), "main");
    }

    #[test]
    fn rejects_detached_activity() {
        let host = HostActivity::detached();
        let err = resolve_activity(&host).expect_err("should fail");
        assert!(matches!(err, BridgeError::CapabilityUnavailable(_)));
    }

    #[test]
    fn rejects_foreign_handle_type() {
        let not_an_activity = String::from("something else");
        let err = resolve_activity(&not_an_activity).expect_err("should fail");
        assert!(matches!(err, BridgeError::CapabilityUnavailable(_)));
    }
}
