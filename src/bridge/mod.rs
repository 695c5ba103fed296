//! WalletBridge - the entry points callers use.
//!
//! Each call does one synchronous step (capability resolution and input
//! validation) on the caller's execution context, then hands off to an
//! independent background task and returns an acknowledgment string. The
//! acknowledgment is decoupled from the real outcome: handshake failures are
//! logged, not propagated back through these calls.
//!
//! # Per-call state machine
//!
//! ```text
//! Idle ──invoke──▶ ResolvingCapability ──fail──▶ CapabilityFailed (error string, no task)
//!                        │
//!                      ok▼
//!                   Dispatched (ack string) ──background──▶ HandshakeSettled
//!                                                            │
//!                                       Success ▶ deliver    │
//!                             Failure/NoWallet ▶ log only ◀──┘
//! ```
//!
//! Concurrent calls run as independent handshakes; each owns its own
//! [`HandshakeSession`]. The delivery sink is the only shared resource.
//! Entry points must be called from within a tokio runtime.

mod runners;

use std::any::Any;
use std::sync::Arc;

use crate::activity::{resolve_activity, ActivityCapability};
use crate::delivery::DeliverySink;
use crate::error::BridgeError;
use crate::identity::IdentityDescriptor;
use crate::provider::{Cluster, HandshakeProvider, HandshakeSession, OperationKind};

/// Bridge configuration. Higher layers construct this.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub identity: IdentityDescriptor,
    pub cluster: Cluster,
}

impl BridgeConfig {
    pub fn new(identity: IdentityDescriptor) -> Self {
        Self { identity, cluster: Cluster::default() }
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }
}

/// The asynchronous wallet-session bridge façade.
pub struct WalletBridge {
    config: BridgeConfig,
    provider: Arc<dyn HandshakeProvider>,
    sink: Arc<dyn DeliverySink>,
}

impl WalletBridge {
    pub fn new(
        config: BridgeConfig,
        provider: Arc<dyn HandshakeProvider>,
        sink: Arc<dyn DeliverySink>,
    ) -> Self {
        Self { config, provider, sink }
    }

    /// Request session authorization. On success the first authorized
    /// account's public key is delivered as base-58 text.
    pub fn authorize(&self, handle: &dyn Any) -> String {
        let kind = OperationKind::Authorize;
        let capability = match self.resolve(kind, handle) {
            Ok(c) => c,
            Err(reply) => return reply,
        };
        let session = self.session(kind, capability);
        let (provider, sink) = (self.provider.clone(), self.sink.clone());
        tokio::spawn(runners::run_authorize(provider, sink, session));
        ack(kind)
    }

    /// Request a signature over `transaction`. On success the first signed
    /// payload is delivered as base-58 text.
    pub fn sign_transaction(&self, handle: &dyn Any, transaction: &[u8]) -> String {
        let kind = OperationKind::SignTransaction;
        if transaction.is_empty() {
            return rejected(kind, &BridgeError::EmptyPayload("transaction"));
        }
        let capability = match self.resolve(kind, handle) {
            Ok(c) => c,
            Err(reply) => return reply,
        };
        let session = self.session(kind, capability);
        let (provider, sink) = (self.provider.clone(), self.sink.clone());
        tokio::spawn(runners::run_sign_transaction(provider, sink, session, transaction.to_vec()));
        ack(kind)
    }

    /// Request a signature over `message` for the first authorized account.
    /// On success the first signature is delivered as base-58 text.
    pub fn sign_message(&self, handle: &dyn Any, message: &[u8]) -> String {
        let kind = OperationKind::SignMessage;
        if message.is_empty() {
            return rejected(kind, &BridgeError::EmptyPayload("message"));
        }
        let capability = match self.resolve(kind, handle) {
            Ok(c) => c,
            Err(reply) => return reply,
        };
        let session = self.session(kind, capability);
        let (provider, sink) = (self.provider.clone(), self.sink.clone());
        tokio::spawn(runners::run_sign_message(provider, sink, session, message.to_vec()));
        ack(kind)
    }

    /// Synchronous capability check. On failure, no session is ever created
    /// and no background work starts.
    fn resolve(&self, kind: OperationKind, handle: &dyn Any) -> Result<ActivityCapability, String> {
        resolve_activity(handle).map_err(|e| rejected(kind, &e))
    }

    fn session(&self, kind: OperationKind, capability: ActivityCapability) -> HandshakeSession {
        tracing::info!(op = kind.as_str(), cluster = self.config.cluster.as_str(), "dispatching handshake");
        HandshakeSession::new(self.config.identity.clone(), self.config.cluster, kind, capability)
    }
}

fn ack(kind: OperationKind) -> String {
    format!("{} request dispatched", kind.as_str())
}

fn rejected(kind: OperationKind, err: &BridgeError) -> String {
    format!("{} request not dispatched: {}", kind.as_str(), err)
}
