//! Wallet provider seam - the black-box asynchronous handshake.
//!
//! The provider protocol (association, authorization, transport, UI) lives
//! outside this crate. The bridge only needs its outcome shapes and the three
//! entry points below. Signing flows call `authorize` and then the relevant
//! sign entry point within the same [`HandshakeSession`], mirroring the
//! provider-mediated "authorize and sign in one flow" contract.
//!
//! No timeout is imposed on any call; handshake duration is entirely the
//! provider's responsibility.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCapability;
use crate::identity::IdentityDescriptor;

/// Target chain selector for authorization requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cluster {
    #[default]
    MainnetBeta,
    Testnet,
    Devnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
        }
    }
}

/// Which of the three operations a session was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Authorize,
    SignTransaction,
    SignMessage,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Authorize => "authorize",
            OperationKind::SignTransaction => "sign-transaction",
            OperationKind::SignMessage => "sign-message",
        }
    }
}

/// One in-flight provider negotiation. Created per dispatch, owned by its
/// background task, dropped when the handshake settles. Never reused.
#[derive(Debug, Clone)]
pub struct HandshakeSession {
    pub identity: IdentityDescriptor,
    pub cluster: Cluster,
    pub kind: OperationKind,
    pub capability: ActivityCapability,
}

impl HandshakeSession {
    pub fn new(
        identity: IdentityDescriptor,
        cluster: Cluster,
        kind: OperationKind,
        capability: ActivityCapability,
    ) -> Self {
        Self { identity, cluster, kind, capability }
    }
}

/// Raw result of one provider call, before classification.
///
/// These are the only shapes a provider can produce. User cancellation of the
/// platform UI surfaces as `Failed`, not as a distinct shape.
#[derive(Debug)]
pub enum RawOutcome<T> {
    /// The provider completed the request and returned a payload.
    Complete(T),
    /// The provider reported an error, or the handshake was cancelled.
    Failed { message: String, cause: Option<String> },
    /// No compatible wallet provider could be associated with at all.
    NoWallet { message: String },
}

/// Authorization payload as the provider hands it over. Fields the wire does
/// not guarantee are optional here; the classifier decides what is malformed.
#[derive(Debug, Clone)]
pub struct RawAuthorization {
    pub auth_token: Option<String>,
    pub accounts: Vec<RawAccount>,
    pub wallet_uri_base: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RawAccount {
    pub public_key: Vec<u8>,
    pub label: Option<String>,
}

/// One signed message: the original bytes plus the signatures produced for
/// each requested address.
#[derive(Debug, Clone)]
pub struct RawSignedMessage {
    pub message: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}

/// Asynchronous wallet-provider handshake.
///
/// Implementations wrap the actual provider protocol. The bridge treats every
/// call as opaque and classification happens purely on the returned shape.
#[async_trait]
pub trait HandshakeProvider: Send + Sync {
    /// Associate with a wallet and request authorization for the session's
    /// cluster under the session's identity.
    async fn authorize(&self, session: &HandshakeSession) -> RawOutcome<RawAuthorization>;

    /// Request signatures over raw transaction payloads within an authorized
    /// session.
    async fn sign_transactions(
        &self,
        session: &HandshakeSession,
        payloads: Vec<Vec<u8>>,
    ) -> RawOutcome<Vec<Vec<u8>>>;

    /// Request signatures over message bytes for `address` within an
    /// authorized session.
    async fn sign_messages(
        &self,
        session: &HandshakeSession,
        address: Vec<u8>,
        messages: Vec<Vec<u8>>,
    ) -> RawOutcome<Vec<RawSignedMessage>>;
}
