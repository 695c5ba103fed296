//! Walletbridge: asynchronous wallet-session bridge. Handshake, classify, deliver.
//!
//! # Architecture
//!
//! ```text
//! WalletBridge (entry points)
//!   │
//!   ├── resolve_activity (sync; fails fast, no background work)
//!   │
//!   ├── acknowledgment string returned to caller (sync)
//!   │
//!   └── tokio::spawn ──▶ runner (one per call)
//!         │
//!         ├── HandshakeProvider (black-box async negotiation)
//!         │
//!         ├── classify_* ──▶ OperationResult
//!         │
//!         └── Success ──▶ base-58 ──▶ DeliverySink ──▶ external consumer
//!             Failure / NoWalletFound ──▶ tracing only
//! ```
//!
//! # Operations
//!
//! | Call | Delivers on success |
//! |------|---------------------|
//! | `authorize` | first authorized account's public key |
//! | `sign_transaction` | first signed transaction payload |
//! | `sign_message` | first signature of the first message |
//!
//! Every entry point returns immediately with an acknowledgment string; the
//! real outcome settles in the background and reaches the consumer through
//! the one-way delivery channel. See [`bridge::WalletBridge`].
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use walletbridge::{
//!     ActivitySender, BridgeConfig, ChannelSink, Cluster, HostActivity,
//!     IdentityDescriptor, WalletBridge,
//! };
//!
//! let identity = IdentityDescriptor::new("My dApp", "https://mydapp.example", "favicon.ico");
//! let (sink, receiver) = ChannelSink::unbounded();
//! let bridge = WalletBridge::new(
//!     BridgeConfig::new(identity).with_cluster(Cluster::MainnetBeta),
//!     provider, // Arc<dyn HandshakeProvider>
//!     Arc::new(sink),
//! );
//!
//! let activity = HostActivity::with_sender(ActivitySender::new("main"));
//! let ack = bridge.authorize(&activity);
//! // receiver yields Payload::PublicKey(base58) once the handshake settles
//! ```

pub mod activity;
pub mod bridge;
pub mod codec;
pub mod delivery;
pub mod error;
pub mod identity;
pub mod logging;
pub mod outcome;
pub mod provider;

pub use activity::{resolve_activity, ActivityCapability, ActivitySender, HostActivity};
pub use bridge::{BridgeConfig, WalletBridge};
pub use delivery::{ChannelSink, DeliverySink, Payload};
pub use error::BridgeError;
pub use identity::IdentityDescriptor;
pub use outcome::{
    AuthorizationOutcome, AuthorizedAccount, OperationResult, SignedMessage,
    SignedMessagesOutcome, SignedTransactionsOutcome,
};
pub use provider::{
    Cluster, HandshakeProvider, HandshakeSession, OperationKind, RawAccount, RawAuthorization,
    RawOutcome, RawSignedMessage,
};
