//! Delivery channel - one-way forwarding to the external consumer.
//!
//! A settled handshake that produced a payload pushes exactly one message
//! here. One push = one message; pushes from concurrent handshakes are
//! independent and atomic, with no ordering guarantee across payload kinds.
//! The receiver side belongs to the external consumer, not to this crate.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A payload on its way out, already encoded to base-58 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Payload {
    PublicKey(String),
    SignedTransaction(String),
    SignedMessage(String),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::PublicKey(_) => "public-key",
            Payload::SignedTransaction(_) => "signed-transaction",
            Payload::SignedMessage(_) => "signed-message",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Payload::PublicKey(v) | Payload::SignedTransaction(v) | Payload::SignedMessage(v) => v,
        }
    }
}

/// Fire-and-forget forwarding target. Must tolerate concurrent delivery from
/// multiple settled handshakes.
pub trait DeliverySink: Send + Sync {
    fn deliver(&self, payload: Payload);
}

/// Channel-backed sink. The unbounded sender makes delivery non-blocking from
/// any task; the paired receiver is handed to the external consumer.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Payload>,
}

impl ChannelSink {
    /// Create a sink and the receiver for the consumer side.
    pub fn unbounded() -> (Self, mpsc::UnboundedReceiver<Payload>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl DeliverySink for ChannelSink {
    fn deliver(&self, payload: Payload) {
        let kind = payload.kind();
        if self.tx.send(payload).is_err() {
            // Consumer is gone; the payload has nowhere to go.
            tracing::warn!(kind, "delivery channel closed, payload dropped");
        } else {
            tracing::debug!(kind, "payload delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_one_message_per_push() {
        let (sink, mut rx) = ChannelSink::unbounded();
        sink.deliver(Payload::PublicKey("Ldp".into()));
        sink.deliver(Payload::SignedMessage("abc".into()));
        assert_eq!(rx.try_recv().unwrap(), Payload::PublicKey("Ldp".into()));
        assert_eq!(rx.try_recv().unwrap(), Payload::SignedMessage("abc".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_receiver_is_not_an_error() {
        let (sink, rx) = ChannelSink::unbounded();
        drop(rx);
        // Must not panic or block.
        sink.deliver(Payload::SignedTransaction("xyz".into()));
    }

    #[test]
    fn payload_json_shape_is_tagged_for_consumers() {
        let json = serde_json::to_value(Payload::PublicKey("Ldp".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "public-key", "value": "Ldp"}));
    }

    #[test]
    fn payload_kind_names() {
        assert_eq!(Payload::PublicKey(String::new()).kind(), "public-key");
        assert_eq!(Payload::SignedTransaction(String::new()).kind(), "signed-transaction");
        assert_eq!(Payload::SignedMessage(String::new()).kind(), "signed-message");
    }
}
