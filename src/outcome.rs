//! Outcome classification - raw provider shapes to the result taxonomy.
//!
//! Every handshake settles into exactly one [`OperationResult`]. The mapping
//! depends only on the shape of the raw outcome, never on timing. Sign
//! classifications echo the authorization produced within the same session.

use serde::{Deserialize, Serialize};

use crate::provider::{RawAuthorization, RawOutcome, RawSignedMessage};

/// Terminal classification of one handshake. Triggers exactly one downstream
/// action: deliver on `Success`, log otherwise.
#[derive(Debug)]
pub enum OperationResult<T> {
    Success(T),
    /// Provider-reported error, malformed response, or user cancellation.
    Failure { diagnostic: String, cause: Option<String> },
    /// No compatible provider could be associated with. Distinct from an
    /// authorization being declined.
    NoWalletFound { diagnostic: String },
}

/// An account the provider authorized for this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedAccount {
    pub public_key: Vec<u8>,
    pub label: Option<String>,
}

/// Result of a successful authorize handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOutcome {
    pub auth_token: String,
    /// Ordered as the provider returned them. May be empty; callers that need
    /// an account treat an empty list as "no usable account".
    pub accounts: Vec<AuthorizedAccount>,
    pub wallet_uri_base: Option<String>,
}

impl AuthorizationOutcome {
    pub fn first_account(&self) -> Option<&AuthorizedAccount> {
        self.accounts.first()
    }
}

/// Result of a successful transaction-signing handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransactionsOutcome {
    /// Authorization obtained within the same handshake.
    pub authorization: AuthorizationOutcome,
    /// Ordered signed payloads. May be empty (degenerate success).
    pub signed_payloads: Vec<Vec<u8>>,
}

/// One signed message with its signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub message: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}

/// Result of a successful message-signing handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessagesOutcome {
    /// Authorization obtained within the same handshake.
    pub authorization: AuthorizationOutcome,
    pub messages: Vec<SignedMessage>,
}

/// Classify a raw authorization outcome.
///
/// A `Complete` response without an auth token is malformed and classifies as
/// `Failure`.
pub fn classify_authorization(
    raw: RawOutcome<RawAuthorization>,
) -> OperationResult<AuthorizationOutcome> {
    match raw {
        RawOutcome::Complete(auth) => match convert_authorization(auth) {
            Some(outcome) => OperationResult::Success(outcome),
            None => OperationResult::Failure {
                diagnostic: "malformed authorization: provider returned no auth token".into(),
                cause: None,
            },
        },
        RawOutcome::Failed { message, cause } => {
            OperationResult::Failure { diagnostic: message, cause }
        }
        RawOutcome::NoWallet { message } => OperationResult::NoWalletFound { diagnostic: message },
    }
}

/// Classify a raw transaction-signing outcome, echoing the session's
/// authorization.
pub fn classify_signed_transactions(
    authorization: AuthorizationOutcome,
    raw: RawOutcome<Vec<Vec<u8>>>,
) -> OperationResult<SignedTransactionsOutcome> {
    match raw {
        RawOutcome::Complete(signed_payloads) => {
            OperationResult::Success(SignedTransactionsOutcome { authorization, signed_payloads })
        }
        RawOutcome::Failed { message, cause } => {
            OperationResult::Failure { diagnostic: message, cause }
        }
        RawOutcome::NoWallet { message } => OperationResult::NoWalletFound { diagnostic: message },
    }
}

/// Classify a raw message-signing outcome, echoing the session's
/// authorization.
pub fn classify_signed_messages(
    authorization: AuthorizationOutcome,
    raw: RawOutcome<Vec<RawSignedMessage>>,
) -> OperationResult<SignedMessagesOutcome> {
    match raw {
        RawOutcome::Complete(raw_messages) => {
            let messages = raw_messages
                .into_iter()
                .map(|m| SignedMessage { message: m.message, signatures: m.signatures })
                .collect();
            OperationResult::Success(SignedMessagesOutcome { authorization, messages })
        }
        RawOutcome::Failed { message, cause } => {
            OperationResult::Failure { diagnostic: message, cause }
        }
        RawOutcome::NoWallet { message } => OperationResult::NoWalletFound { diagnostic: message },
    }
}

fn convert_authorization(raw: RawAuthorization) -> Option<AuthorizationOutcome> {
    let auth_token = raw.auth_token?;
    let accounts = raw
        .accounts
        .into_iter()
        .map(|a| AuthorizedAccount { public_key: a.public_key, label: a.label })
        .collect();
    Some(AuthorizationOutcome { auth_token, accounts, wallet_uri_base: raw.wallet_uri_base })
}
