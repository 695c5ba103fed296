//! Operation runners - one background task per dispatched handshake.
//!
//! Each runner owns its session, awaits the provider, classifies the raw
//! outcome, and on success encodes the extracted bytes and pushes them to the
//! sink. `Failure` and `NoWalletFound` never touch the sink.

use std::sync::Arc;

use crate::codec::to_base58;
use crate::delivery::{DeliverySink, Payload};
use crate::error::BridgeError;
use crate::outcome::{
    classify_authorization, classify_signed_messages, classify_signed_transactions,
    AuthorizationOutcome, OperationResult,
};
use crate::provider::{HandshakeProvider, HandshakeSession};

pub(crate) async fn run_authorize(
    provider: Arc<dyn HandshakeProvider>,
    sink: Arc<dyn DeliverySink>,
    session: HandshakeSession,
) {
    match classify_authorization(provider.authorize(&session).await) {
        OperationResult::Success(auth) => {
            log_authorization(&auth);
            match auth.first_account() {
                Some(account) => {
                    sink.deliver(Payload::PublicKey(to_base58(&account.public_key)));
                }
                None => tracing::warn!(
                    op = session.kind.as_str(),
                    "authorization carried zero accounts, nothing to deliver"
                ),
            }
        }
        OperationResult::Failure { diagnostic, cause } => {
            log_failure(&session, &diagnostic, cause.as_deref())
        }
        OperationResult::NoWalletFound { diagnostic } => log_no_wallet(&session, &diagnostic),
    }
}

pub(crate) async fn run_sign_transaction(
    provider: Arc<dyn HandshakeProvider>,
    sink: Arc<dyn DeliverySink>,
    session: HandshakeSession,
    transaction: Vec<u8>,
) {
    // One provider-mediated flow: authorize, then sign, in the same session.
    let auth = match classify_authorization(provider.authorize(&session).await) {
        OperationResult::Success(auth) => auth,
        OperationResult::Failure { diagnostic, cause } => {
            return log_failure(&session, &diagnostic, cause.as_deref());
        }
        OperationResult::NoWalletFound { diagnostic } => {
            return log_no_wallet(&session, &diagnostic);
        }
    };
    log_authorization(&auth);

    let raw = provider.sign_transactions(&session, vec![transaction]).await;
    match classify_signed_transactions(auth, raw) {
        OperationResult::Success(outcome) => match outcome.signed_payloads.first() {
            Some(signed) => sink.deliver(Payload::SignedTransaction(to_base58(signed))),
            None => tracing::warn!(
                op = session.kind.as_str(),
                "provider signed zero payloads, nothing to deliver"
            ),
        },
        OperationResult::Failure { diagnostic, cause } => {
            log_failure(&session, &diagnostic, cause.as_deref())
        }
        OperationResult::NoWalletFound { diagnostic } => log_no_wallet(&session, &diagnostic),
    }
}

pub(crate) async fn run_sign_message(
    provider: Arc<dyn HandshakeProvider>,
    sink: Arc<dyn DeliverySink>,
    session: HandshakeSession,
    message: Vec<u8>,
) {
    let auth = match classify_authorization(provider.authorize(&session).await) {
        OperationResult::Success(auth) => auth,
        OperationResult::Failure { diagnostic, cause } => {
            return log_failure(&session, &diagnostic, cause.as_deref());
        }
        OperationResult::NoWalletFound { diagnostic } => {
            return log_no_wallet(&session, &diagnostic);
        }
    };
    log_authorization(&auth);

    // Local precondition: signing is requested for the first authorized
    // account. Without one the handshake aborts before any sign request.
    let Some(account) = auth.first_account() else {
        tracing::error!(
            op = session.kind.as_str(),
            "handshake aborted: {}",
            BridgeError::NoAuthorizedAccount
        );
        return;
    };
    let address = account.public_key.clone();

    let raw = provider.sign_messages(&session, address, vec![message]).await;
    match classify_signed_messages(auth, raw) {
        OperationResult::Success(outcome) => {
            let first_signature = outcome.messages.first().and_then(|m| m.signatures.first());
            match first_signature {
                Some(signature) => sink.deliver(Payload::SignedMessage(to_base58(signature))),
                None => tracing::warn!(
                    op = session.kind.as_str(),
                    "provider signed zero messages, nothing to deliver"
                ),
            }
        }
        OperationResult::Failure { diagnostic, cause } => {
            log_failure(&session, &diagnostic, cause.as_deref())
        }
        OperationResult::NoWalletFound { diagnostic } => log_no_wallet(&session, &diagnostic),
    }
}

fn log_authorization(auth: &AuthorizationOutcome) {
    // Token and wallet URI base are recorded but not yet forwarded.
    tracing::info!(
        auth_token = %auth.auth_token,
        accounts = auth.accounts.len(),
        wallet_uri_base = auth.wallet_uri_base.as_deref(),
        "session authorized"
    );
}

fn log_failure(session: &HandshakeSession, diagnostic: &str, cause: Option<&str>) {
    tracing::error!(op = session.kind.as_str(), cause, "handshake failed: {diagnostic}");
}

fn log_no_wallet(session: &HandshakeSession, diagnostic: &str) {
    tracing::warn!(op = session.kind.as_str(), "no compatible wallet: {diagnostic}");
}
