//! Error types shared by the decision core.
//!
//! Only [`GatewayError`] is ever fatal. Ledger errors describe contract
//! violations that callers log and ignore.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown resource kind `{0}`")]
    UnknownResourceKind(String),

    #[error("invalid craft key `{kind}`: {detail}")]
    InvalidCraftKey { kind: String, detail: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("environment unreachable: {0}")]
    Unreachable(String),
}

/// Errors a leaf action may propagate past its own boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
