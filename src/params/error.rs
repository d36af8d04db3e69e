//! Parameter lookup errors.

use thiserror::Error;

/// Errors raised while resolving a vehicle variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Unknown vehicle variant '{0}'")]
    UnknownVariant(String),
}
