pub mod insights;
pub mod resolver;

pub use insights::*;
pub use resolver::*;

use thiserror::Error;

use crate::assessment::TypologyId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Unknown category '{category}' for {typology}")]
    UnknownCategory {
        typology: TypologyId,
        category: String,
    },
    #[error("No pairing insight authored for {typology}: {a} + {b}")]
    MissingPairingData {
        typology: TypologyId,
        a: String,
        b: String,
    },
}

pub type Result<T> = std::result::Result<T, PairingError>;
