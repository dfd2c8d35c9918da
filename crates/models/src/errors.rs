use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown {kind} ordinal: {value}")]
    UnknownOrdinal { kind: &'static str, value: u8 },
}
