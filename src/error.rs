use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("duration \"{input}\" is missing the trailing \"s\" suffix")]
    MissingSuffix { input: String },

    #[error("duration \"{input}\" has a non-numeric seconds value: {source}")]
    InvalidSeconds {
        input: String,
        source: ParseFloatError,
    },

    #[error("{typename} may set at most one of \"{oneof}\" ({fields}), but {set} were set")]
    OneOfViolation {
        typename: String,
        oneof: String,
        /// Comma-joined member list of the oneof group.
        fields: String,
        /// Comma-joined names of the members that were actually present.
        set: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
