use thiserror::Error;

pub type SqResult<T> = Result<T, SqError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what} (value={value})")]
    InvalidArg { what: &'static str, value: f64 },
}
