use thiserror::Error;

pub type HlResult<T> = Result<T, HlError>;

#[derive(Error, Debug)]
pub enum HlError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
