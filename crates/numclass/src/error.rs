#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Network error: {0}")]
    Network(String),
}
