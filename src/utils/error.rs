use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(String),
    #[error("external_unavailable: {0}")]
    External(String),
    #[error("output: {0}")]
    Output(String),
}
