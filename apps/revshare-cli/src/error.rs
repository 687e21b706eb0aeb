use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] revshare_csvs::CsvError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Tree construction failed: {0}")]
    Tree(#[from] revshare_merkle::TreeError),

    #[error("Account not present in the allocation list: {0}")]
    AccountNotFound(String),

    #[error("Proof does not verify against the given root")]
    ProofRejected,
}
