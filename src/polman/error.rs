use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolmanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to launch CLI: {0}")]
    Launch(String),

    #[error("CLI exited with status {code}: {stderr}")]
    Execution { stderr: String, code: i32 },

    #[error("Malformed JSON on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PolmanError>;
