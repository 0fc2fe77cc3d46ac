use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write demo output: {0}")]
    Output(#[from] std::io::Error),
}

pub type PatternResult<T> = Result<T, PatternError>;
