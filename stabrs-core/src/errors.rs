use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpanSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing span: {0}")]
    SpanParseError(String),

    #[error("Corrupted file. 0 spans found in the file: {0}")]
    EmptySpanSet(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
