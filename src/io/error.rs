use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line} \"{content}\" is invalid")]
    MalformedLine { line: usize, content: String },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}
