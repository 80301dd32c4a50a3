use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClumpError {
    #[error("failed to load/read/write file: {0:?}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse the fasta/fastq file: {0}")]
    Needletail(#[from] needletail::errors::ParseError),
    #[error("Clump error: {0}")]
    Message(String),
}

pub type ClumpResult<T> = StdResult<T, ClumpError>;

#[doc(hidden)]
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => { $crate::errors::ClumpError::Message(format!($($arg)*)) }
}
