// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid mesh options: {0}")]
    Config(String),
}
