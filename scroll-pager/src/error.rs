use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerError {
    #[error("segment index {index} out of range (segment count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = core::result::Result<T, PagerError>;
