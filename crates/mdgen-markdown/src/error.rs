use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while rendering a single document. All of them abort the
/// document in progress; there is no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no closing delimiter `{0}`")]
    UnclosedDelimiter(String),
    #[error("link or image is not closed")]
    UnclosedSection,
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node has no children")]
    MissingChildren,
    #[error("no level 1 heading found")]
    MissingTitle,
}
