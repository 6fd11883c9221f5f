//! Error type shared by the ports and theme parsing.
//!
//! None of these reach the page: the controller logs them and carries on
//! with the same no-op behavior as a missing element or preference.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unrecognized theme: {0:?}")]
    InvalidTheme(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("document error: {0}")]
    Document(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
}
