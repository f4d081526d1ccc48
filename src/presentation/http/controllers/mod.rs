#[allow(clippy::missing_errors_doc)]
pub mod articles;
#[allow(clippy::missing_errors_doc)]
pub mod comments;
