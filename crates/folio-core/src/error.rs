use thiserror::Error;

use crate::section::SectionId;

/// Reasons the router refuses to come up.
///
/// The web front-end logs these and leaves the page as authored, so none of
/// them is fatal to the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no sections registered")]
    NoSections,

    #[error("section `{0}` registered more than once")]
    DuplicateSection(SectionId),
}

/// Contact form rejections. The `Display` text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}
