//! Section and navigation-control model.
//!
//! Sections are declared once at page load and never destroyed. Their display
//! state is not stored here: the router derives it from its single current
//! section, which is what keeps exactly one section active.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a top-level content section (the element id in the page).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location fragment for this section, e.g. `#skills`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Active,
    Inactive,
}

impl DisplayState {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, DisplayState::Active)
    }
}

/// Static description of a section as registered with the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: SectionId,
    /// Replay the section's entry animation every time it becomes active.
    pub reentry: bool,
}

impl SectionSpec {
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            reentry: false,
        }
    }

    pub fn with_reentry(mut self) -> Self {
        self.reentry = true;
        self
    }
}

/// A clickable control pointing at a section. Several controls may share a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavControl {
    pub index: usize,
    pub target: SectionId,
}
