use crate::error::SessionError;
use std::fmt;
use std::path::Path;

/// Opaque string that identifies an image for display and classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait ImageSourceResolver {
    /// Registers a local file and hands back a transient reference to it.
    /// The file is not inspected.
    fn resolve_file(&self, path: &Path) -> ImageRef;

    /// Typed input is used verbatim.
    fn resolve_text(&self, text: &str) -> ImageRef;

    /// Releases a reference produced by `resolve_file`. References that were
    /// never transient are accepted and ignored.
    fn release(&self, image_ref: &ImageRef) -> Result<(), SessionError>;
}
