use crate::error::SessionError;
use crate::image_source::interface::ImageRef;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

pub trait ImageModel {
    /// Returns labels ordered by descending confidence.
    fn classify(&self, image_ref: &ImageRef) -> Result<Vec<Classification>, SessionError>;
}

pub trait ModelProvider {
    fn load(&self) -> Result<Arc<dyn ImageModel + Send + Sync>, SessionError>;
}
