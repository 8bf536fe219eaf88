use crate::session::render::View;
use std::error::Error;

pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces whatever is on screen with `view`.
    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
