use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::session::render::View;
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    views: Arc<Mutex<Vec<View>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            views: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every view shown so far, oldest first.
    pub fn views(&self) -> Arc<Mutex<Vec<View>>> {
        self.views.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show({:?})", view))?;
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(view.clone());
        Ok(())
    }
}
