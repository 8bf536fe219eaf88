use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::image_source::interface::ImageSourceResolver;
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::ModelProvider;
use crate::session::core::Msg;
use crate::session::render::Render;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SessionController {
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub model_provider: Arc<dyn ModelProvider + Send + Sync>,
    pub image_source: Arc<dyn ImageSourceResolver + Send + Sync>,
    pub user_input: Arc<dyn UserInput + Send + Sync>,
    pub render: Render,
}

impl SessionController {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_provider: Arc<dyn ModelProvider + Send + Sync>,
        image_source: Arc<dyn ImageSourceResolver + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            render: Render::new(device_display, config),
            logger: logger.with_namespace("session"),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            model_provider,
            image_source,
            user_input,
        }
    }

    pub fn send(&self, msg: Msg) {
        if self.event_sender.send(msg).is_err() {
            let _ = self.logger.error("Session event loop is gone");
        }
    }
}
