use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::session::core::{ClassificationState, ModelLoadState, Session};
use std::sync::{Arc, Mutex, PoisonError};

pub const LOADING_TEXT: &str = "Loading model...";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct View {
    pub title: String,
    /// While set, nothing else is shown.
    pub loading: bool,
    pub status: Option<String>,
    pub active_image: Option<String>,
    pub results: Vec<ResultRow>,
    pub show_classify: bool,
    pub can_classify: bool,
    pub history: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub confidence: String,
    pub best_guess: bool,
}

pub fn view(config: &Config, session: &Session) -> View {
    if session.is_model_loading() {
        return View {
            title: config.title.clone(),
            loading: true,
            ..View::default()
        };
    }

    let status = match (&session.model_load_state, &session.classification) {
        (ModelLoadState::Failed(message), _) => Some(format!("Model unavailable: {}", message)),
        (_, ClassificationState::InFlight { .. }) => Some("Classifying...".to_string()),
        _ => session.last_error.as_ref().map(|error| error.to_string()),
    };

    View {
        title: config.title.clone(),
        loading: false,
        status,
        active_image: session
            .active_image_ref
            .as_ref()
            .map(|image_ref| image_ref.to_string()),
        results: session
            .results
            .iter()
            .map(|classification| ResultRow {
                label: classification.label.clone(),
                confidence: format!("{:.2}%", classification.confidence * 100.0),
                best_guess: session
                    .best_guess()
                    .is_some_and(|best| std::ptr::eq(best, classification)),
            })
            .collect(),
        show_classify: session.active_image_ref.is_some(),
        can_classify: session.can_classify(),
        history: session
            .history
            .iter()
            .map(|image_ref| image_ref.to_string())
            .collect(),
    }
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        config: Config,
    ) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .init()
    }

    pub fn render(&self, session: &Session) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let view = view(&self.config, session);
        self.device_display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .show(&view)
    }
}
