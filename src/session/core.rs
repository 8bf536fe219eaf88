use crate::error::SessionError;
use crate::image_source::interface::ImageRef;
use crate::model_provider::interface::{Classification, ImageModel};
use std::fmt;
use std::sync::Arc;

/// Handle to a loaded model. Equality is identity.
#[derive(Clone)]
pub struct LoadedModel(Arc<dyn ImageModel + Send + Sync>);

impl LoadedModel {
    pub fn new(model: Arc<dyn ImageModel + Send + Sync>) -> Self {
        Self(model)
    }

    pub fn classify(&self, image_ref: &ImageRef) -> Result<Vec<Classification>, SessionError> {
        self.0.classify(image_ref)
    }
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoadedModel")
    }
}

impl PartialEq for LoadedModel {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModelLoadState {
    #[default]
    NotStarted,
    Loading,
    Ready(LoadedModel),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ClassificationState {
    #[default]
    Idle,
    InFlight { image_ref: ImageRef },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub model_load_state: ModelLoadState,
    pub active_image_ref: Option<ImageRef>,
    pub results: Vec<Classification>,
    /// Most recent first.
    pub history: Vec<ImageRef>,
    pub classification: ClassificationState,
    pub last_error: Option<SessionError>,
    pub closed: bool,
}

impl Session {
    pub fn is_model_loading(&self) -> bool {
        matches!(
            self.model_load_state,
            ModelLoadState::NotStarted | ModelLoadState::Loading
        )
    }

    pub fn can_classify(&self) -> bool {
        matches!(self.model_load_state, ModelLoadState::Ready(_))
            && self.active_image_ref.is_some()
            && self.classification == ClassificationState::Idle
    }

    pub fn best_guess(&self) -> Option<&Classification> {
        self.results.first()
    }
}

#[derive(Debug)]
pub enum Msg {
    ModelLoadDone(Result<LoadedModel, SessionError>),
    /// `None` when the file selection was empty.
    FileSelected(Option<ImageRef>),
    UrlEntered(ImageRef),
    HistorySelected(usize),
    ClassifyRequested,
    ClassifyDone {
        image_ref: ImageRef,
        result: Result<Vec<Classification>, SessionError>,
    },
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToUserInput,
    LoadModel,
    ClassifyImage {
        model: LoadedModel,
        image_ref: ImageRef,
    },
    ClearUrlInput,
    ReportError(SessionError),
    ReleaseImageRefs(Vec<ImageRef>),
}

pub fn init() -> (Session, Vec<Effect>) {
    (
        Session {
            model_load_state: ModelLoadState::Loading,
            ..Session::default()
        },
        vec![Effect::SubscribeToUserInput, Effect::LoadModel],
    )
}

pub fn transition(session: Session, msg: Msg) -> (Session, Vec<Effect>) {
    if session.closed {
        return (session, vec![]);
    }

    match msg {
        Msg::ModelLoadDone(result) => transition_model_load_done(session, result),

        Msg::FileSelected(image_ref) => (record_if_present(select(session, image_ref)), vec![]),

        // an emptied text field means no image, same as an empty file selection
        Msg::UrlEntered(image_ref) => {
            let image_ref = Some(image_ref).filter(|image_ref| !image_ref.is_empty());
            (record_if_present(select(session, image_ref)), vec![])
        }

        // re-picking the active image is not a change, so its results stay
        Msg::HistorySelected(index) => match session.history.get(index).cloned() {
            Some(image_ref) if session.active_image_ref.as_ref() != Some(&image_ref) => {
                (select(session, Some(image_ref)), vec![])
            }
            _ => (session, vec![]),
        },

        Msg::ClassifyRequested => transition_classify_requested(session),

        Msg::ClassifyDone { image_ref, result } => {
            transition_classify_done(session, image_ref, result)
        }

        Msg::Closed => transition_closed(session),
    }
}

fn transition_model_load_done(
    mut session: Session,
    result: Result<LoadedModel, SessionError>,
) -> (Session, Vec<Effect>) {
    if session.model_load_state != ModelLoadState::Loading {
        return (session, vec![]);
    }

    match result {
        Ok(model) => {
            session.model_load_state = ModelLoadState::Ready(model);
            (session, vec![])
        }
        Err(error) => {
            session.model_load_state = ModelLoadState::Failed(error.to_string());
            session.last_error = Some(error.clone());
            (session, vec![Effect::ReportError(error)])
        }
    }
}

fn transition_classify_requested(mut session: Session) -> (Session, Vec<Effect>) {
    if !session.can_classify() {
        return (session, vec![]);
    }

    let (model, image_ref) = match (&session.model_load_state, &session.active_image_ref) {
        (ModelLoadState::Ready(model), Some(image_ref)) => (model.clone(), image_ref.clone()),
        _ => return (session, vec![]),
    };

    session.classification = ClassificationState::InFlight {
        image_ref: image_ref.clone(),
    };

    (
        session,
        vec![
            Effect::ClearUrlInput,
            Effect::ClassifyImage { model, image_ref },
        ],
    )
}

fn transition_classify_done(
    mut session: Session,
    image_ref: ImageRef,
    result: Result<Vec<Classification>, SessionError>,
) -> (Session, Vec<Effect>) {
    let in_flight_for_image = matches!(
        &session.classification,
        ClassificationState::InFlight { image_ref: pending } if *pending == image_ref
    );
    if !in_flight_for_image {
        return (session, vec![]);
    }

    session.classification = ClassificationState::Idle;

    match result {
        Ok(results) => {
            // results for an image that is no longer active are dropped
            if session.active_image_ref.as_ref() == Some(&image_ref) {
                session.results = results;
                session.last_error = None;
            }
            (session, vec![])
        }
        Err(error) => {
            session.last_error = Some(error.clone());
            (session, vec![Effect::ReportError(error)])
        }
    }
}

fn transition_closed(mut session: Session) -> (Session, Vec<Effect>) {
    session.closed = true;

    let mut image_refs: Vec<ImageRef> = Vec::new();
    for image_ref in session.active_image_ref.iter().chain(session.history.iter()) {
        if !image_refs.contains(image_ref) {
            image_refs.push(image_ref.clone());
        }
    }

    if image_refs.is_empty() {
        (session, vec![])
    } else {
        (session, vec![Effect::ReleaseImageRefs(image_refs)])
    }
}

/// Changes the active image. Results never outlive the image they describe.
fn select(mut session: Session, image_ref: Option<ImageRef>) -> Session {
    session.active_image_ref = image_ref;
    session.results.clear();
    session
}

fn record_if_present(mut session: Session) -> Session {
    if let Some(image_ref) = &session.active_image_ref {
        session.history.insert(0, image_ref.clone());
    }
    session
}
