use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq)]
pub enum UserInputEvent {
    /// Only the first file is used. An empty list clears the active image.
    FilesPicked(Vec<PathBuf>),
    UrlChanged(String),
    /// 0-based, most recent first.
    HistoryClicked(usize),
    ClassifyClicked,
    Closed,
}

pub trait UserInput {
    fn events(&self) -> Receiver<UserInputEvent>;
    fn clear_url_input(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
}
