use crate::user_input::interface::{UserInput, UserInputEvent};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

/// User input driven by the test through `send`.
pub struct UserInputFake {
    sender: Sender<UserInputEvent>,
    receiver: Mutex<Option<Receiver<UserInputEvent>>>,
    url_input_clears: AtomicUsize,
}

impl UserInputFake {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
            url_input_clears: AtomicUsize::new(0),
        }
    }

    pub fn send(&self, event: UserInputEvent) {
        self.sender.send(event).unwrap();
    }

    pub fn url_input_clears(&self) -> usize {
        self.url_input_clears.load(Ordering::SeqCst)
    }
}

impl UserInput for UserInputFake {
    fn events(&self) -> Receiver<UserInputEvent> {
        self.receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .expect("events() subscribed twice")
    }

    fn clear_url_input(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.url_input_clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
