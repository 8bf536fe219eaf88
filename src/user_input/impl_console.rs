use crate::library::logger::interface::Logger;
use crate::user_input::interface::{UserInput, UserInputEvent};
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub const USAGE: &str =
    "commands: file [path] | url [text] | history <n> | classify | quit";

pub struct UserInputConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl UserInputConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("user_input").with_namespace("console"),
        }
    }
}

/// Parses one line typed on the console. History positions are 1-based here.
pub fn parse_command(line: &str) -> Option<UserInputEvent> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command {
        "file" if argument.is_empty() => Some(UserInputEvent::FilesPicked(vec![])),
        "file" => Some(UserInputEvent::FilesPicked(vec![PathBuf::from(argument)])),
        "url" => Some(UserInputEvent::UrlChanged(argument.to_string())),
        "history" => argument
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .map(UserInputEvent::HistoryClicked),
        "classify" if argument.is_empty() => Some(UserInputEvent::ClassifyClicked),
        "quit" | "exit" if argument.is_empty() => Some(UserInputEvent::Closed),
        _ => None,
    }
}

impl UserInput for UserInputConsole {
    fn events(&self) -> Receiver<UserInputEvent> {
        let (sender, receiver) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let _ = logger.info(USAGE);
            let stdin = std::io::stdin();

            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Failed to read input: {}", e));
                        break;
                    }
                };

                if line.trim().is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Some(event) => {
                        let closed = event == UserInputEvent::Closed;
                        if sender.send(event).is_err() || closed {
                            return;
                        }
                    }
                    None => {
                        let _ = logger.info(&format!("Unrecognized input {:?}. {}", line, USAGE));
                    }
                }
            }

            // end of input closes the session
            let _ = sender.send(UserInputEvent::Closed);
        });

        receiver
    }

    fn clear_url_input(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        // nothing persists between console lines
        Ok(())
    }
}
