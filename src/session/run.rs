use super::{core::Effect, main::SessionController};
use crate::session::core::{init, transition, Msg, Session};
use std::error::Error;
use std::sync::PoisonError;

impl SessionController {
    /// Runs the event loop until the session is closed and returns its final state.
    pub fn run(&self) -> Result<Session, Box<dyn Error + Send + Sync>> {
        self.render.init()?;

        let (mut current_session, effects) = init();
        self.render.render(&current_session)?;
        self.execute_effects(effects);

        loop {
            let msg = self.recv()?;

            let _ = self.logger.info(&format!(
                "\nold session:\n\t{:?}\n\nmsg:\n\t{:?}",
                current_session, msg,
            ));

            let (new_session, effects) = transition(current_session, msg);

            let _ = self.logger.info(&format!(
                "\nnew session:\n\t{:?}\n\neffects:\n\t{:?}",
                new_session, effects
            ));

            current_session = new_session;
            self.render.render(&current_session)?;

            if current_session.closed {
                // the process may exit right after this returns
                for effect in effects {
                    self.execute_effect(effect);
                }
                return Ok(current_session);
            }

            self.execute_effects(effects);
        }
    }

    fn recv(&self) -> Result<Msg, Box<dyn Error + Send + Sync>> {
        let msg = self
            .event_receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv()?;
        Ok(msg)
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
