use super::main::SessionController;
use crate::session::core::{Effect, LoadedModel, Msg};
use crate::user_input::interface::UserInputEvent;

impl SessionController {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToUserInput => {
                let events = self.user_input.events();
                for event in events.iter() {
                    let msg = self.to_msg(event);
                    if self.event_sender.send(msg).is_err() {
                        break;
                    }
                }
            }
            Effect::LoadModel => {
                let loaded = self.model_provider.load().map(LoadedModel::new);
                self.send(Msg::ModelLoadDone(loaded));
            }
            Effect::ClassifyImage { model, image_ref } => {
                let result = model.classify(&image_ref);
                self.send(Msg::ClassifyDone { image_ref, result });
            }
            Effect::ClearUrlInput => {
                if let Err(e) = self.user_input.clear_url_input() {
                    let _ = self
                        .logger
                        .error(&format!("Failed to clear URL input: {}", e));
                }
            }
            Effect::ReportError(error) => {
                let _ = self.logger.error(&error.to_string());
            }
            Effect::ReleaseImageRefs(image_refs) => {
                for image_ref in image_refs {
                    if let Err(e) = self.image_source.release(&image_ref) {
                        let _ = self.logger.error(&e.to_string());
                    }
                }
            }
        }
    }

    fn to_msg(&self, event: UserInputEvent) -> Msg {
        match event {
            UserInputEvent::FilesPicked(files) => Msg::FileSelected(
                files
                    .first()
                    .map(|path| self.image_source.resolve_file(path)),
            ),
            UserInputEvent::UrlChanged(text) => {
                Msg::UrlEntered(self.image_source.resolve_text(&text))
            }
            UserInputEvent::HistoryClicked(index) => Msg::HistorySelected(index),
            UserInputEvent::ClassifyClicked => Msg::ClassifyRequested,
            UserInputEvent::Closed => Msg::Closed,
        }
    }
}
