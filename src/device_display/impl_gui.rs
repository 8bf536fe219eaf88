use crate::device_display::interface::DeviceDisplay;
use crate::session::render::{View, LOADING_TEXT};
use crate::user_input::interface::{UserInput, UserInputEvent};
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

type EventSink = Arc<Mutex<Sender<UserInputEvent>>>;

fn send(sink: &EventSink, event: UserInputEvent) {
    // events sent before the session subscribes wait in the channel
    let _ = sink
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .send(event);
}

struct GuiWindow {
    view: Arc<Mutex<View>>,
    url_input: Arc<Mutex<String>>,
    file_input: String,
    sink: EventSink,
}

impl eframe::App for GuiWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self
            .view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            if view.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.heading(LOADING_TEXT);
                });
                return;
            }

            ui.heading(view.title.as_str());

            if let Some(status) = &view.status {
                ui.label(egui::RichText::new(status).color(egui::Color32::from_rgb(200, 80, 80)));
            }

            ui.horizontal(|ui| {
                ui.label("Image file");
                ui.text_edit_singleline(&mut self.file_input);
                if ui.button("Attach image").clicked() {
                    let path = self.file_input.trim();
                    let files = if path.is_empty() {
                        vec![]
                    } else {
                        vec![PathBuf::from(path)]
                    };
                    send(&self.sink, UserInputEvent::FilesPicked(files));
                }
            });

            ui.horizontal(|ui| {
                ui.label("or paste an image URL");
                let mut url = self.url_input.lock().unwrap_or_else(PoisonError::into_inner);
                let response = ui.text_edit_singleline(&mut *url);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send(&self.sink, UserInputEvent::UrlChanged(url.clone()));
                }
            });

            ui.separator();

            if let Some(image) = &view.active_image {
                ui.label(format!("Image: {}", image));
            }

            for row in &view.results {
                ui.horizontal(|ui| {
                    ui.strong(row.label.as_str());
                    ui.label(format!("Confidence: {}", row.confidence));
                    if row.best_guess {
                        ui.label(
                            egui::RichText::new("Best guess")
                                .color(egui::Color32::from_rgb(60, 160, 60)),
                        );
                    }
                });
            }

            if view.show_classify
                && ui
                    .add_enabled(view.can_classify, egui::Button::new("Classify image"))
                    .clicked()
            {
                send(&self.sink, UserInputEvent::ClassifyClicked);
            }

            if !view.history.is_empty() {
                ui.separator();
                ui.heading("Recent images");
                egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                    for (index, image) in view.history.iter().enumerate() {
                        if ui.link(image.as_str()).clicked() {
                            send(&self.sink, UserInputEvent::HistoryClicked(index));
                        }
                    }
                });
            }
        });

        // session updates arrive from another thread
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// An egui window that is both the display and the source of user input.
#[derive(Clone)]
pub struct DeviceDisplayGui {
    title: String,
    view: Arc<Mutex<View>>,
    url_input: Arc<Mutex<String>>,
    sink: EventSink,
    events: Arc<Mutex<Option<Receiver<UserInputEvent>>>>,
}

impl DeviceDisplayGui {
    pub fn new(title: String) -> Self {
        let (sender, receiver) = channel();
        Self {
            title,
            view: Arc::new(Mutex::new(View::default())),
            url_input: Arc::new(Mutex::new(String::new())),
            sink: Arc::new(Mutex::new(sender)),
            events: Arc::new(Mutex::new(Some(receiver))),
        }
    }

    /// Blocks until the window is closed. Must be called on the main thread.
    pub fn run_window(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 480.0]),
            ..Default::default()
        };

        let window = GuiWindow {
            view: self.view.clone(),
            url_input: self.url_input.clone(),
            file_input: String::new(),
            sink: self.sink.clone(),
        };

        eframe::run_native(&self.title, options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn close(&self) {
        send(&self.sink, UserInputEvent::Closed);
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view.lock().unwrap_or_else(PoisonError::into_inner) = view.clone();
        Ok(())
    }
}

impl UserInput for DeviceDisplayGui {
    fn events(&self) -> Receiver<UserInputEvent> {
        let pending = self
            .events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match pending {
            Some(receiver) => receiver,
            None => {
                // a later subscriber replaces the earlier one
                let (sender, receiver) = channel();
                *self.sink.lock().unwrap_or_else(PoisonError::into_inner) = sender;
                receiver
            }
        }
    }

    fn clear_url_input(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.url_input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
