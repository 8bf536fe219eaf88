use clap::Parser;
use cli::Args;
use config::{Config, DisplayKind};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use image_source::impl_object_url::ImageSourceObjectUrl;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use model_provider::impl_fake::ModelProviderFake;
use session::main::SessionController;
use std::sync::{Arc, Mutex};
use user_input::impl_console::UserInputConsole;

mod cli;
mod config;
mod device_display;
mod error;
mod image_source;
mod library;
mod model_provider;
mod session;
mod user_input;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let config = Config::default().with_args(&args)?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let model_provider = Arc::new(ModelProviderFake::new(
        logger.clone(),
        config.fake_model.clone(),
    ));

    let image_source = Arc::new(ImageSourceObjectUrl::new(logger.clone()));

    match config.display {
        DisplayKind::Console => {
            let user_input = Arc::new(UserInputConsole::new(logger.clone()));

            let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

            let controller = SessionController::new(
                config,
                logger,
                model_provider,
                image_source,
                user_input,
                device_display,
            );

            controller.run()?;
        }
        DisplayKind::Gui => {
            let gui = DeviceDisplayGui::new(config.title.clone());

            let controller = SessionController::new(
                config,
                logger,
                model_provider,
                image_source,
                Arc::new(gui.clone()),
                Arc::new(Mutex::new(gui.clone())),
            );

            let session_thread = std::thread::spawn(move || controller.run());

            // the window owns the main thread until it is closed
            gui.run_window()?;
            gui.close();

            session_thread
                .join()
                .map_err(|_| "session thread panicked")??;
        }
    }

    Ok(())
}
