use clap::Parser;
use cli::Args;
use config::Config;
use display::impl_console::DisplayConsole;
use display::impl_gui::run_window;
use display::interface::Display;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use plant_doctor::main::PlantDoctor;
use std::sync::Arc;

mod cli;
mod config;
mod disease;
mod display;
mod error;
mod image_classifier;
mod library;
mod plant_doctor;
mod upload;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = Config::default().with_args(&args)?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let mut plant_doctor = match PlantDoctor::start(&config, logger.clone()) {
        Ok(plant_doctor) => plant_doctor,
        Err(e) => {
            logger.error(&e.to_string())?;
            return Err(e.into());
        }
    };

    match &args.image {
        Some(path) => {
            plant_doctor.upload_path(path);
            DisplayConsole::new().show(&plant_doctor.page())?;
        }
        None => run_window(&config, plant_doctor)?,
    }

    Ok(())
}
