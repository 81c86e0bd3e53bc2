use anyhow::Result;
use log::{info, warn};
use spoken_time::app::Application;
use spoken_time::logging::init_logger;
use spoken_time::output::ConsoleOutput;
use spoken_time::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logger(&config.logging);
    if let Some(e) = load_error {
        warn!("Using default configuration: {:?}", e);
        eprintln!("Warning: could not load configuration ({}), using defaults", e);
    }

    info!("Starting British Spoken Time Converter");
    let mut app = Application::new(config, Box::new(ConsoleOutput));
    app.run().await?;
    info!("Application terminated");
    Ok(())
}
