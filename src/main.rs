//! Vidfetch - Desktop frontend for a universal video download service
//!
//! A small GUI client that asks a resolver backend for video metadata,
//! lets the user pick a format, and opens the resolved download link in
//! the system browser.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use vidfetch::gui;
use vidfetch::utils::AppSettings;

#[derive(Parser)]
struct Args {
    /// Base URL of the resolver backend
    #[arg(long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::default();
    if let Some(server) = args.server {
        settings.server_url = server;
    }

    gui::VidfetchApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(760.0, 640.0),
            min_size: Some(iced::Size::new(640.0, 520.0)),
            ..Default::default()
        },
        flags: settings,
        antialiasing: true,
        ..iced::Settings::default()
    })?;

    Ok(())
}
