mod app;
mod application;
mod config;
mod domain;
mod ui;
mod utils;

use application::RequestCoordinator;
use config::FormConfig;
use iced::{window, Size};

fn main() -> iced::Result {
    let config = FormConfig::default();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    let (width, height) = config.window_size;
    tracing::info!(title = %config.window_title, "starting requester window");

    iced::application(
        move || app::RequesterApp::new(&config, RequestCoordinator::default()),
        app::update,
        app::view,
    )
    .title(app::title)
    .window(window::Settings {
        size: Size::new(width, height),
        position: window::Position::Centered,
        ..Default::default()
    })
    .run()
}
