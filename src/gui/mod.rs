mod app;
mod message;
mod state;

pub use app::YoloscopeApp;
pub use message::Message;
pub use state::AppState;

use iced::window;
use iced::{Application, Settings, Size};

/// Open the viewer window and hand control to the event loop.
pub fn run() -> iced::Result {
    YoloscopeApp::run(Settings {
        window: window::Settings {
            size: Size::new(860.0, 800.0),
            ..window::Settings::default()
        },
        ..Settings::default()
    })
}
