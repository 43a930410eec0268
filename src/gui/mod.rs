mod app;
mod message;
mod widgets;

pub use app::EdgelabApp;
pub use message::Message;

use crate::EditorConfig;

/// Open the editor window and block until it is closed
pub fn run(config: EditorConfig) -> iced::Result {
    iced::application(
        move || EdgelabApp::new(config.clone()),
        EdgelabApp::update,
        EdgelabApp::view,
    )
    .title("Image Processing Tool")
    .run()
}
