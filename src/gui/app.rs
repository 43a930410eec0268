use iced::{
    Element, Length, Task,
    widget::{button, column, container, image::Handle, pick_list, row, slider, text},
};
use image::RgbaImage;
use rfd::AsyncFileDialog;
use tracing::error;

use super::Message;
use super::widgets::{labeled, preview_pane};
use crate::params::MAX_KERNEL_SIZE;
use crate::{
    EdgeKind, EditorConfig, EditorError, EditorSession, FilterKind, Outcome, ProcessingParams,
};

/// Iced state: the session plus the widget values and cached preview handles
pub struct EdgelabApp {
    session: EditorSession,
    params: ProcessingParams,
    original_preview: Option<Handle>,
    processed_preview: Option<Handle>,
    error: Option<String>,
}

impl EdgelabApp {
    pub fn new(config: EditorConfig) -> (Self, Task<Message>) {
        (
            Self {
                session: EditorSession::new(config),
                params: ProcessingParams::default(),
                original_preview: None,
                processed_preview: None,
                error: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoadPressed => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Load Image")
                    .add_filter("Images", &["jpg", "jpeg", "png"])
                    .pick_file(),
                |handle| Message::LoadPicked(handle.map(|h| h.path().to_path_buf())),
            ),
            Message::LoadPicked(Some(path)) => {
                let result = self.session.load(&path);
                self.handle_result(result);
                Task::none()
            }
            Message::SavePressed if self.session.is_loaded() => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Save Image")
                    .add_filter("JPEG", &["jpg"])
                    .set_file_name("processed.jpg")
                    .save_file(),
                |handle| Message::SavePicked(handle.map(|h| h.path().to_path_buf())),
            ),
            Message::SavePicked(Some(mut path)) => {
                if path.extension().is_none() {
                    path.set_extension("jpg");
                }
                let result = self.session.save(&path);
                self.handle_result(result);
                Task::none()
            }
            Message::LoadPicked(None) | Message::SavePicked(None) | Message::SavePressed => {
                Task::none()
            }
            Message::ResetPressed => {
                let outcome = self.session.reset();
                self.handle_result(Ok(outcome));
                Task::none()
            }
            Message::UndoPressed => {
                let outcome = self.session.undo();
                self.handle_result(Ok(outcome));
                Task::none()
            }
            Message::ApplyPressed => {
                let result = self.session.apply(&self.params);
                self.handle_result(result);
                Task::none()
            }
            Message::FilterSelected(filter) => {
                self.params.filter = filter;
                Task::none()
            }
            Message::EdgeSelected(edge) => {
                self.params.edge = edge;
                Task::none()
            }
            Message::KernelSizeChanged(k) => {
                self.params.kernel_size = k;
                Task::none()
            }
            Message::CannyLowChanged(t) => {
                self.params.canny_low = t;
                Task::none()
            }
            Message::CannyHighChanged(t) => {
                self.params.canny_high = t;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let config = self.session.config();

        let actions = row![
            button("Load Image").on_press(Message::LoadPressed),
            button("Save Image").on_press(Message::SavePressed),
            button("Reset").on_press(Message::ResetPressed),
            button("Undo").on_press(Message::UndoPressed),
        ]
        .spacing(10);

        let controls = column![
            labeled(
                "Filter:",
                pick_list(
                    FilterKind::ALL,
                    Some(self.params.filter),
                    Message::FilterSelected
                ),
            ),
            labeled(
                "Edge Detection:",
                pick_list(EdgeKind::ALL, Some(self.params.edge), Message::EdgeSelected),
            ),
            labeled(
                "Kernel Size",
                row![
                    slider(
                        1..=MAX_KERNEL_SIZE,
                        self.params.kernel_size,
                        Message::KernelSizeChanged
                    )
                    .width(Length::Fixed(200.0)),
                    text(self.params.kernel_size.to_string()),
                ]
                .spacing(10),
            ),
            labeled(
                "Canny Threshold 1",
                row![
                    slider(0..=u8::MAX, self.params.canny_low, Message::CannyLowChanged)
                        .width(Length::Fixed(200.0)),
                    text(self.params.canny_low.to_string()),
                ]
                .spacing(10),
            ),
            labeled(
                "Canny Threshold 2",
                row![
                    slider(0..=u8::MAX, self.params.canny_high, Message::CannyHighChanged)
                        .width(Length::Fixed(200.0)),
                    text(self.params.canny_high.to_string()),
                ]
                .spacing(10),
            ),
            button("Apply").on_press(Message::ApplyPressed),
        ]
        .spacing(8);

        let previews = row![
            preview_pane(
                "Original",
                self.original_preview.as_ref(),
                config.preview_width,
                config.preview_height,
            ),
            preview_pane(
                "Processed",
                self.processed_preview.as_ref(),
                config.preview_width,
                config.preview_height,
            ),
        ]
        .spacing(10);

        let status = match &self.error {
            Some(message) => text(message.clone()),
            None => text(format!("Undo steps: {}", self.session.undo_depth())),
        };

        let content = column![actions, controls, previews, status]
            .spacing(15)
            .padding(20);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn handle_result(&mut self, result: Result<Outcome, EditorError>) {
        match result {
            Ok(Outcome::Changed) => {
                self.error = None;
                self.refresh_previews();
            }
            Ok(Outcome::NoOp) => {}
            Err(e) => {
                error!("{e:#}");
                self.error = Some(e.to_string());
            }
        }
    }

    fn refresh_previews(&mut self) {
        let preview = self.session.render_preview();
        self.original_preview = preview.original.map(to_handle);
        self.processed_preview = preview.processed.map(to_handle);
    }
}

fn to_handle(img: RgbaImage) -> Handle {
    let (width, height) = img.dimensions();
    Handle::from_rgba(width, height, img.into_raw())
}
