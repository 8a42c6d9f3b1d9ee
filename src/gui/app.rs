use iced::widget::{button, column, container, image as iced_image, row, scrollable, text};
use iced::{Alignment, Application, Command, Element, Font, Length, Theme};
use image::RgbImage;
use rfd::{FileDialog, MessageDialog, MessageLevel};

use super::{AppState, Message};
use crate::detection::describe;
use crate::render;
use crate::session::DetectionOutcome;
use crate::summary::Summary;

pub struct YoloscopeApp {
    state: AppState,
}

impl Application for YoloscopeApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        (
            Self {
                state: AppState::default(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Yoloscope - Object Detection Viewer".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::LoadImage => self.handle_load_image(),
            Message::RunDetection => self.handle_run_detection(),
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        let controls = row![
            button(text("Load Image"))
                .on_press(Message::LoadImage)
                .padding([8, 16]),
            button(text("Run Detection"))
                .on_press(Message::RunDetection)
                .padding([8, 16]),
        ]
        .spacing(12);

        let image_pane = container(
            iced_image(self.state.display.clone())
                .width(Length::Fixed(300.0))
                .height(Length::Fixed(300.0)),
        )
        .padding(8)
        .style(iced::theme::Container::Box);

        let panes = row![
            pane("ALGORITHM", self.state.algorithm_text),
            pane("RESULTS", &self.state.results_text),
        ]
        .spacing(12);

        let content = column![
            text("Object Detection").size(24),
            controls,
            image_pane,
            text(&self.state.status).size(14),
            panes,
        ]
        .spacing(12)
        .padding(16)
        .align_items(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl YoloscopeApp {
    fn handle_load_image(&mut self) {
        let Some(path) = FileDialog::new()
            .set_title("Select an image")
            .add_filter("Image Files", &["jpg", "jpeg", "png", "bmp", "tiff", "webp"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("PNG", &["png"])
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            // Dialog dismissed; keep whatever is on screen.
            return;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match self.state.session.load_image(&path) {
            Ok((width, height)) => {
                if let Some(img) = self.state.session.current_image() {
                    self.state.display = image_handle(img);
                }
                self.state.status = format!("Loaded: {} ({}x{} source)", name, width, height);
                self.state.results_text = Summary::from_detections(&[]).render();
                log::info!("loaded {} ({}x{})", path.display(), width, height);
            }
            Err(error) => {
                log::error!("image load failed: {:#}", error);
                report_error("Image could not be loaded", &error);
            }
        }
    }

    fn handle_run_detection(&mut self) {
        if !self.state.session.has_image() {
            log::warn!("detection requested without an image");
            let _ = MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("No image")
                .set_description("Load an image before running detection.")
                .show();
            return;
        }

        // Find the label font before spending time on inference, so a
        // missing font never leaves half-updated results behind.
        if self.state.label_font.is_none() {
            match render::load_label_font() {
                Ok(font) => self.state.label_font = Some(font),
                Err(error) => {
                    log::error!("font lookup failed: {:#}", error);
                    self.state.status = String::from("Detection failed.");
                    report_error("Label font missing", &error);
                    return;
                }
            }
        }

        match self.state.session.run_detection() {
            Ok(DetectionOutcome::Completed) => {
                let summary = Summary::from_detections(self.state.session.detections());
                if let (Some(img), Some(font)) = (
                    self.state.session.current_image(),
                    &self.state.label_font,
                ) {
                    let annotated = render::annotate(img, self.state.session.detections(), font);
                    self.state.display = image_handle(&annotated);
                }
                self.state.results_text = summary.render();
                self.state.algorithm_text = describe::ALGORITHM_OVERVIEW;
                self.state.status = format!(
                    "Detection complete: {} objects found ({} distinct classes)",
                    summary.total, summary.distinct
                );
            }
            Ok(DetectionOutcome::NoImage) => {}
            Err(error) => {
                log::error!("detection failed: {:#}", error);
                self.state.status = String::from("Detection failed.");
                report_error("Detection failed", &error);
            }
        }
    }
}

/// Titled, scrollable monospace text pane.
fn pane(title: &str, body: &str) -> Element<'static, Message> {
    let content = column![
        text(title).size(14),
        scrollable(text(body).font(Font::MONOSPACE).size(12)).height(Length::Fill),
    ]
    .spacing(6);

    container(content)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(280.0))
        .padding(8)
        .style(iced::theme::Container::Box)
        .into()
}

fn image_handle(img: &RgbImage) -> iced_image::Handle {
    let (width, height) = img.dimensions();
    let rgba = image::DynamicImage::ImageRgb8(img.clone()).into_rgba8();
    iced_image::Handle::from_pixels(width, height, rgba.into_raw())
}

fn report_error(title: &str, error: &anyhow::Error) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(format!("{:#}", error))
        .show();
}
