/// Widget rendering
///
/// `render()` is a pure projection of the widget state into a `ViewModel`;
/// `view()` lays the view model out with iced widgets.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::config::Config;
use crate::state::UploadClassifyWidget;
use crate::Message;

pub const TITLE: &str = "Plastic In Your Food?";
pub const CHOOSE_LABEL: &str = "Choose an Image";
pub const SUBMIT_LABEL: &str = "Find";
pub const SUBMIT_LOADING_LABEL: &str = "Finding...";

/// Preview area contents
#[derive(Debug, Clone)]
pub struct PreviewView {
    pub handle: Handle,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Product page shown after a successful classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub identifier: String,
    pub frame_src: String,
}

/// Everything the window shows, derived from the widget state
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub preview: Option<PreviewView>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

/// Project the widget state for display
pub fn render(widget: &UploadClassifyWidget, config: &Config) -> ViewModel {
    let loading = widget.is_loading();

    ViewModel {
        preview: widget.preview().map(|preview| {
            let (width, height) = preview.dimensions();
            PreviewView {
                handle: preview.handle().clone(),
                file_name: preview.file_name().to_string(),
                width,
                height,
            }
        }),
        submit_enabled: widget.can_submit(),
        submit_label: if loading { SUBMIT_LOADING_LABEL } else { SUBMIT_LABEL },
        loading,
        error: widget.error_message().map(str::to_string),
        result: widget.result().map(|result| ResultView {
            identifier: result.identifier().to_string(),
            frame_src: config.product_url(result.identifier()),
        }),
    }
}

/// Build the window contents
pub fn view<'a>(model: ViewModel) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![
        text(TITLE).size(32),
        button(CHOOSE_LABEL)
            .on_press(Message::ChooseImage)
            .padding(10),
    ]
    .spacing(20)
    .padding(30)
    .align_x(Alignment::Center);

    if let Some(error) = model.error {
        content = content.push(text(error).style(text::danger));
    }

    match model.preview {
        Some(preview) => {
            content = content.push(
                column![
                    image(preview.handle).height(Length::Fixed(256.0)),
                    text(format!("{} · {}x{}", preview.file_name, preview.width, preview.height))
                        .size(14),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            );
        }
        None => {
            content = content.push(text("…or drop an image onto this window").size(14));
        }
    }

    content = content.push(
        button(text(model.submit_label))
            .on_press_maybe(model.submit_enabled.then_some(Message::Submit))
            .padding(10),
    );

    if let Some(result) = model.result {
        let panel = column![
            text("Product Page").size(20),
            text(format!("Product: {}", result.identifier)),
            row![
                text_input("", &result.frame_src).width(Length::Fill),
                button("Copy link").on_press(Message::CopyProductLink),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        ]
        .spacing(10);

        content = content.push(
            container(panel)
                .padding(15)
                .width(Length::Fill)
                .style(container::rounded_box),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
