//! Modal dialog component
//!
//! Provides the modal overlay used for input errors, the export-before-
//! calculate warning, save failures, and save confirmations.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalType {
    /// Confirmation of a completed action (e.g. successful save)
    Notice { title: String, body: String },
    /// Recoverable misuse (e.g. export before any calculation)
    Warning { title: String, body: String },
    /// Failed action (invalid input, I/O failure)
    Error { title: String, body: String },
}

impl ModalType {
    pub fn notice(title: impl Into<String>, body: impl Into<String>) -> Self {
        ModalType::Notice {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        ModalType::Warning {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        ModalType::Error {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalDismissed)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal(modal_type: &ModalType) -> Element<'_, Message> {
    let (title, body, title_color) = match modal_type {
        ModalType::Notice { title, body } => (title, body, [0.2, 0.6, 0.2]),
        ModalType::Warning { title, body } => (title, body, [0.7, 0.5, 0.0]),
        ModalType::Error { title, body } => (title, body, [0.8, 0.2, 0.2]),
    };

    let buttons = row![button(text("OK").size(11))
        .on_press(Message::ModalDismissed)
        .padding(Padding::from([6, 16]))
        .style(button::primary),]
    .align_y(Alignment::Center);

    let content = column![
        text(title.as_str()).size(18).color(title_color),
        Space::new().height(12),
        text(body.as_str()).size(12),
        Space::new().height(20),
        container(buttons)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .width(Length::Fixed(400.0));

    let modal_box = container(content).padding(20).style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
