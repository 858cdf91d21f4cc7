//! Toolbar component
//!
//! Application header with the title and the theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("BeamPlot").size(28),
        text("Simply Supported Beam - SFD & BMD").size(14).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
