//! Input Panel (Left)
//!
//! Three numeric fields (beam length, load, load distance) and the two
//! action buttons (Calculate, Save Image). Fields hold raw text; parsing
//! happens only when Calculate is pressed.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let fields = column![
        text("Beam Parameters").size(14),
        Space::new().height(8),
        labeled_input("Beam Length (m):", &app.span_m, Message::SpanChanged),
        labeled_input("Load (N):", &app.load_n, Message::LoadChanged),
        labeled_input("Load Distance (m):", &app.position_m, Message::PositionChanged),
    ]
    .spacing(6);

    let actions = row![
        button(text("Calculate SFD & BMD").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
        button(text("Save Image").size(11))
            .on_press(Message::SaveImage)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(6);

    let hint = column![
        text("The load position must lie within [0, L].").size(11).color([0.5, 0.5, 0.5]),
        text("Save Image exports the current diagram as PNG or SVG.").size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    let panel = column![
        fields,
        Space::new().height(15),
        actions,
        Space::new().height(10),
        hint,
    ];

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(35))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
