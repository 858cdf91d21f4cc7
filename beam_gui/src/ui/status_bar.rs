//! Status Bar (Bottom)
//!
//! Displays the inputs of the last successful calculation and the most
//! recent status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use beam_core::beam::BeamSolution;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    solution: Option<&'a BeamSolution>,
    status: &'a str,
) -> Element<'a, Message> {
    let inputs_info = match solution {
        Some(s) => format!(
            "L = {} m | P = {} N | a = {} m",
            s.input.span_m, s.input.load_n, s.input.load_position_m
        ),
        None => "No calculation yet".to_string(),
    };

    row![
        text(inputs_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
