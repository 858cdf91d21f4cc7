//! Results Panel (Right)
//!
//! Shows reactions and extrema for the current solution, plus the
//! schematic/SFD/BMD canvas. Before the first calculation it shows a
//! placeholder message.

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use beam_core::beam::BeamSolution;

use super::diagrams::BeamDiagram;
use crate::{App, Message};

/// Render the results panel based on the current solution
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.solution {
        Some(solution) => view_solution(solution),
        None => column![
            text("No calculation yet").size(14).color([0.5, 0.5, 0.5]),
            Space::new().height(8),
            text("Fill in the beam parameters and press Calculate.").size(11).color([0.5, 0.5, 0.5]),
        ],
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(65))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the solution summary and the diagram canvas
fn view_solution(solution: &BeamSolution) -> Column<'_, Message> {
    let diagram = BeamDiagram::new(solution.clone());

    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .into();

    column![
        text("Results").size(14),
        Space::new().height(8),
        text("Support Reactions").size(12),
        text(format!("RA = {:.2} N", solution.reactions.left_n)).size(11),
        text(format!("RB = {:.2} N", solution.reactions.right_n)).size(11),
        Space::new().height(12),
        text("Extrema").size(12),
        text(format!("Max |V| = {:.2} N", solution.max_shear_n)).size(11),
        text(format!(
            "Max M = {:.2} N·m at x = {:.2} m",
            solution.max_moment_nm, solution.max_moment_position_m
        ))
        .size(11),
        Space::new().height(15),
        text("Diagrams").size(14),
        Space::new().height(8),
        canvas_widget,
    ]
}
