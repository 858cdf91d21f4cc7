//! Canvas drawing utilities for beam diagrams
//!
//! Renders the beam schematic (supports, point load, reactions) together
//! with the shear-force and bending-moment diagrams. The canvas is a pure
//! function of the solution: redrawing with the same data replaces the
//! previous geometry with identical output.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use beam_core::beam::BeamSolution;

use crate::Message;

/// Canvas program for drawing beam diagrams
pub struct BeamDiagram {
    solution: BeamSolution,
}

impl BeamDiagram {
    pub fn new(solution: BeamSolution) -> Self {
        Self { solution }
    }

    fn draw_beam_schematic(
        &self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) {
        let input = &self.solution.input;
        let reactions = &self.solution.reactions;
        let beam_y = y + height * 0.5;
        let beam_thickness = 4.0;
        let support_size = 10.0;
        let load_x = x + (input.load_position_m / input.span_m) as f32 * width;
        let reaction_color = Color::from_rgb(0.7, 0.2, 0.2);

        // Beam line
        let beam = Path::line(Point::new(x, beam_y), Point::new(x + width, beam_y));
        frame.stroke(
            &beam,
            Stroke::default().with_color(color).with_width(beam_thickness),
        );

        // Pin at the left support, roller at the right
        self.draw_pin(frame, x, beam_y + beam_thickness / 2.0, support_size, color);
        self.draw_roller(
            frame,
            x + width,
            beam_y + beam_thickness / 2.0,
            support_size,
            color,
        );

        // Point load arrow at x = a
        let arrow_length = height * 0.3;
        let arrow = Path::line(
            Point::new(load_x, beam_y - arrow_length),
            Point::new(load_x, beam_y - 5.0),
        );
        frame.stroke(&arrow, Stroke::default().with_color(color).with_width(2.0));

        let head = Path::new(|builder| {
            builder.move_to(Point::new(load_x, beam_y - 5.0));
            builder.line_to(Point::new(load_x - 3.0, beam_y - 11.0));
            builder.move_to(Point::new(load_x, beam_y - 5.0));
            builder.line_to(Point::new(load_x + 3.0, beam_y - 11.0));
        });
        frame.stroke(&head, Stroke::default().with_color(color).with_width(2.0));

        let load_text = Text {
            content: format!("P = {:.0} N", input.load_n),
            position: Point::new(load_x + 5.0, beam_y - arrow_length),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(load_text);

        // Reaction arrows below each support
        for (i, (support_x, reaction)) in [(x, reactions.left_n), (x + width, reactions.right_n)]
            .into_iter()
            .enumerate()
        {
            let arrow_top = beam_y + support_size + 8.0;
            let arrow_bottom = arrow_top + height * 0.18;

            let reaction_arrow = Path::line(
                Point::new(support_x, arrow_bottom),
                Point::new(support_x, arrow_top),
            );
            frame.stroke(
                &reaction_arrow,
                Stroke::default().with_color(reaction_color).with_width(2.0),
            );

            let head = Path::new(|builder| {
                builder.move_to(Point::new(support_x, arrow_top));
                builder.line_to(Point::new(support_x - 3.0, arrow_top + 6.0));
                builder.move_to(Point::new(support_x, arrow_top));
                builder.line_to(Point::new(support_x + 3.0, arrow_top + 6.0));
            });
            frame.stroke(
                &head,
                Stroke::default().with_color(reaction_color).with_width(2.0),
            );

            let (name, label_x) = if i == 0 {
                ("RA", support_x + 4.0)
            } else {
                ("RB", support_x - 60.0)
            };
            let reaction_text = Text {
                content: format!("{} = {:.1} N", name, reaction),
                position: Point::new(label_x, arrow_bottom + 2.0),
                color: reaction_color,
                size: iced::Pixels(8.0),
                ..Text::default()
            };
            frame.fill_text(reaction_text);
        }

        // Span label
        let span_text = Text {
            content: format!("L = {:.1} m", input.span_m),
            position: Point::new(x + width / 2.0, beam_y + support_size + 5.0),
            color,
            size: iced::Pixels(8.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        };
        frame.fill_text(span_text);
    }

    /// Pinned support: filled triangle
    fn draw_pin(&self, frame: &mut Frame, x: f32, y: f32, size: f32, color: Color) {
        let support = Path::new(|builder| {
            builder.move_to(Point::new(x, y));
            builder.line_to(Point::new(x - size / 2.0, y + size));
            builder.line_to(Point::new(x + size / 2.0, y + size));
            builder.close();
        });
        frame.fill(&support, color);
    }

    /// Roller support: triangle outline with a circle underneath
    fn draw_roller(&self, frame: &mut Frame, x: f32, y: f32, size: f32, color: Color) {
        let triangle = Path::new(|builder| {
            builder.move_to(Point::new(x, y));
            builder.line_to(Point::new(x - size / 2.0, y + size * 0.7));
            builder.line_to(Point::new(x + size / 2.0, y + size * 0.7));
            builder.close();
        });
        frame.stroke(&triangle, Stroke::default().with_color(color).with_width(2.0));

        let circle_radius = size * 0.15;
        let circle = Path::circle(
            Point::new(x, y + size * 0.7 + circle_radius + 1.0),
            circle_radius,
        );
        frame.stroke(&circle, Stroke::default().with_color(color).with_width(2.0));
    }

    fn draw_shear_diagram(
        &self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        axis_color: Color,
    ) {
        let center_y = y + height / 2.0;
        let plot_height = height * 0.32;
        let span = self.solution.input.span_m;
        let max_v = self.solution.max_shear_n;

        // Axis line
        let axis = Path::line(Point::new(x, center_y), Point::new(x + width, center_y));
        frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));

        if max_v > 1e-9 {
            // Filled area down to the axis
            let shear_path = Path::new(|builder| {
                builder.move_to(Point::new(x, center_y));
                for sample in &self.solution.samples {
                    let px = x + (sample.x_m / span) as f32 * width;
                    let py = center_y - (sample.shear_n / max_v) as f32 * plot_height;
                    builder.line_to(Point::new(px, py));
                }
                builder.line_to(Point::new(x + width, center_y));
                builder.close();
            });
            frame.fill(&shear_path, Color { a: 0.3, ..color });

            // Outline
            let shear_line = Path::new(|builder| {
                let first = &self.solution.samples[0];
                let py = center_y - (first.shear_n / max_v) as f32 * plot_height;
                builder.move_to(Point::new(x, py));
                for sample in &self.solution.samples {
                    let px = x + (sample.x_m / span) as f32 * width;
                    let py = center_y - (sample.shear_n / max_v) as f32 * plot_height;
                    builder.line_to(Point::new(px, py));
                }
            });
            frame.stroke(&shear_line, Stroke::default().with_color(color).with_width(2.0));

            // Key points at x = 0, x = a, x = L
            let ra = self.solution.reactions.left_n;
            let p = self.solution.input.load_n;
            let a = self.solution.input.load_position_m;
            for (pos, v) in [(0.0, ra), (a, ra - p), (span, ra - p)] {
                let px = x + (pos / span) as f32 * width;
                let py = center_y - (v / max_v) as f32 * plot_height;
                let marker = Path::circle(Point::new(px, py), 3.0);
                frame.fill(&marker, color);
            }
        }

        // Labels
        let title = Text {
            content: "Shear (V)".to_string(),
            position: Point::new(x + 5.0, y + 2.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(title);

        let max_label = Text {
            content: format!("|V|max = {:.1} N", max_v),
            position: Point::new(x + width - 90.0, y + 2.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(max_label);
    }

    fn draw_moment_diagram(
        &self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        axis_color: Color,
    ) {
        let center_y = y + height / 2.0;
        let plot_height = height * 0.32;
        let span = self.solution.input.span_m;

        // Scale by the largest magnitude so negative loads still fit
        let max_m = self
            .solution
            .samples
            .iter()
            .map(|s| s.moment_nm.abs())
            .fold(0.0f64, f64::max);

        // Axis line
        let axis = Path::line(Point::new(x, center_y), Point::new(x + width, center_y));
        frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));

        if max_m > 1e-9 {
            let moment_path = Path::new(|builder| {
                builder.move_to(Point::new(x, center_y));
                for sample in &self.solution.samples {
                    let px = x + (sample.x_m / span) as f32 * width;
                    let py = center_y - (sample.moment_nm / max_m) as f32 * plot_height;
                    builder.line_to(Point::new(px, py));
                }
                builder.line_to(Point::new(x + width, center_y));
                builder.close();
            });
            frame.fill(&moment_path, Color { a: 0.3, ..color });

            let outline = Path::new(|builder| {
                builder.move_to(Point::new(x, center_y));
                for sample in &self.solution.samples {
                    let px = x + (sample.x_m / span) as f32 * width;
                    let py = center_y - (sample.moment_nm / max_m) as f32 * plot_height;
                    builder.line_to(Point::new(px, py));
                }
            });
            frame.stroke(&outline, Stroke::default().with_color(color).with_width(2.0));
        }

        // Labels
        let title = Text {
            content: "Moment (M)".to_string(),
            position: Point::new(x + 5.0, y + 2.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(title);

        let max_label = Text {
            content: format!(
                "Mmax = {:.1} N·m at x = {:.2} m",
                self.solution.max_moment_nm, self.solution.max_moment_position_m
            ),
            position: Point::new(x + width - 170.0, y + 2.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        };
        frame.fill_text(max_label);
    }
}

impl canvas::Program<Message> for BeamDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;

        // Layout: schematic on top, then shear and moment panels sharing
        // the same horizontal range
        let schematic_height = height * 0.30;
        let panel_height = height * 0.35;
        let margin = 20.0;
        let plot_width = width - 2.0 * margin;

        // Colors
        let beam_color = Color::from_rgb(0.45, 0.45, 0.45);
        let shear_color = Color::from_rgb(0.2, 0.5, 0.8);
        let moment_color = Color::from_rgb(0.2, 0.7, 0.3);
        let axis_color = Color::from_rgb(0.5, 0.5, 0.5);

        self.draw_beam_schematic(&mut frame, margin, 0.0, plot_width, schematic_height, beam_color);

        self.draw_shear_diagram(
            &mut frame,
            margin,
            schematic_height,
            plot_width,
            panel_height,
            shear_color,
            axis_color,
        );

        self.draw_moment_diagram(
            &mut frame,
            margin,
            schematic_height + panel_height,
            plot_width,
            panel_height,
            moment_color,
            axis_color,
        );

        vec![frame.into_geometry()]
    }
}
