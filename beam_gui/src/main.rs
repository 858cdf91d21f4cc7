//! # BeamPlot GUI Application
//!
//! Single-window SFD & BMD calculator for a simply supported beam with one
//! point load. Built with the Iced framework.
//!
//! All work happens synchronously on the event thread: Calculate parses the
//! three fields and runs the engine, Save Image opens a native save dialog
//! and exports the current figure. Failures surface as modal dialogs and
//! never touch the previous solution.

use iced::widget::{column, row, stack, Space};
use iced::{Element, Length, Theme};

use beam_core::beam::{analyze, BeamInput, BeamSolution};
use beam_core::errors::{BeamError, BeamResult};
use beam_core::export::export_figure;

mod ui;

use ui::modal::ModalType;

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1000.0, 720.0))
        .run()
}

/// Messages produced by user interaction
#[derive(Debug, Clone)]
pub enum Message {
    SpanChanged(String),
    LoadChanged(String),
    PositionChanged(String),
    Calculate,
    SaveImage,
    ModalDismissed,
    ToggleDarkMode,
}

/// Application state
pub struct App {
    /// Raw text of the beam length field (m)
    pub span_m: String,
    /// Raw text of the load field (N)
    pub load_n: String,
    /// Raw text of the load distance field (m)
    pub position_m: String,

    /// Most recent successful solution; export reads its embedded input
    pub solution: Option<BeamSolution>,
    /// Currently displayed modal, if any
    pub modal: Option<ModalType>,
    /// Status bar message
    pub status: String,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        App {
            span_m: String::new(),
            load_n: String::new(),
            position_m: String::new(),
            solution: None,
            modal: None,
            status: "Enter beam parameters and press Calculate".to_string(),
            dark_mode: true,
        }
    }

    fn title(&self) -> String {
        "BeamPlot - SFD & BMD Calculator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::SpanChanged(value) => self.span_m = value,
            Message::LoadChanged(value) => self.load_n = value,
            Message::PositionChanged(value) => self.position_m = value,
            Message::Calculate => self.calculate(),
            Message::SaveImage => self.save_image(),
            Message::ModalDismissed => self.modal = None,
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    /// Parse the three fields and run the engine. On any failure the
    /// previous solution (and its plot) stays on screen.
    fn calculate(&mut self) {
        let input = match self.parse_input() {
            Ok(input) => input,
            Err(e) => {
                self.modal = Some(ModalType::error("Input Error", e.to_string()));
                return;
            }
        };

        match analyze(&input) {
            Ok(solution) => {
                self.status = format!(
                    "Calculated: L = {} m, P = {} N, a = {} m",
                    input.span_m, input.load_n, input.load_position_m
                );
                self.solution = Some(solution);
            }
            Err(e) => {
                self.modal = Some(ModalType::error("Input Error", e.to_string()));
            }
        }
    }

    fn parse_input(&self) -> BeamResult<BeamInput> {
        Ok(BeamInput::new(
            parse_field("span_m", "Beam length", &self.span_m)?,
            parse_field("load_n", "Load", &self.load_n)?,
            parse_field("load_position_m", "Load distance", &self.position_m)?,
        ))
    }

    fn save_image(&mut self) {
        let Some(solution) = &self.solution else {
            self.modal = Some(ModalType::warning(
                "Nothing to Save",
                "Please calculate the SFD & BMD first.",
            ));
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .add_filter("SVG image", &["svg"])
            .set_file_name("sfd_bmd.png")
            .set_title("Save SFD & BMD Diagram")
            .save_file()
        else {
            // Dialog cancelled
            return;
        };

        match export_figure(solution, &path) {
            Ok(()) => {
                self.status = format!("Saved {}", path.display());
                self.modal = Some(ModalType::notice(
                    "Success",
                    format!("Diagram saved successfully at:\n{}", path.display()),
                ));
            }
            Err(e) => {
                self.modal = Some(ModalType::error("Save Failed", e.to_string()));
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body = row![
            ui::input_panel::view_input_panel(self),
            Space::new().width(15),
            ui::results_panel::view_results_panel(self),
        ]
        .height(Length::Fill);

        let content: Element<'_, Message> = column![
            ui::toolbar::view_header(self.dark_mode),
            Space::new().height(10),
            body,
            ui::status_bar::view_status_bar(self.solution.as_ref(), &self.status),
        ]
        .padding(10)
        .into();

        match &self.modal {
            Some(modal) => stack![
                content,
                ui::modal::view_backdrop(),
                ui::modal::view_modal(modal),
            ]
            .into(),
            None => content,
        }
    }
}

/// Parse one numeric field, reporting the human-facing label on failure
fn parse_field(field: &str, label: &str, value: &str) -> BeamResult<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        BeamError::invalid_input(field, value, format!("{} must be a number", label))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_numbers() {
        assert_eq!(parse_field("span_m", "Beam length", "10").unwrap(), 10.0);
        assert_eq!(parse_field("span_m", "Beam length", " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_field("load_n", "Load", "-80").unwrap(), -80.0);
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        let err = parse_field("load_n", "Load", "ten").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("Load must be a number"));

        assert!(parse_field("span_m", "Beam length", "").is_err());
    }

    #[test]
    fn test_parse_input_reports_first_bad_field() {
        let mut app = App::new();
        app.span_m = "10".to_string();
        app.load_n = "abc".to_string();
        app.position_m = "4".to_string();

        let err = app.parse_input().unwrap_err();
        assert!(err.to_string().contains("load_n"));
    }

    #[test]
    fn test_save_image_before_calculate_warns() {
        let mut app = App::new();
        let status_before = app.status.clone();

        // No solution yet: warn and bail before any dialog or file write
        app.save_image();

        assert!(matches!(app.modal, Some(ModalType::Warning { .. })));
        assert_eq!(app.status, status_before);
        assert!(app.solution.is_none());
    }

    #[test]
    fn test_calculate_keeps_previous_solution_on_error() {
        let mut app = App::new();
        app.span_m = "10".to_string();
        app.load_n = "100".to_string();
        app.position_m = "4".to_string();
        app.calculate();
        assert!(app.solution.is_some());
        assert!(app.modal.is_none());

        let previous = app.solution.clone();

        // Out-of-range position: error modal, solution untouched
        app.position_m = "12".to_string();
        app.calculate();
        assert!(app.modal.is_some());
        assert_eq!(app.solution, previous);
    }
}
