//! Figure export
//!
//! Renders a [`BeamSolution`](crate::beam::BeamSolution) as a two-panel
//! figure (shear on top, moment below) and writes it to disk with an
//! annotation block listing the inputs it was computed from.
//!
//! The backend is chosen by file extension: `.svg` produces a vector file,
//! everything else (including no extension) a PNG-style bitmap.

use std::path::Path;

use chrono::Local;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::beam::BeamSolution;
use crate::errors::{BeamError, BeamResult};

/// Output figure size in pixels (width, height)
const FIGURE_SIZE: (u32, u32) = (1200, 900);

/// Height of the two chart panels; the strip below holds the annotation
const CHART_AREA_HEIGHT: u32 = 760;

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const DARK_BLUE: RGBColor = RGBColor(0, 0, 139);
const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

/// Write the SFD/BMD figure for `solution` to `path`.
///
/// Rendering and I/O failures both surface as
/// [`BeamError::ExportFailed`](crate::errors::BeamError) carrying the path
/// and the underlying message.
pub fn export_figure(solution: &BeamSolution, path: &Path) -> BeamResult<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("svg") => {
            let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
            draw_figure(&root, solution)
                .and_then(|_| root.present())
                .map_err(|e| BeamError::export_failed(path.display().to_string(), e.to_string()))
        }
        _ => {
            let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
            draw_figure(&root, solution)
                .and_then(|_| root.present())
                .map_err(|e| BeamError::export_failed(path.display().to_string(), e.to_string()))
        }
    }
}

/// Draw the full figure onto a prepared drawing area (backend-agnostic).
fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    solution: &BeamSolution,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (chart_area, caption_area) = root.split_vertically(CHART_AREA_HEIGHT);
    let panels = chart_area.split_evenly((2, 1));

    draw_shear_panel(&panels[0], solution)?;
    draw_moment_panel(&panels[1], solution)?;
    draw_annotation(&caption_area, solution)?;

    Ok(())
}

fn draw_shear_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    solution: &BeamSolution,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let span = solution.input.span_m;
    let (v_min, v_max) = padded_range(solution.samples.iter().map(|s| s.shear_n));

    let mut chart = ChartBuilder::on(area)
        .caption("Shear Force Diagram (SFD)", ("sans-serif", 24).into_font())
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..span, v_min..v_max)?;

    chart
        .configure_mesh()
        .x_desc("x (m)")
        .y_desc("Shear Force (N)")
        .draw()?;

    chart.draw_series(AreaSeries::new(
        solution.samples.iter().map(|s| (s.x_m, s.shear_n)),
        0.0,
        &SKY_BLUE.mix(0.3),
    ))?;
    chart.draw_series(LineSeries::new(
        solution.samples.iter().map(|s| (s.x_m, s.shear_n)),
        ROYAL_BLUE.stroke_width(2),
    ))?;

    // Zero axis
    chart.draw_series(LineSeries::new([(0.0, 0.0), (span, 0.0)], &BLACK))?;

    // Key points: V at the left support, just past the load, and the right end
    let ra = solution.reactions.left_n;
    let p = solution.input.load_n;
    let a = solution.input.load_position_m;
    let key_points = [(0.0, ra), (a, ra - p), (span, ra - p)];
    chart.draw_series(
        key_points
            .iter()
            .map(|&(x, v)| Circle::new((x, v), 4, DARK_BLUE.filled())),
    )?;

    Ok(())
}

fn draw_moment_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    solution: &BeamSolution,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let span = solution.input.span_m;
    let (m_min, m_max) = padded_range(solution.samples.iter().map(|s| s.moment_nm));

    let mut chart = ChartBuilder::on(area)
        .caption("Bending Moment Diagram (BMD)", ("sans-serif", 24).into_font())
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..span, m_min..m_max)?;

    chart
        .configure_mesh()
        .x_desc("Beam Length (m)")
        .y_desc("Bending Moment (N·m)")
        .draw()?;

    chart.draw_series(AreaSeries::new(
        solution.samples.iter().map(|s| (s.x_m, s.moment_nm)),
        0.0,
        &LIGHT_GREEN.mix(0.3),
    ))?;
    chart.draw_series(LineSeries::new(
        solution.samples.iter().map(|s| (s.x_m, s.moment_nm)),
        SEA_GREEN.stroke_width(2),
    ))?;

    chart.draw_series(LineSeries::new([(0.0, 0.0), (span, 0.0)], &BLACK))?;

    Ok(())
}

/// Annotation block: the three inputs plus a generation timestamp.
fn draw_annotation<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    solution: &BeamSolution,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let input = &solution.input;
    let lines = [
        "Inputs:".to_string(),
        format!("Beam Length: {} m", input.span_m),
        format!("Load: {} N", input.load_n),
        format!("Load Distance: {} m", input.load_position_m),
        format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")),
    ];

    let style = ("sans-serif", 18).into_font().color(&BLACK);
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.clone(),
            (20, 10 + i as i32 * 24),
            style.clone(),
        ))?;
    }

    Ok(())
}

/// Value range with 10% headroom; degenerate (flat) series get a unit band
/// so the chart still has a visible axis.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let (min, max) = (min.min(0.0), max.max(0.0));
    if (max - min).abs() < 1e-12 {
        return (min - 1.0, max + 1.0);
    }

    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::{analyze, BeamInput};

    fn sample_solution() -> BeamSolution {
        analyze(&BeamInput::new(10.0, 100.0, 4.0)).unwrap()
    }

    #[test]
    fn test_export_png() {
        let solution = sample_solution();
        let path = std::env::temp_dir().join(format!("sfd_bmd_test_{}.png", std::process::id()));

        export_figure(&solution, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_svg() {
        let solution = sample_solution();
        let path = std::env::temp_dir().join(format!("sfd_bmd_test_{}.svg", std::process::id()));

        export_figure(&solution, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_bad_path_fails() {
        let solution = sample_solution();
        let path = std::env::temp_dir()
            .join("no_such_directory_for_sfd_bmd")
            .join("out.png");

        let err = export_figure(&solution, &path).unwrap_err();
        assert_eq!(err.error_code(), "EXPORT_FAILED");
    }

    #[test]
    fn test_padded_range_flat_series() {
        let (lo, hi) = padded_range([0.0, 0.0, 0.0].into_iter());
        assert!(lo < 0.0 && hi > 0.0);
    }
}
