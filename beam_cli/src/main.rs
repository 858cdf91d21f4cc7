//! # BeamPlot CLI Application
//!
//! Terminal front-end for the SFD/BMD engine. Prompts for the three beam
//! parameters, prints the solution summary and JSON, and optionally writes
//! the diagram figure through the same exporter the GUI uses.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use beam_core::beam::{analyze, BeamInput};
use beam_core::export::export_figure;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let (value, was_typo) = parse_reply(&input, default);
    if was_typo {
        println!("Not a number: '{}', using default {}", input.trim(), default);
    }
    value
}

/// Parse a prompt reply. An empty reply takes the default silently; a
/// non-numeric reply takes the default and flags it so the caller can say so.
fn parse_reply(reply: &str, default: f64) -> (f64, bool) {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return (default, false);
    }
    match trimmed.parse() {
        Ok(value) => (value, false),
        Err(_) => (default, true),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("BeamPlot CLI - Simply Supported Beam SFD & BMD");
    println!("==============================================");
    println!();

    let span_m = prompt_f64("Enter beam length (m) [10.0]: ", 10.0);
    let load_n = prompt_f64("Enter load (N) [100.0]: ", 100.0);
    let position_m = prompt_f64("Enter load distance (m) [5.0]: ", 5.0);

    let input = BeamInput::new(span_m, load_n, position_m);

    let solution = match analyze(&input) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {:.2} m", input.span_m);
    println!("  Load:     {:.2} N at {:.2} m", input.load_n, input.load_position_m);
    println!();
    println!("Reactions:");
    println!("  RA = {:.2} N", solution.reactions.left_n);
    println!("  RB = {:.2} N", solution.reactions.right_n);
    println!();
    println!("Extrema:");
    println!("  |V|_max = {:.2} N", solution.max_shear_n);
    println!(
        "  M_max   = {:.2} N·m at x = {:.2} m",
        solution.max_moment_nm, solution.max_moment_position_m
    );
    println!();

    // Print every 50th station as a compact table
    println!("{:>10} {:>12} {:>14}", "x (m)", "V (N)", "M (N·m)");
    for sample in solution.samples.iter().step_by(50) {
        println!(
            "{:>10.3} {:>12.2} {:>14.2}",
            sample.x_m, sample.shear_n, sample.moment_nm
        );
    }
    if let Some(last) = solution.samples.last() {
        println!(
            "{:>10.3} {:>12.2} {:>14.2}",
            last.x_m, last.shear_n, last.moment_nm
        );
    }
    println!("═══════════════════════════════════════");

    let path = prompt_line("Save diagram to (e.g. sfd_bmd.png, empty to skip): ");
    if !path.is_empty() {
        match export_figure(&solution, &PathBuf::from(&path)) {
            Ok(()) => println!("Diagram saved to {}", path),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&solution) {
        println!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_accepts_numbers() {
        assert_eq!(parse_reply("12.5\n", 10.0), (12.5, false));
        assert_eq!(parse_reply(" -80 ", 10.0), (-80.0, false));
    }

    #[test]
    fn test_parse_reply_empty_takes_default_silently() {
        assert_eq!(parse_reply("\n", 10.0), (10.0, false));
        assert_eq!(parse_reply("", 5.0), (5.0, false));
    }

    #[test]
    fn test_parse_reply_flags_typos() {
        assert_eq!(parse_reply("ten\n", 10.0), (10.0, true));
        assert_eq!(parse_reply("1O.0", 4.0), (4.0, true));
    }
}
