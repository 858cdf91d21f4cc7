//! Simply-Supported Beam Analysis
//!
//! Closed-form shear and moment analysis for a simply supported beam
//! carrying a single point load.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{analyze, BeamInput};
//!
//! // 10 m beam with a 100 N load 4 m from the left support
//! let input = BeamInput::new(10.0, 100.0, 4.0);
//! let solution = analyze(&input).unwrap();
//!
//! assert!((solution.reactions.left_n - 60.0).abs() < 1e-9);
//! assert!((solution.reactions.right_n - 40.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Number of sample points over the span, including both endpoints
pub const SAMPLE_POINTS: usize = 500;

/// Input parameters for a simply supported beam with one point load.
///
/// Units are SI throughout: meters for lengths, newtons for forces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Beam length L (m), measured between supports
    pub span_m: f64,
    /// Point load magnitude P (N), positive downward
    pub load_n: f64,
    /// Load position a (m from left support)
    pub load_position_m: f64,
}

impl BeamInput {
    pub fn new(span_m: f64, load_n: f64, load_position_m: f64) -> Self {
        BeamInput {
            span_m,
            load_n,
            load_position_m,
        }
    }

    /// Validate the input against the supported configuration.
    ///
    /// Rejects non-finite fields, a non-positive span, and a load position
    /// outside `[0, L]`. Errors name the offending field.
    pub fn validate(&self) -> BeamResult<()> {
        if !self.span_m.is_finite() {
            return Err(BeamError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Beam length must be a finite number",
            ));
        }
        if self.span_m <= 0.0 {
            return Err(BeamError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Beam length must be positive",
            ));
        }
        if !self.load_n.is_finite() {
            return Err(BeamError::invalid_input(
                "load_n",
                self.load_n.to_string(),
                "Load must be a finite number",
            ));
        }
        if !self.load_position_m.is_finite() {
            return Err(BeamError::invalid_input(
                "load_position_m",
                self.load_position_m.to_string(),
                "Load position must be a finite number",
            ));
        }
        if self.load_position_m < 0.0 || self.load_position_m > self.span_m {
            return Err(BeamError::invalid_input(
                "load_position_m",
                self.load_position_m.to_string(),
                "Load position must be within beam length",
            ));
        }
        Ok(())
    }

    /// Support reactions from static equilibrium.
    ///
    /// `RA = P(L-a)/L`, `RB = Pa/L`. Callers validate first; a zero span
    /// would divide by zero here.
    pub fn reactions(&self) -> Reactions {
        Reactions {
            left_n: self.load_n * (self.span_m - self.load_position_m) / self.span_m,
            right_n: self.load_n * self.load_position_m / self.span_m,
        }
    }

    /// Shear at position x (m from left support)
    pub fn shear_at(&self, x_m: f64) -> f64 {
        let ra = self.reactions().left_n;
        if x_m < self.load_position_m {
            ra
        } else {
            ra - self.load_n
        }
    }

    /// Moment at position x (m from left support), in N·m
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let ra = self.reactions().left_n;
        if x_m < self.load_position_m {
            // M(x) = RA * x
            ra * x_m
        } else {
            // M(x) = RA * x - P(x - a)
            ra * x_m - self.load_n * (x_m - self.load_position_m)
        }
    }
}

/// Support reactions (N), positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Left (pin) support reaction RA
    pub left_n: f64,
    /// Right (roller) support reaction RB
    pub right_n: f64,
}

/// One sampled station along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Position (m from left support)
    pub x_m: f64,
    /// Shear force V (N)
    pub shear_n: f64,
    /// Bending moment M (N·m)
    pub moment_nm: f64,
}

/// Complete solution for one beam configuration.
///
/// Carries the input it was computed from, so consumers (figure export,
/// results panels) never rely on shared state to recover the parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSolution {
    /// The validated input this solution was computed from
    pub input: BeamInput,
    /// Support reactions
    pub reactions: Reactions,
    /// Ordered samples over `[0, L]`
    pub samples: Vec<SamplePoint>,

    /// Maximum shear magnitude (N)
    pub max_shear_n: f64,
    /// Moment extremum (N·m), signed, largest magnitude over the span
    pub max_moment_nm: f64,
    /// Position of maximum moment (m from left)
    pub max_moment_position_m: f64,
}

/// Analyze a beam configuration, producing the full sample series.
///
/// Validates the input first; on failure returns the input error and
/// produces nothing.
pub fn analyze(input: &BeamInput) -> BeamResult<BeamSolution> {
    input.validate()?;

    let reactions = input.reactions();

    let mut samples = Vec::with_capacity(SAMPLE_POINTS);
    let mut max_shear = 0.0f64;
    let mut max_moment = 0.0f64;
    let mut max_moment_pos = 0.0;

    for i in 0..SAMPLE_POINTS {
        let x = input.span_m * i as f64 / (SAMPLE_POINTS - 1) as f64;
        let v = input.shear_at(x);
        let m = input.moment_at(x);

        samples.push(SamplePoint {
            x_m: x,
            shear_n: v,
            moment_nm: m,
        });

        if v.abs() > max_shear {
            max_shear = v.abs();
        }
        // Signed extremum by magnitude, so upward (negative) loads report
        // their true peak instead of 0
        if m.abs() > max_moment.abs() {
            max_moment = m;
            max_moment_pos = x;
        }
    }

    Ok(BeamSolution {
        input: *input,
        reactions,
        samples,
        max_shear_n: max_shear,
        max_moment_nm: max_moment,
        max_moment_position_m: max_moment_pos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_reactions_balance_load() {
        // Equilibrium: RA + RB = P for any valid configuration
        for &(l, p, a) in &[
            (10.0, 100.0, 4.0),
            (6.0, 250.0, 0.0),
            (6.0, 250.0, 6.0),
            (3.5, -80.0, 1.2),
        ] {
            let input = BeamInput::new(l, p, a);
            let r = input.reactions();
            assert!(approx_eq(r.left_n + r.right_n, p, 1e-9));
        }
    }

    #[test]
    fn test_worked_example() {
        // L=10, P=100, a=4: RA=60, RB=40, V(5)=-40, M(4)=240
        let input = BeamInput::new(10.0, 100.0, 4.0);
        let r = input.reactions();

        assert!(approx_eq(r.left_n, 60.0, EPSILON));
        assert!(approx_eq(r.right_n, 40.0, EPSILON));
        assert!(approx_eq(input.shear_at(5.0), -40.0, EPSILON));
        assert!(approx_eq(input.moment_at(4.0), 240.0, EPSILON));
    }

    #[test]
    fn test_shear_piecewise_constant() {
        let input = BeamInput::new(10.0, 100.0, 4.0);
        let ra = input.reactions().left_n;

        for x in [0.0, 1.0, 3.999] {
            assert!(approx_eq(input.shear_at(x), ra, EPSILON));
        }
        for x in [4.0, 7.0, 10.0] {
            assert!(approx_eq(input.shear_at(x), ra - 100.0, EPSILON));
        }
    }

    #[test]
    fn test_moment_continuous_at_load() {
        // Both branches agree at x = a
        let input = BeamInput::new(10.0, 100.0, 4.0);
        let ra = input.reactions().left_n;
        let a = input.load_position_m;

        let before = ra * a;
        let after = ra * a - input.load_n * (a - a);
        assert!(approx_eq(before, after, EPSILON));
        assert!(approx_eq(input.moment_at(a), before, EPSILON));
    }

    #[test]
    fn test_moment_zero_at_supports() {
        // Simply supported, no overhang: M(0) = M(L) = 0
        let input = BeamInput::new(12.0, 500.0, 7.5);
        assert!(approx_eq(input.moment_at(0.0), 0.0, EPSILON));
        assert!(approx_eq(input.moment_at(12.0), 0.0, 1e-6));
    }

    #[test]
    fn test_midspan_load() {
        // P at midspan: RA = RB = P/2, Mmax = PL/4
        let input = BeamInput::new(8.0, 1000.0, 4.0);
        let r = input.reactions();

        assert!(approx_eq(r.left_n, 500.0, EPSILON));
        assert!(approx_eq(r.right_n, 500.0, EPSILON));
        assert!(approx_eq(input.moment_at(4.0), 2000.0, EPSILON));
    }

    #[test]
    fn test_validation_rejects_position_outside_span() {
        assert_eq!(
            BeamInput::new(10.0, 100.0, 10.5).validate().unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert!(BeamInput::new(10.0, 100.0, -0.1).validate().is_err());
        // Endpoints are allowed
        assert!(BeamInput::new(10.0, 100.0, 0.0).validate().is_ok());
        assert!(BeamInput::new(10.0, 100.0, 10.0).validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_span() {
        assert!(BeamInput::new(0.0, 100.0, 0.0).validate().is_err());
        assert!(BeamInput::new(-4.0, 100.0, 0.0).validate().is_err());
        assert!(BeamInput::new(f64::NAN, 100.0, 0.0).validate().is_err());
        assert!(BeamInput::new(10.0, f64::INFINITY, 5.0).validate().is_err());
    }

    #[test]
    fn test_analyze_rejects_invalid_input() {
        let result = analyze(&BeamInput::new(10.0, 100.0, 11.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_series_shape() {
        let solution = analyze(&BeamInput::new(10.0, 100.0, 4.0)).unwrap();

        assert_eq!(solution.samples.len(), SAMPLE_POINTS);

        let first = solution.samples.first().unwrap();
        let last = solution.samples.last().unwrap();
        assert!(approx_eq(first.x_m, 0.0, EPSILON));
        assert!(approx_eq(last.x_m, 10.0, EPSILON));

        // Positions are strictly increasing
        for pair in solution.samples.windows(2) {
            assert!(pair[1].x_m > pair[0].x_m);
        }
    }

    #[test]
    fn test_solution_extrema() {
        let solution = analyze(&BeamInput::new(10.0, 100.0, 4.0)).unwrap();

        // Max |V| is RA = 60 on the longer segment side
        assert!(approx_eq(solution.max_shear_n, 60.0, EPSILON));
        // Max moment is at the load point: RA * a = 240
        assert!(approx_eq(solution.max_moment_nm, 240.0, 0.5));
        assert!(approx_eq(solution.max_moment_position_m, 4.0, 0.05));
    }

    #[test]
    fn test_solution_extrema_upward_load() {
        // Negative (upward) load: every moment is <= 0; the extremum must
        // still be found at the load point, with its sign kept
        let solution = analyze(&BeamInput::new(10.0, -100.0, 4.0)).unwrap();

        assert!(approx_eq(solution.max_moment_nm, -240.0, 0.5));
        assert!(approx_eq(solution.max_moment_position_m, 4.0, 0.05));
        assert!(approx_eq(solution.max_shear_n, 60.0, EPSILON));
    }

    #[test]
    fn test_solution_serialization() {
        let solution = analyze(&BeamInput::new(10.0, 100.0, 4.0)).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        let roundtrip: BeamSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, roundtrip);
    }
}
