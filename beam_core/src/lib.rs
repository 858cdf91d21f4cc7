//! # beam_core - SFD/BMD Calculation Engine
//!
//! `beam_core` computes shear-force and bending-moment distributions for a
//! simply supported beam carrying a single point load, and renders the
//! result to an image file. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **Explicit data flow**: the solution carries the input it came from,
//!   so export never depends on shared mutable state
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::beam::{analyze, BeamInput};
//!
//! let input = BeamInput::new(10.0, 100.0, 4.0);
//! let solution = analyze(&input).unwrap();
//!
//! println!("RA = {:.1} N, RB = {:.1} N",
//!     solution.reactions.left_n,
//!     solution.reactions.right_n,
//! );
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam input, reactions, and piecewise shear/moment sampling
//! - [`export`] - Figure export (PNG/SVG) with input annotation
//! - [`errors`] - Structured error types

pub mod beam;
pub mod errors;
pub mod export;

// Re-export commonly used types at crate root for convenience
pub use beam::{analyze, BeamInput, BeamSolution, Reactions, SamplePoint};
pub use errors::{BeamError, BeamResult};
pub use export::export_figure;
