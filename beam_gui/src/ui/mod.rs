//! UI module for the BeamPlot GUI
//!
//! # Panel Structure
//! - `toolbar` - Application header and theme toggle
//! - `input_panel` - Left panel: beam length, load, load distance, actions
//! - `results_panel` - Right panel: reactions, extrema, diagram canvas
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `diagrams` - Canvas drawing for the schematic and SFD/BMD panels
//! - `modal` - Modal dialogs for errors, warnings, and confirmations

pub mod diagrams;
pub mod input_panel;
pub mod modal;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
