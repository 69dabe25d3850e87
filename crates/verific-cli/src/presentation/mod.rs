//! # Presentation Layer
//!
//! Handlers never print directly. Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Plain)==> [ View ] --> stdout
//! ```
//!
//! View models hold raw data (instants, counts, records); formatting into
//! clock times and titles happens only in views, so `--format json` output
//! stays machine-readable.

pub mod formatters;
pub mod presenters;
pub mod renderer;
pub mod view_models;
mod views;

pub use renderer::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView};
