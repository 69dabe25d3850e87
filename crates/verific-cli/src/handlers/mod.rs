mod context;

pub mod config;
pub mod group;
pub mod schedule;

pub use context::{GroupingSettings, HandlerContext};
