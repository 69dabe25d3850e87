// NOTE: verific CLI layout
//
// args -> commands::run -> handlers -> presentation
//
// Handlers merge flags over config.toml into `GroupingSettings` and call the
// engine; they never format output themselves. The reference instant is
// resolved once per invocation (`--now` or the wall clock) so every bucket in
// one run agrees on what "Today" means.

mod args;
mod commands;
pub mod config;
pub mod handlers;
pub mod input;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, GroupingArgs, LogLevel, OutputFormat};
pub use commands::run;
