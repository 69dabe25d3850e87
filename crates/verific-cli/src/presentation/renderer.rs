use super::view_models::{CommandResultViewModel, CreateView};
use crate::args::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", result.content.create_view(self.color));

        if !result.suggestions.is_empty() {
            println!();
            for tip in &result.suggestions {
                print!("Tip: {}", tip.description);
                if let Some(command) = &tip.command {
                    if self.color {
                        print!(" {}", command.cyan());
                    } else {
                        print!(" {}", command);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
