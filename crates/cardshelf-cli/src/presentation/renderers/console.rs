use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::style;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, CsvExport, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + CsvExport,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(std::io::stdout());
                return result.content.write_csv(&mut writer);
            }
            OutputFormat::Text => {}
        }

        // Minimal output is for pipes; keep it free of decoration
        let decorate = self.mode != ViewMode::Minimal;

        if decorate && let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), style::bold(&badge.label));
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if decorate && !result.suggestions.is_empty() {
            println!("\n{}", style::tip_header("💡 Tips:"));
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", style::command(cmd));
                }
                println!();
            }
        }

        Ok(())
    }
}
