//! Help command implementation for comprehensive CLI documentation.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

/// Help command for displaying comprehensive usage information.
#[derive(Parser)]
pub struct HelpCommand {}

/// Help generator for creating comprehensive CLI documentation.
pub struct HelpGenerator {
    app: Command,
}

impl HelpGenerator {
    /// Creates a new help generator with the current CLI app.
    pub fn new() -> Self {
        Self {
            app: crate::cli::Cli::command(),
        }
    }

    /// Generates help for the app followed by every subcommand.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut help_sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut help_sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(help_sections.join(&separator))
    }

    /// Recursively collects help for all subcommands, sorted by name so the
    /// output is stable.
    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, help_sections: &mut Vec<String>) {
        let mut subcommands: Vec<_> = cmd.get_subcommands().collect();
        subcommands.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for subcmd in subcommands {
            if subcmd.get_name() == "help" {
                continue;
            }

            let current_path = if prefix.is_empty() {
                subcmd.get_name().to_string()
            } else {
                format!("{} {}", prefix, subcmd.get_name())
            };

            help_sections.push(self.render_command_help(subcmd, &current_path));
            self.collect_help_recursive(subcmd, &current_path, help_sections);
        }
    }

    /// Renders help for a specific command.
    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let cmd_name = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("{} {path}", self.app.get_name())
        };

        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{cmd_name} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    /// Executes the help command, showing comprehensive help for all commands.
    pub fn execute(self) -> Result<()> {
        let help_output = HelpGenerator::new().generate_all_help()?;
        println!("{help_output}");
        Ok(())
    }
}
