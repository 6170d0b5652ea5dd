//! REPL (Read-Eval-Print Loop) for Fretwise

use crate::commands::training::run_drill;
use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::AppConfig;
use crate::store::JsonStatsStore;
use anyhow::Result;
use colored::*;
use fretwise_core::training::DrillMode;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Interactive REPL
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance with stats kept in `stats_path`
    pub fn new(config: AppConfig, stats_path: PathBuf) -> Result<Self> {
        let editor = DefaultEditor::new()?;
        log::debug!("Stats file: {}", stats_path.display());
        let ctx = CommandContext::new(config, JsonStatsStore::new(stats_path));
        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎸".bright_yellow(),
            "Fretwise fretboard trainer".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "scale A minor_pentatonic".cyan(),
            "caged C".cyan(),
            "drill intervals".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "fretwise>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    match self.registry.execute(line, &mut self.ctx) {
                        CommandResult::Success => {}
                        CommandResult::Message(msg) => println!("{}", msg),
                        CommandResult::Exit => {
                            println!("{} 🎸", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red());
                        }
                        CommandResult::StartDrill(mode) => self.drill(mode),
                        CommandResult::NotACommand => {
                            println!(
                                "{} Unknown command '{}'. Type '{}' for a list.",
                                "Error:".bright_red().bold(),
                                line,
                                "help".bright_green()
                            );
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🎸", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        self.ctx.save_stats()
    }

    /// Run one drill, reading answers from the same editor
    fn drill(&mut self, mode: DrillMode) {
        println!(
            "{} {} drill: {}. Empty answer or 'q' stops.",
            "▶".bright_green(),
            mode,
            mode.description()
        );

        let editor = &mut self.editor;
        let ask = |prompt: &str| -> Option<String> {
            println!("{}", prompt.bold());
            match editor.readline("? ") {
                Ok(line) => Some(line),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
                Err(err) => {
                    log::warn!("Input error during drill: {}", err);
                    None
                }
            }
        };

        match run_drill(mode, &mut self.ctx, &mut rand::thread_rng(), ask) {
            Ok(summary) if summary.asked > 0 => println!(
                "{} {}/{} correct",
                "Done:".bright_cyan().bold(),
                summary.correct,
                summary.asked
            ),
            Ok(_) => println!("{}", "Drill stopped".dimmed()),
            Err(e) => println!("{} {}", "Error:".bright_red().bold(), e.red()),
        }
    }
}

/// Convenience function to start the REPL
pub fn start(config: AppConfig, stats_path: PathBuf) -> Result<()> {
    let mut repl = Repl::new(config, stats_path)
        .map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
