//! General REPL commands (help, quit)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Print help information
fn print_help() {
    println!("{}", "🎸 Fretwise Help".bold());
    println!("{}", "================".bold());
    println!();
    println!("{}", "Scales and Chords:".green());
    println!(
        "  {}     - Scale notes, intervals and fretboard",
        "scale <root> [type]".cyan()
    );
    println!(
        "  {}     - Chord notes, intervals and fretboard",
        "chord <root> [type]".cyan()
    );
    println!(
        "  {} - Chords on every scale degree (7 = sevenths)",
        "diatonic <root> [type] [7]".cyan()
    );
    println!(
        "  {}  - Relative minor of a major key, or major of a minor",
        "relative <root> [type]".cyan()
    );
    println!(
        "  {}  - All modes of a major key, or one of them",
        "mode <root> [mode]".cyan()
    );
    println!(
        "  {}           - Available scale, chord and mode names",
        "list [scales|chords|modes]".cyan()
    );
    println!();
    println!("{}", "Guitar:".green());
    println!(
        "  {} - CAGED voicing(s) as tab",
        "caged <root> [C|A|G|E|D] [type]".cyan()
    );
    println!();
    println!("{}", "Reverse Lookup:".green());
    println!(
        "  {}          - Chords containing all the notes",
        "find <notes>".cyan()
    );
    println!(
        "  {}   - Scales containing all the notes",
        "find scales <notes>".cyan()
    );
    println!();
    println!("{}", "Practice:".green());
    println!(
        "  {} - Start a drill (empty answer or q stops)",
        "drill [notes|intervals|chords]".cyan()
    );
    println!(
        "  {}          - Accuracy and reaction times",
        "stats [mode]".cyan()
    );
    println!("  {}    - Clear stats", "stats reset [mode]".cyan());
    println!();
    println!("{}", "Examples:".green());
    println!("  fretwise> {}", "scale A minor_pentatonic".cyan());
    println!("  fretwise> {}", "caged C A maj7".cyan());
    println!("  fretwise> {}", "find C E G B".cyan());
    println!();
    println!("{}", "Other Commands:".green());
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit the REPL", "quit".bright_red());
}
