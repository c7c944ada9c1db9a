//! Line-oriented terminal implementation of the engine's UI port.
//!
//! Prompts print numbered options; the player answers with a number, a
//! comma-separated list, or one of the meta-inputs available at any prompt:
//! `s` saves, `c` shows the character sheet, `v N` previews choice N,
//! `b` backs out, `q` quits. End of input counts as a quit, so piped
//! sessions end cleanly.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use comfy_table::Table;
use wb_core::{PlayerState, SaveRecord};
use wb_engine::{Selection, Severity, StoryUi};

use crate::saves;

enum Input {
    Value(String),
    Back,
    Quit,
    Preview(usize),
}

/// The terminal frontend: reads lines, writes text, keeps a save snapshot.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    save_dir: PathBuf,
    snapshot: Option<SaveRecord>,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// Create a frontend over the given streams, saving into `save_dir`.
    pub fn new(input: R, output: W, save_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            save_dir,
            snapshot: None,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Read one input, handling the meta-actions locally.
    fn next_input(&mut self) -> Input {
        loop {
            let _ = write!(self.output, "> ");
            let _ = self.output.flush();
            let Some(line) = self.read_line() else {
                return Input::Quit;
            };
            match line.as_str() {
                "q" | "quit" => return Input::Quit,
                "b" | "back" => return Input::Back,
                "s" | "save" => self.do_save(),
                "c" | "sheet" => self.do_sheet(),
                _ => {
                    if let Some(rest) = line.strip_prefix('v')
                        && let Ok(n) = rest.trim().parse::<usize>()
                        && n >= 1
                    {
                        return Input::Preview(n - 1);
                    }
                    return Input::Value(line);
                }
            }
        }
    }

    fn do_save(&mut self) {
        match &self.snapshot {
            Some(record) => match saves::write(&self.save_dir, record, None) {
                Ok(path) => {
                    let _ = writeln!(self.output, "Saved to {}.", path.display());
                }
                Err(e) => {
                    let _ = writeln!(self.output, "{}", format!("Could not save: {e}").red());
                }
            },
            None => {
                let _ = writeln!(self.output, "Nothing to save yet.");
            }
        }
    }

    fn do_sheet(&mut self) {
        let Some(record) = &self.snapshot else {
            let _ = writeln!(self.output, "No character yet.");
            return;
        };
        let mut table = Table::new();
        table.add_row(vec!["Name".to_string(), record.name.clone()]);
        table.add_row(vec!["Calling".to_string(), record.character_type.clone()]);
        table.add_row(vec![
            "Life".to_string(),
            format!("{}/{}", record.life, record.life_limit),
        ]);
        table.add_row(vec!["Money".to_string(), record.money.to_string()]);
        table.add_row(vec!["Skills".to_string(), record.skills.join(", ")]);
        table.add_row(vec![
            "Items".to_string(),
            format!("{} ({}/{})", record.items.join(", "), record.items.len(), record.item_limit),
        ]);
        table.add_row(vec!["Codewords".to_string(), record.codewords.join(", ")]);
        let _ = writeln!(self.output, "{table}");
    }

    fn print_options(&mut self, prompt: &str, options: &[String]) {
        let _ = writeln!(self.output);
        let _ = writeln!(self.output, "{}", prompt.bold());
        for (i, option) in options.iter().enumerate() {
            let _ = writeln!(self.output, "  {}. {option}", i + 1);
        }
    }
}

impl<R: BufRead, W: Write> StoryUi for TerminalUi<R, W> {
    fn narrate(&mut self, text: &str) {
        let _ = writeln!(self.output);
        let _ = writeln!(self.output, "{text}");
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> Selection<usize> {
        loop {
            self.print_options(prompt, options);
            match self.next_input() {
                Input::Quit => return Selection::Quit,
                Input::Back => return Selection::Back,
                Input::Preview(n) => return Selection::Preview(n),
                Input::Value(v) => match v.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= options.len() => return Selection::Picked(n - 1),
                    _ => {
                        let _ = writeln!(
                            self.output,
                            "Enter a number from the list (q quits, c shows your sheet)."
                        );
                    }
                },
            }
        }
    }

    fn choose_many(
        &mut self,
        prompt: &str,
        options: &[String],
        limit: usize,
    ) -> Selection<Vec<usize>> {
        loop {
            self.print_options(prompt, options);
            let _ = writeln!(
                self.output,
                "(up to {limit}, comma-separated; plain Enter for none)"
            );
            match self.next_input() {
                Input::Quit => return Selection::Quit,
                Input::Back => return Selection::Back,
                Input::Preview(_) => {}
                Input::Value(v) => {
                    if v.is_empty() {
                        return Selection::Picked(Vec::new());
                    }
                    let parsed: Result<Vec<usize>, _> = v
                        .split([',', ' '])
                        .filter(|part| !part.is_empty())
                        .map(|part| part.trim().parse::<usize>())
                        .collect();
                    match parsed {
                        Ok(numbers)
                            if numbers.iter().all(|&n| n >= 1 && n <= options.len()) =>
                        {
                            return Selection::Picked(
                                numbers.into_iter().map(|n| n - 1).collect(),
                            );
                        }
                        _ => {
                            let _ = writeln!(
                                self.output,
                                "Enter numbers from the list, separated by commas."
                            );
                        }
                    }
                }
            }
        }
    }

    fn amount(&mut self, prompt: &str, max: i32) -> Selection<i32> {
        loop {
            let _ = writeln!(self.output);
            let _ = writeln!(self.output, "{} (0 to {max})", prompt.bold());
            match self.next_input() {
                Input::Quit => return Selection::Quit,
                Input::Back => return Selection::Back,
                Input::Preview(_) => {}
                Input::Value(v) => match v.parse::<i32>() {
                    Ok(n) if (0..=max).contains(&n) => return Selection::Picked(n),
                    _ => {
                        let _ = writeln!(self.output, "Enter an amount between 0 and {max}.");
                    }
                },
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Selection<bool> {
        loop {
            let _ = writeln!(self.output);
            let _ = writeln!(self.output, "{} (y/n)", prompt.bold());
            match self.next_input() {
                Input::Quit => return Selection::Quit,
                Input::Back => return Selection::Picked(false),
                Input::Preview(_) => {}
                Input::Value(v) => match v.to_lowercase().as_str() {
                    "y" | "yes" => return Selection::Picked(true),
                    "n" | "no" => return Selection::Picked(false),
                    _ => {
                        let _ = writeln!(self.output, "Answer y or n.");
                    }
                },
            }
        }
    }

    // The duration hint is advisory; a line-oriented terminal just prints
    // and moves on.
    fn message(&mut self, text: &str, severity: Severity, _duration_hint: Duration) {
        let tinted = match severity {
            Severity::Info => text.cyan(),
            Severity::Warn => text.yellow(),
            Severity::Error => text.red(),
        };
        let _ = writeln!(self.output, "{tinted}");
    }

    fn checkpoint(&mut self, state: &PlayerState) {
        self.snapshot = Some(SaveRecord::from_state(state));
    }
}
