//! Terminal frontend for the Wegbuch gamebook engine.

mod saves;
mod story;
mod terminal;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::Colorize;
use wb_core::{NodeId, PlayerState};
use wb_engine::{Selection, Session, SessionEnd, StoryUi};

use crate::terminal::TerminalUi;

#[derive(Parser)]
#[command(
    name = "wegbuch",
    about = "Wegbuch, an interactive gamebook",
    version
)]
struct Cli {
    /// Starting story node id
    #[arg(default_value_t = 0)]
    start: i32,

    /// Resume from a save file
    #[arg(short, long, value_name = "FILE", conflicts_with = "resume")]
    load: Option<PathBuf>,

    /// Resume from the newest save in the save directory
    #[arg(short = 'c', long = "continue")]
    resume: bool,

    /// Directory for save files (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let save_dir = cli.save_dir.clone().unwrap_or_else(saves::default_dir);
    let graph = story::graph();

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut ui = TerminalUi::new(stdin, stdout, save_dir.clone());

    println!("{}", "WEGBUCH".bold());
    println!("{}", "An interactive gamebook. q quits, s saves, c shows your sheet.".dimmed());

    let mut resumed = if let Some(path) = &cli.load {
        Some(load_save(path)?)
    } else if cli.resume {
        Some(load_latest(&save_dir)?)
    } else {
        None
    };

    loop {
        let state = match resumed.take() {
            Some(state) => state,
            None => match new_character(&mut ui, NodeId(cli.start)) {
                Some(state) => state,
                None => return Ok(()),
            },
        };

        let mut session = Session::new(&graph, state);
        let end = session.run(&mut ui).map_err(|e| e.to_string())?;
        match end {
            SessionEnd::Restart => {
                println!();
                println!("{}", "The road begins again.".bold());
            }
            SessionEnd::Death => {
                println!();
                println!("{}", "Your story ends here.".red());
                return Ok(());
            }
            SessionEnd::GoodEnding => {
                println!();
                println!("{}", "Your story ends well. Few do.".green());
                return Ok(());
            }
            SessionEnd::BadEnding | SessionEnd::Doom => {
                println!();
                println!("{}", "Your story ends here.".red());
                return Ok(());
            }
            SessionEnd::Quit => {
                println!();
                println!("Farewell. Only explicit saves were kept.");
                return Ok(());
            }
        }
    }
}

fn load_save(path: &Path) -> Result<PlayerState, String> {
    let record = saves::read(path);
    if record.is_sentinel() {
        return Err(format!(
            "save file {} is corrupt or unreadable",
            path.display()
        ));
    }
    Ok(record.into_state())
}

fn load_latest(save_dir: &Path) -> Result<PlayerState, String> {
    let latest = saves::list(save_dir)
        .pop()
        .ok_or_else(|| format!("no saves in {}", save_dir.display()))?;
    load_save(&latest)
}

fn new_character<R: BufRead, W: Write>(
    ui: &mut TerminalUi<R, W>,
    start: NodeId,
) -> Option<PlayerState> {
    let presets = story::characters();
    let labels: Vec<String> = presets
        .iter()
        .map(|c| format!("{}: {}", c.name, c.description))
        .collect();
    match ui.choose("Who sets out on the road?", &labels) {
        Selection::Picked(index) if index < presets.len() => {
            let mut state = presets.into_iter().nth(index)?;
            state.node = start;
            Some(state)
        }
        _ => None,
    }
}
