use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use transposer::{keyboard_layout, parse_document, Key, Melody, Shift, SpellingPolicy};

/// Transpose a melody of `name/octave` tokens between keys.
#[derive(Parser, Debug)]
#[command(name = "transposer", version, about)]
struct Cli {
    /// Notes to transpose, e.g. c/4 e/4 g/4
    notes: Vec<String>,

    /// Read the melody (with optional --- settings block) from a file
    #[arg(short, long, conflicts_with = "notes")]
    file: Option<PathBuf>,

    /// Key the melody is written in
    #[arg(long)]
    from: Option<String>,

    /// Key to transpose to
    #[arg(long)]
    to: Option<String>,

    /// Shift by a fixed number of semitones instead of a key pair
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["from", "to"])]
    semitones: Option<i32>,

    /// sharps, flats or key
    #[arg(long)]
    spelling: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the available keys and exit
    #[arg(long)]
    keys: bool,

    /// Print the on-screen keyboard notes and exit
    #[arg(long)]
    keyboard: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.keys {
        let names: Vec<&str> = Key::ALL.iter().map(|k| k.name()).collect();
        println!("{}", names.join(" "));
        return Ok(());
    }
    if cli.keyboard {
        let notes: Vec<String> = keyboard_layout(&transposer::keyboard::DEFAULT_OCTAVES)
            .iter()
            .map(|k| k.note.to_string())
            .collect();
        println!("{}", notes.join(" "));
        return Ok(());
    }

    let source = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading file '{}'", path.display()))?,
        None => cli.notes.join(" "),
    };
    if source.trim().is_empty() {
        bail!("no notes given");
    }

    let mut document = parse_document(&source)?;

    // Command-line options override the document's settings block
    if let Some(spelling) = &cli.spelling {
        document.settings.spelling = spelling.parse::<SpellingPolicy>()?;
    }
    if let Some(n) = cli.semitones {
        document.settings.shift = Shift::Semitones(n);
    } else if cli.from.is_some() || cli.to.is_some() {
        let (doc_from, doc_to) = match document.settings.shift {
            Shift::Keys { from, to } => (from, to),
            Shift::Semitones(_) => (Key::C, Key::C),
        };
        let from = match &cli.from {
            Some(name) => name.parse()?,
            None => doc_from,
        };
        let to = match &cli.to {
            Some(name) => name.parse()?,
            None => doc_to,
        };
        document.settings.shift = Shift::Keys { from, to };
    }

    let transposed: Melody = document.transposed()?;
    info!("transposed {} notes ({:?})", transposed.len(), document.settings.shift);

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", transposed))
                .with_context(|| format!("Error writing to '{}'", path.display()))?;
            eprintln!("Wrote transposed melody to {}", path.display());
        }
        None => println!("{}", transposed),
    }
    Ok(())
}
