//! `chordline` command-line interface.
//!
//! Aligns a single chord/lyric pair or converts a whole chart.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use chordline::error::{Error, Result};
use chordline::{convert_chart, convert_file, ChordAligner, ColumnMode, Config, SplitStyle};

/// chordline - move chart chords inline as ^{Chord} annotations
#[derive(Parser)]
#[command(name = "chordline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word split style when two chords land in one word (hyphen, space)
    #[arg(long, global = true)]
    split_style: Option<SplitStyle>,

    /// Column counting (chars, width)
    #[arg(long, global = true)]
    column_mode: Option<ColumnMode>,

    /// Longest chord line accepted, in characters
    #[arg(long, global = true)]
    max_line_len: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Align one chord line onto one lyric line
    Align {
        /// Chord line (read from stdin when omitted)
        #[arg(long, allow_hyphen_values = true)]
        chords: Option<String>,

        /// Lyric line (read from stdin when omitted)
        #[arg(long, allow_hyphen_values = true)]
        lyrics: Option<String>,

        /// Print the aligned pieces as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Convert a whole chart of chord and lyric lines
    Convert {
        /// Chart file (stdin when omitted)
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Config::load().and_then(|base| {
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        run(cli, base, &mut input, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, base: Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let config = resolve_config(&cli, base)?;

    match cli.command {
        Commands::Align {
            chords,
            lyrics,
            json,
        } => {
            let chords = match chords {
                Some(line) => line,
                None => read_line(input)?,
            };
            let lyrics = match lyrics {
                Some(line) => line,
                None => read_line(input)?,
            };

            let line = ChordAligner::new(config).align(&chords, &lyrics)?;
            let rendered = if json {
                serde_json::to_string(line.pieces())
                    .map_err(|e| Error::Msg(format!("JSON encoding failed: {e}")))?
            } else {
                line.to_string()
            };

            writeln!(out, "{rendered}")?;
        }
        Commands::Convert {
            input: path,
            output,
        } => {
            let converted = match &path {
                Some(path) => convert_file(path, &config)?,
                None => {
                    let mut text = String::new();
                    input.read_to_string(&mut text)?;
                    convert_chart(&text, &config)?
                }
            };

            match &output {
                Some(path) => {
                    fs_err::write(path, converted)
                        .map_err(|e| Error::io(e, path.clone()))?;
                }
                None => out.write_all(converted.as_bytes())?,
            }
        }
    }

    Ok(())
}

/// Command-line overrides on top of the environment and `.env` settings.
fn resolve_config(cli: &Cli, base: Config) -> Result<Config> {
    let mut config = base;

    if let Some(style) = cli.split_style {
        config.split_style = style;
    }
    if let Some(mode) = cli.column_mode {
        config.column_mode = mode;
    }
    if let Some(len) = cli.max_line_len {
        config = config.with_max_line_len(len)?;
    }

    Ok(config)
}

/// Read one line, without its terminator. End of input reads as an empty line.
fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
