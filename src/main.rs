//! Quill binary: CLI parsing, logging setup, and session wiring.

use clap::Parser;
use crossbeam_channel::bounded;
use quill::{Document, Editor, EditorConfig, EditorEvent, InputActor, Screen, TerminalSession};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// A modal terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about)]
struct Args {
    /// File to edit (created if it does not exist).
    path: PathBuf,

    /// Write logs to this file (stdout belongs to the editor UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            if let Ok(file) = std::fs::File::create(path) {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(file)
                    .with_ansi(false)
                    .init();
            }
        }
        None => {
            // No log sink configured: drop everything rather than write
            // into the terminal the renderer owns.
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_file.as_ref());

    let document = match Document::open(&args.path) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("quill: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = EditorConfig::default();
    let mut editor = Editor::new(document, config.clone());

    let result = {
        let _session = match TerminalSession::acquire() {
            Ok(session) => session,
            Err(e) => {
                eprintln!("quill: failed to set up terminal: {e}");
                return ExitCode::FAILURE;
            }
        };

        let (width, height) = TerminalSession::size().unwrap_or((80, 24));
        let mut screen = Screen::new(width, height);

        let (event_tx, event_rx) = bounded::<EditorEvent>(64);
        let input = InputActor::spawn(event_tx, config.poll_timeout);

        let run = editor.run(&event_rx, &mut screen, &mut std::io::stdout());
        // Unblock the input thread if it is mid-send, then wait for it.
        drop(event_rx);
        input.join();
        run
        // Session drops here, restoring the terminal before any error
        // output below.
    };

    if let Err(e) = result {
        error!(%e, "session ended with error");
        eprintln!("quill: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
