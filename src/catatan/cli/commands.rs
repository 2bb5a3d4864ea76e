//! # Shell Loop
//!
//! - `run()`: parses flags, builds the session, then reads stdin one line at a time
//! - `init_context()`: config file, flag overrides, seed notes, API
//! - `handle_*()`: per-command-group handlers that call the API and return its `CmdResult`
//! - `redraw()`: board plus the messages of the last command
//!
//! Errors coming back from a board command (a position that does not exist, a confirm with no
//! dialog open) are printed as error messages and the shell keeps going. Only start-up errors
//! leave `run()` and end the process.

use super::render::{print_messages, render_board};
use super::setup::{
    get_command_help, get_grouped_help, parse_line, Cli, FormCommands, MiscCommands,
    NoteCommands, OverlayCommands, ShellCommand, ViewCommands,
};
use catatan::api::{CatatanApi, CmdMessage, CmdResult, Overlay};
use catatan::config::NotesConfig;
use catatan::error::Result;
use catatan::seed::load_seed;
use catatan::store::memory::MemoryStore;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "> ";

struct AppContext {
    api: CatatanApi<MemoryStore>,
    use_color: bool,
    interactive: bool,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    redraw(&ctx, &[]);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if ctx.interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Flow::Quit = handle_line(&mut ctx, &line) {
            break;
        }
    }

    ctx.api.teardown();
    info!("session ended");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CATATAN_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("catatan=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = load_config(cli.config_dir.as_deref())?;
    if let Some(max) = cli.max_title_length {
        config.max_title_length = max;
    }
    if let Some(max) = cli.max_body_length {
        config.max_body_length = max;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    colored::control::set_override(use_color);

    let mut store = MemoryStore::new();
    if let Some(path) = &cli.seed {
        load_seed(&mut store, path)?;
    }

    let api = CatatanApi::new(store, &config)?;
    debug!(?config, use_color, "session ready");

    Ok(AppContext {
        api,
        use_color,
        interactive: io::stdin().is_terminal(),
    })
}

/// `--config-dir` wins; otherwise the platform config dir, or plain defaults when there is none.
fn load_config(config_dir: Option<&Path>) -> Result<NotesConfig> {
    match config_dir {
        Some(dir) => NotesConfig::load(dir),
        None => match ProjectDirs::from("com", "catatan", "catatan") {
            Some(dirs) => NotesConfig::load(dirs.config_dir()),
            None => Ok(NotesConfig::default()),
        },
    }
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    let command = match parse_line(line) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            print!("{}", e.render());
            return Flow::Continue;
        }
    };

    ctx.api.tick();
    let outcome = match command {
        ShellCommand::Misc(MiscCommands::Quit) => return Flow::Quit,
        ShellCommand::Misc(MiscCommands::Help { command }) => {
            handle_help(command);
            return Flow::Continue;
        }
        ShellCommand::Overlay(cmd) => handle_overlay(ctx, cmd),
        _ if ctx.api.overlay().is_some() => handle_dropped(ctx),
        ShellCommand::Form(cmd) => handle_form(ctx, cmd),
        ShellCommand::View(cmd) => handle_view(ctx, cmd),
        ShellCommand::Note(cmd) => handle_note(ctx, cmd),
    };

    let messages = match outcome {
        Ok(result) => result.messages,
        Err(e) => vec![CmdMessage::error(e.to_string())],
    };

    ctx.api.tick();
    redraw(ctx, &messages);
    Flow::Continue
}

fn handle_form(ctx: &mut AppContext, cmd: FormCommands) -> Result<CmdResult> {
    match cmd {
        FormCommands::Title { words } => ctx.api.input_title(&words.join(" ")),
        FormCommands::Body { words } => ctx.api.input_body(&words.join(" ")),
        FormCommands::Submit => ctx.api.submit(),
    }
}

fn handle_view(ctx: &mut AppContext, cmd: ViewCommands) -> Result<CmdResult> {
    match cmd {
        ViewCommands::Filter { mode } => ctx.api.select_filter(mode.into()),
        ViewCommands::Search { words } => ctx.api.search(&words.join(" ")),
        ViewCommands::List => Ok(CmdResult::default()),
        ViewCommands::Theme { theme } => ctx.api.set_theme(theme.into()),
    }
}

fn handle_note(ctx: &mut AppContext, cmd: NoteCommands) -> Result<CmdResult> {
    match cmd {
        NoteCommands::Archive { index } => ctx.api.toggle_archive(index),
        NoteCommands::Delete { index } => ctx.api.request_delete(index),
    }
}

fn handle_overlay(ctx: &mut AppContext, cmd: OverlayCommands) -> Result<CmdResult> {
    match cmd {
        OverlayCommands::Confirm => ctx.api.confirm_delete(),
        OverlayCommands::Cancel => ctx.api.cancel_delete(),
        OverlayCommands::Ok => ctx.api.dismiss_notification(),
        OverlayCommands::Esc => ctx.api.press_escape(),
        OverlayCommands::Outside => ctx.api.click_outside(),
    }
}

/// A board command typed while an overlay is open lands on the backdrop.
fn handle_dropped(ctx: &mut AppContext) -> Result<CmdResult> {
    let closed = match ctx.api.overlay() {
        Some(Overlay::Notification) => "Popup",
        Some(Overlay::DeleteDialog) => "Dialog",
        None => return Ok(CmdResult::default()),
    };
    let mut result = ctx.api.click_outside()?;
    result.add_message(CmdMessage::warning(format!(
        "{} ditutup, perintah diabaikan",
        closed
    )));
    Ok(result)
}

fn handle_help(command: Option<String>) {
    match command {
        Some(name) => match get_command_help(&name) {
            Some(help) => print!("{}", help),
            None => print_messages(&[CmdMessage::error(format!(
                "Perintah tidak dikenal: {}",
                name
            ))]),
        },
        None => println!("{}", get_grouped_help()),
    }
}

fn redraw(ctx: &AppContext, messages: &[CmdMessage]) {
    let term = Term::stdout();
    if term.is_term() {
        if let Err(e) = term.clear_screen() {
            debug!(error = %e, "could not clear the screen");
        }
    }
    println!("{}", render_board(&ctx.api.view(), ctx.use_color));
    print_messages(messages);
}
