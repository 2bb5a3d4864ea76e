use catatan::config::Theme;
use catatan::model::FilterMode;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format for releases: "v0.1.0"
/// Format for dev builds: "v0.1.0\ndev: abc1234"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("CATATAN_GIT_HASH");
    const IS_RELEASE: &str = env!("CATATAN_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterChoice {
    All,
    Active,
    Archived,
}

impl From<FilterChoice> for FilterMode {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::All => FilterMode::All,
            FilterChoice::Active => FilterMode::Active,
            FilterChoice::Archived => FilterMode::Archived,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "catatan",
    bin_name = "catatan",
    version = get_version(),
    after_help = "Type `help` inside the shell for the list of board commands."
)]
#[command(about = "A session-only note board for the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// JSON file of notes to start the session with
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,

    /// Longest title the form accepts
    #[arg(long, value_name = "N", help_heading = "Options")]
    pub max_title_length: Option<usize>,

    /// Longest body the form accepts
    #[arg(long, value_name = "N", help_heading = "Options")]
    pub max_body_length: Option<usize>,

    /// Header palette
    #[arg(long, value_enum, help_heading = "Options")]
    pub theme: Option<ThemeChoice>,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "catatan",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Form(FormCommands),

    #[command(flatten)]
    View(ViewCommands),

    #[command(flatten)]
    Note(NoteCommands),

    #[command(flatten)]
    Overlay(OverlayCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum FormCommands {
    /// Type into the title field (replaces its value)
    #[command(alias = "t", display_order = 1)]
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Type into the body field (replaces its value)
    #[command(alias = "b", display_order = 2)]
    Body {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Press "Simpan Catatan"
    #[command(alias = "s", display_order = 3)]
    Submit,
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Click a filter button
    #[command(alias = "f", display_order = 10)]
    Filter {
        #[arg(value_enum)]
        mode: FilterChoice,
    },

    /// Type into the search box (no words clears it)
    #[command(alias = "find", display_order = 11)]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Redraw the board
    #[command(alias = "ls", display_order = 12)]
    List,

    /// Switch the header palette
    #[command(display_order = 13)]
    Theme {
        #[arg(value_enum)]
        theme: ThemeChoice,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Click the archive toggle of note N
    #[command(alias = "a", display_order = 20)]
    Archive { index: usize },

    /// Click the delete button of note N (asks for confirmation)
    #[command(alias = "rm", display_order = 21)]
    Delete { index: usize },
}

#[derive(Subcommand, Debug)]
pub enum OverlayCommands {
    /// Confirm the open delete dialog
    #[command(alias = "y", display_order = 30)]
    Confirm,

    /// Cancel the open delete dialog
    #[command(alias = "n", display_order = 31)]
    Cancel,

    /// Dismiss the "saved" popup
    #[command(display_order = 32)]
    Ok,

    /// Press Escape
    #[command(display_order = 33)]
    Esc,

    /// Click outside the open popup or dialog
    #[command(display_order = 34)]
    Outside,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show commands, or the usage of one command
    #[command(display_order = 40)]
    Help { command: Option<String> },

    /// Leave the shell
    #[command(aliases = ["q", "exit"], display_order = 41)]
    Quit,
}

/// Parses one shell line. Free text after `title`, `body` and `search` is kept exactly as typed,
/// including runs of spaces and surrounding whitespace.
pub fn parse_line(line: &str) -> Result<ShellLine, clap::Error> {
    let mut parsed = ShellLine::try_parse_from(line.split_whitespace())?;
    let text = free_text(line);
    match &mut parsed.command {
        ShellCommand::Form(FormCommands::Title { words })
        | ShellCommand::Form(FormCommands::Body { words })
        | ShellCommand::View(ViewCommands::Search { words }) => {
            *words = if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            };
        }
        _ => {}
    }
    Ok(parsed)
}

/// Everything after the command word and the single whitespace character that ends it.
fn free_text(line: &str) -> &str {
    let line = line.trim_start();
    match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((at, c)) => &line[at + c.len_utf8()..],
        None => "",
    }
}

fn groups() -> Vec<(&'static str, Command)> {
    vec![
        ("Formulir", FormCommands::augment_subcommands(Command::new("form"))),
        ("Tampilan", ViewCommands::augment_subcommands(Command::new("view"))),
        ("Catatan", NoteCommands::augment_subcommands(Command::new("note"))),
        (
            "Dialog & Popup",
            OverlayCommands::augment_subcommands(Command::new("overlay")),
        ),
        ("Lainnya", MiscCommands::augment_subcommands(Command::new("misc"))),
    ]
}

/// Board commands grouped by what they act on.
pub fn get_grouped_help() -> String {
    let mut out = String::new();
    for (heading, group) in groups() {
        out.push_str(heading);
        out.push('\n');
        for cmd in group.get_subcommands() {
            let mut names = vec![cmd.get_name().to_string()];
            names.extend(cmd.get_all_aliases().map(str::to_string));
            let about = cmd.get_about().map(|a| a.to_string()).unwrap_or_default();
            out.push_str(&format!("  {:<22}{}\n", names.join(", "), about));
        }
        out.push('\n');
    }
    out.push_str("help <command> shows the arguments of one command.");
    out
}

/// Usage of a single board command, looked up by name or alias.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut line = ShellLine::command();
    let cmd = line.find_subcommand_mut(name)?;
    Some(cmd.render_help().to_string())
}
