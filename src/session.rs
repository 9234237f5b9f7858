//! The top-level menu, the registry of modes it offers, and process startup.

use std::fs;
use std::io::{self, BufRead, Write};

use tracing::info;

use crate::cli::{is_sentinel, Args, MENU_SENTINELS};
use crate::config::Config;
use crate::drafts::DraftWriter;
use crate::errors::OmneuroError;
use crate::logging;
use crate::openai::{ChatCompletion, OpenAiClient};
use crate::paralegal::paralegal_loop;

pub const BANNER: &str = "Omneuro - Multi-Mode Assistant (type 'exit' to quit)\n";
pub const MENU_PROMPT: &str = "\nMode > ";

/// Services shared by every mode.
pub struct ModeContext<'a> {
    pub client: &'a dyn ChatCompletion,
    pub drafts: &'a DraftWriter,
}

/// Entry point of a mode. Returns when the user leaves the mode.
pub type ModeEntry =
    fn(&ModeContext<'_>, &mut dyn BufRead, &mut dyn Write) -> Result<(), OmneuroError>;

/// A selectable interaction flow
#[derive(Clone, Copy)]
pub struct Mode {
    pub name: &'static str,
    pub entry: ModeEntry,
}

/// Modes keyed by the character typed to select them, in registration order.
/// Keys are case-insensitive.
#[derive(Clone, Default)]
pub struct ModeRegistry {
    modes: Vec<(char, Mode)>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mode shipped with the binary.
    pub fn with_defaults() -> Self {
        Self::new().register(
            '1',
            Mode {
                name: "Paralegal Mode",
                entry: paralegal_loop,
            },
        )
    }

    /// Add a mode. A key that is already taken is reassigned to the new mode.
    pub fn register(mut self, key: char, mode: Mode) -> Self {
        let key = key.to_ascii_lowercase();
        match self.modes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = mode,
            None => self.modes.push((key, mode)),
        }
        self
    }

    /// Look up the mode for a typed selection such as `"1"`.
    pub fn get(&self, choice: &str) -> Option<&Mode> {
        let mut chars = choice.trim().chars();
        let key = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        self.modes.iter().find(|(k, _)| *k == key).map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Mode)> {
        self.modes.iter().map(|(k, m)| (*k, m))
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Print `prompt` and read one line. `None` means the input is exhausted.
pub fn read_line(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show the menu until the user quits. End of input counts as quitting.
pub fn run_menu(
    registry: &ModeRegistry,
    ctx: &ModeContext<'_>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), OmneuroError> {
    writeln!(output, "{}", BANNER)?;
    loop {
        writeln!(output, "Select a mode:")?;
        for (key, mode) in registry.iter() {
            writeln!(output, "  {}. {}", key, mode.name)?;
        }

        let choice = match read_line(input, output, MENU_PROMPT)? {
            Some(choice) => choice,
            None => {
                writeln!(output)?;
                break;
            }
        };
        if is_sentinel(&choice, &MENU_SENTINELS) {
            break;
        }

        match registry.get(&choice) {
            Some(mode) => {
                writeln!(output, "\nSwitching to {}...\n", mode.name)?;
                info!(mode = mode.name, "entering mode");
                (mode.entry)(ctx, input, output)?;
                info!(mode = mode.name, "left mode");
                writeln!(output, "\nReturning to the mode menu.\n")?;
            }
            None => writeln!(output, "Invalid choice. Try again.\n")?,
        }
    }

    writeln!(output, "Bye.")?;
    info!("exiting");
    Ok(())
}

/// Create the drafts root and the logs directory.
pub fn bootstrap(config: &Config) -> Result<(), OmneuroError> {
    for dir in [&config.drafts_dir, &config.logs_dir] {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Start Omneuro on the process console
pub fn run(args: &Args) -> Result<(), OmneuroError> {
    let config = Config::from_args(args)?;
    bootstrap(&config)?;
    let _guard = logging::init(&config.logs_dir)?;
    info!(
        model = %config.model,
        drafts = %config.drafts_dir.display(),
        "starting omneuro"
    );

    let client = OpenAiClient::new(&config)?;
    let drafts = DraftWriter::new(&config.drafts_dir);
    let ctx = ModeContext {
        client: &client,
        drafts: &drafts,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_menu(&ModeRegistry::with_defaults(), &ctx, &mut input, &mut output)
}
