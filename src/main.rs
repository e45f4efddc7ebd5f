mod app;
mod audio;
mod background;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod menu;
mod render;
mod util;
use crate::app::App;
use crate::audio::{Silent, SoundBank, Speaker};
use crate::config::{Config, GameConfig};
use crate::game::Viewport;
use crate::util::Globals;
use anyhow::Context;
use crossterm::{execute, terminal::SetTitle};
use lexopt::{Arg, Parser};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

const USAGE: &str = "Usage: snake-game [-c|--config <FILE>] [--log-file <FILE>]";

const HELP: &str = "\
Usage: snake-game [<options>]

Play snake in your terminal

Options:
  -c <FILE>, --config <FILE>
                        Read configuration from the given file instead of the
                        default location

  --log-file <FILE>     Append log messages to the given file

  -h, --help            Display this help message and exit

  -V, --version         Show the program version and exit
";

fn main() -> ExitCode {
    let mode = match Mode::from_parser(Parser::from_env()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("snake-game: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    match mode {
        Mode::Help => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Mode::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Mode::Run(args) => ExitCode::from(exit_status(run(args))),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    logging::init(
        args.log_file.as_deref().or(config.log.file.as_deref()),
        &config.log.level,
    )?;
    let sounds = config
        .audio
        .load_sounds()
        .context("failed to load sounds")?;
    let terminal = ratatui::init();
    // After ratatui::init(), so game-thread panics still restore the terminal
    background::silence_background_panics();
    let r = play(terminal, config.game, sounds, config.audio.enabled);
    ratatui::restore();
    r
}

fn play<B: Backend>(
    terminal: Terminal<B>,
    settings: GameConfig,
    sounds: SoundBank,
    audio_enabled: bool,
) -> anyhow::Result<()> {
    execute!(io::stdout(), SetTitle(consts::TITLE))?;
    let viewport = initial_viewport(terminal.size()?, settings.cell_size())?;
    info!(
        width = viewport.width(),
        height = viewport.height(),
        audio_enabled,
        "Starting up"
    );
    let globals = Globals { settings, viewport };
    if audio_enabled {
        let speaker = Speaker::new(sounds).context("failed to initialize audio")?;
        App::new(globals, speaker).run(terminal)?;
    } else {
        App::new(globals, Silent).run(terminal)?;
    }
    Ok(())
}

fn initial_viewport(size: Size, cell_size: u16) -> anyhow::Result<Viewport> {
    Viewport::for_terminal(size, cell_size).with_context(|| {
        format!(
            "cannot play in a {}x{} terminal with a cell size of {cell_size}",
            size.width, size.height
        )
    })
}

fn exit_status(r: anyhow::Result<()>) -> u8 {
    match r {
        Ok(()) => 0,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            0
        }
        Err(e) => {
            eprintln!("snake-game: {e:?}");
            2
        }
    }
}
