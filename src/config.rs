use crate::audio::{AudioError, SoundBank};
use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Sound settings
    #[serde(default)]
    pub(crate) audio: AudioConfig,

    /// Logging settings
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snake-game").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Settings that stay fixed for the whole run of the program
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Snake movements per second; never zero
    tick_rate: u32,

    /// Width & height of a grid cell in logical pixels; never zero
    cell_size: u16,
}

impl GameConfig {
    pub(crate) fn tick_period(self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    pub(crate) fn cell_size(self) -> u16 {
        self.cell_size
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            tick_rate: consts::DEFAULT_TICK_RATE,
            cell_size: consts::DEFAULT_CELL_SIZE,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    tick_rate: u32,
    cell_size: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            tick_rate: consts::DEFAULT_TICK_RATE,
            cell_size: consts::DEFAULT_CELL_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidValue;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidValue> {
        if value.tick_rate == 0 {
            return Err(InvalidValue("tick-rate"));
        }
        if value.cell_size == 0 {
            return Err(InvalidValue("cell-size"));
        }
        Ok(GameConfig {
            tick_rate: value.tick_rate,
            cell_size: value.cell_size,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{0} must be greater than zero")]
pub(crate) struct InvalidValue(&'static str);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct AudioConfig {
    /// Whether to play sounds at all
    pub(crate) enabled: bool,

    /// WAV file to play when the snake eats, replacing the bundled sound
    pub(crate) eat: Option<PathBuf>,

    /// WAV file to play when the snake dies, replacing the bundled sound
    pub(crate) death: Option<PathBuf>,
}

impl AudioConfig {
    pub(crate) fn load_sounds(&self) -> Result<SoundBank, AudioError> {
        SoundBank::load(self.eat.as_deref(), self.death.as_deref())
    }
}

impl Default for AudioConfig {
    fn default() -> AudioConfig {
        AudioConfig {
            enabled: true,
            eat: None,
            death: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  Nothing is logged if this is not set.
    pub(crate) file: Option<PathBuf>,

    /// Filter directive used when `RUST_LOG` is not set
    pub(crate) level: String,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
