//! Sound cues.
//!
//! The game never touches an audio device directly: a tick returns a [`Cue`],
//! and the app hands it to whichever [`AudioSink`] it owns.  Sounds are
//! decoded once at startup, either from the WAV files bundled into the binary
//! or from files named in the configuration, and every cue then plays on its
//! own detached sink so that overlapping cues mix instead of queueing.
use enum_map::{Enum, EnumMap};
use rodio::{
    buffer::SamplesBuffer, decoder::DecoderError, Decoder, OutputStream, OutputStreamHandle,
    Sink, Source,
};
use std::fmt;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

static BUNDLED_EAT: &[u8] = include_bytes!("../assets/eat.wav");
static BUNDLED_DEATH: &[u8] = include_bytes!("../assets/death.wav");

/// The events that make a sound
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Cue {
    Eat,
    Death,
}

impl Cue {
    fn bundled(self) -> &'static [u8] {
        match self {
            Cue::Eat => BUNDLED_EAT,
            Cue::Death => BUNDLED_DEATH,
        }
    }
}

/// A fully decoded sound
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Sound {
    channels: u16,
    sample_rate: u32,
    samples: Arc<[i16]>,
}

impl Sound {
    /// Read & decode the sound file at `path`
    pub(crate) fn from_file(path: &Path) -> Result<Sound, AudioError> {
        let data = fs_err::read(path)?;
        Sound::decode(&path.display().to_string(), Cursor::new(data))
    }

    fn decode<R>(name: &str, data: R) -> Result<Sound, AudioError>
    where
        R: Read + Seek + Send + Sync + 'static,
    {
        let decoder = Decoder::new(data).map_err(|source| AudioError::Decode {
            name: name.to_owned(),
            source,
        })?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples = decoder.collect::<Arc<[i16]>>();
        if channels == 0 || sample_rate == 0 || samples.is_empty() {
            return Err(AudioError::Empty {
                name: name.to_owned(),
            });
        }
        Ok(Sound {
            channels,
            sample_rate,
            samples,
        })
    }

    /// A fresh playable copy of the sound
    pub(crate) fn source(&self) -> SamplesBuffer<i16> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.to_vec())
    }
}

/// The sounds to play for each cue, loaded once at startup
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SoundBank(EnumMap<Cue, Sound>);

impl SoundBank {
    /// Load the sound for each cue from the given file, or from the bundled
    /// sound if no file is given.  Any file that can't be read or decoded is
    /// an error.
    pub(crate) fn load(eat: Option<&Path>, death: Option<&Path>) -> Result<SoundBank, AudioError> {
        let load = |cue: Cue, path: Option<&Path>| match path {
            Some(p) => Sound::from_file(p),
            None => Sound::decode(&format!("bundled {cue:?} sound"), Cursor::new(cue.bundled())),
        };
        Ok(SoundBank(EnumMap::from_array([
            load(Cue::Eat, eat)?,
            load(Cue::Death, death)?,
        ])))
    }

    pub(crate) fn get(&self, cue: Cue) -> &Sound {
        &self.0[cue]
    }
}

pub(crate) trait AudioSink {
    /// Start playing the sound for `cue`.  This must not block until the
    /// sound finishes, and may be called again while a sound is playing.
    fn play(&mut self, cue: Cue);
}

/// Plays sounds on the default audio output device
pub(crate) struct Speaker {
    // Playback stops when this is dropped
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: SoundBank,
}

impl Speaker {
    pub(crate) fn new(sounds: SoundBank) -> Result<Speaker, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Speaker {
            _stream: stream,
            handle,
            sounds,
        })
    }
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("sounds", &self.sounds)
            .finish_non_exhaustive()
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, cue: Cue) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(self.sounds.get(cue).source());
                sink.detach();
            }
            Err(e) => warn!(?cue, error = %e, "failed to play sound"),
        }
    }
}

/// Discards all cues
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

#[derive(Debug, Error)]
pub(crate) enum AudioError {
    #[error("failed to read sound file")]
    Read(#[from] std::io::Error),
    #[error("failed to decode {name}")]
    Decode {
        name: String,
        #[source]
        source: DecoderError,
    },
    #[error("{name} contains no audio")]
    Empty { name: String },
    #[error("failed to open audio output device")]
    Output(#[from] rodio::StreamError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn asset(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
    }

    #[test]
    fn load_bundled_sounds() {
        let bank = SoundBank::load(None, None).unwrap();
        for cue in [Cue::Eat, Cue::Death] {
            let sound = bank.get(cue);
            assert_eq!(sound.channels, 1);
            assert_eq!(sound.sample_rate, 22050);
            assert!(!sound.samples.is_empty());
        }
        assert!(bank.get(Cue::Death).samples.len() > bank.get(Cue::Eat).samples.len());
    }

    #[test]
    fn load_from_files() {
        let eat = asset("eat.wav");
        let death = asset("death.wav");
        let bank = SoundBank::load(Some(&eat), Some(&death)).unwrap();
        assert_eq!(bank, SoundBank::load(None, None).unwrap());
    }

    #[test]
    fn one_file_overrides_one_cue() {
        let eat = asset("death.wav");
        let bank = SoundBank::load(Some(&eat), None).unwrap();
        assert_eq!(bank.get(Cue::Eat), bank.get(Cue::Death));
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("eat.wav");
        assert!(matches!(
            SoundBank::load(Some(&path), None),
            Err(AudioError::Read(_))
        ));
    }

    #[test]
    fn undecodable_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"this is not a sound file").unwrap();
        tmp.flush().unwrap();
        assert!(matches!(
            SoundBank::load(None, Some(tmp.path())),
            Err(AudioError::Decode { .. })
        ));
    }

    #[test]
    fn source_plays_whole_sound() {
        let bank = SoundBank::load(None, None).unwrap();
        let sound = bank.get(Cue::Eat);
        let source = sound.source();
        assert_eq!(source.channels(), 1);
        assert_eq!(source.sample_rate(), 22050);
        assert_eq!(source.count(), sound.samples.len());
    }
}
