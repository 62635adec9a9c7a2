use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Cursor};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::{anyhow, Result};
use log::{error, warn};
use rodio::{Decoder, OutputStream, Sink, Source};

/// Logical sound identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sound {
    /// Background chiptune, looped for the whole session.
    Music,
    /// Played once per collected virus.
    Cough,
}

pub struct SoundInfo {
    pub sound: Sound,
    pub path: &'static str,
    pub looped: bool,
}

/// All sound definitions.
///
/// Paths are relative to the repository root; we expect to be run from
/// the workspace root so that these assets can be found.
pub const ALL_SOUNDS: &[SoundInfo] = &[
    SoundInfo {
        sound: Sound::Music,
        path: "assets/sounds/8-bit.wav",
        looped: true,
    },
    SoundInfo {
        sound: Sound::Cough,
        path: "assets/sounds/man-coughing.wav",
        looped: false,
    },
];

struct SoundThread {
    receiver: Receiver<Sound>,
    sound_files: HashMap<Sound, Vec<u8>>,
}

impl SoundThread {
    fn new(receiver: Receiver<Sound>) -> Option<Self> {
        let mut sound_files = HashMap::new();

        for info in ALL_SOUNDS.iter() {
            match fs::read(info.path) {
                Ok(bytes) => {
                    sound_files.insert(info.sound, bytes);
                }
                Err(e) => {
                    warn!("Failed to load sound {:?} from {}: {e}", info.sound, info.path);
                }
            }
        }

        if sound_files.is_empty() {
            warn!("No sound files could be loaded, disabling audio");
            return None;
        }

        Some(Self {
            receiver,
            sound_files,
        })
    }

    fn run(self) {
        // Keep the stream alive as long as the audio thread runs.
        let Ok((stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };
        let _stream = stream;

        // The looping music keeps its sink; effects play on detached
        // sinks so several can overlap without blocking the channel.
        let mut music: Option<Sink> = None;

        loop {
            match self.receiver.recv() {
                Ok(sound) => {
                    let Some(bytes) = self.sound_files.get(&sound) else {
                        warn!("No audio data for sound {sound:?}");
                        continue;
                    };
                    let reader = BufReader::new(Cursor::new(bytes.clone()));
                    let source = match Decoder::new(reader) {
                        Ok(source) => source,
                        Err(e) => {
                            error!("Failed to decode sound {sound:?}: {e}");
                            continue;
                        }
                    };
                    let sink = match Sink::try_new(&stream_handle) {
                        Ok(sink) => sink,
                        Err(e) => {
                            error!("Failed to create audio sink for {sound:?}: {e}");
                            continue;
                        }
                    };

                    let looped = ALL_SOUNDS
                        .iter()
                        .find(|info| info.sound == sound)
                        .map(|info| info.looped)
                        .unwrap_or(false);
                    if looped {
                        sink.append(source.repeat_infinite());
                        // replacing the sink stops any previous loop
                        music = Some(sink);
                    } else {
                        sink.append(source);
                        sink.detach();
                    }
                }
                Err(e) => {
                    warn!("Audio channel closed: {e}");
                    break;
                }
            }
        }

        drop(music);
    }
}

/// Handle living on the game thread; playback requests are handed off
/// to the audio thread and never block a tick.
pub struct SoundManager {
    sender: Sender<Sound>,
}

impl SoundManager {
    /// Try to start the audio thread and create a new manager.
    ///
    /// If audio initialization fails (e.g. no sound files, no output
    /// device), this returns `None` and the game runs silently.
    pub fn new() -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Sound>();

        let Some(sound_thread) = SoundThread::new(receiver) else {
            return None;
        };

        if let Err(e) = thread::Builder::new()
            .name("superspreader_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    /// Queue a sound for playback. Fire-and-forget: the only failure
    /// is a dead audio thread, which the caller logs and ignores.
    pub fn play(&self, sound: Sound) -> Result<()> {
        self.sender
            .send(sound)
            .map_err(|_| anyhow!("audio thread has shut down"))
    }
}
