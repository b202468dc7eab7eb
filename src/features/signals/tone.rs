//! Synthesized audio cues.
//!
//! Cues are generated on demand as decaying sine tones rather than played
//! from bundled assets.

use std::f32::consts::PI;
use std::time::Duration;

/// Sample rate used for synthesized tones.
pub const SAMPLE_RATE: u32 = 44_100;

/// Which moment a tone marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A session started: short and high.
    Start,
    /// A focus session completed.
    FocusComplete,
    /// A break completed.
    BreakComplete,
}

impl Cue {
    /// The tone for this cue.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Start => Tone::new(880.0, Duration::from_millis(150), 0.3),
            Self::FocusComplete => Tone::new(523.25, Duration::from_millis(800), 0.3),
            Self::BreakComplete => Tone::new(659.25, Duration::from_millis(800), 0.3),
        }
    }
}

/// A single sine tone with an exponential fade-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency: f32,
    /// Length of the tone.
    pub duration: Duration,
    /// Peak amplitude, 0.0 to 1.0.
    pub volume: f32,
}

impl Tone {
    /// Create a tone.
    #[must_use]
    pub const fn new(frequency: f32, duration: Duration, volume: f32) -> Self {
        Self {
            frequency,
            duration,
            volume,
        }
    }

    /// Number of mono samples at `sample_rate`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f64() * f64::from(sample_rate)).round() as usize
    }

    /// Mono samples of the tone.
    #[must_use]
    pub fn samples(&self, sample_rate: u32) -> ToneSamples {
        ToneSamples {
            tone: *self,
            sample_rate,
            index: 0,
            len: self.sample_count(sample_rate),
        }
    }
}

/// Iterator over a tone's samples.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    tone: Tone,
    sample_rate: u32,
    index: usize,
    len: usize,
}

/// Envelope floor reached at the end of a tone (about -80 dB).
const FADE_FLOOR: f32 = 0.0001;

impl Iterator for ToneSamples {
    type Item = f32;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f32> {
        if self.index >= self.len {
            return None;
        }
        let t = self.index as f32 / self.sample_rate as f32;
        let progress = self.index as f32 / self.len as f32;
        // exponential ramp from volume down to FADE_FLOOR
        let envelope = self.tone.volume * (FADE_FLOOR / self.tone.volume.max(FADE_FLOOR)).powf(progress);
        self.index += 1;
        Some((2.0 * PI * self.tone.frequency * t).sin() * envelope)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

/// Plays cues. Implementations must never fail loudly.
#[cfg_attr(test, mockall::automock)]
pub trait Chime {
    /// Play `cue`, logging and swallowing any failure.
    fn play(&self, cue: Cue);
}

/// A chime that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self, _cue: Cue) {}
}

#[cfg(feature = "audio")]
pub use rodio_chime::RodioChime;

#[cfg(feature = "audio")]
mod rodio_chime {
    use std::thread;
    use std::time::Duration;

    use rodio::{OutputStream, Sink, Source};
    use tracing::{debug, warn};

    use super::{Chime, Cue, ToneSamples, SAMPLE_RATE};

    impl Source for ToneSamples {
        fn current_frame_len(&self) -> Option<usize> {
            Some(self.len - self.index)
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn total_duration(&self) -> Option<Duration> {
            Some(self.tone.duration)
        }
    }

    /// Plays cues on the default output device.
    ///
    /// Each cue plays on its own short-lived thread so callers never wait.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RodioChime;

    impl Chime for RodioChime {
        fn play(&self, cue: Cue) {
            let spawned = thread::Builder::new()
                .name("studytimer-chime".to_string())
                .spawn(move || {
                    let (_stream, handle) = match OutputStream::try_default() {
                        Ok(pair) => pair,
                        Err(e) => {
                            warn!(error = %e, "audio output unavailable");
                            return;
                        }
                    };
                    let sink = match Sink::try_new(&handle) {
                        Ok(sink) => sink,
                        Err(e) => {
                            warn!(error = %e, "failed to create audio sink");
                            return;
                        }
                    };
                    debug!(?cue, "playing cue");
                    sink.append(cue.tone().samples(SAMPLE_RATE));
                    sink.sleep_until_end();
                });
            if let Err(e) = spawned {
                warn!(error = %e, "failed to spawn audio thread");
            }
        }
    }
}
