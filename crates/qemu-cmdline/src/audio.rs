//! Audio backends (`-audiodev`).

use camino::Utf8Path;

use crate::cmdline::QemuOption;

/// Host audio driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AudioDriver {
    /// Discard all audio.
    None,
    /// ALSA (Linux).
    Alsa,
    /// CoreAudio (macOS).
    Coreaudio,
    /// DirectSound (Windows).
    Dsound,
    /// Open Sound System.
    Oss,
    /// PulseAudio.
    Pa,
    /// PipeWire.
    Pipewire,
    /// SDL audio output.
    Sdl,
    /// Route audio over a SPICE session.
    Spice,
    /// Record output to a WAV file.
    Wav,
}

/// Builder for one `-audiodev` option.
#[derive(Debug, Clone)]
pub struct Audiodev {
    opt: QemuOption,
}

impl Audiodev {
    /// Declare an audio backend; the id is referenced by sound devices.
    pub fn new(driver: AudioDriver, id: impl Into<String>) -> Self {
        Self {
            opt: QemuOption::new("audiodev")
                .with_name(driver.to_string())
                .property("id", id.into()),
        }
    }

    /// Mixing timer period in microseconds.
    pub fn timer_period(mut self, us: u64) -> Self {
        self.opt = self.opt.property("timer-period", us);
        self
    }

    /// Playback sample frequency in Hz.
    pub fn out_frequency(mut self, hz: u32) -> Self {
        self.opt = self.opt.property("out.frequency", hz);
        self
    }

    /// Capture sample frequency in Hz.
    pub fn in_frequency(mut self, hz: u32) -> Self {
        self.opt = self.opt.property("in.frequency", hz);
        self
    }

    /// Output file for the wav driver.
    pub fn wav_path(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.opt = self.opt.property("path", path.as_ref());
        self
    }
}

impl From<Audiodev> for QemuOption {
    fn from(a: Audiodev) -> Self {
        a.opt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulseaudio_backend() {
        let opt = QemuOption::from(Audiodev::new(AudioDriver::Pa, "snd0").timer_period(5000));
        assert_eq!(opt.line(), "-audiodev pa,id=snd0,timer-period=5000");
    }

    #[test]
    fn test_wav_recording() {
        let opt = QemuOption::from(
            Audiodev::new(AudioDriver::Wav, "rec0")
                .out_frequency(44100)
                .wav_path("guest.wav"),
        );
        assert_eq!(
            opt.line(),
            "-audiodev wav,id=rec0,out.frequency=44100,path=guest.wav"
        );
    }
}
