//! Sound cues
//!
//! The simulation never talks to audio directly. It raises `GameEvent`s;
//! the frame driver maps the interesting ones to a `SoundEffect` and hands
//! them to an `AudioSink`. Playback is fire-and-forget: no return value, no
//! waiting, and a missing backend just means silence.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Hazard stomped
    Kill,
    /// Flag collected
    FlagCollect,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// One oscillator note with an exponential fade-out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Start frequency (Hz)
    pub start_hz: f32,
    /// End frequency (Hz), equal to `start_hz` for a flat note
    pub end_hz: f32,
    /// Seconds after the cue fires
    pub delay: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
    /// Peak gain before master volume
    pub gain: f32,
}

const JUMP_TONES: [Tone; 1] = [Tone {
    start_hz: 200.0,
    end_hz: 200.0,
    delay: 0.0,
    duration: 0.1,
    waveform: Waveform::Square,
    gain: 0.05,
}];

const KILL_TONES: [Tone; 1] = [Tone {
    start_hz: 400.0,
    end_hz: 100.0,
    delay: 0.0,
    duration: 0.3,
    waveform: Waveform::Sawtooth,
    gain: 0.1,
}];

// C then E
const FLAG_TONES: [Tone; 2] = [
    Tone {
        start_hz: 523.0,
        end_hz: 523.0,
        delay: 0.0,
        duration: 0.2,
        waveform: Waveform::Sine,
        gain: 0.08,
    },
    Tone {
        start_hz: 659.0,
        end_hz: 659.0,
        delay: 0.1,
        duration: 0.2,
        waveform: Waveform::Sine,
        gain: 0.08,
    },
];

impl SoundEffect {
    /// Notes that make up this cue
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::Jump => &JUMP_TONES,
            SoundEffect::Kill => &KILL_TONES,
            SoundEffect::FlagCollect => &FLAG_TONES,
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::HazardDefeated => Some(SoundEffect::Kill),
            GameEvent::MarkerCollected { .. } => Some(SoundEffect::FlagCollect),
            _ => None,
        }
    }
}

/// Receiver of sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Something that can actually make noise
pub trait ToneOutput {
    fn emit(&mut self, tone: &Tone, volume: f32);
}

/// Output that only traces what would have played
#[derive(Debug, Default)]
pub struct LogToneOutput;

impl ToneOutput for LogToneOutput {
    fn emit(&mut self, tone: &Tone, volume: f32) {
        log::trace!(
            "tone {:?} {}->{} Hz for {}s at {:.3}",
            tone.waveform,
            tone.start_hz,
            tone.end_hz,
            tone.duration,
            tone.gain * volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<Box<dyn ToneOutput>>,
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(output: Option<Box<dyn ToneOutput>>) -> Self {
        if output.is_none() {
            log::warn!("No audio output - sound disabled");
        }
        Self {
            output,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Manager with no output at all
    pub fn silent() -> Self {
        Self {
            output: None,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(output) = self.output.as_mut() else {
            return;
        };
        for tone in effect.tones() {
            output.emit(tone, vol);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(f32, f32)>>>);

    impl ToneOutput for Recorder {
        fn emit(&mut self, tone: &Tone, volume: f32) {
            self.0.borrow_mut().push((tone.start_hz, volume));
        }
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jumped), Some(SoundEffect::Jump));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::HazardDefeated),
            Some(SoundEffect::Kill)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::MarkerCollected { value: 1, points: 100 }),
            Some(SoundEffect::FlagCollect)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PlayerHit { lives_left: 2 }),
            None
        );
    }

    #[test]
    fn test_flag_cue_is_a_two_note_chime() {
        let tones = SoundEffect::FlagCollect.tones();
        assert_eq!(tones.len(), 2);
        assert!(tones[1].start_hz > tones[0].start_hz);
        assert!(tones[1].delay > 0.0);
    }

    #[test]
    fn test_plays_through_output() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Some(Box::new(recorder.clone())));
        audio.set_master_volume(0.5);
        audio.play(SoundEffect::Kill);
        assert_eq!(*recorder.0.borrow(), vec![(400.0, 0.5)]);
    }

    #[test]
    fn test_muted_is_silent() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Some(Box::new(recorder.clone())));
        audio.set_muted(true);
        audio.play(SoundEffect::Jump);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_missing_output_is_a_noop() {
        let mut audio = AudioManager::silent();
        audio.play(SoundEffect::FlagCollect);
        assert!(!audio.is_muted());
    }
}
