//! Keystroke synthesis: text -> timed xte event sequence.
//!
//! The synthesizer walks the input line by line and character by character,
//! batching characters the injector can type verbatim into literal runs and
//! consulting the `keymap` table for everything else. Every emitted key event
//! is followed by an explicit pause; remote input injection is rate-limited
//! by the target's event processing, and the pauses are what keep the replay
//! below that threshold. The accumulated pause total is the replay duration
//! estimate reported to the operator.

use crate::keymap::{special_key, KeyAction};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Base pause after a flushed literal run, in seconds, before rate scaling.
pub const LITERAL_FLUSH_DELAY: f64 = 0.08;
/// Base pause after a named key or chord, in seconds, before rate scaling.
pub const SPECIAL_KEY_DELAY: f64 = 0.05;
/// Base pause after each terminating Return, in seconds, before rate scaling.
pub const LINE_END_DELAY: f64 = 0.10;

/// One instruction in a keystroke-injection script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A maximal span of characters typed verbatim as one `str` instruction.
    LiteralRun(String),
    /// A single named keysym press.
    NamedKey(&'static str),
    /// A base key bracketed by a modifier press and release.
    ChordPress {
        modifier: &'static str,
        key: &'static str,
    },
    /// A timed pause, in microseconds.
    Sleep(u64),
}

/// Tunables for one synthesis run.
///
/// Passed explicitly into `synthesize` so the synthesizer holds no
/// process-wide state and tests can inject exact parameters.
#[derive(Debug, Clone, Copy)]
pub struct SynthConfig {
    /// Pause before any keystrokes are sent, giving the operator time to
    /// focus the target window. Not scaled by `rate_multiplier`.
    pub focus_delay: f64,
    /// Multiplier applied to every inter-event pause.
    pub rate_multiplier: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            focus_delay: 10.0,
            rate_multiplier: 2.0,
        }
    }
}

/// The pending literal-run accumulator.
///
/// Two states with a single flush transition, triggered by a mapped character
/// or by end of line.
enum RunState {
    Idle,
    Accumulating(String),
}

impl RunState {
    fn push(&mut self, c: char) {
        match self {
            RunState::Idle => *self = RunState::Accumulating(c.to_string()),
            RunState::Accumulating(buffer) => buffer.push(c),
        }
    }

    /// Takes the buffered run, returning to `Idle`. `None` when nothing is
    /// pending, so callers emit no empty `str` instruction and no flush pause.
    fn flush(&mut self) -> Option<String> {
        match std::mem::replace(self, RunState::Idle) {
            RunState::Idle => None,
            RunState::Accumulating(buffer) => Some(buffer),
        }
    }
}

/// The result of one synthesis run: the ordered event sequence plus the exact
/// replay duration it implies.
#[derive(Debug)]
pub struct Synthesis {
    pub events: Vec<KeyEvent>,
    /// Sum of every `Sleep` in `events`, including the initial focus delay.
    pub total_micros: u64,
}

impl Synthesis {
    pub fn total_seconds(&self) -> f64 {
        self.total_micros as f64 / MICROS_PER_SECOND
    }

    /// Serializes the event sequence into the xte line format, one
    /// instruction per line. Chords expand to their three sub-instructions;
    /// a bare `key` press cannot reproduce a shifted character.
    pub fn render(&self) -> String {
        let mut script = String::new();

        for event in &self.events {
            match event {
                KeyEvent::LiteralRun(text) => {
                    script.push_str("str ");
                    script.push_str(text);
                    script.push('\n');
                }
                KeyEvent::NamedKey(name) => {
                    script.push_str("key ");
                    script.push_str(name);
                    script.push('\n');
                }
                KeyEvent::ChordPress { modifier, key } => {
                    script.push_str("keydown ");
                    script.push_str(modifier);
                    script.push('\n');
                    script.push_str("key ");
                    script.push_str(key);
                    script.push('\n');
                    script.push_str("keyup ");
                    script.push_str(modifier);
                    script.push('\n');
                }
                KeyEvent::Sleep(micros) => {
                    script.push_str(&format!("usleep {}\n", micros));
                }
            }
        }

        script
    }

    /// Human-readable duration breakdown for operator planning.
    pub fn human_duration(&self) -> String {
        let seconds = self.total_seconds();
        format!(
            "{:.1} seconds ({:.1} minutes / {:.1} hours)",
            seconds,
            seconds / 60.0,
            seconds / 3600.0
        )
    }
}

/// Event-sequence builder accumulating the timing budget alongside.
struct Synthesizer {
    events: Vec<KeyEvent>,
    total_micros: u64,
    rate_multiplier: f64,
}

impl Synthesizer {
    /// Emits a pause of `base_seconds * rate_multiplier`, rounded to whole
    /// microseconds. The budget accumulates the rounded value so the estimate
    /// matches what a replaying agent observes, bit for bit.
    fn pause(&mut self, base_seconds: f64) {
        let micros = (base_seconds * self.rate_multiplier * MICROS_PER_SECOND).round() as u64;
        self.total_micros += micros;
        self.events.push(KeyEvent::Sleep(micros));
    }

    /// Emits the unscaled focus pause.
    fn focus_pause(&mut self, seconds: f64) {
        let micros = (seconds * MICROS_PER_SECOND).round() as u64;
        self.total_micros += micros;
        self.events.push(KeyEvent::Sleep(micros));
    }

    fn flush_run(&mut self, run: &mut RunState) {
        if let Some(buffer) = run.flush() {
            self.events.push(KeyEvent::LiteralRun(buffer));
            self.pause(LITERAL_FLUSH_DELAY);
        }
    }
}

/// Converts `text` into the ordered event sequence that reproduces it when
/// replayed by an input-injection tool.
///
/// Per line: characters absent from the special-key table accumulate into a
/// pending literal run; a mapped character first flushes the pending run
/// (with its flush pause), then emits its own named key or chord (with the
/// special-key pause). End of line flushes the remainder and appends the
/// terminating Return with the line-end pause. A single focus pause precedes
/// everything.
///
/// Lines are delimited by the host text convention (`str::lines`, which also
/// strips a trailing `\r`); an empty line yields only its Return. A lone
/// `\r` not followed by `\n` is not a line boundary and passes through
/// inside a literal run like any other unmapped character. Characters
/// outside the table that are not ASCII-printable are passed through inside
/// literal runs unmodified, with no transliteration.
pub fn synthesize(text: &str, config: &SynthConfig) -> Synthesis {
    let mut synth = Synthesizer {
        events: Vec::new(),
        total_micros: 0,
        rate_multiplier: config.rate_multiplier,
    };

    synth.focus_pause(config.focus_delay);

    for line in text.lines() {
        let mut run = RunState::Idle;

        for c in line.chars() {
            match special_key(c) {
                None => run.push(c),
                Some(action) => {
                    synth.flush_run(&mut run);
                    match action {
                        KeyAction::Named(name) => synth.events.push(KeyEvent::NamedKey(name)),
                        KeyAction::Chord { modifier, key } => {
                            synth.events.push(KeyEvent::ChordPress { modifier, key })
                        }
                    }
                    synth.pause(SPECIAL_KEY_DELAY);
                }
            }
        }

        synth.flush_run(&mut run);
        synth.events.push(KeyEvent::NamedKey("Return"));
        synth.pause(LINE_END_DELAY);
    }

    Synthesis {
        events: synth.events,
        total_micros: synth.total_micros,
    }
}
