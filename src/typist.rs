//! Report sequencer: one press/release frame pair per character.
//!
//! Each character moves through an explicit `Idle → PressSent → ReleaseSent
//! → Idle` cycle, fully drained before the next character starts. The two
//! sleeps are what make the stream reliable on the host side: the press-hold
//! lets the key-down edge register, and the longer release-settle stops the
//! host from coalescing two rapid presses of the same key.
//!
//! The whole pipeline is deliberately single threaded. Frames for one
//! character never interleave with another's, and the only suspension points
//! are the two timed delays.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::TypistError;
use crate::keymap::keymap;
use crate::report::{KeyReport, REPORT_LEN};

/// Inter-frame delays for one keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Key held down before release-all is sent
    pub press_hold: Duration,
    /// Pause after release-all before the next press; must exceed `press_hold`
    pub release_settle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            press_hold: Duration::from_millis(10),
            release_settle: Duration::from_millis(20),
        }
    }
}

/// Where the in-flight character stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    PressSent,
    ReleaseSent,
}

/// Owns the output sink for the duration of a typing session.
///
/// Dropping the typist releases the sink exactly once, on every exit path.
pub struct Typist<W: Write> {
    sink: W,
    timing: Timing,
    phase: Phase,
    cancel: Option<Arc<AtomicBool>>,
}

impl<W: Write> Typist<W> {
    /// Take exclusive ownership of `sink` for a session.
    ///
    /// Rejects timings where the release-settle window is not strictly
    /// longer than the press-hold.
    pub fn new(sink: W, timing: Timing) -> Result<Self, TypistError> {
        if timing.release_settle <= timing.press_hold {
            return Err(TypistError::InvalidTiming {
                press_hold: timing.press_hold,
                release_settle: timing.release_settle,
            });
        }
        Ok(Typist {
            sink,
            timing,
            phase: Phase::Idle,
            cancel: None,
        })
    }

    /// Cooperative cancellation, checked between characters only — never
    /// mid-delay and never between a press and its release.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    /// No character frames in flight
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Give the sink back after a session
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Type `text` one character at a time, in input order.
    ///
    /// Aborts on the first unsupported character before writing any frame
    /// for it, and on the first failed write. Returns the number of
    /// characters fully typed.
    pub fn type_str(&mut self, text: &str) -> Result<usize, TypistError> {
        self.type_str_with(text, |_| {})
    }

    /// Like [`type_str`](Self::type_str), invoking `on_key` after each fully
    /// drained character. Drives progress display without the sequencer
    /// knowing about terminals.
    pub fn type_str_with(
        &mut self,
        text: &str,
        mut on_key: impl FnMut(char),
    ) -> Result<usize, TypistError> {
        let mut typed = 0usize;
        for (position, ch) in text.chars().enumerate() {
            if let Some(flag) = &self.cancel {
                if flag.load(Ordering::Relaxed) {
                    debug!(typed, "typing cancelled");
                    return Err(TypistError::Cancelled { typed });
                }
            }
            let binding = keymap()
                .lookup(ch)
                .ok_or(TypistError::UnsupportedCharacter { ch, position })?;
            trace!(position, ?ch, keycode = binding.keycode, "keystroke");
            self.pulse(KeyReport::press(binding))?;
            typed += 1;
            on_key(ch);
        }
        Ok(typed)
    }

    /// Emit one full press/release pair and drain both timing windows
    fn pulse(&mut self, press: KeyReport) -> Result<(), TypistError> {
        self.write_frame(&press)?;
        self.phase = Phase::PressSent;
        thread::sleep(self.timing.press_hold);
        self.write_frame(&KeyReport::RELEASE)?;
        self.phase = Phase::ReleaseSent;
        thread::sleep(self.timing.release_settle);
        self.phase = Phase::Idle;
        Ok(())
    }

    /// One frame, one write call. A partial write is an I/O failure.
    fn write_frame(&mut self, report: &KeyReport) -> Result<(), TypistError> {
        let written = self.sink.write(report.as_bytes())?;
        if written != REPORT_LEN {
            return Err(TypistError::ShortWrite {
                written,
                expected: REPORT_LEN,
            });
        }
        Ok(())
    }
}
