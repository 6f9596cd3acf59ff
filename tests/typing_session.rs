//! End-to-end typing sessions against an in-memory sink.
//!
//! Exercises the public library surface the way the CLI drives it: look the
//! payload up character by character, emit press/release frame pairs in
//! input order, abort cleanly on unsupported input or cancellation.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gadget_typist::{keymap, Timing, Typist, TypistError, REPORT_LEN};

fn fast() -> Timing {
    Timing {
        press_hold: Duration::ZERO,
        release_settle: Duration::from_nanos(1),
    }
}

/// Records each write call as its own frame, so frame boundaries (one write
/// per report) stay observable.
#[derive(Default)]
struct FrameLog {
    frames: Vec<Vec<u8>>,
}

impl Write for FrameLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.frames.push(buf.to_vec());
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn full_payload_round_trip() {
    let text = "Hello, World!\n";
    let mut typist = Typist::new(FrameLog::default(), fast()).unwrap();
    let typed = typist.type_str(text).unwrap();
    assert_eq!(typed, text.chars().count());
    assert!(typist.is_idle());

    let log = typist.into_inner();
    assert_eq!(log.frames.len(), 2 * text.chars().count());

    for (i, ch) in text.chars().enumerate() {
        let binding = keymap().lookup(ch).unwrap();
        let press = &log.frames[2 * i];
        let release = &log.frames[2 * i + 1];

        assert_eq!(press.len(), REPORT_LEN);
        assert_eq!(press[0], binding.modifier as u8, "modifier for {ch:?}");
        assert_eq!(press[1], 0);
        assert_eq!(press[2], binding.keycode, "keycode for {ch:?}");
        assert!(press[3..].iter().all(|&b| b == 0));

        assert_eq!(release, &vec![0u8; REPORT_LEN]);
    }
}

#[test]
fn each_write_is_exactly_one_report() {
    let mut typist = Typist::new(FrameLog::default(), fast()).unwrap();
    typist.type_str("abc").unwrap();
    let log = typist.into_inner();
    assert!(log.frames.iter().all(|f| f.len() == REPORT_LEN));
}

#[test]
fn cancellation_between_characters_drains_the_pair_in_flight() {
    let mut typist = Typist::new(FrameLog::default(), fast()).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    typist.set_cancel_flag(Arc::clone(&cancel));

    let mut seen = 0usize;
    let result = typist.type_str_with("abcdef", |_| {
        seen += 1;
        if seen == 3 {
            cancel.store(true, Ordering::Relaxed);
        }
    });

    match result {
        Err(TypistError::Cancelled { typed }) => assert_eq!(typed, 3),
        other => panic!("expected Cancelled, got {other:?}"),
    }

    // Exactly three complete press/release pairs, nothing half-flushed
    let log = typist.into_inner();
    assert_eq!(log.frames.len(), 6);
    assert_eq!(log.frames[5], vec![0u8; REPORT_LEN]);
}

#[test]
fn crlf_line_endings_type_enter_twice() {
    let mut typist = Typist::new(FrameLog::default(), fast()).unwrap();
    typist.type_str("a\r\nb").unwrap();
    let log = typist.into_inner();
    assert_eq!(log.frames.len(), 8);
    // Both halves of the CRLF press the Enter key
    assert_eq!(log.frames[2][2], 0x28);
    assert_eq!(log.frames[4][2], 0x28);
}

#[test]
fn empty_payload_is_a_successful_no_op() {
    let mut typist = Typist::new(FrameLog::default(), fast()).unwrap();
    assert_eq!(typist.type_str("").unwrap(), 0);
    assert!(typist.into_inner().frames.is_empty());
}
