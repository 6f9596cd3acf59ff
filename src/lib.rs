//! Text typing through a Linux USB HID keyboard gadget.
//!
//! Translates ASCII payloads into 8-byte keyboard input reports and writes
//! them to a gadget endpoint node (`/dev/hidg0` by default) with timed
//! press/release pulses, so the host on the other end of the cable sees
//! ordinary keystrokes.

pub mod error;
pub mod gadget;
pub mod keymap;
pub mod report;
pub mod typist;

pub use error::TypistError;
pub use gadget::{Gadget, DEFAULT_DEVICE};
pub use keymap::{keymap, Binding, Keymap, Modifier};
pub use report::{KeyReport, REPORT_LEN};
pub use typist::{Timing, Typist};
