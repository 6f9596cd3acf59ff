//! 8-byte HID keyboard report frames.
//!
//! Wire layout: `[modifier, reserved, key0, key1..key5]`. Only slot `key0`
//! is ever populated — the sequencer models a single key at a time — so
//! bytes 3..=7 stay zero in every frame this crate emits.

use crate::keymap::Binding;

/// Wire size of every keyboard report
pub const REPORT_LEN: usize = 8;

/// One keyboard input report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReport([u8; REPORT_LEN]);

impl KeyReport {
    /// All keys up, no modifiers. Sent after every press so neither the key
    /// nor the shift bit can stick on the host.
    pub const RELEASE: KeyReport = KeyReport([0; REPORT_LEN]);

    /// Key-down report for a binding
    pub fn press(binding: Binding) -> Self {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[0] = binding.modifier as u8;
        bytes[2] = binding.keycode;
        KeyReport(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Binding, Modifier};

    #[test]
    fn press_frame_layout() {
        let report = KeyReport::press(Binding {
            modifier: Modifier::LeftShift,
            keycode: 0x04,
        });
        assert_eq!(report.as_bytes(), &[0x02, 0x00, 0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn unshifted_press_has_zero_modifier() {
        let report = KeyReport::press(Binding {
            modifier: Modifier::None,
            keycode: 0x2C,
        });
        assert_eq!(report.as_bytes(), &[0x00, 0x00, 0x2C, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn release_frame_is_all_zero() {
        assert_eq!(KeyReport::RELEASE.as_bytes(), &[0u8; REPORT_LEN]);
    }

    #[test]
    fn extra_key_slots_stay_zero() {
        let report = KeyReport::press(Binding {
            modifier: Modifier::LeftShift,
            keycode: 0x1D,
        });
        assert!(report.as_bytes()[3..].iter().all(|&b| b == 0));
    }
}
