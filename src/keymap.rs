//! US-layout character to HID keycode table.
//!
//! Every typeable character maps to exactly one [`Binding`]: a keycode from
//! the USB HID keyboard usage page plus the modifier needed to produce the
//! character on a US QWERTY layout. The table covers printable ASCII plus
//! space, tab, line feed and carriage return; both `\n` and `\r` land on
//! Enter (0x28). Anything else is deliberately absent so lookups for it fail
//! before a single report is written.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Modifier byte values used in report byte 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Modifier {
    None = 0x00,
    LeftShift = 0x02,
}

/// One key binding: modifier plus HID usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub modifier: Modifier,
    pub keycode: u8,
}

/// Punctuation keys carry two printable characters each: the unshifted and
/// the shifted symbol share the physical key, hence the keycode.
const PUNCTUATION_PAIRS: &[(char, char, u8)] = &[
    ('-', '_', 0x2D),
    ('=', '+', 0x2E),
    ('[', '{', 0x2F),
    (']', '}', 0x30),
    ('\\', '|', 0x31),
    (';', ':', 0x33),
    ('\'', '"', 0x34),
    ('`', '~', 0x35),
    (',', '<', 0x36),
    ('.', '>', 0x37),
    ('/', '?', 0x38),
];

/// Immutable character → binding table
pub struct Keymap {
    entries: BTreeMap<char, Binding>,
}

impl Keymap {
    /// Build the full table. Pure: every call produces identical contents.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        let mut add = |ch: char, keycode: u8, shift: bool| {
            let modifier = if shift {
                Modifier::LeftShift
            } else {
                Modifier::None
            };
            let prev = entries.insert(ch, Binding { modifier, keycode });
            debug_assert!(prev.is_none(), "duplicate binding for {ch:?}");
        };

        // Letters: 0x04..=0x1D in alphabetic order, uppercase = same key + shift
        for (i, ch) in ('a'..='z').enumerate() {
            let keycode = 0x04 + i as u8;
            add(ch, keycode, false);
            add(ch.to_ascii_uppercase(), keycode, true);
        }

        // Digit row runs 1..9 then 0, so '0' lands on 0x27
        for (i, ch) in "1234567890".chars().enumerate() {
            add(ch, 0x1E + i as u8, false);
        }

        // Shifted digit row symbols share the digit keycodes
        for (i, ch) in "!@#$%^&*()".chars().enumerate() {
            add(ch, 0x1E + i as u8, true);
        }

        // Whitespace / control
        add(' ', 0x2C, false);
        add('\n', 0x28, false); // Enter
        add('\r', 0x28, false); // Enter (CR)
        add('\t', 0x2B, false);

        for &(plain, shifted, keycode) in PUNCTUATION_PAIRS {
            add(plain, keycode, false);
            add(shifted, keycode, true);
        }

        Keymap { entries }
    }

    /// Look up the binding for a character. Pure, no side effects.
    pub fn lookup(&self, ch: char) -> Option<Binding> {
        self.entries.get(&ch).copied()
    }

    /// Whether the character can be typed at all
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of supported characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All supported characters in a stable order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// All (character, binding) pairs in a stable order
    pub fn entries(&self) -> impl Iterator<Item = (char, Binding)> + '_ {
        self.entries.iter().map(|(&ch, &b)| (ch, b))
    }

    /// Distinct characters of `text` that have no binding.
    ///
    /// The pre-flight validator core: empty result means the whole payload
    /// can be typed without aborting mid-session.
    pub fn unsupported_in(&self, text: &str) -> BTreeSet<char> {
        text.chars().filter(|&ch| !self.contains(ch)).collect()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

static KEYMAP: OnceLock<Keymap> = OnceLock::new();

/// Get the process-wide table
/// Built once on first access, never mutated afterwards
pub fn keymap() -> &'static Keymap {
    KEYMAP.get_or_init(Keymap::new)
}
