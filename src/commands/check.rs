//! Pre-flight payload validation against the keycode table

use std::path::Path;

use anyhow::Result;

use gadget_typist::keymap;

/// Report whether every character of the file can be typed.
/// Returns `Ok(false)` (and prints the offenders) when some cannot.
pub fn run(file: &Path) -> Result<bool> {
    let content = super::read_payload(file)?;
    let missing = keymap().unsupported_in(&content);

    if missing.is_empty() {
        println!("All characters are typeable");
        return Ok(true);
    }

    println!("Unsupported characters:");
    for ch in &missing {
        println!("  {ch:?} (U+{:04X})", *ch as u32);
    }
    Ok(false)
}
