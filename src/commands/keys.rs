//! Supported character listing

use gadget_typist::{keymap, Modifier};

pub fn run() {
    let map = keymap();
    println!("{} supported characters:", map.len());
    for (ch, binding) in map.entries() {
        let shift = match binding.modifier {
            Modifier::LeftShift => "  +Shift",
            Modifier::None => "",
        };
        println!("  {ch:?} -> 0x{:02X}{shift}", binding.keycode);
    }
}
