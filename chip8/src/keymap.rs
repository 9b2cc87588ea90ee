use sdl2::keyboard::Keycode;

use c8vm_core::key_index;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// Each pad key is bound to the host key carrying the same hex digit.
/// ```text
/// |1|2|3|C|      |1|2|3|C|
/// |4|5|6|D|  ->  |4|5|6|D|
/// |7|8|9|E|  ->  |7|8|9|E|
/// |A|0|B|F|      |A|0|B|F|
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => key_index(c),
        _ => None,
    }
}
