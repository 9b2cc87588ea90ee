/// Bytes of addressable memory; every address is taken modulo this.
pub const MEMORY_SIZE: usize = 4096;

/// Programs are loaded (and the program counter starts) here.
pub const PROGRAM_START: u16 = 0x200;

pub const REGISTER_COUNT: usize = 16;
pub const STACK_DEPTH: usize = 16;
pub const KEY_COUNT: usize = 16;

/// VF doubles as the carry/borrow/collision flag.
pub const FLAG: usize = 0xF;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Each font glyph is 8 pixels wide and this many rows tall.
pub const GLYPH_HEIGHT: u16 = 5;

/// # Sprite sheet
/// Hex digits 0..F as 8x5 sprites, stored from address 0x000.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
/// Each key is bound to the host key printed with the same hex digit.
pub const KEYMAP: [char; KEY_COUNT] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Looks up the keypad index bound to a host key, ignoring case.
pub fn key_index(key: char) -> Option<u8> {
    let key = key.to_ascii_lowercase();
    KEYMAP.iter().position(|&k| k == key).map(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_index_maps_hex_digits() {
        assert_eq!(key_index('0'), Some(0x0));
        assert_eq!(key_index('9'), Some(0x9));
        assert_eq!(key_index('a'), Some(0xA));
        assert_eq!(key_index('F'), Some(0xF));
    }

    #[test]
    fn test_key_index_rejects_unmapped() {
        assert_eq!(key_index('g'), None);
        assert_eq!(key_index(' '), None);
    }

    #[test]
    fn test_sprite_sheet_has_a_glyph_per_digit() {
        assert_eq!(SPRITE_SHEET.len(), KEY_COUNT * GLYPH_HEIGHT as usize);
    }
}
