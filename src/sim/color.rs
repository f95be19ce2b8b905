//! Random `#RRGGBB` colors

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Draw a color string of the form `#RRGGBB` (uppercase hex)
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char);
    }
    color
}

/// True for strings produced by [`random_color`]
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| HEX_DIGITS.contains(&b))
}
