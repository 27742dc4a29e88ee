// src/color.rs
// Stable name-to-color assignment for tags and categories

use crate::lexicon::COLOR_PALETTE;

/// Pick a display color for `name`, optionally varied around `base_color`.
///
/// The name is hashed with MD5 and the first four bytes drive the choice, so
/// the same name always maps to the same color. With a parsable `#rrggbb`
/// base the result is the base shifted by a per-name variation in [-30, 29]
/// on each channel; otherwise a fixed 20-color palette is indexed. Output is
/// always lowercase `#rrggbb`.
pub fn color_for(name: &str, base_color: Option<&str>) -> String {
    let digest = md5::compute(name);
    let h = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    if let Some(base) = base_color {
        if let Some((r, g, b)) = parse_hex_color(base) {
            let variation = (h % 60) as i32 - 30;
            return format!(
                "#{:02x}{:02x}{:02x}",
                shift_channel(r, variation),
                shift_channel(g, variation),
                shift_channel(b, variation)
            );
        }
    }

    COLOR_PALETTE[(h % COLOR_PALETTE.len() as u32) as usize].to_string()
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn shift_channel(channel: u8, variation: i32) -> u8 {
    (channel as i32 + variation).clamp(0, 255) as u8
}
