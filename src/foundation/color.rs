use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{PushfxError, PushfxResult};

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional) into a premultiplied color.
pub fn parse_hex_color(s: &str) -> PushfxResult<Rgba8Premul> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> PushfxResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| PushfxError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(PushfxError::validation("hex color must be ASCII"));
    }

    let (r, g, b, a) = match s.len() {
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(PushfxError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            ));
        }
    };

    Ok(Rgba8Premul::from_straight_rgba(r, g, b, a))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
