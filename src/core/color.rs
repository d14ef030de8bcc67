//! Hex color decoding for the padding background.
//!
//! Accepts `#RRGGBB` (opaque) and `#RRGGBBAA`. The lenient entry point
//! [`parse_hex_rgba`] falls back to transparent black on anything else;
//! [`try_parse_hex_rgba`] reports why the input was rejected.
use image::Rgba;
use thiserror::Error;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Errors produced by strict hex color parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 or 8 hex digits, got {len} in `{input}`")]
    InvalidLength { input: String, len: usize },
    #[error("non-hex character in `{input}`")]
    InvalidDigit { input: String },
}

pub fn try_parse_hex_rgba(input: &str) -> Result<Rgba<u8>, ColorError> {
    let hex = input.trim_start_matches('#');

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            input: input.to_string(),
        });
    }
    // All ASCII from here on, so byte offsets are char offsets
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

    let rgba = match hex.len() {
        6 => [channel(0), channel(2), channel(4), Ok(255)],
        8 => [channel(0), channel(2), channel(4), channel(6)],
        len => {
            return Err(ColorError::InvalidLength {
                input: input.to_string(),
                len,
            });
        }
    };

    let mut out = [0u8; 4];
    for (dst, v) in out.iter_mut().zip(rgba) {
        *dst = v.map_err(|_| ColorError::InvalidDigit {
            input: input.to_string(),
        })?;
    }
    Ok(Rgba(out))
}

/// Decode a hex color, returning transparent black for malformed input.
pub fn parse_hex_rgba(input: &str) -> Rgba<u8> {
    try_parse_hex_rgba(input).unwrap_or(TRANSPARENT)
}

pub fn to_hex_string(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_is_opaque() {
        assert_eq!(parse_hex_rgba("#112233"), Rgba([17, 34, 51, 255]));
        assert_eq!(parse_hex_rgba("#ff0000"), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_hex_rgba("1e293b"), Rgba([30, 41, 59, 255]));
    }

    #[test]
    fn parse_8digit_keeps_alpha() {
        assert_eq!(parse_hex_rgba("#11223344"), Rgba([17, 34, 51, 68]));
        assert_eq!(parse_hex_rgba("#FFFFFF80"), Rgba([255, 255, 255, 128]));
        assert_eq!(parse_hex_rgba("#00000000"), TRANSPARENT);
    }

    #[test]
    fn repeated_hash_prefix_is_stripped() {
        assert_eq!(parse_hex_rgba("##abcdef"), Rgba([0xab, 0xcd, 0xef, 255]));
    }

    #[test]
    fn malformed_returns_transparent_black() {
        let malformed = [
            "",
            "#",
            "#fff",
            "#12345",
            "#1234567",
            "#123456789",
            "not-a-color",
            "#gg0000",
            "#+f0000",
            "#ééé",
        ];
        for bad in malformed {
            assert_eq!(parse_hex_rgba(bad), TRANSPARENT, "input {bad:?}");
        }
    }

    #[test]
    fn strict_parse_reports_reason() {
        assert_eq!(
            try_parse_hex_rgba("#fff"),
            Err(ColorError::InvalidLength {
                input: "#fff".to_string(),
                len: 3
            })
        );
        assert!(matches!(
            try_parse_hex_rgba("#zz0000"),
            Err(ColorError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn hex_string_round_trips_channels() {
        let c = Rgba([1, 2, 254, 255]);
        assert_eq!(to_hex_string(c), "#0102feff");
        assert_eq!(parse_hex_rgba(&to_hex_string(c)), c);
    }
}
