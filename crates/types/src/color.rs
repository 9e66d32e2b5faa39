use serde::{Deserialize, Serialize};

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub alpha: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("'{}' is not a hex colour", s))?;

        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();
        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|p| p[0] * 16 + p[1]).collect(),
            n => return Err(format!("hex colour '{}' has {} digits", s, n)),
        };

        Ok(Color::rgba(
            channels[0],
            channels[1],
            channels[2],
            channels.get(3).copied().unwrap_or(u8::MAX),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#F00"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#0a0b0c"), Ok(Color::rgb(10, 11, 12)));
        assert_eq!(Color::from_hex("#0a0b0c80"), Ok(Color::rgba(10, 11, 12, 128)));
        assert!(!Color::from_hex("#0008").expect("short form with alpha").is_opaque());
        assert!(Color::from_hex("0a0b0c").is_err());
        assert!(Color::from_hex("#0a0b0").is_err());
        assert!(Color::from_hex("#zzz").is_err());
    }
}
