use crate::foundation::error::{GoldError, GoldResult};
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Plain rendering, `rgb(r,g,b)`.
    pub fn plain(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Markup rendering for embedding inside formatted labels, `\color[RGB]{r,g,b}`.
    pub fn markup(self) -> String {
        format!("\\color[RGB]{{{},{},{}}}", self.r, self.g, self.b)
    }

    /// Channels as an array, as the frame sinks take them.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::new(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

/// Address of one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    /// Categorical color by letter key (`'A'` is the first entry).
    Cat(char),
    /// Neutral white.
    White,
    /// Neutral grey.
    Grey,
}

/// Fixed ordered set of categorical colors plus the two neutrals.
///
/// Colors are constants looked up by key; nothing is recomputed, so recoloring to a key and
/// back always restores the exact original value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Categorical colors in key order (`A`, `B`, `C`, ...).
    pub categorical: Vec<Rgb8>,
    /// Neutral white.
    pub white: Rgb8,
    /// Neutral grey.
    pub grey: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            categorical: vec![
                Rgb8::new(46, 234, 162),
                Rgb8::new(46, 165, 234),
                Rgb8::new(68, 46, 234),
                Rgb8::new(209, 46, 234),
                Rgb8::new(234, 46, 118),
                Rgb8::new(234, 115, 46),
                Rgb8::new(212, 234, 46),
                Rgb8::new(71, 234, 46),
            ],
            white: Rgb8::new(255, 255, 255),
            grey: Rgb8::new(128, 128, 128),
        }
    }
}

impl Palette {
    /// Validate that the categorical list fits into single-letter keys `A..=Z`.
    pub fn validate(&self) -> GoldResult<()> {
        if self.categorical.is_empty() {
            return Err(GoldError::validation(
                "palette must have at least one categorical color",
            ));
        }
        if self.categorical.len() > 26 {
            return Err(GoldError::validation(
                "palette supports at most 26 categorical colors (keys A..=Z)",
            ));
        }
        Ok(())
    }

    /// Letter keys of the categorical colors, in generation order.
    ///
    /// Colors past the 26th have no key; [`Palette::validate`] rejects such palettes.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z').take(self.categorical.len())
    }

    /// Look up a categorical color by letter key.
    pub fn cat(&self, key: char) -> GoldResult<Rgb8> {
        let idx = (key as u32).wrapping_sub('A' as u32) as usize;
        self.categorical
            .get(idx)
            .copied()
            .ok_or_else(|| GoldError::config(format!("unknown palette key '{key}'")))
    }

    /// Resolve any palette address.
    pub fn get(&self, key: ColorKey) -> GoldResult<Rgb8> {
        match key {
            ColorKey::Cat(c) => self.cat(c),
            ColorKey::White => Ok(self.white),
            ColorKey::Grey => Ok(self.grey),
        }
    }

    /// Plain rendering of an entry.
    pub fn plain(&self, key: ColorKey) -> GoldResult<String> {
        Ok(self.get(key)?.plain())
    }

    /// Markup rendering of an entry.
    pub fn markup(&self, key: ColorKey) -> GoldResult<String> {
        Ok(self.get(key)?.markup())
    }
}
