//! Template record and parsed views of its display strings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::Category;
use super::error::{ModelError, ModelResult};

/// A pre-defined configuration profile for the recording/streaming tool.
///
/// Display strings (`resolution`, `bitrate`) are kept verbatim; use
/// [`Template::parsed_resolution`] and [`Template::parsed_bitrate`] for
/// numeric access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique, stable identity within the catalog.
    pub id: u32,
    /// Short display name.
    pub title: String,
    /// Longer free-text summary.
    pub description: String,
    /// Exact-match filter dimension.
    pub category: Category,
    /// `"<width>x<height>"`.
    pub resolution: String,
    /// `"<integer> Kbps"`.
    pub bitrate: String,
    /// Frames per second.
    pub fps: u32,
    /// Opaque encoder speed/quality label, e.g. `veryfast`.
    pub preset: String,
    /// Free-text labels, used only for search matching.
    pub tags: Vec<String>,
}

impl Template {
    /// Parse the resolution string.
    pub fn parsed_resolution(&self) -> ModelResult<Resolution> {
        self.resolution.parse()
    }

    /// Parse the bitrate string.
    pub fn parsed_bitrate(&self) -> ModelResult<Bitrate> {
        self.bitrate.parse()
    }
}

/// Frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Resolution {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidResolution(s.to_string());

        let (w, h) = s.split_once('x').ok_or_else(invalid)?;
        let width: u32 = parse_positive(w).ok_or_else(invalid)?;
        let height: u32 = parse_positive(h).ok_or_else(invalid)?;

        Ok(Self { width, height })
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Target video bitrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitrate {
    pub kbps: u32,
}

impl FromStr for Bitrate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kbps = s
            .strip_suffix(" Kbps")
            .and_then(|n| n.parse::<u32>().ok().filter(|_| is_digits(n)))
            .ok_or_else(|| ModelError::InvalidBitrate(s.to_string()))?;

        Ok(Self { kbps })
    }
}

impl std::fmt::Display for Bitrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Kbps", self.kbps)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_positive(s: &str) -> Option<u32> {
    if !is_digits(s) {
        return None;
    }
    s.parse().ok().filter(|&n: &u32| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Template {
        Template {
            id: 1,
            title: "Sample".to_string(),
            description: "A sample template".to_string(),
            category: Category::Streaming,
            resolution: "1920x1080".to_string(),
            bitrate: "6000 Kbps".to_string(),
            fps: 60,
            preset: "veryfast".to_string(),
            tags: vec!["twitch".to_string()],
        }
    }

    #[test]
    fn parses_resolution() {
        let res = sample().parsed_resolution().unwrap();
        assert_eq!(res, Resolution { width: 1920, height: 1080 });
        assert_eq!(res.to_string(), "1920x1080");
    }

    #[test]
    fn rejects_malformed_resolution() {
        for bad in ["1920", "0x1080", "1920x", "x1080", "+1920x1080", "1920X1080"] {
            assert!(bad.parse::<Resolution>().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn parses_bitrate() {
        let bitrate = sample().parsed_bitrate().unwrap();
        assert_eq!(bitrate.kbps, 6000);
        assert_eq!(bitrate.to_string(), "6000 Kbps");
    }

    #[test]
    fn rejects_malformed_bitrate() {
        for bad in ["6000", "6000kbps", " Kbps", "-1 Kbps", "6 000 Kbps"] {
            assert_eq!(
                bad.parse::<Bitrate>(),
                Err(ModelError::InvalidBitrate(bad.to_string()))
            );
        }
    }
}
