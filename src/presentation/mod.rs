//! Mapping from mood score to color, face, and advisory message.
//!
//! Every function here is pure and clamps its input to 0..=10 first, so stored
//! scores outside the nominal range still render as the nearest endpoint.

use crate::constants::{BAD_COLOR, GOOD_COLOR, MAX_SCORE, MIN_SCORE};
use crate::entry::Score;
use serde::{Serialize, Serializer};
use std::fmt;

/// Faces indexed by score, 0 (best) to 10 (worst).
const FACES: [&str; 11] = [
    "😀", "🙂", "😊", "😌", "😐", "😕", "🙁", "☹️", "😣", "😫", "😭",
];

/// Advisory bands, highest threshold first. The first band whose threshold the
/// score reaches wins.
const MESSAGE_BANDS: [(Score, &str); 9] = [
    (10, "please give your address now, so we can reach you"),
    (9, "call 911 or visit emergency care now"),
    (8, "share your location You may need help"),
    (7, "Condition worsening — tell someone nearby"),
    (6, "rest more and check your temperature."),
    (5, "take medicine if needed and stay warm"),
    (4, "rest properly and monitor symptoms"),
    (3, "take a break and avoid stress"),
    (2, "keep staying active and hydrated"),
];

/// Message for scores below every band.
const CALM_MESSAGE: &str = "Feeling great 😄";

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Hex notation, e.g. `#2ecc71`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// CSS functional notation, e.g. `rgb(46, 204, 113)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn clamp(score: Score) -> Score {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Interpolates one channel at `step` tenths of the way, rounding half up.
fn interpolate(start: u8, end: u8, step: Score) -> u8 {
    let span = MAX_SCORE - MIN_SCORE;
    let start = i64::from(start);
    let end = i64::from(end);
    let scaled = start * span + (end - start) * step;
    // Both endpoints are u8, so the rounded value stays in range
    ((scaled * 2 + span).div_euclid(span * 2)) as u8
}

/// Color for a score, from green at 0 to red at 10.
///
/// # Examples
///
/// ```
/// use moodtrack::presentation::mood_to_color;
///
/// assert_eq!(mood_to_color(0).to_string(), "rgb(46, 204, 113)");
/// assert_eq!(mood_to_color(10).to_string(), "rgb(255, 92, 92)");
/// assert_eq!(mood_to_color(5).to_string(), "rgb(151, 148, 103)");
/// ```
pub fn mood_to_color(score: Score) -> Rgb {
    let step = clamp(score) - MIN_SCORE;
    Rgb::new(
        interpolate(GOOD_COLOR.0, BAD_COLOR.0, step),
        interpolate(GOOD_COLOR.1, BAD_COLOR.1, step),
        interpolate(GOOD_COLOR.2, BAD_COLOR.2, step),
    )
}

/// Face for a score.
pub fn mood_face(score: Score) -> &'static str {
    FACES[(clamp(score) - MIN_SCORE) as usize]
}

/// Advisory message for a score.
///
/// # Examples
///
/// ```
/// use moodtrack::presentation::mood_message;
///
/// assert_eq!(mood_message(0), "Feeling great 😄");
/// assert_eq!(mood_message(9), "call 911 or visit emergency care now");
/// ```
pub fn mood_message(score: Score) -> &'static str {
    let score = clamp(score);
    MESSAGE_BANDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, message)| *message)
        .unwrap_or(CALM_MESSAGE)
}

/// Everything shown about a single check-in on hover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodDetail {
    pub score: Score,
    pub face: &'static str,
    pub message: &'static str,
    pub color: Rgb,
}

impl MoodDetail {
    pub fn for_score(score: Score) -> Self {
        MoodDetail {
            score,
            face: mood_face(score),
            message: mood_message(score),
            color: mood_to_color(score),
        }
    }

    /// Headline text, e.g. `😕 Mood Level: 5`.
    pub fn headline(&self) -> String {
        format!("{} Mood Level: {}", self.face, self.score)
    }
}

/// One selectable level in the score picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleLevel {
    pub score: Score,
    pub face: &'static str,
    pub color: Rgb,
}

/// The 11 selectable levels, 0 through 10.
pub fn mood_scale() -> Vec<ScaleLevel> {
    (MIN_SCORE..=MAX_SCORE)
        .map(|score| ScaleLevel {
            score,
            face: mood_face(score),
            color: mood_to_color(score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_endpoints_are_exact() {
        assert_eq!(mood_to_color(0), Rgb::new(0x2e, 0xcc, 0x71));
        assert_eq!(mood_to_color(10), Rgb::new(0xff, 0x5c, 0x5c));
    }

    #[test]
    fn test_color_interpolation_rounds_each_channel() {
        assert_eq!(mood_to_color(1), Rgb::new(67, 193, 111));
        assert_eq!(mood_to_color(3), Rgb::new(109, 170, 107));
        assert_eq!(mood_to_color(5), Rgb::new(151, 148, 103));
        assert_eq!(mood_to_color(7), Rgb::new(192, 126, 98));
    }

    #[test]
    fn test_color_clamps_out_of_range() {
        assert_eq!(mood_to_color(-4), mood_to_color(0));
        assert_eq!(mood_to_color(99), mood_to_color(10));
    }

    #[test]
    fn test_color_formats() {
        let color = mood_to_color(0);
        assert_eq!(color.to_string(), "rgb(46, 204, 113)");
        assert_eq!(color.to_hex(), "#2ecc71");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"rgb(46, 204, 113)\"");
    }

    #[test]
    fn test_faces() {
        assert_eq!(mood_face(0), "😀");
        assert_eq!(mood_face(5), "😕");
        assert_eq!(mood_face(7), "☹️");
        assert_eq!(mood_face(10), "😭");
        assert_eq!(mood_face(-1), "😀");
        assert_eq!(mood_face(11), "😭");
    }

    #[test]
    fn test_message_bands() {
        assert_eq!(mood_message(0), "Feeling great 😄");
        assert_eq!(mood_message(1), "Feeling great 😄");
        assert_eq!(mood_message(2), "keep staying active and hydrated");
        assert_eq!(mood_message(3), "take a break and avoid stress");
        assert_eq!(mood_message(4), "rest properly and monitor symptoms");
        assert_eq!(mood_message(5), "take medicine if needed and stay warm");
        assert_eq!(mood_message(6), "rest more and check your temperature.");
        assert_eq!(mood_message(7), "Condition worsening — tell someone nearby");
        assert_eq!(mood_message(8), "share your location You may need help");
        assert_eq!(mood_message(9), "call 911 or visit emergency care now");
        assert_eq!(
            mood_message(10),
            "please give your address now, so we can reach you"
        );
        assert_eq!(mood_message(-5), "Feeling great 😄");
        assert_eq!(
            mood_message(50),
            "please give your address now, so we can reach you"
        );
    }

    #[test]
    fn test_detail_headline() {
        let detail = MoodDetail::for_score(5);
        assert_eq!(detail.headline(), "😕 Mood Level: 5");
        assert_eq!(detail.message, "take medicine if needed and stay warm");
    }

    #[test]
    fn test_scale_has_eleven_levels() {
        let scale = mood_scale();
        assert_eq!(scale.len(), 11);
        assert_eq!(scale[0].score, 0);
        assert_eq!(scale[10].color, mood_to_color(10));
    }
}
