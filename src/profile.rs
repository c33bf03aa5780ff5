//! Recommendation profiles, the item type the shipped binary puts in its deck.

use serde::{Deserialize, Serialize};

/// One recommended person, as stored in the catalog JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub hobby: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub appearance: Option<Appearance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub hair_length: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Engagement figures shown on a card, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStats {
    pub likes: String,
    pub posts: u64,
    pub followers: String,
}

const HOBBY_BONUS: u64 = 160;
const LIKES_PER_YEAR: u64 = 400;
const LIKES_BASE: u64 = 1800;
const POSTS_BASE: u64 = 150;
const FOLLOWERS_PER_LIKE: f64 = 3.4;

impl Profile {
    /// Text for the pill badge on the card.
    #[must_use]
    pub fn pill(&self) -> &str {
        self.occupation.as_deref().unwrap_or("Profile")
    }

    #[must_use]
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("Somewhere")
    }

    /// Derive the card statistics from age, id and hobby count.
    #[must_use]
    pub fn stats(&self) -> CardStats {
        let hobby_bonus = self.hobby.len() as u64 * HOBBY_BONUS;
        let likes = u64::from(self.age) * LIKES_PER_YEAR + hobby_bonus + LIKES_BASE;
        let posts = POSTS_BASE + self.id % 90 + hobby_bonus / 8;
        let followers = likes as f64 * FOLLOWERS_PER_LIKE;
        CardStats {
            likes: format_compact(likes as f64),
            posts: posts.max(1),
            followers: format_compact(followers),
        }
    }
}

/// Case-insensitive substring match on the profile location.
///
/// Profiles without a location never match.
#[must_use]
pub fn matches_location(profile: &Profile, query: &str) -> bool {
    let query = query.to_lowercase();
    profile
        .location
        .as_deref()
        .is_some_and(|loc| loc.to_lowercase().contains(&query))
}

const COMPACT_UNITS: &[&str] = &["", "K", "M", "B", "T"];

/// Format a count in short notation: `950`, `1.8K`, `12.3K`, `4M`.
///
/// At most one fractional digit is kept and a trailing `.0` is dropped.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let value = value.round().max(0.0);
    let mut unit = 0;
    let mut scaled = value;
    while scaled >= 1000.0 && unit + 1 < COMPACT_UNITS.len() {
        scaled /= 1000.0;
        unit += 1;
    }
    let mut rounded = (scaled * 10.0).round() / 10.0;
    // 999.96K rounds up to 1000K; show it as 1M instead.
    if unit > 0 && rounded >= 1000.0 && unit + 1 < COMPACT_UNITS.len() {
        rounded = (rounded / 1000.0 * 10.0).round() / 10.0;
        unit += 1;
    }
    let suffix = COMPACT_UNITS[unit];
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}{suffix}")
    } else {
        format!("{rounded:.1}{suffix}")
    }
}
