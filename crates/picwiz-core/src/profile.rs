//! # Profile Catalog
//!
//! The eleven pre-authored picture profiles the wizard can recommend.
//!
//! The catalog is static data keyed by the closed [`ProfileId`] enum, so a
//! misspelled profile is a compile error rather than a missing lookup.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileId {
    CinemaNight,
    CinemaVivid,
    SportsArena,
    SportsNight,
    GameZonePro,
    GameZoneNight,
    EverydayComfort,
    EverydayVivid,
    SportsAndMovies,
    GamingAndSports,
    EntertainmentHub,
}

impl ProfileId {
    /// Every profile, in catalog order.
    pub const ALL: [ProfileId; 11] = [
        ProfileId::CinemaNight,
        ProfileId::CinemaVivid,
        ProfileId::SportsArena,
        ProfileId::SportsNight,
        ProfileId::GameZonePro,
        ProfileId::GameZoneNight,
        ProfileId::EverydayComfort,
        ProfileId::EverydayVivid,
        ProfileId::SportsAndMovies,
        ProfileId::GamingAndSports,
        ProfileId::EntertainmentHub,
    ];

    /// The catalog record for this id.
    #[must_use]
    pub fn profile(self) -> &'static Profile {
        &CATALOG[self as usize]
    }

    /// Display name, unique across the catalog.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Kebab-case id, e.g. `cinema-night-mode`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProfileId::CinemaNight => "cinema-night-mode",
            ProfileId::CinemaVivid => "cinema-vivid-mode",
            ProfileId::SportsArena => "sports-arena-mode",
            ProfileId::SportsNight => "sports-night-mode",
            ProfileId::GameZonePro => "game-zone-pro",
            ProfileId::GameZoneNight => "game-zone-night",
            ProfileId::EverydayComfort => "everyday-comfort",
            ProfileId::EverydayVivid => "everyday-vivid",
            ProfileId::SportsAndMovies => "sports-and-movies-mode",
            ProfileId::GamingAndSports => "gaming-and-sports-mode",
            ProfileId::EntertainmentHub => "entertainment-hub",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileId {
    type Err = ParseError;

    /// Accepts the kebab-case id or the display name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle) || id.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::UnknownProfile(needle.to_string()))
    }
}

/// One line of a profile's settings summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub icon: &'static str,
    pub label: &'static str,
}

const fn setting(icon: &'static str, label: &'static str) -> Setting {
    Setting { icon, label }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: &'static str,
    pub description: &'static str,
    /// Ordered display settings.
    pub settings: &'static [Setting],
}

impl Profile {
    /// Setting labels without icons, in order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.settings.iter().map(|s| s.label)
    }
}

/// All catalog entries, in [`ProfileId::ALL`] order.
#[must_use]
pub fn catalog() -> &'static [Profile] {
    &CATALOG
}

// Indexed by `ProfileId as usize`; `catalog_is_indexed_by_id` checks the pairing.
static CATALOG: [Profile; 11] = [
    Profile {
        id: ProfileId::CinemaNight,
        name: "Cinema Night Mode",
        description: "Optimized for movies in a dark room",
        settings: &[
            setting("🎬", "Cinema Mode"),
            setting("🌙", "Low Brightness"),
            setting("🎨", "Natural Colors"),
            setting("🎞️", "Cinematic Motion"),
            setting("🔥", "Warm Tone"),
        ],
    },
    Profile {
        id: ProfileId::CinemaVivid,
        name: "Cinema Vivid Mode",
        description: "Optimized for movies in a bright room",
        settings: &[
            setting("🎬", "Cinema Mode"),
            setting("☀️", "High Brightness"),
            setting("✨", "Vivid Colors"),
            setting("🎞️", "Cinematic Motion"),
            setting("⚪", "Neutral Tone"),
        ],
    },
    Profile {
        id: ProfileId::SportsArena,
        name: "Sports Arena Mode",
        description: "Optimized for fast action and clarity",
        settings: &[
            setting("⚽", "Sports Mode"),
            setting("☀️", "High Brightness"),
            setting("✨", "Vivid Colors"),
            setting("🌊", "Smooth Motion"),
            setting("❄️", "Cool Tone"),
        ],
    },
    Profile {
        id: ProfileId::SportsNight,
        name: "Sports Night Mode",
        description: "Sports viewing comfortable for evening",
        settings: &[
            setting("⚽", "Sports Mode"),
            setting("🌙", "Medium Brightness"),
            setting("✨", "Vivid Colors"),
            setting("🌊", "Smooth Motion"),
            setting("⚪", "Neutral Tone"),
        ],
    },
    Profile {
        id: ProfileId::GameZonePro,
        name: "Game Zone Pro",
        description: "Maximum responsiveness for competitive gaming",
        settings: &[
            setting("🎮", "Game Mode"),
            setting("⚡", "Low Latency"),
            setting("✨", "Vivid Colors"),
            setting("☀️", "High Brightness"),
            setting("❄️", "Cool Tone"),
        ],
    },
    Profile {
        id: ProfileId::GameZoneNight,
        name: "Game Zone Night",
        description: "Gaming optimized for dark room comfort",
        settings: &[
            setting("🎮", "Game Mode"),
            setting("⚡", "Low Latency"),
            setting("✨", "Vivid Colors"),
            setting("🌙", "Low Brightness"),
            setting("⚪", "Neutral Tone"),
        ],
    },
    Profile {
        id: ProfileId::EverydayComfort,
        name: "Everyday Comfort",
        description: "Balanced settings for all-day viewing",
        settings: &[
            setting("📺", "Standard Mode"),
            setting("👁️", "Easy Brightness"),
            setting("🎨", "Natural Colors"),
            setting("🎞️", "Cinematic Motion"),
            setting("🔥", "Warm Tone"),
        ],
    },
    Profile {
        id: ProfileId::EverydayVivid,
        name: "Everyday Vivid",
        description: "Dynamic settings for mixed content",
        settings: &[
            setting("📺", "Dynamic Mode"),
            setting("☀️", "High Brightness"),
            setting("✨", "Vivid Colors"),
            setting("🌊", "Smooth Motion"),
            setting("⚪", "Neutral Tone"),
        ],
    },
    // Hybrid profiles for multi-select answers
    Profile {
        id: ProfileId::SportsAndMovies,
        name: "Sports & Movies Mode",
        description: "Best of both worlds for action and cinema",
        settings: &[
            setting("🎬", "Adaptive Mode"),
            setting("🌊", "Smooth Motion"),
            setting("✨", "Vivid Colors"),
            setting("👁️", "Balanced Brightness"),
            setting("⚪", "Neutral Tone"),
        ],
    },
    Profile {
        id: ProfileId::GamingAndSports,
        name: "Gaming & Sports Mode",
        description: "Optimized for fast-paced action",
        settings: &[
            setting("⚡", "Low Latency"),
            setting("🌊", "Smooth Motion"),
            setting("✨", "Vivid Colors"),
            setting("☀️", "High Brightness"),
            setting("❄️", "Cool Tone"),
        ],
    },
    Profile {
        id: ProfileId::EntertainmentHub,
        name: "Entertainment Hub",
        description: "Versatile settings for varied content",
        settings: &[
            setting("📺", "Smart Mode"),
            setting("🎨", "Adaptive Colors"),
            setting("🌊", "Smooth Motion"),
            setting("👁️", "Auto Brightness"),
            setting("⚪", "Neutral Tone"),
        ],
    },
];

// =============================================================================
// TESTS
// =============================================================================
