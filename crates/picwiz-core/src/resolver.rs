//! # Profile Resolver
//!
//! Pure mapping from an answer set to one catalog profile.
//!
//! Precedence, highest first:
//! 1. Multi-select combinations: gaming + sports, then sports + movies,
//!    then three or more selections or any selection including general.
//! 2. Otherwise the primary content type (gaming > sports > movies > general,
//!    defaulting to general) picks a profile family, and the night/comfort
//!    answers pick the variant inside it.
//!
//! Unset answers never match, so they take the "else" branch.

use crate::answers::{Answers, BrightnessPreference, ColorPreference, ContentType, ViewingTime};
use crate::profile::{Profile, ProfileId};
use std::collections::BTreeSet;

/// Content types in descending priority for picking the primary one.
pub const CONTENT_PRIORITY: [ContentType; 4] = [
    ContentType::Gaming,
    ContentType::Sports,
    ContentType::Movies,
    ContentType::General,
];

/// The highest-priority selected content type, or `General` when none is selected.
#[must_use]
pub fn primary_content_type(selected: &BTreeSet<ContentType>) -> ContentType {
    CONTENT_PRIORITY
        .iter()
        .copied()
        .find(|c| selected.contains(c))
        .unwrap_or(ContentType::General)
}

/// Resolve the answer set to a catalog id.
#[must_use]
pub fn resolve(answers: &Answers) -> ProfileId {
    if let Some(hybrid) = resolve_combination(&answers.content_types) {
        tracing::trace!(profile = hybrid.as_str(), "resolved multi-select combination");
        return hybrid;
    }

    let primary = primary_content_type(&answers.content_types);
    let dim_room = answers.viewing_time == Some(ViewingTime::Nighttime)
        || answers.brightness_preference == Some(BrightnessPreference::Comfortable);

    let id = match primary {
        ContentType::Movies if dim_room => ProfileId::CinemaNight,
        ContentType::Movies => ProfileId::CinemaVivid,
        ContentType::Sports if dim_room => ProfileId::SportsNight,
        ContentType::Sports => ProfileId::SportsArena,
        ContentType::Gaming if dim_room => ProfileId::GameZoneNight,
        ContentType::Gaming => ProfileId::GameZonePro,
        ContentType::General => {
            let soft = answers.color_preference == Some(ColorPreference::Natural)
                || answers.brightness_preference == Some(BrightnessPreference::Comfortable);
            if soft {
                ProfileId::EverydayComfort
            } else {
                ProfileId::EverydayVivid
            }
        }
    };

    tracing::trace!(primary = primary.as_str(), profile = id.as_str(), "resolved by primary content type");
    id
}

/// Resolve the answer set to its catalog record.
#[must_use]
pub fn resolve_profile(answers: &Answers) -> &'static Profile {
    resolve(answers).profile()
}

/// Hybrid profiles for two or more selections.
///
/// Returns `None` for pairs without a dedicated profile (e.g. movies + gaming),
/// which then resolve by primary content type.
fn resolve_combination(selected: &BTreeSet<ContentType>) -> Option<ProfileId> {
    if selected.len() < 2 {
        return None;
    }

    let has = |c: ContentType| selected.contains(&c);

    if has(ContentType::Gaming) && has(ContentType::Sports) {
        Some(ProfileId::GamingAndSports)
    } else if has(ContentType::Sports) && has(ContentType::Movies) {
        Some(ProfileId::SportsAndMovies)
    } else if selected.len() >= 3 || has(ContentType::General) {
        Some(ProfileId::EntertainmentHub)
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
