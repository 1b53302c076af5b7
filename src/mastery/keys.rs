//! Mastery keys: insight cards unlocked by cumulative practice minutes.

use super::phase::percent_of;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MasteryKey {
    pub id: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub unlocked_at_minutes: i64,
}

/// The catalogue, strictly ascending by threshold.
pub const MASTERY_KEYS: &[MasteryKey] = &[
    MasteryKey {
        id: "mk_1",
        title: "Value the Learning",
        quote: "The first move toward mastery is always inward, learning who you really are and reconnecting with that innate force.",
        author: "Robert Greene",
        unlocked_at_minutes: 60,
    },
    MasteryKey {
        id: "mk_2",
        title: "Submit to Reality",
        quote: "The apprenticeship phase is not merely a period of learning; it is a rite of passage that tests your resilience and character.",
        author: "Robert Greene",
        unlocked_at_minutes: 300,
    },
    MasteryKey {
        id: "mk_3",
        title: "Absorb the Master's Power",
        quote: "See your mentor as a kind of psychic father or mother who is going to give you the love and knowledge you need.",
        author: "Robert Greene",
        unlocked_at_minutes: 600,
    },
    MasteryKey {
        id: "mk_4",
        title: "The Ideal Apprenticeship",
        quote: "The greatest danger you face is your fondness for comfort. All of the things that feel natural to you now were once learned, and practice will make anything feel natural.",
        author: "Robert Greene",
        unlocked_at_minutes: 1500,
    },
    MasteryKey {
        id: "mk_5",
        title: "Develop Negative Capability",
        quote: "Masters are those who by nature have retained and can access that childlike spirit of open wonder.",
        author: "Robert Greene",
        unlocked_at_minutes: 3000,
    },
    MasteryKey {
        id: "mk_6",
        title: "The Creative Breakthrough",
        quote: "The intuitive mind is a sacred gift and the rational mind is a faithful servant. We have created a society that honors the servant and has forgotten the gift.",
        author: "Albert Einstein",
        unlocked_at_minutes: 6000,
    },
    MasteryKey {
        id: "mk_7",
        title: "Fuse the Intuitive with the Rational",
        quote: "At the highest level of mastery, the distinction between thinking and feeling disappears.",
        author: "Robert Greene",
        unlocked_at_minutes: 12000,
    },
    MasteryKey {
        id: "mk_8",
        title: "The Tenth Essence",
        quote: "The future belongs to those who learn more skills and combine them in creative ways.",
        author: "Robert Greene",
        unlocked_at_minutes: 30000,
    },
];

pub fn find_key(id: &str) -> Option<&'static MasteryKey> {
    MASTERY_KEYS.iter().find(|k| k.id == id)
}

/// Keys whose threshold is reached by `total_minutes` and that are not yet
/// in `unlocked`. Catalogue order is preserved.
pub fn newly_unlocked<'a>(
    catalogue: &'a [MasteryKey],
    unlocked: &[String],
    total_minutes: i64,
) -> Vec<&'a MasteryKey> {
    catalogue
        .iter()
        .filter(|k| total_minutes >= k.unlocked_at_minutes)
        .filter(|k| !unlocked.iter().any(|id| id == k.id))
        .collect()
}

/// Union of `unlocked` and `new_keys`, existing ids first.
pub fn merge_unlocked(unlocked: &[String], new_keys: &[&MasteryKey]) -> Vec<String> {
    let mut merged = unlocked.to_vec();
    for key in new_keys {
        if !merged.iter().any(|id| id == key.id) {
            merged.push(key.id.to_string());
        }
    }
    merged
}

/// First catalogue key not yet unlocked.
pub fn next_locked<'a>(catalogue: &'a [MasteryKey], unlocked: &[String]) -> Option<&'a MasteryKey> {
    catalogue
        .iter()
        .find(|k| !unlocked.iter().any(|id| id == k.id))
}

/// Floored percentage of the way to `key`; 100 when there is no next key.
pub fn progress_towards(key: Option<&MasteryKey>, total_minutes: i64) -> u8 {
    key.map_or(100, |k| percent_of(total_minutes, k.unlocked_at_minutes))
}
