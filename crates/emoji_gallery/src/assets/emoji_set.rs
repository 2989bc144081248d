//! Emoji set files and texture filename derivation
//!
//! A set file is JSON in one of two shapes: an object mapping group
//! names to lists of emoji strings (a group may also be a single
//! `;`-joined string), or a flat list of emoji strings. Texture names
//! are derived from the characters' code points.

use crate::assets::AssetError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The two accepted set file shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmojiSetFile {
    /// Group name -> emoji list (or joined string)
    Groups(BTreeMap<String, GroupEntry>),
    /// Flat list of emoji
    Flat(Vec<String>),
}

/// A single group value; non-emoji metadata entries fall into `Other`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GroupEntry {
    List(Vec<String>),
    Joined(String),
    Other(serde_json::Value),
}

/// Read a set file and return the texture filenames for `group`.
///
/// A flat set file ignores the group name. An empty result is not an
/// error; callers treat it the same as a missing file.
///
/// # Errors
///
/// Returns [`AssetError`] when the file is missing or not valid JSON.
pub fn load_emoji_filenames(set_path: &Path, group: &str) -> Result<Vec<String>, AssetError> {
    let contents = std::fs::read_to_string(set_path)
        .map_err(|_| AssetError::NotFound(set_path.display().to_string()))?;
    let parsed: EmojiSetFile = serde_json::from_str(&contents)
        .map_err(|e| AssetError::InvalidData(format!("{}: {e}", set_path.display())))?;

    let emoji: Vec<String> = match parsed {
        EmojiSetFile::Flat(list) => list,
        EmojiSetFile::Groups(mut groups) => match groups.remove(group) {
            Some(GroupEntry::List(list)) => list,
            Some(GroupEntry::Joined(joined)) => joined
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            Some(GroupEntry::Other(_)) | None => {
                log::warn!("Emoji group {group:?} not found in {}", set_path.display());
                Vec::new()
            }
        },
    };

    Ok(emoji
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| texture_filename(e))
        .collect())
}

/// Texture filename for one emoji: each character's code point in
/// lowercase hex without leading zeros, joined by underscores.
///
/// `😀` (U+1F600) becomes `emoji_u1f600.png`; multi-character sequences
/// keep every scalar, so `🇺🇸` becomes `emoji_u1f1fa_1f1f8.png`.
#[must_use]
pub fn texture_filename(emoji: &str) -> String {
    let codepoints: Vec<String> = emoji.chars().map(|c| format!("{:x}", c as u32)).collect();
    format!("emoji_u{}.png", codepoints.join("_"))
}
