//! Multi-track sheets: several voiced lines placed on a shared timeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::presets::require_preset;
use crate::profile::VoiceProfile;

/// Either a preset name or an inline profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileRef {
    /// A built-in preset, e.g. `"villain"`.
    Preset(String),
    /// A profile written out in full.
    Inline(VoiceProfile),
}

impl ProfileRef {
    /// Resolves the reference to a validated profile.
    pub fn resolve(&self) -> SpecResult<VoiceProfile> {
        let profile = match self {
            ProfileRef::Preset(name) => require_preset(name)?,
            ProfileRef::Inline(profile) => profile.clone(),
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn default_volume() -> f64 {
    1.0
}

/// One row of a track sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackRow {
    /// Display name.
    pub name: String,
    /// Voice used for the row.
    pub profile: ProfileRef,
    /// Text voiced by the row.
    pub text: String,
    /// Position of the row on the shared timeline, in milliseconds.
    #[serde(default)]
    pub start_ms: f64,
    /// Gain applied when mixing (may exceed 1.0).
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Muted rows are never rendered.
    #[serde(default)]
    pub muted: bool,
    /// When any row is solo, only solo rows are rendered.
    #[serde(default)]
    pub solo: bool,
}

/// A set of rows mixed into one output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackSheet {
    /// Rows in the sheet.
    pub tracks: Vec<TrackRow>,
}

impl TrackSheet {
    /// Parses a sheet from JSON and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let sheet: TrackSheet = serde_json::from_str(json)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Reads and parses a sheet from a JSON file.
    pub fn from_file(path: &Path) -> SpecResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that the sheet is non-empty and every row is well-formed.
    pub fn validate(&self) -> SpecResult<()> {
        if self.tracks.is_empty() {
            return Err(SpecError::EmptyTrackSheet);
        }
        for row in &self.tracks {
            row.profile.resolve()?;
            if !row.start_ms.is_finite() || row.start_ms < 0.0 {
                return Err(SpecError::invalid_profile(
                    "start_ms",
                    format!("track '{}' starts at {}", row.name, row.start_ms),
                ));
            }
            if !row.volume.is_finite() || row.volume < 0.0 {
                return Err(SpecError::invalid_profile(
                    "volume",
                    format!("track '{}' has gain {}", row.name, row.volume),
                ));
            }
        }
        Ok(())
    }

    /// Returns the rows that should be heard, honoring mute and solo.
    pub fn audible(&self) -> Vec<&TrackRow> {
        let any_solo = self.tracks.iter().any(|row| row.solo && !row.muted);
        self.tracks
            .iter()
            .filter(|row| !row.muted && (!any_solo || row.solo))
            .collect()
    }
}
