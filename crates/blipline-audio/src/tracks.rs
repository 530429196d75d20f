//! Multi-track rendering.
//!
//! Every audible row of a [`TrackSheet`] is composed on its own and then
//! mixed at its start offset with its volume as gain.

use blipline_spec::{parse_script, TrackSheet};
use tracing::{debug, instrument};

use crate::buffer::SampleBuffer;
use crate::composer::{ComposedTimeline, TimelineComposer};
use crate::error::AudioResult;
use crate::mixer::{BufferMixer, MixSlot};

/// One composed row of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTrack {
    /// Row name.
    pub name: String,
    /// Position of the row on the mix, in milliseconds.
    pub start_ms: f64,
    /// Mix gain.
    pub gain: f64,
    /// Plain text voiced by the row (voice tags removed).
    pub text: String,
    /// The row's composed audio and timing.
    pub timeline: ComposedTimeline,
}

/// Output of rendering a whole sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetMix {
    /// The mixed output.
    pub buffer: SampleBuffer,
    /// Every row that was rendered, in sheet order.
    pub tracks: Vec<RenderedTrack>,
}

/// Renders a sheet with `composer` and mixes the audible rows.
///
/// Row text may carry voice tags; the row's own profile voices untagged
/// lines. Muted rows, and non-solo rows when any row is solo, are skipped.
///
/// # Arguments
/// * `composer` - Composer (and tone cache) shared by every row
/// * `sheet` - Track rows to render
///
/// # Returns
/// The mix and each rendered row, or an error if the sheet fails validation
/// or a row cannot be composed or mixed
#[instrument(skip_all, fields(rows = sheet.tracks.len()))]
pub fn render_sheet(composer: &mut TimelineComposer, sheet: &TrackSheet) -> AudioResult<SheetMix> {
    sheet.validate()?;

    let mut tracks = Vec::new();
    for row in sheet.audible() {
        let profile = row.profile.resolve()?;
        let parsed = parse_script(&row.text, &profile);
        let timeline = composer.compose(&parsed.sequence)?;
        debug!(
            track = row.name.as_str(),
            duration_ms = timeline.total_duration_ms,
            "rendered track"
        );
        tracks.push(RenderedTrack {
            name: row.name.clone(),
            start_ms: row.start_ms,
            gain: row.volume,
            text: parsed.plain_text,
            timeline,
        });
    }

    let slots: Vec<MixSlot<'_>> = tracks
        .iter()
        .map(|track| {
            MixSlot::new(&track.timeline.buffer)
                .at_ms(track.start_ms)
                .with_gain(track.gain)
        })
        .collect();
    let buffer = BufferMixer::new(composer.sample_rate()).mix(&slots)?;

    Ok(SheetMix { buffer, tracks })
}

#[cfg(test)]
mod tests {
    use blipline_spec::SpecError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::buffer::SampleRate;
    use crate::error::AudioError;

    fn composer() -> TimelineComposer {
        TimelineComposer::new(SampleRate::new(8000).unwrap())
    }

    const SHEET: &str = r#"{
        "tracks": [
            {"name": "lead", "profile": {"pitch": 1.0, "duration_ms": 100, "char_delay_ms": 0, "space_delay_ms": 0}, "text": "ab"},
            {"name": "echo", "profile": {"pitch": 0.5, "duration_ms": 100, "char_delay_ms": 0, "space_delay_ms": 0}, "text": "ab", "start_ms": 500, "volume": 0.5},
            {"name": "noise", "profile": "robot", "text": "zzz", "muted": true}
        ]
    }"#;

    #[test]
    fn test_render_sheet_places_rows() {
        let sheet = TrackSheet::from_json(SHEET).unwrap();
        let mix = render_sheet(&mut composer(), &sheet).unwrap();

        let names: Vec<&str> = mix.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["lead", "echo"]);
        // echo starts at 500 ms (4000 samples) and lasts 200 ms (1600 samples)
        assert_eq!(mix.buffer.len(), 5600);
    }

    #[test]
    fn test_render_sheet_solo() {
        let mut sheet = TrackSheet::from_json(SHEET).unwrap();
        sheet.tracks[0].solo = true;
        let mix = render_sheet(&mut composer(), &sheet).unwrap();

        assert_eq!(mix.tracks.len(), 1);
        assert_eq!(mix.buffer.len(), 1600);
        assert_eq!(mix.buffer.samples(), mix.tracks[0].timeline.buffer.samples());
    }

    #[test]
    fn test_render_sheet_all_muted() {
        let mut sheet = TrackSheet::from_json(SHEET).unwrap();
        for row in &mut sheet.tracks {
            row.muted = true;
        }
        let mix = render_sheet(&mut composer(), &sheet).unwrap();
        assert!(mix.tracks.is_empty());
        assert_eq!(mix.buffer.len(), 1);
    }

    #[test]
    fn test_render_sheet_strips_voice_tags() {
        let sheet = TrackSheet::from_json(
            r#"{"tracks": [{"name": "a", "profile": "hero", "text": "[villain] Ha"}]}"#,
        )
        .unwrap();
        let mix = render_sheet(&mut composer(), &sheet).unwrap();
        assert_eq!(mix.tracks[0].text, "Ha");
    }

    #[test]
    fn test_render_sheet_rejects_empty() {
        let sheet = TrackSheet { tracks: Vec::new() };
        let err = render_sheet(&mut composer(), &sheet).unwrap_err();
        assert!(matches!(err, AudioError::Spec(SpecError::EmptyTrackSheet)));
    }
}
