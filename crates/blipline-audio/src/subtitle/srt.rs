//! SubRip rendering.

use super::Cue;

/// Formats a millisecond offset as `HH:MM:SS,mmm`.
///
/// Fractional milliseconds are floored; negative or NaN offsets render as zero.
pub fn format_timestamp(ms: f64) -> String {
    let total = if ms.is_finite() && ms > 0.0 {
        ms.floor() as u64
    } else {
        0
    };
    let hours = total / 3_600_000;
    let minutes = (total / 60_000) % 60;
    let seconds = (total / 1000) % 60;
    let millis = total % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Renders cues as SubRip text.
///
/// Cues are numbered from 1; each is its index line, the time range line and
/// the text line, and cues are separated by a blank line.
pub fn render_srt(cues: &[Cue]) -> String {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                format_timestamp(cue.start_ms),
                format_timestamp(cue.end_ms),
                cue.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
