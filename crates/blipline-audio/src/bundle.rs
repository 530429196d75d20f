//! Export bundle packaging.
//!
//! A bundle is a zip archive holding the rendered WAV and its subtitles
//! under fixed entry names.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::AudioResult;

/// Archive entry name of the audio file.
pub const AUDIO_ENTRY: &str = "audio.wav";

/// Archive entry name of the subtitle file.
pub const SUBTITLE_ENTRY: &str = "legendas.srt";

/// Packages a WAV file and SRT text into an in-memory zip archive.
///
/// Entries are deflate-compressed and written in a fixed order, audio first.
///
/// # Arguments
/// * `wav` - Complete WAV file bytes, stored as [`AUDIO_ENTRY`]
/// * `srt` - SubRip text, stored as [`SUBTITLE_ENTRY`]
///
/// # Returns
/// The zip archive bytes
pub fn package(wav: &[u8], srt: &str) -> AudioResult<Vec<u8>> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    writer.start_file(AUDIO_ENTRY, options)?;
    writer.write_all(wav)?;
    writer.start_file(SUBTITLE_ENTRY, options)?;
    writer.write_all(srt.as_bytes())?;

    let bytes = writer.finish()?.into_inner();
    debug!(
        wav_bytes = wav.len(),
        srt_bytes = srt.len(),
        archive_bytes = bytes.len(),
        "packaged bundle"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use pretty_assertions::assert_eq;
    use zip::ZipArchive;

    use super::*;

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
        let mut file = archive.by_name(name).unwrap();
        let mut out = Vec::new();
        file.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_bundle_round_trip() {
        let wav = b"RIFF....WAVEfmt ".repeat(8);
        let srt = "1\n00:00:00,000 --> 00:00:01,000\nHi.\n";
        let bytes = package(&wav, srt).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(read_entry(&mut archive, AUDIO_ENTRY), wav);
        assert_eq!(read_entry(&mut archive, SUBTITLE_ENTRY), srt.as_bytes());
    }

    #[test]
    fn test_entry_order_and_compression() {
        let bytes = package(&[0u8; 256], "").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), AUDIO_ENTRY);
        assert_eq!(first.compression(), CompressionMethod::Deflated);
        drop(first);
        assert_eq!(archive.by_index(1).unwrap().name(), SUBTITLE_ENTRY);
    }

    #[test]
    fn test_empty_subtitles_are_kept() {
        let bytes = package(b"", "").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(read_entry(&mut archive, SUBTITLE_ENTRY).is_empty());
    }
}
