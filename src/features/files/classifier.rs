//! File-type classification for preview selection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Presentation category of a vault file, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Unknown,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "xml", "csv"];

/// Classify a file name by its final extension.
///
/// Only the substring after the last `.` counts, lowercased; a name without a
/// dot is unknown. Categories are tested in a fixed order (image, video,
/// audio, pdf, text), so `ogg`, which appears in both the video and audio
/// lists, always classifies as video.
pub fn classify(file_name: &str) -> PreviewKind {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return PreviewKind::Unknown;
    };
    let extension = extension.to_lowercase();
    let extension = extension.as_str();

    if IMAGE_EXTENSIONS.contains(&extension) {
        PreviewKind::Image
    } else if VIDEO_EXTENSIONS.contains(&extension) {
        PreviewKind::Video
    } else if AUDIO_EXTENSIONS.contains(&extension) {
        PreviewKind::Audio
    } else if extension == "pdf" {
        PreviewKind::Pdf
    } else if TEXT_EXTENSIONS.contains(&extension) {
        PreviewKind::Text
    } else {
        PreviewKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_each_category() {
        assert_eq!(classify("photo.jpg"), PreviewKind::Image);
        assert_eq!(classify("diagram.svg"), PreviewKind::Image);
        assert_eq!(classify("clip.mp4"), PreviewKind::Video);
        assert_eq!(classify("talk.webm"), PreviewKind::Video);
        assert_eq!(classify("song.mp3"), PreviewKind::Audio);
        assert_eq!(classify("voice.m4a"), PreviewKind::Audio);
        assert_eq!(classify("report.pdf"), PreviewKind::Pdf);
        assert_eq!(classify("notes.txt"), PreviewKind::Text);
        assert_eq!(classify("data.csv"), PreviewKind::Text);
        assert_eq!(classify("backup.sql"), PreviewKind::Unknown);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("PHOTO.JPG"), PreviewKind::Image);
        assert_eq!(classify("mix.OGG"), classify("mix.ogg"));
        assert_eq!(classify("mix.Ogg"), classify("mix.ogg"));
    }

    #[test]
    fn test_ogg_is_video_not_audio() {
        // ogg sits in both the video and audio lists; video is tested first.
        assert_eq!(classify("mix.ogg"), PreviewKind::Video);
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert_eq!(classify("archive.tar.gz"), PreviewKind::Unknown);
        assert_eq!(classify("notes.pdf.txt"), PreviewKind::Text);
    }

    #[test]
    fn test_no_extension_is_unknown() {
        assert_eq!(classify("noext"), PreviewKind::Unknown);
        assert_eq!(classify(""), PreviewKind::Unknown);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PreviewKind::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(
            serde_json::to_string(&PreviewKind::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
