//! Preview mode selection.
//!
//! Given a classified file and its transient content URL, picks exactly one
//! rendering mode for the client. Pure: performs no network or storage access
//! of its own.

use crate::features::files::classifier::PreviewKind;
use crate::features::files::dtos::PreviewResponseDto;

/// What the preview surface must display: the file's display name, a
/// presigned content URL (which expires on its own) and the declared media
/// type, when one was recorded at upload.
#[derive(Debug, Clone)]
pub struct PreviewTarget {
    pub name: String,
    pub url: String,
    pub content_type: Option<String>,
}

/// Placeholder shown for text files; their content is never rendered inline.
pub const TEXT_PREVIEW_MESSAGE: &str =
    "Text preview not available. Please download the file to view its contents.";

/// Placeholder shown for files with no preview support.
pub const NO_PREVIEW_MESSAGE: &str =
    "Preview not available for this file type. Please download the file to view its contents.";

/// Select the rendering mode for a classified preview target.
///
/// Image, video, audio and pdf targets hand the transient URL to the client
/// viewer. Text and unknown files get a fixed placeholder and the URL is
/// withheld, so their content is never fetched for inline display.
pub fn render(target: PreviewTarget, kind: PreviewKind) -> PreviewResponseDto {
    match kind {
        PreviewKind::Image | PreviewKind::Video | PreviewKind::Audio | PreviewKind::Pdf => {
            PreviewResponseDto {
                name: target.name,
                kind,
                url: Some(target.url),
                content_type: target.content_type,
                message: None,
            }
        }
        PreviewKind::Text => PreviewResponseDto {
            name: target.name,
            kind,
            url: None,
            content_type: target.content_type,
            message: Some(TEXT_PREVIEW_MESSAGE.to_string()),
        },
        PreviewKind::Unknown => PreviewResponseDto {
            name: target.name,
            kind,
            url: None,
            content_type: target.content_type,
            message: Some(NO_PREVIEW_MESSAGE.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::files::classifier::classify;

    fn target(name: &str) -> PreviewTarget {
        PreviewTarget {
            name: name.to_string(),
            url: "http://minio.local/vault/user-1/abc.bin?signed".to_string(),
            content_type: None,
        }
    }

    #[test]
    fn test_pdf_selects_embedded_viewer() {
        let name = "report.pdf";
        let response = render(target(name), classify(name));
        assert_eq!(response.kind, PreviewKind::Pdf);
        assert!(response.url.is_some());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_media_kinds_keep_the_url() {
        for name in ["photo.png", "clip.mp4", "song.mp3"] {
            let response = render(target(name), classify(name));
            assert!(response.url.is_some(), "{} should be renderable", name);
            assert!(response.message.is_none());
        }
    }

    #[test]
    fn test_text_gets_placeholder_without_url() {
        let name = "notes.txt";
        let response = render(target(name), classify(name));
        assert_eq!(response.kind, PreviewKind::Text);
        assert!(response.url.is_none());
        assert_eq!(response.message.as_deref(), Some(TEXT_PREVIEW_MESSAGE));
    }

    #[test]
    fn test_unknown_gets_placeholder_without_url() {
        let name = "backup.sql";
        let response = render(target(name), classify(name));
        assert_eq!(response.kind, PreviewKind::Unknown);
        assert!(response.url.is_none());
        assert_eq!(response.message.as_deref(), Some(NO_PREVIEW_MESSAGE));
    }
}
