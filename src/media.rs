//! Video references and the click-to-load gate in front of third-party
//! players.

use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::Localized;

const YOUTUBE_EMBED: &str = "https://www.youtube-nocookie.com/embed";
const YOUTUBE_EMBED_PARAMS: &str = "rel=0&modestbranding=1";
const YOUTUBE_THUMBNAIL: &str = "https://i.ytimg.com/vi";
const VIMEO_PLAYER: &str = "https://player.vimeo.com/video";
const VIMEO_PLAYER_PARAMS: &str = "dnt=1&title=0&byline=0&portrait=0";

/// Where a video lives. Each variant carries the source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSource {
    YouTube(&'static str),
    Vimeo(&'static str),
    File(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoRef {
    pub source: VideoSource,
    pub title: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Third-party player, mounted in an iframe.
    Embed(String),
    /// Direct file for a native `<video>` element.
    Native(String),
}

// Tried in order; the first capture wins. The trailing group stops a
// longer token from matching on its first 11 characters.
static YOUTUBE_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtu\.be/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)",
        r"[?&]v=([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)",
        r"/shorts/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)",
        r"/embed/([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)",
        r"(?:v=|/)([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("youtube pattern should compile"))
    .collect()
});

static VIMEO_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"vimeo\.com/(?:video/)?(\d+)(?:[^0-9A-Za-z_-]|$)")
        .expect("vimeo pattern should compile")
});

fn first_capture<'a>(matchers: &[Regex], url: &'a str) -> Option<&'a str> {
    matchers
        .iter()
        .find_map(|re| re.captures(url).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

pub fn youtube_id(url: &str) -> Option<&str> {
    first_capture(&YOUTUBE_MATCHERS, url)
}

pub fn vimeo_id(url: &str) -> Option<&str> {
    first_capture(std::slice::from_ref(&*VIMEO_MATCHER), url)
}

pub fn resolve_playback_url(source: &VideoSource) -> Option<Playback> {
    match source {
        VideoSource::YouTube(url) => youtube_id(url)
            .map(|id| Playback::Embed(format!("{YOUTUBE_EMBED}/{id}?{YOUTUBE_EMBED_PARAMS}"))),
        VideoSource::Vimeo(url) => vimeo_id(url)
            .map(|id| Playback::Embed(format!("{VIMEO_PLAYER}/{id}?{VIMEO_PLAYER_PARAMS}"))),
        VideoSource::File(url) => Some(Playback::Native(url.to_string())),
    }
}

/// Only YouTube has a thumbnail URL that can be derived from the id alone.
pub fn resolve_thumbnail_url(source: &VideoSource) -> Option<String> {
    match source {
        VideoSource::YouTube(url) => {
            youtube_id(url).map(|id| format!("{YOUTUBE_THUMBNAIL}/{id}/hqdefault.jpg"))
        }
        VideoSource::Vimeo(_) | VideoSource::File(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Idle,
    /// Near the viewport; the thumbnail may load, the player may not.
    Armed,
    /// The player has been requested. Terminal.
    Active,
}

/// What the host component should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaView<'a> {
    Empty,
    Placeholder { thumbnail: Option<&'a str> },
    Embed { src: &'a str },
    Native { src: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaGate {
    playback: Option<Playback>,
    thumbnail: Option<String>,
    state: GateState,
}

impl MediaGate {
    pub fn new(source: &VideoSource) -> Self {
        let playback = resolve_playback_url(source);
        // native players defer their own byte fetch, so they skip the gate
        let state = match playback {
            Some(Playback::Native(_)) => GateState::Active,
            _ => GateState::Idle,
        };
        Self {
            playback,
            thumbnail: resolve_thumbnail_url(source),
            state,
        }
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether this reference goes through the Idle → Armed → Active gate.
    pub fn is_gated(&self) -> bool {
        matches!(self.playback, Some(Playback::Embed(_)))
    }

    /// Proximity trigger. Never activates playback on its own.
    pub fn arm(&mut self) -> bool {
        if self.is_gated() && self.state == GateState::Idle {
            self.state = GateState::Armed;
            true
        } else {
            false
        }
    }

    /// Click trigger. Returns `true` only for the first effective call.
    pub fn activate(&mut self) -> bool {
        if self.is_gated() && self.state != GateState::Active {
            self.state = GateState::Active;
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> MediaView<'_> {
        match (&self.playback, self.state) {
            (None, _) => MediaView::Empty,
            (Some(Playback::Native(src)), _) => MediaView::Native { src },
            (Some(Playback::Embed(src)), GateState::Active) => MediaView::Embed { src },
            (Some(Playback::Embed(_)), GateState::Armed) => MediaView::Placeholder {
                thumbnail: self.thumbnail(),
            },
            (Some(Playback::Embed(_)), GateState::Idle) => {
                MediaView::Placeholder { thumbnail: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_url_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
        ] {
            assert_eq!(youtube_id(url), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn test_youtube_fallback_token() {
        assert_eq!(
            youtube_id("https://m.youtube.com/live/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_youtube_rejects_wrong_lengths() {
        assert_eq!(youtube_id("https://youtu.be/short"), None);
        assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQextra"), None);
        assert_eq!(youtube_id("not a video"), None);
        assert_eq!(youtube_id("https://example.com/about"), None);
    }

    #[test]
    fn test_vimeo_url_shapes() {
        assert_eq!(vimeo_id("https://vimeo.com/76979871"), Some("76979871"));
        assert_eq!(
            vimeo_id("https://player.vimeo.com/video/76979871"),
            Some("76979871")
        );
        assert_eq!(vimeo_id("https://vimeo.com/channels/staffpicks"), None);
        assert_eq!(vimeo_id("https://vimeo.com/123abc"), None);
        assert_eq!(
            vimeo_id("https://vimeo.com/76979871?share=copy"),
            Some("76979871")
        );
    }

    #[test]
    fn test_playback_urls() {
        assert_eq!(
            resolve_playback_url(&VideoSource::YouTube("https://youtu.be/dQw4w9WgXcQ")),
            Some(Playback::Embed(
                "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
                    .to_string()
            ))
        );
        assert_eq!(
            resolve_playback_url(&VideoSource::Vimeo("https://vimeo.com/76979871")),
            Some(Playback::Embed(
                "https://player.vimeo.com/video/76979871?dnt=1&title=0&byline=0&portrait=0"
                    .to_string()
            ))
        );
        assert_eq!(
            resolve_playback_url(&VideoSource::File("/videos/demo.mp4")),
            Some(Playback::Native("/videos/demo.mp4".to_string()))
        );
    }

    #[test]
    fn test_thumbnails() {
        assert_eq!(
            resolve_thumbnail_url(&VideoSource::YouTube("https://youtu.be/dQw4w9WgXcQ")).as_deref(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(
            resolve_thumbnail_url(&VideoSource::Vimeo("https://vimeo.com/76979871")),
            None
        );
        assert_eq!(resolve_thumbnail_url(&VideoSource::File("/a.mp4")), None);
    }

    #[test]
    fn test_unresolvable_renders_nothing() {
        for source in [
            VideoSource::YouTube("https://example.com/about"),
            VideoSource::Vimeo("https://vimeo.com/about"),
        ] {
            let mut gate = MediaGate::new(&source);
            assert_eq!(gate.playback(), None);
            assert!(!gate.arm());
            assert!(!gate.activate());
            assert_eq!(gate.view(), MediaView::Empty);
        }
    }

    #[test]
    fn test_gate_flow() {
        let mut gate = MediaGate::new(&VideoSource::YouTube("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(gate.state(), GateState::Idle);
        assert_eq!(gate.view(), MediaView::Placeholder { thumbnail: None });

        assert!(gate.arm());
        assert!(!gate.arm());
        assert_eq!(gate.state(), GateState::Armed);
        assert_eq!(
            gate.view(),
            MediaView::Placeholder {
                thumbnail: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
            }
        );

        assert!(gate.activate());
        assert!(matches!(gate.view(), MediaView::Embed { .. }));
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut gate = MediaGate::new(&VideoSource::Vimeo("https://vimeo.com/76979871"));
        assert!(gate.activate());
        let after_first = gate.clone();
        assert!(!gate.activate());
        assert_eq!(gate, after_first);
        assert_eq!(gate.state(), GateState::Active);
        // no way back
        assert!(!gate.arm());
        assert_eq!(gate.state(), GateState::Active);
    }

    #[test]
    fn test_click_without_proximity() {
        let mut gate = MediaGate::new(&VideoSource::YouTube("https://youtu.be/dQw4w9WgXcQ"));
        assert!(gate.activate());
        assert_eq!(gate.state(), GateState::Active);
    }

    #[test]
    fn test_file_bypasses_gate() {
        let mut gate = MediaGate::new(&VideoSource::File("/videos/demo.mp4"));
        assert!(!gate.is_gated());
        assert_eq!(gate.view(), MediaView::Native { src: "/videos/demo.mp4" });
        assert!(!gate.arm());
        assert!(!gate.activate());
        assert_eq!(gate.view(), MediaView::Native { src: "/videos/demo.mp4" });
    }
}
