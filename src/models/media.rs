use crate::models::entry::{Entry, MediaType};

/// URL fragment identifying an embedded-player video link.
const EMBED_MARKER: &str = "youtube.com/embed";

/// How an entry's media should be rendered, resolved once per entry and
/// shared by the gallery grid and the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaView {
    /// Plain image element.
    Image { src: String },
    /// Clickable thumbnail linking out to the video in a new context.
    ThumbnailLink { href: String, thumbnail: String },
    /// Embedded player for videos without a usable thumbnail.
    Embed { src: String },
}

impl MediaView {
    /// Resolves the rendering route for the gallery grid. Images use the
    /// standard-quality source.
    pub fn preview(entry: &Entry) -> Option<Self> {
        Self::classify(entry, entry.url.clone())
    }

    /// Resolves the rendering route for the detail modal. Images prefer the
    /// HD source when one is present; videos route exactly as in the gallery.
    pub fn detail(entry: &Entry) -> Option<Self> {
        let src = entry.hdurl.clone().unwrap_or_else(|| entry.url.clone());
        Self::classify(entry, src)
    }

    fn classify(entry: &Entry, image_src: String) -> Option<Self> {
        match entry.media_type {
            MediaType::Image => Some(Self::Image { src: image_src }),
            MediaType::Video => Some(Self::classify_video(entry)),
            MediaType::Other => None,
        }
    }

    // Precedence: embed-marker URL with a thumbnail, then any thumbnail,
    // then the embedded player. The first two arms get the same link
    // treatment but the ordering is kept explicit.
    fn classify_video(entry: &Entry) -> Self {
        match &entry.thumbnail_url {
            Some(thumb) if entry.url.contains(EMBED_MARKER) => Self::ThumbnailLink {
                href: entry.url.clone(),
                thumbnail: thumb.clone(),
            },
            Some(thumb) => Self::ThumbnailLink {
                href: entry.url.clone(),
                thumbnail: thumb.clone(),
            },
            None => Self::Embed {
                src: entry.url.clone(),
            },
        }
    }
}
