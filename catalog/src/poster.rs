//! Poster image URLs on the movie image CDN.

#[cfg(test)]
#[path = "poster_test.rs"]
mod poster_test;

/// Image CDN root; a size code and the poster path are appended.
pub const IMAGE_CDN_BASE: &str = "https://image.tmdb.org/t/p";

/// Rendition requested from the CDN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterSize {
    /// Table thumbnail.
    Thumbnail,
    /// Detail overlay image.
    Large,
}

impl PosterSize {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Thumbnail => "w200",
            Self::Large => "w400",
        }
    }
}

/// Build the CDN URL for `poster_path`, or `None` when there is no poster.
#[must_use]
pub fn poster_url(poster_path: Option<&str>, size: PosterSize) -> Option<String> {
    let path = poster_path.map(str::trim).filter(|p| !p.is_empty())?;
    let sep = if path.starts_with('/') { "" } else { "/" };
    Some(format!("{IMAGE_CDN_BASE}/{}{sep}{path}", size.code()))
}
