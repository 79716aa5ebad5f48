// SPDX-License-Identifier: MPL-2.0
//! Background download and caching of card thumbnails.
//!
//! Each gallery entry with a `url` gets one fetch per session: the bytes are
//! downloaded, decoded, downscaled to card size, and cached as an Iced image
//! handle keyed by image id. A failed fetch is remembered so the card falls
//! back to its placeholder instead of re-requesting on every redraw.

use crate::backend::ImageId;
use iced::widget::image::Handle;
use std::collections::HashMap;
use tokio::sync::Semaphore;

/// Longest edge of a decoded thumbnail, in pixels.
///
/// Cards render far smaller than typical photo downloads; downscaling at
/// decode time keeps the texture uploads bounded.
const MAX_THUMBNAIL_EDGE: u32 = 640;

/// Maximum number of concurrent thumbnail downloads.
///
/// A freshly loaded gallery spawns one fetch per entry; without a cap that
/// opens a socket per image at once.
const MAX_CONCURRENT_FETCHES: usize = 4;

static FETCH_PERMITS: Semaphore = Semaphore::const_new(MAX_CONCURRENT_FETCHES);

/// Result type for thumbnail operations.
pub type ThumbnailResult<T> = Result<T, ThumbnailError>;

/// Errors that can occur while materializing a thumbnail.
#[derive(Debug, Clone)]
pub enum ThumbnailError {
    /// The bytes could not be fetched (transport failure or non-2xx status).
    Fetch(String),
    /// The bytes arrived but are not a decodable image.
    Decode(String),
}

impl std::fmt::Display for ThumbnailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThumbnailError::Fetch(msg) => write!(f, "Thumbnail fetch failed: {msg}"),
            ThumbnailError::Decode(msg) => write!(f, "Thumbnail decode failed: {msg}"),
        }
    }
}

impl std::error::Error for ThumbnailError {}

/// Lifecycle of a single thumbnail.
#[derive(Debug, Clone)]
enum Entry {
    /// Fetch task is in flight.
    Pending,
    /// Decoded and ready to render.
    Ready(Handle),
    /// Fetch or decode failed; the card keeps its placeholder.
    Failed,
}

/// Per-id thumbnail store.
///
/// Owned by the application state and mutated only from the update loop, in
/// response to fetch-completion messages.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailCache {
    entries: HashMap<ImageId, Entry>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the renderable handle for `id`, if one is ready.
    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<&Handle> {
        match self.entries.get(id) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Whether `id` still needs a fetch kicked off.
    ///
    /// False once a fetch is pending, done, or failed. One attempt per
    /// session, no retry.
    #[must_use]
    pub fn needs_fetch(&self, id: &ImageId) -> bool {
        !self.entries.contains_key(id)
    }

    /// Records that a fetch task for `id` has been spawned.
    pub fn mark_pending(&mut self, id: ImageId) {
        self.entries.entry(id).or_insert(Entry::Pending);
    }

    /// Stores a finished thumbnail.
    pub fn insert(&mut self, id: ImageId, handle: Handle) {
        self.entries.insert(id, Entry::Ready(handle));
    }

    /// Records a failed fetch so it is not retried.
    pub fn mark_failed(&mut self, id: ImageId) {
        self.entries.insert(id, Entry::Failed);
    }

    /// Drops cache entries for ids no longer in the gallery.
    pub fn retain_ids<'a>(&mut self, live: impl Iterator<Item = &'a ImageId>) {
        let live: std::collections::HashSet<&ImageId> = live.collect();
        self.entries.retain(|id, _| live.contains(id));
    }
}

/// Downloads `url` and decodes it into a card-sized image handle.
///
/// Builds its own HTTP client: thumbnail hosts are arbitrary external servers
/// (not the gallery backend), and a fetch is a one-shot operation. Downloads
/// are throttled through a process-wide semaphore.
///
/// # Errors
///
/// Returns `ThumbnailError::Fetch` when the request fails or returns a
/// non-2xx status, and `ThumbnailError::Decode` when the payload is not a
/// decodable image.
pub async fn fetch_thumbnail(url: String) -> ThumbnailResult<Handle> {
    let _permit = FETCH_PERMITS
        .acquire()
        .await
        .map_err(|e| ThumbnailError::Fetch(e.to_string()))?;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ThumbnailError::Fetch(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ThumbnailError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ThumbnailError::Fetch(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ThumbnailError::Fetch(e.to_string()))?;

    decode_thumbnail(&bytes)
}

/// Decodes and downscales raw image bytes into an Iced handle.
fn decode_thumbnail(bytes: &[u8]) -> ThumbnailResult<Handle> {
    let image = image_rs::load_from_memory(bytes)
        .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let thumbnail = image.thumbnail(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
