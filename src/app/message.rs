// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::backend::types::{DeleteReceipt, ImageRecord, SaveReceipt};
use crate::backend::ImageId;
use crate::error::Error;
use crate::media::thumbnails::ThumbnailError;
use crate::ui::image_card;
use crate::ui::notifications;
use crate::ui::search_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint;
/// the `*Completed` variants carry the outcomes of backend calls.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Card(image_card::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the initial collection fetch.
    ImagesLoaded(Result<Vec<ImageRecord>, Error>),
    /// Result of a keyword search, paired with the keyword that produced it.
    SearchCompleted {
        keyword: String,
        result: Result<ImageRecord, Error>,
    },
    /// Result of a delete request for `id`.
    DeleteCompleted {
        id: ImageId,
        result: Result<DeleteReceipt, Error>,
    },
    /// Result of a save request for `id`.
    SaveCompleted {
        id: ImageId,
        result: Result<SaveReceipt, Error>,
    },
    /// Result of a background thumbnail fetch.
    ThumbnailFetched {
        id: ImageId,
        result: Result<iced::widget::image::Handle, ThumbnailError>,
    },
    /// Periodic tick for spinner animation and notification auto-dismiss.
    Tick(Instant),
    /// The window was resized; the grid re-derives its column count.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional backend base URL override.
    /// Takes precedence over the `GALLERY_API_URL` environment variable.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
