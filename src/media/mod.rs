// SPDX-License-Identifier: MPL-2.0
//! Remote media handling.
//!
//! The gallery list only carries URLs; actually showing pictures means
//! fetching bytes in the background and turning them into renderable
//! handles. That plumbing lives in [`thumbnails`].

pub mod thumbnails;

pub use thumbnails::{fetch_thumbnail, ThumbnailCache, ThumbnailError};
