// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a native image gallery client built with the Iced GUI
//! framework.
//!
//! It mirrors a small photo REST backend: the stored collection is fetched on
//! startup, keyword searches pull in new images, and save/delete actions keep
//! the in-memory gallery synchronized with the backend's confirmations. The
//! UI is a responsive card grid with toast notifications and a loading state.

pub mod app;
pub mod backend;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
