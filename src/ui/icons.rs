// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small single-color SVG assets embedded at compile time via
//! `include_bytes!` and rendered through Iced's `svg` feature. Handles are
//! cached using `OnceLock` so each asset is parsed once per process.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_image`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(trash, "trash.svg", "Trash can (white, for colored buttons).");
define_icon!(
    bookmark,
    "bookmark.svg",
    "Bookmark ribbon (white, for colored buttons)."
);
define_icon!(checkmark, "checkmark.svg", "Green check mark.");
define_icon!(info, "info.svg", "Blue circled i.");
define_icon!(warning, "warning.svg", "Orange warning triangle.");
define_icon!(cross, "cross.svg", "Neutral X, used for dismiss buttons.");
define_icon!(image, "image.svg", "Picture frame placeholder.");

/// Sizes an icon to a square of `size` logical pixels.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_defined() {
        // Verify the embedded assets parse into widgets without panicking.
        let _ = search();
        let _ = trash();
        let _ = bookmark();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = cross();
        let _ = image();
    }

    #[test]
    fn sized_icon_keeps_square_aspect() {
        let _ = sized(search(), 24.0);
    }
}
