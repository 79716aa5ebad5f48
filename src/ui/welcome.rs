// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the gallery has no images.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state view.
///
/// Shown after a successful load that returned nothing, or after the last
/// image is deleted. The search bar above stays usable, so this view only
/// needs to point at it.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let icon = icons::sized(icons::image(), sizing::ICON_XL * 2.0);

    let title = Text::new("No images yet")
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new("Search for a keyword above to find your first image.")
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_view_renders() {
        let _element: Element<'_, ()> = view();
    }
}
