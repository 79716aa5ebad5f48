// SPDX-License-Identifier: MPL-2.0
//! Header bar with the application title and collection status.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Row, Text};
use iced::{
    alignment::Vertical,
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    /// Number of images currently in the gallery.
    pub image_count: usize,
    /// Whether the initial collection fetch is still outstanding.
    pub loading: bool,
}

/// Render the header bar.
///
/// The navbar is purely presentational, so it renders for any message type.
pub fn view<'a, Message: 'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let title = Text::new("Images Gallery").size(typography::TITLE_MD);

    let status = if ctx.loading {
        Text::new("Loading…").size(typography::CAPTION)
    } else {
        let label = match ctx.image_count {
            0 => "No images".to_string(),
            1 => "1 image".to_string(),
            n => format!("{n} images"),
        };
        Text::new(label).size(typography::CAPTION)
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
        .push(status);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(|theme: &Theme| styles::container::toolbar(theme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_while_loading() {
        let ctx = ViewContext {
            image_count: 0,
            loading: true,
        };
        let _element: Element<'_, ()> = view(&ctx);
    }

    #[test]
    fn navbar_view_renders_with_images() {
        let ctx = ViewContext {
            image_count: 12,
            loading: false,
        };
        let _element: Element<'_, ()> = view(&ctx);
    }

    #[test]
    fn navbar_view_renders_when_empty() {
        let ctx = ViewContext {
            image_count: 0,
            loading: false,
        };
        let _element: Element<'_, ()> = view(&ctx);
    }
}
