// SPDX-License-Identifier: MPL-2.0
//! Single gallery card: thumbnail, title, and save/delete actions.

use crate::backend::{ImageId, ImageRecord};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render one card.
pub struct ViewContext<'a> {
    pub image: &'a ImageRecord,
    /// Decoded thumbnail, if the background fetch has completed.
    pub thumbnail: Option<&'a Handle>,
}

/// Messages emitted by a card.
#[derive(Debug, Clone)]
pub enum Message {
    Save(ImageId),
    Delete(ImageId),
}

/// Render one gallery card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnail {
        Some(handle) => iced::widget::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
        None => Container::new(icons::sized(icons::image(), sizing::ICON_XL))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let title = if ctx.image.title.is_empty() {
        "Untitled".to_string()
    } else {
        ctx.image.title.clone()
    };
    let title = Text::new(title).size(typography::TITLE_SM);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(picture)
        .push(title);

    if let Some(description) = &ctx.image.description {
        content = content.push(
            Text::new(description.clone())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content = content.push(action_row(ctx.image));

    Container::new(content.padding(spacing::SM))
        .width(Length::Fill)
        .style(|theme: &Theme| styles::container::card(theme))
        .into()
}

/// Builds the bottom row: save button or saved badge, plus delete.
fn action_row(image: &ImageRecord) -> Element<'_, Message> {
    let delete_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::trash(), sizing::ICON_SM))
            .push(Text::new("Delete").size(typography::BODY)),
    )
    .on_press(Message::Delete(image.id.clone()))
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::danger);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    if image.saved {
        let badge = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::checkmark(), sizing::ICON_SM))
            .push(
                Text::new("Saved")
                    .size(typography::CAPTION)
                    .color(palette::SUCCESS_500),
            );
        row = row.push(badge);
    } else {
        let save_button = button(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(icons::bookmark(), sizing::ICON_SM))
                .push(Text::new("Save").size(typography::BODY)),
        )
        .on_press(Message::Save(image.id.clone()))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);
        row = row.push(save_button);
    }

    row = row
        .push(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
        .push(delete_button);

    row.into()
}
