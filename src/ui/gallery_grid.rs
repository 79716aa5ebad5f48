// SPDX-License-Identifier: MPL-2.0
//! Responsive grid of gallery cards.
//!
//! The grid chunks the record list into rows whose column count follows the
//! tracked window width: one column on narrow windows, two on medium, three
//! on wide. The breakpoints mirror common CSS grid tiers (768px / 992px).

use crate::backend::ImageRecord;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::spacing;
use crate::ui::image_card;
use iced::widget::{scrollable, Column, Container, Row};
use iced::{Element, Length};

/// Below this width the grid is a single column.
const MEDIUM_BREAKPOINT: f32 = 768.0;

/// Below this width the grid has two columns, three above.
const WIDE_BREAKPOINT: f32 = 992.0;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub images: &'a [ImageRecord],
    pub thumbnails: &'a ThumbnailCache,
    pub window_width: f32,
}

/// Number of card columns for a given window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < MEDIUM_BREAKPOINT {
        1
    } else if width < WIDE_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Render the card grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, image_card::Message> {
    let columns = columns_for_width(ctx.window_width);

    let mut grid = Column::new().spacing(spacing::MD);

    for chunk in ctx.images.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);

        for image in chunk {
            let card = image_card::view(image_card::ViewContext {
                image,
                thumbnail: ctx.thumbnails.get(&image.id),
            });
            row = row.push(Container::new(card).width(Length::FillPortion(1)));
        }

        // Pad the last row so cards keep their column width
        for _ in chunk.len()..columns {
            row = row.push(
                Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
                    .width(Length::FillPortion(1)),
            );
        }

        grid = grid.push(row);
    }

    scrollable(
        Container::new(grid)
            .width(Length::Fill)
            .padding([0.0, spacing::MD]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
