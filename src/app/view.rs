// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the whole screen
//! from application state: the header bar, then either the loading spinner
//! or the search bar plus grid/welcome, with the toast overlay stacked on
//! top of everything.

use super::Message;
use crate::gallery::Gallery;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::palette;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{gallery_grid, navbar, search_bar, welcome};
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub keyword: &'a str,
    pub thumbnails: &'a ThumbnailCache,
    pub notifications: &'a Manager,
    pub window_width: f32,
    pub spinner_rotation: f32,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(&navbar::ViewContext {
        image_count: ctx.gallery.len(),
        loading: ctx.gallery.is_loading(),
    });

    let content: Element<'_, Message> = if ctx.gallery.is_loading() {
        view_loading(ctx.spinner_rotation)
    } else {
        view_gallery(&ctx)
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::with_children(vec![base.into(), overlay]).into()
}

/// Centered spinner shown while the initial collection fetch is pending.
fn view_loading<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element();

    Container::new(spinner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Search bar above the card grid, or the welcome view when empty.
fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search = search_bar::view(search_bar::ViewContext {
        keyword: ctx.keyword,
    })
    .map(Message::SearchBar);

    let body: Element<'a, Message> = if ctx.gallery.is_empty() {
        welcome::view()
    } else {
        gallery_grid::view(gallery_grid::ViewContext {
            images: ctx.gallery.images(),
            thumbnails: ctx.thumbnails,
            window_width: ctx.window_width,
        })
        .map(Message::Card)
    };

    Column::new()
        .push(search)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ImageId, ImageRecord};

    fn record(id: i64, title: &str) -> ImageRecord {
        ImageRecord {
            id: ImageId::Number(id),
            title: title.to_string(),
            saved: false,
            url: None,
            description: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn view_renders_loading_state() {
        let gallery = Gallery::new();
        let thumbnails = ThumbnailCache::new();
        let notifications = Manager::new();

        let _element = view(ViewContext {
            gallery: &gallery,
            keyword: "",
            thumbnails: &thumbnails,
            notifications: &notifications,
            window_width: 1024.0,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn view_renders_populated_gallery() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog"), record(2, "cat")]);
        let thumbnails = ThumbnailCache::new();
        let notifications = Manager::new();

        let _element = view(ViewContext {
            gallery: &gallery,
            keyword: "fox",
            thumbnails: &thumbnails,
            notifications: &notifications,
            window_width: 1024.0,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn view_renders_welcome_when_empty() {
        let mut gallery = Gallery::new();
        gallery.replace_all(Vec::new());
        let thumbnails = ThumbnailCache::new();
        let notifications = Manager::new();

        let _element = view(ViewContext {
            gallery: &gallery,
            keyword: "",
            thumbnails: &thumbnails,
            notifications: &notifications,
            window_width: 600.0,
            spinner_rotation: 0.0,
        });
    }
}
