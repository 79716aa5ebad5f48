// SPDX-License-Identifier: MPL-2.0
//! Keyword search form.
//!
//! A single text input plus a submit button. The keyword string itself is
//! owned by the application state; this component edits it through messages
//! and reports submissions upward as an [`Event`]. Submission does NOT clear
//! the input: the application clears it when the search attempt completes,
//! success or failure alike.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub keyword: &'a str,
}

/// Messages emitted by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    KeywordChanged(String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user submitted the form with this keyword (possibly empty).
    Search(String),
}

/// Process a search bar message and return the corresponding event.
pub fn update(message: Message, keyword: &mut String) -> Event {
    match message {
        Message::KeywordChanged(value) => {
            *keyword = value;
            Event::None
        }
        Message::Submitted => Event::Search(keyword.clone()),
    }
}

/// Render the search form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input("Search for new images…", ctx.keyword)
        .on_input(Message::KeywordChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SEARCH_BAR_WIDTH));

    let submit_button = button(icons::sized(icons::search(), sizing::ICON_SM))
        .on_press(Message::Submitted)
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .padding([spacing::LG, spacing::MD])
        .into()
}
