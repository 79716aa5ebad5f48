// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Gallery card surface.
///
/// The color is derived from the active Iced `Theme` background so cards stay
/// readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Top toolbar / navbar surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}
