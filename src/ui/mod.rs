// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`navbar`] - Header bar with the application title and image count
//! - [`search_bar`] - Keyword input and submit button
//! - [`gallery_grid`] - Responsive grid of image cards
//! - [`image_card`] - Single gallery entry with save/delete actions
//! - [`welcome`] - Empty state shown when the gallery has no images
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icon rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery_grid;
pub mod icons;
pub mod image_card;
pub mod navbar;
pub mod notifications;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod welcome;
pub mod widgets;
