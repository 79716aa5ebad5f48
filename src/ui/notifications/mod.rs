// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (image saved, search failed, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Saved images downloaded"));
//!
//! // In the view function, stack the overlay on top of the content
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Every toast auto-dismisses (3s success/info, 5s warnings, 8s errors)
//!   and also carries a manual dismiss button
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
