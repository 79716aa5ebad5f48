// SPDX-License-Identifier: MPL-2.0
//! Backend HTTP access.
//!
//! Everything the application knows about the remote collection lives here:
//! the JSON record types ([`types`]) and the thin reqwest wrapper that talks
//! to the four endpoints ([`client`]).

pub mod client;
pub mod types;

pub use client::Client;
pub use types::{DeleteReceipt, ImageId, ImageRecord, SaveReceipt};
