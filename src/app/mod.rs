// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the gallery mirror, the backend client, and the UI
//! side-state (search keyword, thumbnails, notifications), and translates
//! messages into side effects like backend calls, toast pushes, and
//! thumbnail fetches. Policy decisions (window sizing, config application,
//! what toasts fire when) are kept close to the update loop so user-facing
//! behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::backend;
use crate::gallery::Gallery;
use crate::media::ThumbnailCache;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    /// Backend HTTP client, shared by cloning into tasks.
    client: backend::Client,
    /// In-memory mirror of the remote collection.
    gallery: Gallery,
    /// Current content of the search input.
    keyword: String,
    /// Downloaded card thumbnails, keyed by image id.
    thumbnails: ThumbnailCache,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Whether card thumbnails are downloaded in the background.
    fetch_thumbnails: bool,
    /// Tracked window width driving the grid's column count.
    window_width: f32,
    /// Current loading spinner angle in radians.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("api_url", &self.client.base_url())
            .field("images", &self.gallery.len())
            .field("loading", &self.gallery.is_loading())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            client: backend::Client::new(config::DEFAULT_API_URL)
                .expect("failed to initialize HTTP client"),
            gallery: Gallery::new(),
            keyword: String::new(),
            thumbnails: ThumbnailCache::new(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            fetch_thumbnails: true,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial collection
    /// fetch based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let api_url = config::resolve_api_url(flags.api_url, &config);
        let client =
            backend::Client::new(api_url).expect("failed to initialize HTTP client");

        let mut app = App {
            client,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;
        app.fetch_thumbnails = config.gallery.fetch_thumbnails.unwrap_or(true);

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        let client = app.client.clone();
        let task = Task::perform(
            async move { client.fetch_images().await },
            Message::ImagesLoaded,
        );

        (app, task)
    }

    fn title(&self) -> String {
        "Images Gallery".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(search_message) => {
                update::handle_search_bar_message(self, search_message)
            }
            Message::Card(card_message) => update::handle_card_message(self, card_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImagesLoaded(result) => update::handle_images_loaded(self, result),
            Message::SearchCompleted { keyword, result } => {
                update::handle_search_completed(self, &keyword, result)
            }
            Message::DeleteCompleted { id, result } => {
                update::handle_delete_completed(self, &id, result)
            }
            Message::SaveCompleted { id, result } => {
                update::handle_save_completed(self, &id, result)
            }
            Message::ThumbnailFetched { id, result } => {
                update::handle_thumbnail_fetched(self, id, result)
            }
            Message::Tick(_instant) => update::handle_tick(self),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            keyword: &self.keyword,
            thumbnails: &self.thumbnails,
            notifications: &self.notifications,
            window_width: self.window_width,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
