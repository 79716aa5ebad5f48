// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each backend operation follows the same shape: a UI event spawns a task
//! against the backend client, and the task's completion message applies the
//! confirmed outcome to the gallery and pushes a toast. Failures are logged
//! to stderr and surfaced as error toasts with the error's display text; no
//! retries, no cancellation. Overlapping operations are allowed and applied
//! in completion order.

use super::{App, Message};
use crate::backend::types::{DeleteReceipt, ImageRecord, SaveReceipt};
use crate::backend::ImageId;
use crate::error::Error;
use crate::media::thumbnails::{self, ThumbnailError};
use crate::ui::image_card;
use crate::ui::notifications::Notification;
use crate::ui::search_bar;
use iced::Task;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Handles search bar messages, spawning a search on submit.
pub(super) fn handle_search_bar_message(
    app: &mut App,
    message: search_bar::Message,
) -> Task<Message> {
    match search_bar::update(message, &mut app.keyword) {
        search_bar::Event::None => Task::none(),
        search_bar::Event::Search(keyword) => {
            let client = app.client.clone();
            let word = keyword.clone();
            Task::perform(
                async move { client.search_image(&word).await },
                move |result| Message::SearchCompleted {
                    keyword: keyword.clone(),
                    result,
                },
            )
        }
    }
}

/// Handles card actions, spawning the matching backend request.
pub(super) fn handle_card_message(app: &mut App, message: image_card::Message) -> Task<Message> {
    match message {
        image_card::Message::Save(id) => {
            // The record is posted as currently held; it is only marked
            // saved once the backend confirms the insert.
            let Some(record) = app.gallery.find(&id).cloned() else {
                return Task::none();
            };
            let client = app.client.clone();
            Task::perform(
                async move { client.save_image(&record).await },
                move |result| Message::SaveCompleted {
                    id: id.clone(),
                    result,
                },
            )
        }
        image_card::Message::Delete(id) => {
            let client = app.client.clone();
            let request_id = id.clone();
            Task::perform(
                async move { client.delete_image(&request_id).await },
                move |result| Message::DeleteCompleted {
                    id: id.clone(),
                    result,
                },
            )
        }
    }
}

/// Applies the outcome of the initial collection fetch.
///
/// On failure the loading flag is deliberately left set, so the spinner
/// stays up until a load succeeds. See DESIGN.md.
pub(super) fn handle_images_loaded(
    app: &mut App,
    result: Result<Vec<ImageRecord>, Error>,
) -> Task<Message> {
    match result {
        Ok(images) => {
            app.gallery.replace_all(images);
            app.notifications
                .push_unique(Notification::success("Saved images downloaded"));
            spawn_thumbnail_fetches(app)
        }
        Err(err) => {
            eprintln!("Failed to load saved images: {err}");
            app.notifications.push(Notification::error(err.to_string()));
            Task::none()
        }
    }
}

/// Applies the outcome of a keyword search.
///
/// The input is cleared on both arms: a failed search still resets the form.
pub(super) fn handle_search_completed(
    app: &mut App,
    keyword: &str,
    result: Result<ImageRecord, Error>,
) -> Task<Message> {
    app.keyword.clear();

    match result {
        Ok(record) => {
            app.gallery.prepend_found(record, keyword);
            app.notifications.push(Notification::info(format!(
                "New image {} was found",
                keyword.to_uppercase()
            )));
            spawn_thumbnail_fetches(app)
        }
        Err(err) => {
            eprintln!("Search for '{keyword}' failed: {err}");
            app.notifications.push(Notification::error(err.to_string()));
            Task::none()
        }
    }
}

/// Applies a delete outcome. An unconfirmed receipt is a silent no-op.
pub(super) fn handle_delete_completed(
    app: &mut App,
    id: &ImageId,
    result: Result<DeleteReceipt, Error>,
) -> Task<Message> {
    match result {
        Ok(receipt) => {
            if let Some(removed) = app.gallery.confirm_deleted(&receipt) {
                app.notifications.push(Notification::warning(format!(
                    "Image {} was deleted",
                    removed.title.to_uppercase()
                )));
                app.thumbnails
                    .retain_ids(app.gallery.images().iter().map(|image| &image.id));
            }
            Task::none()
        }
        Err(err) => {
            eprintln!("Failed to delete image {id}: {err}");
            app.notifications.push(Notification::error(err.to_string()));
            Task::none()
        }
    }
}

/// Applies a save outcome. Only a confirming `inserted_id` marks the record.
pub(super) fn handle_save_completed(
    app: &mut App,
    id: &ImageId,
    result: Result<SaveReceipt, Error>,
) -> Task<Message> {
    match result {
        Ok(receipt) => {
            if let Some(saved) = app.gallery.confirm_saved(id, &receipt) {
                app.notifications.push(Notification::info(format!(
                    "Image {} was saved",
                    saved.title.to_uppercase()
                )));
            }
            Task::none()
        }
        Err(err) => {
            eprintln!("Failed to save image {id}: {err}");
            app.notifications.push(Notification::error(err.to_string()));
            Task::none()
        }
    }
}

/// Stores a finished thumbnail, or remembers the failure so the card keeps
/// its placeholder. Thumbnail problems never toast.
pub(super) fn handle_thumbnail_fetched(
    app: &mut App,
    id: ImageId,
    result: Result<iced::widget::image::Handle, ThumbnailError>,
) -> Task<Message> {
    match result {
        Ok(handle) => app.thumbnails.insert(id, handle),
        Err(err) => {
            eprintln!("Thumbnail for image {id} unavailable: {err}");
            app.thumbnails.mark_failed(id);
        }
    }
    Task::none()
}

/// Periodic tick: advances the spinner and expires toasts.
pub(super) fn handle_tick(app: &mut App) -> Task<Message> {
    if app.gallery.is_loading() {
        app.spinner_rotation += SPINNER_SPEED;
        if app.spinner_rotation > std::f32::consts::TAU {
            app.spinner_rotation -= std::f32::consts::TAU;
        }
    }

    app.notifications.tick();
    Task::none()
}

/// Spawns one thumbnail fetch per gallery entry that has a URL and no cache
/// entry yet.
fn spawn_thumbnail_fetches(app: &mut App) -> Task<Message> {
    if !app.fetch_thumbnails {
        return Task::none();
    }

    let wanted: Vec<(ImageId, String)> = app
        .gallery
        .images()
        .iter()
        .filter_map(|image| image.url.as_ref().map(|url| (image.id.clone(), url.clone())))
        .filter(|(id, _)| app.thumbnails.needs_fetch(id))
        .collect();

    let mut tasks = Vec::with_capacity(wanted.len());
    for (id, url) in wanted {
        app.thumbnails.mark_pending(id.clone());
        tasks.push(Task::perform(
            thumbnails::fetch_thumbnail(url),
            move |result| Message::ThumbnailFetched {
                id: id.clone(),
                result,
            },
        ));
    }

    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn app() -> App {
        App::default()
    }

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

    fn first_toast(app: &App) -> &Notification {
        app.notifications.visible().next().expect("expected a toast")
    }

    #[test]
    fn successful_load_replaces_list_and_clears_loading() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));

        assert!(!app.gallery.is_loading());
        assert_eq!(app.gallery.len(), 1);
        assert_eq!(first_toast(&app).severity(), Severity::Success);
    }

    #[test]
    fn failed_load_keeps_the_spinner_up() {
        // Documented behavior: the loading flag is not cleared on failure.
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Err(Error::Http("connection refused".into())));

        assert!(app.gallery.is_loading());
        assert_eq!(first_toast(&app).severity(), Severity::Error);
        assert!(first_toast(&app).message().contains("connection refused"));
    }

    #[test]
    fn load_success_toast_is_deduplicated() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![]));
        let _ = handle_images_loaded(&mut app, Ok(vec![]));

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn completed_search_prepends_and_clears_the_keyword() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));
        app.keyword = "fox".to_string();

        let _ = handle_search_completed(&mut app, "fox", Ok(record(2, "")));

        assert!(app.keyword.is_empty());
        assert_eq!(app.gallery.images()[0].id, ImageId::Number(2));
        assert_eq!(app.gallery.images()[0].title, "fox");
        assert!(!app.gallery.images()[0].saved);
        assert_eq!(app.gallery.images()[1].title, "dog");

        let toast = app
            .notifications
            .visible()
            .find(|n| n.severity() == Severity::Info)
            .expect("expected an info toast");
        assert_eq!(toast.message(), "New image FOX was found");
    }

    #[test]
    fn failed_search_still_clears_the_keyword() {
        let mut app = app();
        app.keyword = "fox".to_string();

        let _ = handle_search_completed(&mut app, "fox", Err(Error::Api("HTTP status: 502".into())));

        assert!(app.keyword.is_empty());
        assert!(app.gallery.is_empty());
        assert_eq!(first_toast(&app).severity(), Severity::Error);
    }

    #[test]
    fn confirmed_delete_removes_entry_and_warns() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog"), record(2, "cat")]));

        let receipt = DeleteReceipt {
            deleted_id: Some(ImageId::Number(2)),
        };
        let _ = handle_delete_completed(&mut app, &ImageId::Number(2), Ok(receipt));

        assert_eq!(app.gallery.len(), 1);
        let toast = app
            .notifications
            .visible()
            .find(|n| n.severity() == Severity::Warning)
            .expect("expected a warning toast");
        assert_eq!(toast.message(), "Image CAT was deleted");
    }

    #[test]
    fn unconfirmed_delete_is_a_silent_no_op() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));
        let toasts_before = app.notifications.visible_count();

        let receipt = DeleteReceipt { deleted_id: None };
        let _ = handle_delete_completed(&mut app, &ImageId::Number(1), Ok(receipt));

        assert_eq!(app.gallery.len(), 1);
        assert_eq!(app.notifications.visible_count(), toasts_before);
    }

    #[test]
    fn confirmed_save_marks_the_record_and_toasts() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));

        let receipt = SaveReceipt {
            inserted_id: Some(ImageId::from("storage-oid")),
        };
        let _ = handle_save_completed(&mut app, &ImageId::Number(1), Ok(receipt));

        assert!(app.gallery.images()[0].saved);
        let toast = app
            .notifications
            .visible()
            .find(|n| n.severity() == Severity::Info)
            .expect("expected an info toast");
        assert_eq!(toast.message(), "Image DOG was saved");
    }

    #[test]
    fn failed_save_leaves_the_record_unsaved() {
        // The record is only marked saved on backend confirmation; a failed
        // request must leave local state consistent with backend truth.
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));

        let _ = handle_save_completed(
            &mut app,
            &ImageId::Number(1),
            Err(Error::Http("broken pipe".into())),
        );

        assert!(!app.gallery.images()[0].saved);
        assert!(app
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn unconfirmed_save_receipt_changes_nothing() {
        let mut app = app();
        let _ = handle_images_loaded(&mut app, Ok(vec![record(1, "dog")]));
        let toasts_before = app.notifications.visible_count();

        let receipt = SaveReceipt { inserted_id: None };
        let _ = handle_save_completed(&mut app, &ImageId::Number(1), Ok(receipt));

        assert!(!app.gallery.images()[0].saved);
        assert_eq!(app.notifications.visible_count(), toasts_before);
    }

    #[test]
    fn thumbnail_failure_is_cached_without_a_toast() {
        let mut app = app();
        let _ = handle_thumbnail_fetched(
            &mut app,
            ImageId::Number(1),
            Err(ThumbnailError::Fetch("HTTP status: 404".into())),
        );

        assert!(!app.thumbnails.needs_fetch(&ImageId::Number(1)));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn tick_spins_only_while_loading() {
        let mut app = app();
        assert!(app.gallery.is_loading());

        let _ = handle_tick(&mut app);
        let spinning = app.spinner_rotation;
        assert!(spinning > 0.0);

        let _ = handle_images_loaded(&mut app, Ok(vec![]));
        let _ = handle_tick(&mut app);
        assert_eq!(app.spinner_rotation, spinning);
    }

    #[test]
    fn thumbnail_fetches_respect_the_config_switch() {
        let mut app = app();
        app.fetch_thumbnails = false;

        let mut with_url = record(1, "dog");
        with_url.url = Some("http://example.test/dog.jpg".to_string());
        let _ = handle_images_loaded(&mut app, Ok(vec![with_url]));

        assert!(app.thumbnails.needs_fetch(&ImageId::Number(1)));
    }

    #[test]
    fn thumbnail_fetches_are_spawned_once_per_id() {
        let mut app = app();
        let mut with_url = record(1, "dog");
        with_url.url = Some("http://example.test/dog.jpg".to_string());

        let _ = handle_images_loaded(&mut app, Ok(vec![with_url.clone()]));
        assert!(!app.thumbnails.needs_fetch(&ImageId::Number(1)));
    }
}
