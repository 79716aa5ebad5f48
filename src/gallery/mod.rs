// SPDX-License-Identifier: MPL-2.0
//! In-memory mirror of the remote image collection.
//!
//! The [`Gallery`] owns the ordered list of records and the coarse loading
//! flag; it is the single source of truth for what the grid renders. Every
//! method is a pure state transition: network I/O happens elsewhere and only
//! confirmed outcomes are applied here. Order is insertion order, except that
//! fresh search results are prepended.

use crate::backend::types::{DeleteReceipt, ImageRecord, SaveReceipt};
use crate::backend::ImageId;

/// Client-side state of the remote image collection.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<ImageRecord>,
    loading: bool,
}

impl Gallery {
    /// Creates an empty gallery in its initial loading state.
    ///
    /// The gallery starts loading because the stored collection is fetched
    /// immediately on startup; the flag is cleared only by a successful
    /// [`replace_all`](Self::replace_all). A failed fetch leaves it set and
    /// the spinner up. See DESIGN.md.
    #[must_use]
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            loading: true,
        }
    }

    /// The records in display order (newest search results first).
    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Whether the initial collection fetch is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn find(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.images.iter().find(|image| &image.id == id)
    }

    /// Replaces the whole list with the backend's stored collection and
    /// clears the loading flag.
    pub fn replace_all(&mut self, images: Vec<ImageRecord>) {
        self.images = images;
        self.loading = false;
    }

    /// Prepends a search result, stamping the submitted keyword as its title.
    ///
    /// A search result is ephemeral until explicitly saved, so `saved` is
    /// forced to `false` regardless of what the search endpoint claimed.
    pub fn prepend_found(&mut self, mut record: ImageRecord, keyword: &str) {
        record.title = keyword.to_string();
        record.saved = false;
        self.images.insert(0, record);
    }

    /// Applies a confirmed deletion, returning the removed record.
    ///
    /// Only a receipt that names a `deleted_id` removes anything; an
    /// ambiguous receipt (no id) leaves the list untouched and returns
    /// `None`, as does an id that matches nothing.
    pub fn confirm_deleted(&mut self, receipt: &DeleteReceipt) -> Option<ImageRecord> {
        let deleted_id = receipt.deleted_id.as_ref()?;
        let position = self.images.iter().position(|image| &image.id == deleted_id)?;
        Some(self.images.remove(position))
    }

    /// Applies a confirmed save, returning the now-persisted record.
    ///
    /// The receipt's `inserted_id` is the backend's storage id and need not
    /// equal the image id, so it is used only as the confirmation signal;
    /// the entry is matched by the id the save was issued for. Without a
    /// confirming id nothing changes.
    pub fn confirm_saved(&mut self, id: &ImageId, receipt: &SaveReceipt) -> Option<&ImageRecord> {
        receipt.inserted_id.as_ref()?;
        let image = self.images.iter_mut().find(|image| &image.id == id)?;
        image.saved = true;
        Some(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn delete_receipt(id: Option<i64>) -> DeleteReceipt {
        DeleteReceipt {
            deleted_id: id.map(ImageId::Number),
        }
    }

    #[test]
    fn new_gallery_is_empty_and_loading() {
        let gallery = Gallery::new();
        assert!(gallery.is_empty());
        assert!(gallery.is_loading());
    }

    #[test]
    fn replace_all_mirrors_backend_order_and_clears_loading() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog"), record(2, "cat")]);

        assert!(!gallery.is_loading());
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.images()[0].title, "dog");
        assert_eq!(gallery.images()[1].title, "cat");
    }

    #[test]
    fn replace_all_with_empty_collection() {
        let mut gallery = Gallery::new();
        gallery.replace_all(Vec::new());

        assert!(gallery.is_empty());
        assert!(!gallery.is_loading());
    }

    #[test]
    fn loading_persists_until_a_load_succeeds() {
        // A failed fetch applies no transition at all, so the flag stays up
        // and the spinner keeps spinning. Deliberate: see DESIGN.md.
        let gallery = Gallery::new();
        assert!(gallery.is_loading());
    }

    #[test]
    fn search_result_is_prepended_with_keyword_title() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog")]);

        gallery.prepend_found(record(2, ""), "fox");

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.images()[0].id, ImageId::Number(2));
        assert_eq!(gallery.images()[0].title, "fox");
        assert!(!gallery.images()[0].saved);
        assert_eq!(gallery.images()[1].id, ImageId::Number(1));
        assert_eq!(gallery.images()[1].title, "dog");
    }

    #[test]
    fn prepend_found_overrides_backend_title_and_saved_flag() {
        let mut gallery = Gallery::new();
        let mut found = record(9, "stale title");
        found.saved = true;

        gallery.prepend_found(found, "cat");

        assert_eq!(gallery.images()[0].title, "cat");
        assert!(!gallery.images()[0].saved);
    }

    #[test]
    fn confirmed_delete_removes_exactly_one_entry() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog"), record(2, "cat"), record(3, "fox")]);

        let removed = gallery.confirm_deleted(&delete_receipt(Some(2)));

        assert_eq!(removed.unwrap().title, "cat");
        assert_eq!(gallery.len(), 2);
        assert!(gallery.find(&ImageId::Number(2)).is_none());
        assert!(gallery.find(&ImageId::Number(1)).is_some());
        assert!(gallery.find(&ImageId::Number(3)).is_some());
    }

    #[test]
    fn ambiguous_delete_receipt_changes_nothing() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog")]);

        let removed = gallery.confirm_deleted(&delete_receipt(None));

        assert!(removed.is_none());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn delete_receipt_for_unknown_id_changes_nothing() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog")]);

        let removed = gallery.confirm_deleted(&delete_receipt(Some(99)));

        assert!(removed.is_none());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn confirmed_save_marks_only_that_entry() {
        let mut gallery = Gallery::new();
        let mut target = record(2, "cat");
        target.url = Some("http://example.test/cat.jpg".to_string());
        gallery.replace_all(vec![record(1, "dog"), target]);

        let receipt = SaveReceipt {
            inserted_id: Some(ImageId::from("storage-oid")),
        };
        let saved = gallery.confirm_saved(&ImageId::Number(2), &receipt);

        assert_eq!(saved.unwrap().title, "cat");
        assert!(gallery.images()[1].saved);
        assert_eq!(
            gallery.images()[1].url.as_deref(),
            Some("http://example.test/cat.jpg")
        );
        assert!(!gallery.images()[0].saved);
    }

    #[test]
    fn save_without_confirmation_changes_nothing() {
        let mut gallery = Gallery::new();
        gallery.replace_all(vec![record(1, "dog")]);

        let receipt = SaveReceipt { inserted_id: None };
        let saved = gallery.confirm_saved(&ImageId::Number(1), &receipt);

        assert!(saved.is_none());
        assert!(!gallery.images()[0].saved);
    }

    #[test]
    fn find_matches_string_and_numeric_ids() {
        let mut gallery = Gallery::new();
        let mut named = record(0, "lynx");
        named.id = ImageId::from("abc");
        gallery.replace_all(vec![record(1, "dog"), named]);

        assert!(gallery.find(&ImageId::from("abc")).is_some());
        assert!(gallery.find(&ImageId::Number(1)).is_some());
        assert!(gallery.find(&ImageId::from("1")).is_none());
    }
}
