// SPDX-License-Identifier: MPL-2.0
//! Thin reqwest wrapper around the four backend endpoints.
//!
//! | Call | Endpoint | Purpose |
//! |------|----------|---------|
//! | GET | `/images` | fetch the stored collection |
//! | GET | `/new-image?query=<word>` | search for a new image by keyword |
//! | DELETE | `/images/<id>` | delete by id |
//! | POST | `/images` | persist a record |
//!
//! The client performs no retries and sets no timeout; each call is a single
//! request whose outcome is reported back to the update loop as a `Result`.

use crate::backend::types::{DeleteReceipt, ImageRecord, SaveReceipt};
use crate::backend::ImageId;
use crate::error::{Error, Result};

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Builds a client for the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped so endpoint
    /// joining stays predictable.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the full stored collection.
    ///
    /// An empty or `null` body counts as an empty collection; the backend
    /// omits the array when nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` on transport failure and `Error::Api` on a
    /// non-2xx status or an undecodable body.
    pub async fn fetch_images(&self) -> Result<Vec<ImageRecord>> {
        let response = self.http.get(self.endpoint("/images")).send().await?;
        let response = check_status(response)?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Option<Vec<ImageRecord>> = serde_json::from_str(&body)?;
        Ok(records.unwrap_or_default())
    }

    /// Asks the search endpoint for one new image matching `keyword`.
    ///
    /// The returned record carries whatever the backend found; the caller is
    /// responsible for stamping the keyword onto it as the title.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` on transport failure and `Error::Api` on a
    /// non-2xx status or an undecodable body.
    pub async fn search_image(&self, keyword: &str) -> Result<ImageRecord> {
        let response = self
            .http
            .get(self.endpoint("/new-image"))
            .query(&[("query", keyword)])
            .send()
            .await?;
        let response = check_status(response)?;

        Ok(response.json::<ImageRecord>().await?)
    }

    /// Requests deletion of `id` from the stored collection.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` on transport failure and `Error::Api` on a
    /// non-2xx status or an undecodable body.
    pub async fn delete_image(&self, id: &ImageId) -> Result<DeleteReceipt> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/images/{}", id)))
            .send()
            .await?;
        let response = check_status(response)?;

        Ok(response.json::<DeleteReceipt>().await?)
    }

    /// Persists `record` in the stored collection.
    ///
    /// The record is posted exactly as held in memory, opaque extras
    /// included, so the backend sees everything its search endpoint returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` on transport failure and `Error::Api` on a
    /// non-2xx status or an undecodable body.
    pub async fn save_image(&self, record: &ImageRecord) -> Result<SaveReceipt> {
        let response = self
            .http
            .post(self.endpoint("/images"))
            .json(record)
            .send()
            .await?;
        let response = check_status(response)?;

        Ok(response.json::<SaveReceipt>().await?)
    }
}

/// Maps a non-2xx response to `Error::Api`, passing 2xx through.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(Error::Api(format!("HTTP status: {}", response.status())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = Client::new("http://127.0.0.1:5050///").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5050");
    }

    #[test]
    fn endpoints_join_with_a_single_slash() {
        let client = Client::new("http://127.0.0.1:5050/").unwrap();
        assert_eq!(
            client.endpoint("/images"),
            "http://127.0.0.1:5050/images"
        );
        assert_eq!(
            client.endpoint(&format!("/images/{}", ImageId::Number(3))),
            "http://127.0.0.1:5050/images/3"
        );
    }
}
