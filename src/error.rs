// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, timeout).
    Http(String),
    /// The backend answered, but not with what we asked for
    /// (non-2xx status or an undecodable body).
    Api(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "Request failed: {}", e),
            Error::Api(e) => write!(f, "Backend error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Decode failures surface as Api errors; everything else is transport.
        if err.is_decode() {
            Error::Api(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Api(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "Request failed: connection refused");
    }

    #[test]
    fn display_formats_api_error() {
        let err = Error::Api("HTTP status 500".to_string());
        assert_eq!(format!("{}", err), "Backend error: HTTP status 500");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_json_error_produces_api_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Api(_)));
    }
}
