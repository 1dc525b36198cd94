use thiserror::Error;

/// Failure of the one fallible operation in the storefront: fetching the catalog
///
/// The `Display` output is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogFetchError {
    #[error("Failed to reach catalog: {0}")]
    Transport(String),

    #[error("Catalog request failed with status {status}")]
    Status { status: u16 },

    #[error("Malformed catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogFetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogFetchError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            CatalogFetchError::Decode(err.to_string())
        } else {
            CatalogFetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogFetchError {
    fn from(err: serde_json::Error) -> Self {
        CatalogFetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CatalogFetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "Catalog request failed with status 503");

        let err: CatalogFetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogFetchError::Decode(_)));
        assert!(err.to_string().starts_with("Malformed catalog response"));
    }
}
