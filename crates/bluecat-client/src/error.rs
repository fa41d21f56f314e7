//! BlueCat client errors

use thiserror::Error;

/// Errors that can occur when interacting with the BlueCat API
///
/// Every variant raised by an API call carries the endpoint name of the
/// operation that failed, so callers can tell `getEntityById` failures from
/// `addHostRecord` failures without inspecting messages.
#[derive(Debug, Error)]
pub enum BlueCatError {
    /// Network, TLS or timeout failure while talking to the server
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// Login was refused or the response carried no session token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Response body did not match the expected JSON shape
    #[error("{operation} JSON parse failed: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// Server answered 2xx but reported an error in the body
    #[error("{operation} rejected by server: {message}")]
    Rejected { operation: String, message: String },

    /// Server answered with a non-success status
    #[error("{operation} failed: {status} - {body}")]
    Api {
        operation: String,
        status: u16,
        body: String,
    },

    /// HTTP client could not be built from the configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BlueCatError {
    /// Endpoint name of the failed operation, if the error is tied to one
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::Transport { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Rejected { operation, .. }
            | Self::Api { operation, .. } => Some(operation),
            Self::Authentication(_) | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_tag() {
        let err = BlueCatError::Rejected {
            operation: "addGenericRecord".to_string(),
            message: "Invalid rdata".to_string(),
        };
        assert_eq!(err.operation(), Some("addGenericRecord"));
        assert_eq!(
            err.to_string(),
            "addGenericRecord rejected by server: Invalid rdata"
        );

        let err = BlueCatError::Authentication("no token".to_string());
        assert_eq!(err.operation(), None);
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<i64>("nope").unwrap_err();
        let err = BlueCatError::Decode {
            operation: "getEntityById".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("getEntityById JSON parse failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
