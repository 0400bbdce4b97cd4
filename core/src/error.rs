//! # Client Errors
//!
//! Every failure the activity workflow can surface to the user. Validation
//! errors are raised before anything is dispatched; the remaining variants
//! come back from the collaborators and are shown as-is, never retried.

/// A form failed its required-field checks; nothing was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Please enter the activity content")]
    MissingContent,
    #[error("Please select a therapist as the creator")]
    MissingCreator,
    #[error("Please enter the child's age")]
    MissingAge,
    #[error("Please select a therapist")]
    MissingTherapist,
    #[error("{field} must be a whole number greater than zero")]
    InvalidNumber { field: &'static str },
}

/// Error returned by workflow operations and the collaborator ports.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never reached the server or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// The referenced record no longer exists
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The server answered with a body this client cannot read
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        let error = ClientError::Server {
            status: 500,
            message: "model unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Server error 500: model unavailable");

        let error: ClientError = ValidationError::InvalidNumber { field: "Word count" }.into();
        assert_eq!(error.to_string(), "Word count must be a whole number greater than zero");
    }
}
