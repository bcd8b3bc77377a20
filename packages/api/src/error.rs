use thiserror::Error;

/// Error from a backend request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// body's explanation when it carried one.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    /// Status code of a rejected response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// Text for a form banner: the server's message, or `fallback` when the
    /// failure carried none.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.display_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn rejected_without_message_uses_fallback() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "request failed");
        assert_eq!(err.display_message("Login failed"), "Login failed");
    }
}
