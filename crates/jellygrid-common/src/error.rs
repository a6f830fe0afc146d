//! Error types for talking to the media server.
//!
//! HTTP status codes are classified exactly once, in [`Error::from_status`].
//! Callers only look at the error variant and, for classified errors, the
//! help text returned by [`Error::help`].

use std::fmt;

/// Help text shown when the server answers `400 Bad Request`.
pub const HELP_INVALID_USER_ID: &str = "\
# Invalid User ID

The server answered with **400 Bad Request**. This usually means the \
configured **User ID** does not exist on the server.

Open the Jellyfin dashboard, go to *Users*, select your user and copy the \
`userId` value from the address bar into `server.user_id`.";

/// Help text shown when the server answers `401 Unauthorized`.
pub const HELP_INVALID_API_KEY: &str = "\
# Invalid API Key

The server answered with **401 Unauthorized**. This usually means the \
configured **API Key** is wrong or has been revoked.

Open the Jellyfin dashboard, go to *API Keys*, create a new key and put it \
into `server.api_key`.";

/// Known status codes the server uses for configuration mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusHint {
    /// `400`: the user id is most likely wrong.
    InvalidUserId,
    /// `401`: the API key is most likely wrong.
    InvalidApiKey,
}

impl StatusHint {
    /// Look up the hint for a status code, if it is one we recognize.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::InvalidUserId),
            401 => Some(Self::InvalidApiKey),
            _ => None,
        }
    }

    /// Markdown help text for this hint.
    pub fn help(&self) -> &'static str {
        match self {
            Self::InvalidUserId => HELP_INVALID_USER_ID,
            Self::InvalidApiKey => HELP_INVALID_API_KEY,
        }
    }
}

impl fmt::Display for StatusHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUserId => write!(f, "likely invalid user id"),
            Self::InvalidApiKey => write!(f, "likely invalid api key"),
        }
    }
}

/// Error type for catalog requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP call could not be completed (network, DNS, TLS).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status we have no hint for.
    #[error("Server returned {status}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
    },

    /// The server answered with a status that points at a configuration
    /// mistake.
    #[error("Server returned {status}")]
    Classified {
        /// Numeric HTTP status.
        status: u16,
        /// What the status most likely means.
        hint: StatusHint,
    },

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl Error {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match StatusHint::from_status(status) {
            Some(hint) => Self::Classified { status, hint },
            None => Self::Status { status },
        }
    }

    /// Create a new Transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }


    /// The hint attached to a classified error.
    pub fn hint(&self) -> Option<StatusHint> {
        match self {
            Self::Classified { hint, .. } => Some(*hint),
            _ => None,
        }
    }

    /// Help text for classified errors; `None` for everything else.
    pub fn help(&self) -> Option<&'static str> {
        self.hint().map(|h| h.help())
    }

    /// HTTP status carried by the error, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } | Self::Classified { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Result type alias using the catalog Error type.
pub type Result<T> = std::result::Result<T, Error>;
