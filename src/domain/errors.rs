// Error taxonomy shared by the application and presentation layers
use std::fmt;
use thiserror::Error;

/// Remote collection a fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Comments,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Comments => "comments",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Error)]
pub enum RemoteFetchError {
    #[error("request for {resource} failed: {message}")]
    Transport { resource: Resource, message: String },

    #[error("request for {resource} returned status {status}")]
    Status { resource: Resource, status: u16 },

    #[error("response for {resource} could not be decoded: {message}")]
    Decode { resource: Resource, message: String },
}

impl RemoteFetchError {
    pub fn resource(&self) -> Resource {
        match self {
            RemoteFetchError::Transport { resource, .. }
            | RemoteFetchError::Status { resource, .. }
            | RemoteFetchError::Decode { resource, .. } => *resource,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no {resource} returned")]
pub struct EmptyResultError {
    pub resource: Resource,
}

/// Failure that moves a page controller into its error state
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Remote(#[from] RemoteFetchError),

    #[error(transparent)]
    Empty(#[from] EmptyResultError),

    #[error("load task ended before producing a result")]
    Interrupted,
}

impl PageError {
    /// Message shown to the user in place of the page content
    pub fn user_message(&self) -> &'static str {
        match self {
            PageError::Empty(EmptyResultError {
                resource: Resource::Users,
            }) => "No users found",
            PageError::Empty(EmptyResultError {
                resource: Resource::Comments,
            }) => "No comments found",
            PageError::Remote(e) => failure_message(e.resource()),
            PageError::Interrupted => "Failed to load page",
        }
    }
}

fn failure_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Users => "Failed to load user data",
        Resource::Comments => "Failed to load comments",
    }
}

/// Rejected dashboard interaction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("page must be at least 1")]
    InvalidPage,

    #[error("page size must be greater than 0")]
    InvalidPageSize,

    #[error("unknown sort column `{0}`")]
    UnknownColumn(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist view state to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a dashboard interaction: bad input or a failed write-through
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
