use std::borrow::Cow;

/// Publishers slice error type.
#[plist_derive::plist_error]
pub enum PublisherError {
    /// A publisher with this name is already registered.
    #[error("Publisher already exists{}: {publisher}", format_context(.context))]
    PublisherExists { publisher: String, context: Option<Cow<'static, str>> },

    /// The domain name is already owned by `publisher`.
    #[error("Domain already exists{}: {domain} (owned by {publisher})", format_context(.context))]
    DomainExists { domain: String, publisher: String, context: Option<Cow<'static, str>> },

    #[error("Publisher not found{}: {publisher}", format_context(.context))]
    PublisherNotFound { publisher: String, context: Option<Cow<'static, str>> },

    /// No publisher owns the domain being updated.
    #[error("Publisher not found{}: no owner for domain {domain}", format_context(.context))]
    OwnerNotFound { domain: String, context: Option<Cow<'static, str>> },

    #[error("Domain not found{}: {domain}", format_context(.context))]
    DomainNotFound { domain: String, context: Option<Cow<'static, str>> },

    /// Update request carries exactly the stored values.
    #[error("There was no edit{}: {domain}", format_context(.context))]
    NoEdit { domain: String, context: Option<Cow<'static, str>> },

    /// Malformed body or a blank required field.
    #[error("Invalid request{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Add-publisher failed for a reason other than a conflict or bad input.
    #[error("Publisher is not added{}: {message}", format_context(.context))]
    NotAdded { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Seed file error{}: {source}", format_context(.context))]
    SeedIo { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Seed format error{}: {source}", format_context(.context))]
    SeedFormat { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("API state error{}: {source}", format_context(.context))]
    State { source: plist_kernel::server::ApiStateError, context: Option<Cow<'static, str>> },

    #[error("Internal publishers error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PublisherError {
    /// Human-readable message exposed to API clients.
    #[must_use]
    pub fn public_message(&self) -> Cow<'static, str> {
        match self {
            Self::PublisherExists { .. } => "Publisher already exists".into(),
            Self::DomainExists { .. } => "Domain already exists".into(),
            Self::PublisherNotFound { .. } | Self::OwnerNotFound { .. } => {
                "Publisher not found".into()
            },
            Self::DomainNotFound { .. } => "Domain not found".into(),
            Self::NoEdit { .. } => "There was no edit".into(),
            Self::Validation { message, .. } => message.clone(),
            Self::NotAdded { .. } => "Publisher is not added".into(),
            _ => "An unexpected error occurred".into(),
        }
    }

    /// Owning publisher reported alongside a domain conflict.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::DomainExists { publisher, .. } => Some(publisher.as_str()),
            _ => None,
        }
    }

    /// Collapses every failure except conflicts and bad input into [`PublisherError::NotAdded`].
    #[must_use]
    pub fn into_not_added(self) -> Self {
        match self {
            Self::PublisherExists { .. }
            | Self::DomainExists { .. }
            | Self::Validation { .. }
            | Self::NotAdded { .. } => self,
            other => Self::NotAdded { message: other.to_string().into(), context: None },
        }
    }
}

#[cfg(feature = "server")]
mod http {
    use super::PublisherError;
    use crate::model::ErrorResponse;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use tracing::{debug, error};

    impl PublisherError {
        #[must_use]
        pub const fn status_code(&self) -> StatusCode {
            match self {
                Self::PublisherExists { .. } | Self::DomainExists { .. } => StatusCode::CONFLICT,
                Self::PublisherNotFound { .. }
                | Self::OwnerNotFound { .. }
                | Self::DomainNotFound { .. }
                | Self::NotAdded { .. } => StatusCode::NOT_FOUND,
                Self::NoEdit { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for PublisherError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if status.is_server_error() {
                error!(error = %self, "Publishers request failed");
            } else {
                debug!(error = %self, status = status.as_u16(), "Publishers request rejected");
            }

            let body = ErrorResponse {
                message: self.public_message().into_owned(),
                publisher: self.owner().map(str::to_owned),
            };
            (status, Json(body)).into_response()
        }
    }
}
