use crate::response::{Message, PrettyJson};
use axum::{
    extract::rejection::{BytesRejection, FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bakery_service::sea_orm::{DbErr, SqlErr};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("This bakery does not exist in our database. Please try again.")]
    BakeryNotFound,

    #[error("Baked good not found. Please check the ID and try again.")]
    BakedGoodNotFound,

    #[error("{0}")]
    Validation(String),

    /// A request axum could not extract, keeping axum's status and text.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("storage error: {0}")]
    Storage(#[from] DbErr),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            Self::Storage(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BakeryNotFound | Self::BakedGoodNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected { status, .. } => *status,
            Self::Storage(_) if self.is_foreign_key_violation() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Storage details stay in the logs.
    fn client_message(&self) -> String {
        match self {
            Self::Storage(_) if self.is_foreign_key_violation() => {
                "The referenced bakery does not exist.".to_owned()
            }
            Self::Storage(_) => "Internal server error.".to_owned(),
            other => other.to_string(),
        }
    }
}

macro_rules! rejected_from {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for ApiError {
                fn from(rejection: $rejection) -> Self {
                    Self::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )+
    };
}

rejected_from!(BytesRejection, FormRejection, PathRejection);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Storage(err) if status.is_server_error() => {
                tracing::error!(error = %err, "request failed in the store")
            }
            _ => tracing::debug!(%status, error = %self, "request rejected"),
        }

        (status, PrettyJson(Message::new(self.client_message()))).into_response()
    }
}
