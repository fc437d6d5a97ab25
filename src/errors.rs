use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Error type shared by every generated CRUD handler.
///
/// Database failures are carried as [`RestError::Store`] and surface as
/// `500 Internal Server Error`. Lookups that matched nothing, either because
/// the id is unknown or because the resource's filters hid the record, become
/// [`RestError::NotFound`] and surface as `404 Not Found`.
#[derive(Debug)]
pub enum RestError {
    /// No record matched the requested id under the active filters.
    NotFound { reason: String },
    /// The underlying store failed.
    Store(DbErr),
}

impl RestError {
    /// Builds the canonical not-found error for a resource and id.
    #[must_use]
    pub fn not_found(resource: &str, id: Uuid) -> Self {
        Self::NotFound {
            reason: format!("{resource} with id {id} does not exist"),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> String {
        match self {
            Self::NotFound { reason } => reason.clone(),
            Self::Store(err) => err.to_string(),
        }
    }

    fn log(&self) {
        match self {
            Self::NotFound { reason } => {
                tracing::debug!(%reason, "lookup matched no record");
            }
            Self::Store(err) => {
                tracing::error!(error = ?err, "store operation failed");
            }
        }
    }
}

impl From<DbErr> for RestError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(reason) => Self::NotFound { reason },
            other => Self::Store(other),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for RestError {}

/// Wire shape of an error response: `{"error": {"reason": "..."}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub reason: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                reason: self.reason(),
            },
        };
        (status, Json(body)).into_response()
    }
}
