//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use uoacal_domain::UoaCalError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub UoaCalError);

impl From<InfraError> for UoaCalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<UoaCalError> for InfraError {
    fn from(value: UoaCalError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoUoaCalError {
    fn into_uoacal(self) -> UoaCalError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → UoaCalError */
/* -------------------------------------------------------------------------- */

impl IntoUoaCalError for SqlError {
    fn into_uoacal(self) -> UoaCalError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        UoaCalError::Persistence("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        UoaCalError::Persistence("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        UoaCalError::Persistence("unique constraint violation".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        UoaCalError::Persistence(format!("unable to open database: {message}"))
                    }
                    _ => UoaCalError::Persistence(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => UoaCalError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                UoaCalError::CorruptData(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                UoaCalError::CorruptData(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                UoaCalError::CorruptData("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => UoaCalError::Config(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => UoaCalError::Persistence(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_uoacal())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → UoaCalError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(UoaCalError::Persistence(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → UoaCalError */
/* -------------------------------------------------------------------------- */

impl IntoUoaCalError for serde_json::Error {
    fn into_uoacal(self) -> UoaCalError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => UoaCalError::Network(format!("failed to read JSON body: {self}")),
            Category::Syntax | Category::Data | Category::Eof => {
                UoaCalError::InvalidInput(format!("unexpected JSON payload: {self}"))
            }
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_uoacal())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → UoaCalError */
/* -------------------------------------------------------------------------- */

impl IntoUoaCalError for HttpError {
    fn into_uoacal(self) -> UoaCalError {
        if self.is_timeout() {
            return UoaCalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return UoaCalError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return UoaCalError::InvalidInput(format!("failed to decode HTTP body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => UoaCalError::Auth(message),
                404 => UoaCalError::NotFound(message),
                400..=499 => UoaCalError::InvalidInput(message),
                _ => UoaCalError::Network(message),
            };
        }

        UoaCalError::Network(format!("HTTP error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_uoacal())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
