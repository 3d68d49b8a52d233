//! Error surface of the persistence layer.

use thiserror::Error;

/// Errors surfaced by the repositories.
///
/// Missing documents and rejected conditional replaces are value results
/// (`Option` / `bool`), not errors. The only condition the layer recovers
/// internally is the duplicate-key race inside `get_or_create_by_login`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The unique login index rejected an insert.
    #[error("login '{login}' is already taken")]
    DuplicateLogin { login: String },

    /// The operation is declared on the contract but not supported here.
    #[error("operation '{operation}' is not supported by this store")]
    Unsupported { operation: &'static str },

    /// Transport or backend failure. Surfaced verbatim; never retried here.
    #[error("storage backend unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Creates a duplicate-login error.
    pub fn duplicate_login(login: impl Into<String>) -> Self {
        Self::DuplicateLogin {
            login: login.into(),
        }
    }

    /// Creates a backend-unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_login_names_the_login() {
        let err = StoreError::duplicate_login("alice");
        assert_eq!(err.to_string(), "login 'alice' is already taken");
    }

    #[test]
    fn unsupported_names_the_operation() {
        let err = StoreError::Unsupported {
            operation: "update_or_insert",
        };
        assert_eq!(
            err.to_string(),
            "operation 'update_or_insert' is not supported by this store"
        );
    }
}
