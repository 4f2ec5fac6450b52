//! Request validation for comic input.
//!
//! Structural rules (length, numeric) run first and are collected for every
//! field. The ISBN store predicate runs only when the ISBN passed its own
//! structural rules. All failures are returned together.

pub mod errors;
pub mod rules;

pub use errors::{FieldError, FieldErrors, Location};
pub use rules::{ComicForm, IsbnParam, IsbnRule, INVALID_VALUE, ISBN_IN_USE, ISBN_NOT_FOUND};

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::repository::{ComicRepository, RepositoryError};

/// Validate a submitted comic form against its field rules and `isbn_rule`.
pub async fn validate_comic_form(
    form: &ComicForm,
    isbn_rule: IsbnRule,
    repo: &dyn ComicRepository,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    let structural = form.validate().err();

    for (field, value) in form.values() {
        if let Some(msg) = first_message(structural.as_ref(), field) {
            errors.push(FieldError::new(field, value, msg, Location::Body));
        } else if field == "isbn" {
            if let Some(msg) = check_isbn(repo, value, isbn_rule).await? {
                errors.push(FieldError::new(field, value, msg, Location::Body));
            }
        }
    }

    finish(errors)
}

/// Validate an ISBN path parameter that must name an existing comic.
pub async fn validate_isbn_param(isbn: &str, repo: &dyn ComicRepository) -> Result<(), CoreError> {
    let param = IsbnParam {
        isbn: isbn.to_string(),
    };
    let mut errors = FieldErrors::new();

    if let Some(msg) = first_message(param.validate().err().as_ref(), "isbn") {
        errors.push(FieldError::new("isbn", isbn, msg, Location::Params));
    } else if let Some(msg) = check_isbn(repo, isbn, IsbnRule::MustExist).await? {
        errors.push(FieldError::new("isbn", isbn, msg, Location::Params));
    }

    finish(errors)
}

/// Run the store-backed ISBN predicate, returning the failure message if any.
async fn check_isbn(
    repo: &dyn ComicRepository,
    isbn: &str,
    rule: IsbnRule,
) -> Result<Option<&'static str>, RepositoryError> {
    let exists = repo.find_by_isbn(isbn).await?.is_some();
    Ok((!rule.is_satisfied(exists)).then(|| rule.message()))
}

fn first_message(errors: Option<&ValidationErrors>, field: &str) -> Option<String> {
    let field_errors = errors?.field_errors();
    let first = field_errors.get(field)?.first()?;
    Some(
        first
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| INVALID_VALUE.to_string()),
    )
}

fn finish(errors: FieldErrors) -> Result<(), CoreError> {
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(fields = errors.len(), "Comic input rejected");
        Err(CoreError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::comic::{Comic, ComicFields};

    /// Repository stub that knows a fixed set of ISBNs and counts lookups.
    #[derive(Default)]
    struct KnownIsbns {
        isbns: Vec<String>,
        lookups: AtomicUsize,
        fail: bool,
    }

    impl KnownIsbns {
        fn with(isbns: &[&str]) -> Self {
            Self {
                isbns: isbns.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ComicRepository for KnownIsbns {
        async fn find_all(&self) -> Result<Vec<Comic>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Comic>, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepositoryError::Storage("connection refused".into()));
            }
            Ok(self.isbns.iter().any(|i| i == isbn).then(|| {
                let now = chrono::Utc::now();
                Comic {
                    id: 1,
                    isbn: isbn.to_string(),
                    name: String::new(),
                    year: String::new(),
                    author: String::new(),
                    description: String::new(),
                    image: String::new(),
                    created_at: now,
                    updated_at: now,
                }
            }))
        }

        async fn create(&self, _fields: &ComicFields) -> Result<Comic, RepositoryError> {
            unimplemented!()
        }

        async fn update_by_isbn(
            &self,
            _isbn: &str,
            _fields: &ComicFields,
        ) -> Result<u64, RepositoryError> {
            unimplemented!()
        }

        async fn delete_by_isbn(&self, _isbn: &str) -> Result<u64, RepositoryError> {
            unimplemented!()
        }

        async fn ping(&self) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn form(isbn: &str) -> ComicForm {
        ComicForm {
            isbn: isbn.into(),
            name: "AB".into(),
            year: "1999".into(),
            author: "CD".into(),
            description: "0123456789".into(),
        }
    }

    fn errors_of(result: Result<(), CoreError>) -> FieldErrors {
        match result {
            Err(CoreError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_taken_isbn() {
        let repo = KnownIsbns::with(&["12345"]);
        let errors = errors_of(validate_comic_form(&form("12345"), IsbnRule::MustBeUnused, &repo).await);

        let isbn = errors.get("isbn").unwrap();
        assert_eq!(isbn.msg, ISBN_IN_USE);
        assert_eq!(isbn.value, "12345");
        assert_eq!(isbn.location, Location::Body);
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn create_accepts_free_isbn() {
        let repo = KnownIsbns::with(&["99999"]);
        let result = validate_comic_form(&form("12345"), IsbnRule::MustBeUnused, &repo).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_rejects_unknown_isbn() {
        let repo = KnownIsbns::default();
        let errors = errors_of(validate_comic_form(&form("12345"), IsbnRule::MustExist, &repo).await);
        assert_eq!(errors.get("isbn").unwrap().msg, ISBN_NOT_FOUND);
    }

    #[tokio::test]
    async fn store_is_not_queried_when_isbn_is_malformed() {
        let repo = KnownIsbns::default();
        let errors = errors_of(validate_comic_form(&form("12a"), IsbnRule::MustExist, &repo).await);

        assert_eq!(errors.get("isbn").unwrap().msg, INVALID_VALUE);
        assert_eq!(repo.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn errors_from_all_fields_are_collected_in_rule_order() {
        let repo = KnownIsbns::with(&["12345"]);
        let bad = ComicForm {
            year: "99".into(),
            description: "short".into(),
            ..form("12345")
        };
        let errors = errors_of(validate_comic_form(&bad, IsbnRule::MustBeUnused, &repo).await);

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["isbn", "year", "description"]);
        assert_eq!(errors.get("year").unwrap().msg, INVALID_VALUE);
    }

    #[tokio::test]
    async fn store_failure_aborts_validation() {
        let repo = KnownIsbns {
            fail: true,
            ..Default::default()
        };
        let result = validate_comic_form(&form("12345"), IsbnRule::MustBeUnused, &repo).await;
        assert_matches!(result, Err(CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[tokio::test]
    async fn isbn_param_reports_params_location() {
        let repo = KnownIsbns::default();
        let errors = errors_of(validate_isbn_param("12345", &repo).await);

        let isbn = errors.get("isbn").unwrap();
        assert_eq!(isbn.msg, ISBN_NOT_FOUND);
        assert_eq!(isbn.location, Location::Params);
    }

    #[tokio::test]
    async fn isbn_param_structural_failure_skips_lookup() {
        let repo = KnownIsbns::default();
        let errors = errors_of(validate_isbn_param("abc", &repo).await);

        assert_eq!(errors.get("isbn").unwrap().msg, INVALID_VALUE);
        assert_eq!(repo.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn isbn_param_accepts_existing() {
        let repo = KnownIsbns::with(&["12345"]);
        assert!(validate_isbn_param("12345", &repo).await.is_ok());
    }
}
