//! Declarative field rules for comic input.

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::comic::ComicFields;

/// Message for every structural rule failure.
pub const INVALID_VALUE: &str = "Invalid value";

/// Message when creating a comic whose ISBN is taken.
pub const ISBN_IN_USE: &str = "ISBN already in use";

/// Message when updating or deleting an unknown ISBN.
pub const ISBN_NOT_FOUND: &str = "ISBN not found";

/// Submitted comic fields, as strings. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ComicForm {
    #[validate(
        length(min = 5, message = "Invalid value"),
        custom(function = "numeric")
    )]
    pub isbn: String,
    #[validate(length(min = 2, message = "Invalid value"))]
    pub name: String,
    #[validate(
        length(equal = 4, message = "Invalid value"),
        custom(function = "numeric")
    )]
    pub year: String,
    #[validate(length(min = 2, message = "Invalid value"))]
    pub author: String,
    #[validate(length(min = 10, message = "Invalid value"))]
    pub description: String,
}

impl ComicForm {
    /// Field names paired with their submitted values, in rule order.
    pub fn values(&self) -> [(&'static str, &str); 5] {
        [
            ("isbn", &self.isbn),
            ("name", &self.name),
            ("year", &self.year),
            ("author", &self.author),
            ("description", &self.description),
        ]
    }

    /// Convert into store fields with the given stored image name.
    pub fn into_fields(self, image: String) -> ComicFields {
        ComicFields {
            isbn: self.isbn,
            name: self.name,
            year: self.year,
            author: self.author,
            description: self.description,
            image,
        }
    }

    /// Assign a named field. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "isbn" => self.isbn = value,
            "name" => self.name = value,
            "year" => self.year = value,
            "author" => self.author = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

/// An ISBN taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct IsbnParam {
    #[validate(
        length(min = 5, message = "Invalid value"),
        custom(function = "numeric")
    )]
    pub isbn: String,
}

/// What the store must say about an ISBN for the request to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnRule {
    /// No row may hold it yet (create).
    MustBeUnused,
    /// A row must already hold it (update, delete).
    MustExist,
}

impl IsbnRule {
    /// The failure message for a violated rule.
    pub fn message(self) -> &'static str {
        match self {
            IsbnRule::MustBeUnused => ISBN_IN_USE,
            IsbnRule::MustExist => ISBN_NOT_FOUND,
        }
    }

    /// Whether the rule holds given whether a row exists.
    pub fn is_satisfied(self, exists: bool) -> bool {
        match self {
            IsbnRule::MustBeUnused => !exists,
            IsbnRule::MustExist => exists,
        }
    }
}

/// Non-empty and ASCII digits only.
fn numeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("numeric").with_message(Cow::Borrowed(INVALID_VALUE)))
    }
}
