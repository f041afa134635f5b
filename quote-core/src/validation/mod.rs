//! Field-group validation and phone formatting.

mod forms;
mod phone;

use std::collections::BTreeMap;
use std::fmt;

pub use forms::{
    ClassificationForm, ContactForm, FloorAreaForm, HasProjectForm, INVALID_OPTION,
    INVALID_PHONE, INVALID_VALUE, REQUIRED, ROOM_LIMIT, ScheduleForm, SubProjectsForm,
    TERMS_NOT_ACCEPTED,
};
pub use phone::{format_phone, is_valid_phone};

/// Turns raw user input for one field group into a validated answer.
pub trait Validate {
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

/// Inline messages for the fields of one group, keyed by field name.
///
/// Only the first message per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
    ) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Failing field names, sorted.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
