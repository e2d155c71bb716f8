//! Filtering and sorting over catalog records.
//!
//! Both operations take borrowed records and return a fresh `Vec` of
//! references; the input slice is never reordered.

use thiserror::Error;

use crate::catalog::record::{Computer, Field};

/// Sort key used when the caller does not name one.
pub const DEFAULT_SORT_FIELD: Field = Field::Model;

/// Errors raised by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A sort was requested on a field the records do not have.
    #[error("records have no field named '{0}'")]
    KeyMissing(String),
}

/// Keep the records whose `key` field equals `value` exactly.
///
/// Unknown field names match nothing.
pub fn filter<'a, I>(records: I, key: &str, value: &str) -> Vec<&'a Computer>
where
    I: IntoIterator<Item = &'a Computer>,
{
    let Some(field) = Field::from_name(key) else {
        return Vec::new();
    };
    records
        .into_iter()
        .filter(|computer| field.value(computer) == value)
        .collect()
}

/// Stable ascending sort on a known field.
pub fn sort_by_field<'a, I>(records: I, field: Field) -> Vec<&'a Computer>
where
    I: IntoIterator<Item = &'a Computer>,
{
    let mut sorted: Vec<&Computer> = records.into_iter().collect();
    sorted.sort_by(|a, b| field.value(a).cmp(field.value(b)));
    sorted
}

/// Stable ascending sort on a field given by name.
///
/// Fails with [`CatalogError::KeyMissing`] when the name is not a record field.
pub fn sort<'a, I>(records: I, key: &str) -> Result<Vec<&'a Computer>, CatalogError>
where
    I: IntoIterator<Item = &'a Computer>,
{
    let field = Field::from_name(key).ok_or_else(|| CatalogError::KeyMissing(key.to_string()))?;
    Ok(sort_by_field(records, field))
}
