//! Computer record and its addressable fields.

use serde::Serialize;

/// A single computer entry.
///
/// Serialized field order is `id, model, disk_space, screen_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computer {
    pub id: String,
    pub model: String,
    pub disk_space: String,
    pub screen_size: String,
}

impl Computer {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        disk_space: impl Into<String>,
        screen_size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            disk_space: disk_space.into(),
            screen_size: screen_size.into(),
        }
    }

    /// Look up a field value by its wire name.
    ///
    /// Returns `None` when the record has no field with that name.
    pub fn get(&self, name: &str) -> Option<&str> {
        Field::from_name(name).map(|field| field.value(self))
    }
}

/// The known attribute names of a [`Computer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Model,
    DiskSpace,
    ScreenSize,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Id, Field::Model, Field::DiskSpace, Field::ScreenSize];

    /// Resolve a wire name (case-sensitive) to a field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Field::Id),
            "model" => Some(Field::Model),
            "disk_space" => Some(Field::DiskSpace),
            "screen_size" => Some(Field::ScreenSize),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Model => "model",
            Field::DiskSpace => "disk_space",
            Field::ScreenSize => "screen_size",
        }
    }

    /// Borrow this field's value from a record.
    pub fn value(self, computer: &Computer) -> &str {
        match self {
            Field::Id => &computer.id,
            Field::Model => &computer.model,
            Field::DiskSpace => &computer.disk_space,
            Field::ScreenSize => &computer.screen_size,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
