//! The in-memory computer dataset.
//!
//! # Responsibilities
//! - Hold the reference records in insertion order
//! - Share them read-only across every request
//!
//! # Design Decisions
//! - Built once at startup, never mutated afterwards
//! - Backed by `Arc<[Computer]>` so cloning the handle never copies records

use std::ops::Deref;
use std::sync::Arc;

use crate::catalog::record::Computer;

/// Immutable, cheaply cloneable handle to the catalog records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Computer]>,
}

impl Dataset {
    /// Build a dataset from an arbitrary record list.
    pub fn new(records: Vec<Computer>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The five reference computers served by the catalog.
    pub fn reference() -> Self {
        Self::new(vec![
            Computer::new("1", "Lenovo Thinkpad", "512GB", "13in"),
            Computer::new("2", "Legion 5", "1TB", "17in"),
            Computer::new("3", "Macbook Pro", "1TB", "15in"),
            Computer::new("4", "Surface Pro 7", "256GB", "13in"),
            Computer::new("5", "Surface Pro 6", "512GB", "13in"),
        ])
    }

    pub fn records(&self) -> &[Computer] {
        &self.records
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::reference()
    }
}

impl Deref for Dataset {
    type Target = [Computer];

    fn deref(&self) -> &[Computer] {
        &self.records
    }
}
