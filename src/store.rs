//! Record store: the parser's dump as a queryable in-memory collection.

use crate::model::{EntityKind, RawRecord};
use anyhow::{Context, Result};
use serde_json::Value;

/// Raw records in dump order.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<RawRecord>,
}

impl RecordStore {
    /// Parse a dump: a JSON array of record objects.
    pub fn from_json(input: &str) -> Result<Self> {
        let records: Vec<RawRecord> =
            serde_json::from_str(input).context("dump is not a JSON array of records")?;
        Ok(RecordStore { records })
    }

    /// Drop records marked unpublishable: undocumented placeholders,
    /// ignored entries, private members, and members of anonymous scopes.
    pub fn prune(mut self) -> Self {
        self.records.retain(|record| !is_pruned(record));
        self
    }

    /// All records of one kind, in collection order.
    pub fn find(&self, kind: EntityKind) -> Vec<RawRecord> {
        self.records
            .iter()
            .filter(|record| record.kind() == Some(kind.as_str()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_pruned(record: &RawRecord) -> bool {
    record.get("undocumented") == Some(&Value::Bool(true))
        || record.get("ignore") == Some(&Value::Bool(true))
        || record.get("access").and_then(Value::as_str) == Some("private")
        || record.get("memberof").and_then(Value::as_str) == Some("<anonymous>")
}
