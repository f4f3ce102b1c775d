//! Data model for documentation records: loose input, normalized output.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The documentable entity kinds, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Namespace,
    Member,
    Typedef,
    Function,
    Class,
}

impl EntityKind {
    /// Processing order for a pipeline run. Output ordering never depends
    /// on it, but when two records share a longname the kind processed
    /// last wins.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Namespace,
        EntityKind::Member,
        EntityKind::Typedef,
        EntityKind::Function,
        EntityKind::Class,
    ];

    /// The `kind` field value used in the record dump.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Namespace => "namespace",
            EntityKind::Member => "member",
            EntityKind::Typedef => "typedef",
            EntityKind::Function => "function",
            EntityKind::Class => "class",
        }
    }

    /// Typedefs are published even without a summary; every other kind
    /// must carry one.
    pub fn requires_summary(self) -> bool {
        !matches!(self, EntityKind::Typedef)
    }

    /// Callables get their parameter list split into params and options.
    pub fn splits_params(self) -> bool {
        matches!(self, EntityKind::Function | EntityKind::Class)
    }
}

/// One record from the parser dump. Loosely typed: fields are inspected
/// on demand and everything else is carried through untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Map<String, Value>);

impl RawRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    /// The `kind` field, when present as a string.
    pub fn kind(&self) -> Option<&str> {
        self.get("kind").and_then(Value::as_str)
    }

    /// A truthy `summary` marks the record as intentionally documented.
    pub fn is_documented(&self) -> bool {
        is_truthy(self.get("summary"))
    }

    /// Take the `params` array out of the record (absent or malformed
    /// counts as empty).
    pub fn take_params(&mut self) -> Vec<Value> {
        match self.0.remove("params") {
            Some(Value::Array(params)) => params,
            _ => Vec::new(),
        }
    }
}

/// Field truthiness as the upstream's dynamic filters see it: absent,
/// null, false, 0, and "" are falsy; everything else is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A record after normalization. The identifying name and the derived
/// fields are explicit; every other surviving field rides in `fields`.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub longname: String,
    /// Package-relative source path, for records under a packages root
    pub filepath: Option<String>,
    pub lineno: Option<u64>,
    /// Owning package name
    pub module: Option<String>,
    pub fields: Map<String, Value>,
}

impl NormalizedRecord {
    /// Assemble the output object. `serde_json::Map` keeps keys sorted,
    /// so derived and carried fields interleave deterministically.
    pub fn to_value(&self) -> Value {
        let mut map = self.fields.clone();
        map.insert("longname".to_string(), Value::String(self.longname.clone()));
        if let Some(ref filepath) = self.filepath {
            map.insert("filepath".to_string(), Value::String(filepath.clone()));
        }
        if let Some(lineno) = self.lineno {
            map.insert("lineno".to_string(), Value::Number(lineno.into()));
        }
        if let Some(ref module) = self.module {
            map.insert("module".to_string(), Value::String(module.clone()));
        }
        Value::Object(map)
    }
}

/// Accumulated output of one pipeline run: normalized records keyed by
/// longname. The name index is the key set, so the two artifacts can
/// never disagree, and iteration order is sorted regardless of insertion
/// order.
#[derive(Debug, Default)]
pub struct DocSet {
    records: BTreeMap<String, NormalizedRecord>,
}

impl DocSet {
    /// Insert a record under its longname. On collision the newcomer wins.
    pub fn insert(&mut self, record: NormalizedRecord) {
        self.records.insert(record.longname.clone(), record);
    }

    pub fn get(&self, longname: &str) -> Option<&NormalizedRecord> {
        self.records.get(longname)
    }

    /// All longnames, lexicographically sorted.
    pub fn names(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NormalizedRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
