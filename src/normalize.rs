//! Record normalization: tag merge, bookkeeping strip, derived location
//! and module fields.

use crate::model::{is_truthy, NormalizedRecord, RawRecord};
use crate::tags::tag_dict;
use serde_json::{Map, Value};

/// Path segment marking the package root in source paths.
const PACKAGES_MARKER: &str = "packages/";

/// Parser bookkeeping that must never reach the output.
const STRIPPED_FIELDS: [&str; 4] = ["comment", "___id", "___s", "tags"];

/// Normalize one raw record into its output shape.
pub fn normalize(record: RawRecord) -> NormalizedRecord {
    let dict = tag_dict(&record);
    let RawRecord(mut fields) = record;

    // Tag fields overwrite same-named plain fields. A valueless tag
    // unsets the field entirely.
    for (title, value) in dict {
        match value {
            Value::Null => {
                fields.remove(&title);
            }
            value => {
                fields.insert(title, value);
            }
        }
    }

    for field in STRIPPED_FIELDS {
        fields.remove(field);
    }

    let (filepath, lineno) = derive_location(&fields);
    if filepath.is_some() {
        // Derivation replaces same-named carried fields outright.
        fields.remove("filepath");
        fields.remove("lineno");
    }
    fields.remove("meta");

    let module = derive_module(&fields, filepath.as_deref());
    fields.remove("module");

    let longname = match fields.remove("longname") {
        Some(Value::String(longname)) => longname,
        _ => String::new(),
    };

    NormalizedRecord {
        longname,
        filepath,
        lineno,
        module,
        fields,
    }
}

/// Derive `filepath`/`lineno` from `meta` for records under a packages
/// root. Prototype markers keep their location out of the output.
fn derive_location(fields: &Map<String, Value>) -> (Option<String>, Option<u64>) {
    let Some(Value::Object(meta)) = fields.get("meta") else {
        return (None, None);
    };
    let Some(path) = meta.get("path").and_then(Value::as_str) else {
        return (None, None);
    };
    let Some(index) = path.find(PACKAGES_MARKER) else {
        return (None, None);
    };
    if is_truthy(fields.get("isprototype")) {
        return (None, None);
    }

    let filename = meta.get("filename").and_then(Value::as_str).unwrap_or("");
    let filepath = format!("{}/{}", &path[index + PACKAGES_MARKER.len()..], filename);
    let lineno = meta.get("lineno").and_then(Value::as_u64);
    (Some(filepath), lineno)
}

/// `module`: an explicit import-from-package marker wins; otherwise the
/// first path segment of the file path.
fn derive_module(fields: &Map<String, Value>, derived_filepath: Option<&str>) -> Option<String> {
    let import_from = fields.get("importfrompackage").and_then(Value::as_str);
    // A carried filepath field still counts when derivation did not fire.
    let filepath = derived_filepath
        .or_else(|| fields.get("filepath").and_then(Value::as_str))
        .filter(|filepath| !filepath.is_empty());

    match (import_from, filepath) {
        (Some("") | None, Some(filepath)) => filepath.split('/').next().map(str::to_string),
        (Some(package), _) => Some(package.to_string()),
        (None, None) => None,
    }
}
