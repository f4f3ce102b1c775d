//! Canonical serialization and artifact writing.
//!
//! Both artifacts must be byte-identical across runs over the same input.
//! Every object is a `serde_json::Map` (BTreeMap-backed), so keys come out
//! sorted at every nesting level, and the name index is sorted by
//! construction in `DocSet`.

use crate::model::DocSet;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Where the two artifacts go and how the banner names the regenerator.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    pub data_path: PathBuf,
    pub names_path: PathBuf,
    pub regen_command: String,
}

/// Render the data artifact: a generated-file banner, then a CommonJS
/// export of the longname-keyed map.
pub fn render_data(docs: &DocSet, regen_command: &str) -> Result<String> {
    let mut map = Map::new();
    for (longname, record) in docs.iter() {
        map.insert(longname.clone(), record.to_value());
    }
    let json = serde_json::to_string_pretty(&Value::Object(map))?;
    Ok(format!(
        "// This file is automatically generated by docdata; regenerate it with {}\nmodule.exports = {};",
        regen_command, json
    ))
}

/// Render the name index: the sorted longname array.
pub fn render_names(docs: &DocSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&docs.names())?)
}

/// Write both artifacts, overwriting whatever is there. Failures
/// propagate; there is no partial-write recovery.
pub fn write_artifacts(docs: &DocSet, config: &EmitConfig) -> Result<()> {
    let data = render_data(docs, &config.regen_command)?;
    fs::write(&config.data_path, data)
        .with_context(|| format!("failed to write {}", config.data_path.display()))?;

    let names = render_names(docs)?;
    fs::write(&config.names_path, names)
        .with_context(|| format!("failed to write {}", config.names_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NormalizedRecord;
    use serde_json::json;

    fn one_record_docs() -> DocSet {
        let mut docs = DocSet::default();
        docs.insert(NormalizedRecord {
            longname: "a".to_string(),
            filepath: None,
            lineno: None,
            module: None,
            fields: Map::new(),
        });
        docs
    }

    #[test]
    fn empty_set_renders_empty_artifacts() {
        let docs = DocSet::default();
        let data = render_data(&docs, "docdata").unwrap();
        assert_eq!(
            data,
            "// This file is automatically generated by docdata; regenerate it with docdata\nmodule.exports = {};"
        );
        assert_eq!(render_names(&docs).unwrap(), "[]");
    }

    #[test]
    fn data_artifact_format_is_locked() {
        let data = render_data(&one_record_docs(), "docdata").unwrap();
        assert_eq!(
            data,
            "// This file is automatically generated by docdata; regenerate it with docdata\n\
             module.exports = {\n  \"a\": {\n    \"longname\": \"a\"\n  }\n};"
        );
    }

    #[test]
    fn banner_names_the_regen_command() {
        let data = render_data(&one_record_docs(), "scripts/docs/regenerate.sh").unwrap();
        let first_line = data.lines().next().unwrap();
        assert_eq!(
            first_line,
            "// This file is automatically generated by docdata; regenerate it with scripts/docs/regenerate.sh"
        );
    }

    #[test]
    fn keys_are_sorted_at_every_level() {
        let mut docs = DocSet::default();
        let mut fields = Map::new();
        fields.insert("zebra".to_string(), json!(1));
        fields.insert("alpha".to_string(), json!(2));
        docs.insert(NormalizedRecord {
            longname: "zz".to_string(),
            filepath: None,
            lineno: None,
            module: None,
            fields: fields.clone(),
        });
        docs.insert(NormalizedRecord {
            longname: "aa".to_string(),
            filepath: None,
            lineno: None,
            module: None,
            fields,
        });

        let data = render_data(&docs, "docdata").unwrap();
        let aa = data.find("\"aa\"").unwrap();
        let zz = data.find("\"zz\"").unwrap();
        assert!(aa < zz);

        let alpha = data.find("\"alpha\"").unwrap();
        let longname = data.find("\"longname\"").unwrap();
        let zebra = data.find("\"zebra\"").unwrap();
        assert!(alpha < longname && longname < zebra);
    }

    #[test]
    fn names_render_as_sorted_array() {
        let mut docs = DocSet::default();
        for name in ["beta", "Alpha"] {
            docs.insert(NormalizedRecord {
                longname: name.to_string(),
                filepath: None,
                lineno: None,
                module: None,
                fields: Map::new(),
            });
        }
        assert_eq!(render_names(&docs).unwrap(), "[\n  \"Alpha\",\n  \"beta\"\n]");
    }

    #[test]
    fn write_artifacts_creates_both_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = EmitConfig {
            data_path: dir.path().join("data.js"),
            names_path: dir.path().join("names.json"),
            regen_command: "docdata".to_string(),
        };
        write_artifacts(&one_record_docs(), &config).unwrap();

        let data = std::fs::read_to_string(&config.data_path).unwrap();
        assert!(data.starts_with("// This file is automatically generated"));
        assert!(data.ends_with("};"));
        let names = std::fs::read_to_string(&config.names_path).unwrap();
        assert_eq!(names, "[\n  \"a\"\n]");
    }
}
