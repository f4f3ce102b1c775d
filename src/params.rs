//! The `options.` parameter convention: configuration-object keys are
//! documented as dotted parameter names and published as a separate group.

use serde_json::Value;

/// Partition a callable's parameter list into (plain, options).
///
/// Separator normalization runs first: `,` and `|` both become `", "`,
/// so `options.foo|bar` documents a single option labeled `foo, bar`
/// rather than two options. A parameter routes to the options group when
/// its normalized name has at least two `.` segments and the first is
/// exactly `options`; the second segment becomes its published name and
/// deeper segments are dropped. Everything else stays a plain parameter,
/// keeping its normalized name. Relative order is preserved within each
/// group.
pub fn split_option_params(params: Vec<Value>) -> (Vec<Value>, Vec<Value>) {
    let mut plain = Vec::new();
    let mut options = Vec::new();

    for mut param in params {
        let Some(name) = param.get("name").and_then(Value::as_str) else {
            // Nothing to route on; keep the entry as-is.
            plain.push(param);
            continue;
        };
        let name = name.replace([',', '|'], ", ");

        let mut segments = name.split('.');
        let option_name = match (segments.next(), segments.next()) {
            (Some("options"), Some(option_name)) => Some(option_name.to_string()),
            _ => None,
        };

        match option_name {
            Some(option_name) => {
                param["name"] = Value::String(option_name);
                options.push(param);
            }
            None => {
                param["name"] = Value::String(name);
                plain.push(param);
            }
        }
    }

    (plain, options)
}
