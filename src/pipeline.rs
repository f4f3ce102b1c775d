//! Collection pipeline: pull each entity kind from the store, apply the
//! per-kind pre-steps, and accumulate normalized records.

use crate::model::{DocSet, EntityKind, RawRecord};
use crate::normalize::normalize;
use crate::params::split_option_params;
use crate::store::RecordStore;
use serde_json::Value;

/// Build the documentation set for one run.
///
/// The store is pruned once up front. Kinds run in a fixed order, so a
/// longname shared across kinds keeps the record processed last.
pub fn build_doc_set(store: RecordStore) -> DocSet {
    let data = store.prune();
    let mut docs = DocSet::default();

    for kind in EntityKind::ALL {
        for mut record in data.find(kind) {
            if kind.requires_summary() && !record.is_documented() {
                continue;
            }
            if kind.splits_params() {
                attach_split_params(&mut record);
            }
            docs.insert(normalize(record));
        }
    }

    docs
}

/// Replace a callable's parameter list with its split form. Both groups
/// are always present afterwards, possibly empty.
fn attach_split_params(record: &mut RawRecord) {
    let (params, options) = split_option_params(record.take_params());
    record.set("params", Value::Array(params));
    record.set("options", Value::Array(options));
}
