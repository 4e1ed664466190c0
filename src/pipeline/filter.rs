//! Key presence validation and per-record key filtering

use super::error::ExtractError;
use super::keys::KeySelection;
use super::loader::Record;

/// Check that every requested key exists in every record.
///
/// Reports the first record (in input order) that is missing a key, and the
/// first missing key within it.
pub fn ensure_keys_present(records: &[Record], keys: &KeySelection) -> Result<(), ExtractError> {
    for (index, record) in records.iter().enumerate() {
        if let Some(missing) = keys.iter().find(|key| !record.contains_key(*key)) {
            return Err(ExtractError::KeysNotPresent {
                key: missing.to_string(),
                record: index,
            });
        }
    }
    Ok(())
}

/// Reduce each record to the requested keys, in requested order.
///
/// The whole input is validated before any record is built, so either every
/// record is filtered or none are.
pub fn filter_records(records: &[Record], keys: &KeySelection) -> Result<Vec<Record>, ExtractError> {
    ensure_keys_present(records, keys)?;

    Ok(records
        .iter()
        .map(|record| {
            keys.iter()
                .filter_map(|key| record.get(key).map(|v| (key.to_string(), v.clone())))
                .collect()
        })
        .collect())
}
