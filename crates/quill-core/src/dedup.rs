//! First-occurrence record deduplication

use std::collections::HashSet;
use std::hash::Hash;

/// Canonical duplicate-equality key for a record.
///
/// The key must cover every field except the storage-assigned identity
/// field: two records that differ only in identity are still duplicates,
/// because identity is populated only after a successful save.
pub trait DedupKey {
    /// Hashable projection of all non-identity fields
    type Key: Eq + Hash;

    /// Build the canonical key for this record
    fn dedup_key(&self) -> Self::Key;
}

/// Remove duplicate records, keeping the first occurrence of each.
///
/// Survivors keep the relative order of their first appearance in the
/// input. Pure and infallible; empty input yields empty output.
#[must_use]
pub fn dedup_first_seen<R: DedupKey>(mut records: Vec<R>) -> Vec<R> {
    let mut seen = HashSet::with_capacity(records.len());
    records.retain(|record| seen.insert(record.dedup_key()));
    records
}
