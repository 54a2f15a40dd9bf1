use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::records::{Formation, Reception};

/// What an import does with records already in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Drop existing records of the imported kind first.
    Replace,
    /// Keep existing records and merge the imports over them.
    Append,
}

/// Serialize every saved placement, newest first, as pretty JSON.
pub fn export_receptions(store: &MemoryStore) -> Result<String, StoreError> {
    let items = store.receptions();
    let json = serde_json::to_string_pretty(&items)?;
    tracing::info!(count = items.len(), "Exported receptions");
    Ok(json)
}

/// Read placements back from an export. Appended records merge by rotation
/// key, so re-importing a backup never duplicates entries.
pub fn import_receptions(
    store: &mut MemoryStore,
    json: &str,
    mode: ImportMode,
) -> Result<usize, StoreError> {
    let items: Vec<Reception> = serde_json::from_str(json)?;
    if mode == ImportMode::Replace {
        store.clear_receptions();
    }
    let count = items.len();
    for item in items {
        store.save_reception(item);
    }
    tracing::info!(count, ?mode, "Imported receptions");
    Ok(count)
}

/// Serialize every saved formation, newest first, as pretty JSON.
pub fn export_formations(store: &MemoryStore) -> Result<String, StoreError> {
    let items = store.formations();
    let json = serde_json::to_string_pretty(&items)?;
    tracing::info!(count = items.len(), "Exported formations");
    Ok(json)
}

/// Read formations back from an export. Appended records merge by id.
pub fn import_formations(
    store: &mut MemoryStore,
    json: &str,
    mode: ImportMode,
) -> Result<usize, StoreError> {
    let items: Vec<Formation> = serde_json::from_str(json)?;
    if mode == ImportMode::Replace {
        store.clear_formations();
    }
    let count = items.len();
    for item in items {
        store.save_formation(item);
    }
    tracing::info!(count, ?mode, "Imported formations");
    Ok(count)
}

pub fn export_receptions_to_file(store: &MemoryStore, path: &Path) -> Result<(), StoreError> {
    fs::write(path, export_receptions(store)?)?;
    Ok(())
}

pub fn import_receptions_from_file(
    store: &mut MemoryStore,
    path: &Path,
    mode: ImportMode,
) -> Result<usize, StoreError> {
    let json = fs::read_to_string(path)?;
    import_receptions(store, &json, mode)
}

pub fn export_formations_to_file(store: &MemoryStore, path: &Path) -> Result<(), StoreError> {
    fs::write(path, export_formations(store)?)?;
    Ok(())
}

pub fn import_formations_from_file(
    store: &mut MemoryStore,
    path: &Path,
    mode: ImportMode,
) -> Result<usize, StoreError> {
    let json = fs::read_to_string(path)?;
    import_formations(store, &json, mode)
}
