// crates/monocut-core/src/registry.rs
//
// The ordered, deduplicated list of assets the library shows, plus the
// current selection. Selection is an id reference into the list, never an
// owned copy, so a replaced asset is picked up by the next lookup.

use std::collections::{HashMap, HashSet};
use crate::media_types::MediaAsset;

/// Merge freshly imported assets into the existing list.
///
/// Ordering policy: re-imported assets move to the front together with the new
/// ones. Every id in `incoming` comes first, in order of its first occurrence
/// there, carrying the value of its last occurrence; the rest of `existing`
/// follows in its original order. An existing entry whose id is re-imported is
/// replaced by the incoming value.
pub fn merge_assets(existing: &[MediaAsset], incoming: &[MediaAsset]) -> Vec<MediaAsset> {
    // Last write wins inside the incoming batch.
    let mut latest: HashMap<&str, &MediaAsset> = HashMap::with_capacity(incoming.len());
    for asset in incoming {
        latest.insert(asset.id.as_str(), asset);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(incoming.len() + existing.len());
    let mut merged = Vec::with_capacity(incoming.len() + existing.len());

    for asset in incoming {
        if seen.insert(asset.id.as_str()) {
            merged.push(latest[asset.id.as_str()].clone());
        }
    }
    for asset in existing {
        if seen.insert(asset.id.as_str()) {
            merged.push(asset.clone());
        }
    }
    merged
}

#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    assets:   Vec<MediaAsset>,
    selected: Option<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &[MediaAsset] {
        &self.assets
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MediaAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the current list.
    pub fn selected_asset(&self) -> Option<&MediaAsset> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Select an asset by id, or clear with `None`.
    /// Unknown ids are rejected and leave the selection unchanged.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) if self.get(id).is_some() => {
                self.selected = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Apply the assets returned by an import. The first incoming asset
    /// becomes the selection, overriding whatever was selected before.
    pub fn apply_import(&mut self, incoming: &[MediaAsset]) {
        self.assets = merge_assets(&self.assets, incoming);
        if let Some(first) = incoming.first() {
            self.selected = Some(first.id.clone());
        }
    }

    /// Install an authoritative snapshot from the backend.
    /// Duplicate ids in the snapshot keep their first occurrence.
    pub fn replace_all(&mut self, snapshot: Vec<MediaAsset>) {
        let mut seen = HashSet::with_capacity(snapshot.len());
        self.assets = snapshot
            .into_iter()
            .filter(|a| seen.insert(a.id.clone()))
            .collect();
        self.revalidate_selection();
    }

    /// Fold in a snapshot that was requested before the latest local change.
    /// Local entries keep their values and order; snapshot-only ids follow.
    /// Nothing already listed is removed and the selection is kept.
    pub fn absorb_snapshot(&mut self, snapshot: Vec<MediaAsset>) {
        self.assets = merge_assets(&snapshot, &self.assets);
    }

    /// Replace an asset in place, or prepend it when the id is new.
    pub fn upsert(&mut self, asset: MediaAsset) {
        match self.assets.iter_mut().find(|a| a.id == asset.id) {
            Some(slot) => *slot = asset,
            None       => self.assets.insert(0, asset),
        }
    }

    /// Drop a selection that no longer points at a listed asset.
    pub fn revalidate_selection(&mut self) {
        if let Some(id) = &self.selected {
            if !self.assets.iter().any(|a| &a.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn total_file_size(&self) -> u64 {
        self.assets.iter().map(|a| a.file_size).sum()
    }
}
