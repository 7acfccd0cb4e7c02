use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::default_zones;
use crate::domain::{Side, Timeframe, Zone};
use crate::error::{PoiError, PoiResult};
use crate::utils::maths_utils;

/// In-memory, insertion-ordered collection of POIs.
///
/// Duplicates and overlaps are legal. Display filtering/sorting goes through
/// [`ZoneRepository::view`] and never reorders the underlying sequence.
///
/// Serialized as a bare array. Deserializing drops any zone that fails
/// [`Zone::validate`], so restored state holds the same invariants as imports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Zone>", into = "Vec<Zone>")]
pub struct ZoneRepository {
    zones: Vec<Zone>,
}

impl From<Vec<Zone>> for ZoneRepository {
    fn from(zones: Vec<Zone>) -> Self {
        let zones = zones
            .into_iter()
            .enumerate()
            .filter_map(|(i, zone)| match zone.validate() {
                Ok(()) => Some(zone),
                Err(e) => {
                    log::warn!("Dropping restored POI #{} '{}': {}", i, zone.label, e);
                    None
                }
            })
            .collect();
        Self { zones }
    }
}

impl From<ZoneRepository> for Vec<Zone> {
    fn from(repository: ZoneRepository) -> Self {
        repository.zones
    }
}

impl ZoneRepository {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// The canonical default set
    pub fn with_defaults() -> Self {
        Self::new(default_zones())
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn add(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    pub fn remove_at(&mut self, index: usize) -> PoiResult<Zone> {
        self.check_index(index)?;
        Ok(self.zones.remove(index))
    }

    /// Remove several positions at once. Indices are deduplicated and all
    /// checked before anything is removed; removal then runs from the
    /// highest index down so earlier removals never shift later targets.
    pub fn remove_many(&mut self, indices: &[usize]) -> PoiResult<Vec<Zone>> {
        let unique: BTreeSet<usize> = indices.iter().copied().collect();
        if let Some(&bad) = unique.iter().find(|&&idx| idx >= self.zones.len()) {
            return Err(PoiError::IndexOutOfRange {
                index: bad,
                len: self.zones.len(),
            });
        }

        let mut removed: Vec<Zone> = unique
            .into_iter()
            .rev()
            .map(|idx| self.zones.remove(idx))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Swap in an edited zone, returning the one it replaced
    pub fn replace_at(&mut self, index: usize, zone: Zone) -> PoiResult<Zone> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.zones[index], zone))
    }

    pub fn replace_all(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
    }

    pub fn reset(&mut self) {
        self.zones = default_zones();
    }

    /// Lowest start and highest end across all zones
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let values: Vec<f64> = self.zones.iter().flat_map(|z| [z.start, z.end]).collect();
        maths_utils::min_max(&values)
    }

    /// Filtered and sorted read-only view, tagged with original indices
    pub fn view(&self, query: &ZoneQuery) -> Vec<ZoneRow<'_>> {
        let needle = query.search.trim().to_lowercase();

        self.zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| query.timeframe.is_none_or(|tf| zone.timeframe == tf))
            .filter(|(_, zone)| query.side.is_none_or(|side| zone.side == side))
            .filter(|(_, zone)| needle.is_empty() || zone.label.to_lowercase().contains(&needle))
            .map(|(index, zone)| ZoneRow { index, zone })
            // sorted_by is stable: equal keys keep repository order
            .sorted_by(|a, b| query.sort.compare(a.zone, b.zone))
            .collect()
    }

    fn check_index(&self, index: usize) -> PoiResult<()> {
        if index >= self.zones.len() {
            return Err(PoiError::IndexOutOfRange {
                index,
                len: self.zones.len(),
            });
        }
        Ok(())
    }
}

/// Sort orders offered by the POI list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::EnumIter)]
pub enum SortKey {
    /// Canonical timeframe rank, monthly first
    #[default]
    Timeframe,
    /// Lexical on side name
    Side,
    /// Start price ascending
    Price,
    /// Effective strength descending
    Strength,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Timeframe => "Timeframe",
            SortKey::Side => "Side",
            SortKey::Price => "Price",
            SortKey::Strength => "Strength",
        }
    }

    fn compare(self, a: &Zone, b: &Zone) -> std::cmp::Ordering {
        match self {
            SortKey::Timeframe => a.timeframe.rank().cmp(&b.timeframe.rank()),
            SortKey::Side => a.side.as_str().cmp(b.side.as_str()),
            SortKey::Price => a.start.total_cmp(&b.start),
            SortKey::Strength => b.effective_strength().total_cmp(&a.effective_strength()),
        }
    }
}

/// Filter predicates compose by logical AND. `None` / empty means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneQuery {
    pub timeframe: Option<Timeframe>,
    pub side: Option<Side>,
    /// Case-insensitive label substring
    pub search: String,
    pub sort: SortKey,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRow<'a> {
    /// Position in the repository; use this for remove/edit/select
    pub index: usize,
    pub zone: &'a Zone,
}

/// Multi-select state behind bulk removal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSelection {
    selected: BTreeSet<usize>,
}

impl ZoneSelection {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Select every visible row, or clear when they are all already selected
    pub fn toggle_all(&mut self, rows: &[ZoneRow<'_>]) {
        let all_selected =
            !rows.is_empty() && rows.iter().all(|row| self.selected.contains(&row.index));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected = rows.iter().map(|row| row.index).collect();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Hand the selected indices to `remove_many` and reset
    pub fn take_for_removal(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.selected).into_iter().collect()
    }
}
