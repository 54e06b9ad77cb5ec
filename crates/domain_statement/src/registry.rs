//! Vehicle registry
//!
//! Insertion-ordered store of vehicle entries, keyed by vehicle number.
//! The registry is the only mutable state in the system and belongs to
//! the caller; statement building only reads it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::VehicleNo;

use crate::entry::VehicleEntry;

/// What an upsert did with the incoming entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First submission for this vehicle, appended at the end
    Inserted,
    /// Vehicle already present, non-blank fields folded in
    Merged,
}

/// Ordered collection of vehicle entries
///
/// Keyed by `VehicleNo`; iteration yields entries in first-submission
/// order regardless of later resubmissions. The fleet is small, so the
/// backing store is a plain vector and lookups scan it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRegistry {
    entries: Vec<VehicleEntry>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, or merges it into the existing one for the same vehicle
    pub fn upsert(&mut self, entry: VehicleEntry) -> UpsertOutcome {
        match self.position(&entry.vehicle_no) {
            Some(idx) => {
                debug!(vehicle_no = %entry.vehicle_no, "merging resubmitted entry");
                self.entries[idx].merge_from(entry);
                UpsertOutcome::Merged
            }
            None => {
                debug!(vehicle_no = %entry.vehicle_no, "registering new vehicle");
                self.entries.push(entry);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes a vehicle's entry, returning it if present
    pub fn remove(&mut self, vehicle_no: &VehicleNo) -> Option<VehicleEntry> {
        let idx = self.position(vehicle_no)?;
        Some(self.entries.remove(idx))
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, vehicle_no: &VehicleNo) -> Option<&VehicleEntry> {
        self.position(vehicle_no).map(|idx| &self.entries[idx])
    }

    pub fn contains(&self, vehicle_no: &VehicleNo) -> bool {
        self.position(vehicle_no).is_some()
    }

    /// Entries in first-submission order
    pub fn iter(&self) -> impl Iterator<Item = &VehicleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, vehicle_no: &VehicleNo) -> Option<usize> {
        self.entries.iter().position(|e| &e.vehicle_no == vehicle_no)
    }
}

impl<'a> IntoIterator for &'a VehicleRegistry {
    type Item = &'a VehicleEntry;
    type IntoIter = std::slice::Iter<'a, VehicleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
