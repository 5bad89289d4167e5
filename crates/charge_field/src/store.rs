//! Host-owned, ordered charge collection.
//!
//! The store is the only mutable state in the pipeline. Sampling borrows it as an immutable
//! slice, so a pass always sees one consistent snapshot; hosts that mutate while a render is
//! in flight should sample from [`ChargeStore::snapshot`].
use std::ops::Index;

use tracing::{debug, warn};

use crate::charge::Charge;
use crate::error::{Error, Result};
use crate::presets::Preset;

/// Ordered sequence of charges with index-based removal.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeStore {
    charges: Vec<Charge>,
}

impl ChargeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            charges: Vec::new(),
        }
    }

    /// Creates a store from an existing list, rejecting non-finite charges.
    pub fn from_charges(charges: impl IntoIterator<Item = Charge>) -> Result<Self> {
        let mut store = Self::new();
        for c in charges {
            store.push(c)?;
        }
        Ok(store)
    }

    /// Appends a charge and returns its index.
    pub fn push(&mut self, charge: Charge) -> Result<usize> {
        if !charge.is_finite() {
            warn!("Rejected non-finite charge {:?}.", charge);
            return Err(Error::InvalidCharge(format!(
                "(q={}, x={}, y={}) has non-finite components",
                charge.q, charge.x, charge.y
            )));
        }
        self.charges.push(charge);
        debug!("Added charge #{}: {:?}.", self.charges.len() - 1, charge);
        Ok(self.charges.len() - 1)
    }

    /// Removes the charge at `index`, shifting later charges down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Charge> {
        if index >= self.charges.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.charges.len(),
            });
        }
        let removed = self.charges.remove(index);
        debug!("Removed charge #{}: {:?}.", index, removed);
        Ok(removed)
    }

    /// Replaces the whole configuration.
    pub fn replace_all(&mut self, charges: impl IntoIterator<Item = Charge>) -> Result<()> {
        *self = Self::from_charges(charges)?;
        Ok(())
    }

    /// Replaces the configuration with one of the stock presets.
    pub fn load_preset(&mut self, preset: Preset) {
        self.charges = preset.charges();
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Charge> {
        self.charges.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Charge> {
        self.charges.iter()
    }

    /// Borrowed view for a sampling pass.
    pub fn as_slice(&self) -> &[Charge] {
        &self.charges
    }

    /// Owned copy for hosts that keep mutating while a pass runs.
    pub fn snapshot(&self) -> Vec<Charge> {
        self.charges.clone()
    }
}

/// Starts from the electric dipole, matching the interactive session's initial state.
impl Default for ChargeStore {
    fn default() -> Self {
        Self {
            charges: Preset::Dipole.charges(),
        }
    }
}

impl Index<usize> for ChargeStore {
    type Output = Charge;

    fn index(&self, index: usize) -> &Self::Output {
        &self.charges[index]
    }
}

impl<'a> IntoIterator for &'a ChargeStore {
    type Item = &'a Charge;
    type IntoIter = std::slice::Iter<'a, Charge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}
