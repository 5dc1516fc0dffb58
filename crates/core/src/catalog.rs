//! Thread-safe pack catalog.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::pack::{Pack, PackSize};

/// Set of available pack sizes, kept sorted largest first.
///
/// All operations are atomic with respect to each other. Calculations work
/// on a [`snapshot`](PackCatalog::snapshot) and never hold the lock.
#[derive(Debug)]
pub struct PackCatalog {
    packs: RwLock<Vec<Pack>>,
    max_size: usize,
}

impl PackCatalog {
    /// Creates an empty catalog holding at most `max_size` packs.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            packs: RwLock::new(Vec::new()),
            max_size: max_size.max(1),
        }
    }

    /// Returns the soft limit.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns a copy of the catalog, largest pack first.
    pub fn snapshot(&self) -> Result<Vec<Pack>> {
        Ok(self.read()?.clone())
    }

    /// Adds a pack size.
    ///
    /// Adding a size that already exists is a no-op and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPackSize`] for a zero amount.
    /// - [`Error::SoftLimitReached`] if the catalog is full.
    pub fn add(&self, amount: PackSize) -> Result<bool> {
        let pack = Pack::new(amount)?;
        let mut packs = self.write()?;

        if packs.contains(&pack) {
            return Ok(false);
        }
        if packs.len() >= self.max_size {
            log::warn!("pack {} rejected: catalog holds {} packs", amount, packs.len());
            return Err(Error::SoftLimitReached(self.max_size));
        }

        packs.push(pack);
        resort(&mut packs);
        log::info!("pack {} added", amount);
        Ok(true)
    }

    /// Changes the amount of an existing pack.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPackSize`] if either amount is zero.
    /// - [`Error::PackExists`] if `new_amount` is already in the catalog.
    /// - [`Error::PackNotFound`] if `old_amount` is not.
    pub fn update(&self, old_amount: PackSize, new_amount: PackSize) -> Result<()> {
        let old = Pack::new(old_amount)?;
        let new = Pack::new(new_amount)?;
        let mut packs = self.write()?;

        if packs.contains(&new) {
            return Err(Error::PackExists(new_amount));
        }
        let slot = packs
            .iter_mut()
            .find(|p| **p == old)
            .ok_or(Error::PackNotFound(old_amount))?;
        *slot = new;

        resort(&mut packs);
        log::info!("pack {} changed to {}", old_amount, new_amount);
        Ok(())
    }

    /// Removes a pack size.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPackSize`] for a zero amount.
    /// - [`Error::PackNotFound`] if the size is not in the catalog.
    pub fn delete(&self, amount: PackSize) -> Result<()> {
        let pack = Pack::new(amount)?;
        let mut packs = self.write()?;

        let index = packs
            .iter()
            .position(|p| *p == pack)
            .ok_or(Error::PackNotFound(amount))?;
        packs.remove(index);

        log::info!("pack {} deleted", amount);
        Ok(())
    }

    /// Returns true if the catalog holds `amount`.
    pub fn contains(&self, amount: PackSize) -> bool {
        self.packs
            .read()
            .map(|p| p.iter().any(|pack| pack.amount == amount))
            .unwrap_or(false)
    }

    /// Returns the number of pack sizes.
    pub fn len(&self) -> usize {
        self.packs.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pack>>> {
        self.packs
            .read()
            .map_err(|e| Error::Internal(format!("Failed to acquire catalog read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pack>>> {
        self.packs
            .write()
            .map_err(|e| Error::Internal(format!("Failed to acquire catalog write lock: {}", e)))
    }
}

impl Default for PackCatalog {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_SOFT_LIMIT)
    }
}

fn resort(packs: &mut [Pack]) {
    packs.sort_unstable_by(|a, b| b.cmp(a));
}
