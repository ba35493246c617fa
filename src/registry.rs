//! Table of the region definitions known to the application.
//!
//! Every definition is validated when it is registered. Lookups hand out resolved copies, so a
//! [`Registry`] can be shared between threads by reference once it is built.
use heapless::FnvIndexMap;

use crate::region::{PhyVersion, RegionDefinition, RegionId};
use crate::Error;

/// Maximum number of regions a [`Registry`] holds.
pub const MAX_REGIONS: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    regions: FnvIndexMap<RegionId, RegionDefinition, MAX_REGIONS>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { regions: FnvIndexMap::new() }
    }

    /// A registry holding the base definition of every region enabled through cargo features.
    pub fn with_enabled_regions() -> Result<Self, Error> {
        let mut registry = Self::new();
        #[cfg(feature = "region-au915")]
        registry.register(crate::region::au915::definition())?;
        #[cfg(feature = "region-eu868")]
        registry.register(crate::region::eu868::definition())?;
        #[cfg(feature = "region-us915")]
        registry.register(crate::region::us915::definition())?;
        Ok(registry)
    }

    /// Validates `definition` and adds it to the registry.
    pub fn register(&mut self, definition: RegionDefinition) -> Result<(), Error> {
        let id = definition.id;
        if let Err(e) = definition.validate() {
            warn!("rejecting region {}: {}", id, e);
            return Err(e);
        }
        if self.regions.contains_key(&id) {
            warn!("region {} is already registered", id);
            return Err(Error::DuplicateRegion(id));
        }
        let version = definition.version;
        self.regions.insert(id, definition).map_err(|_| Error::RegistryFull)?;
        info!("registered region {} (regional parameters {})", id, version);
        Ok(())
    }

    /// Definition of region `id` for `version`.
    ///
    /// The returned value is owned by the caller; mutating it has no effect on the registry.
    pub fn get(&self, id: RegionId, version: PhyVersion) -> Result<RegionDefinition, Error> {
        self.base(id)?.resolve(version)
    }

    /// Base definition of region `id`, including its overlays.
    pub fn base(&self, id: RegionId) -> Result<&RegionDefinition, Error> {
        self.regions.get(&id).ok_or(Error::UnknownRegion(id))
    }

    /// Registered regions, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
