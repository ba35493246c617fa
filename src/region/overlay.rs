//! Patches reproducing older Regional Parameters revisions on top of a base definition.
use heapless::Vec;

use super::channel::DataRateSet;
use super::constants::{MAX_CHANNEL_PATCHES, NUM_DATARATES};
use super::datarate::DataRateSlot;
use super::derivation::Rx1DataRateRule;
use super::{PhyVersion, RegionDefinition};

/// Replaces the data rates of `count` uplink channels starting at index `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelPatch {
    pub first: u8,
    pub count: u8,
    pub data_rates: DataRateSet,
}

/// Differences between a region's base definition and the definition mandated by `version`.
///
/// An overlay without any patch reproduces the base unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlay {
    pub version: PhyVersion,
    /// Replacement for each data rate slot, `None` keeps the base slot.
    pub data_rates: [Option<DataRateSlot>; NUM_DATARATES],
    pub uplink_channel_data_rates: Vec<ChannelPatch, MAX_CHANNEL_PATCHES>,
    pub rx1_data_rate: Option<Rx1DataRateRule>,
    pub implements_cf_list: Option<bool>,
}

impl Overlay {
    pub fn identity(version: PhyVersion) -> Self {
        Self {
            version,
            data_rates: Default::default(),
            uplink_channel_data_rates: Vec::new(),
            rx1_data_rate: None,
            implements_cf_list: None,
        }
    }

    /// Builds a new definition; `base` is left untouched.
    ///
    /// The result describes `self.version` and carries no overlays, so it cannot be resolved
    /// to yet another version.
    pub fn apply(&self, base: &RegionDefinition) -> RegionDefinition {
        let mut def = base.clone();
        for (slot, patch) in def.data_rates.iter_mut().zip(self.data_rates.iter()) {
            if let Some(patch) = patch {
                *slot = patch.clone();
            }
        }
        for patch in &self.uplink_channel_data_rates {
            for channel in
                def.uplink_channels.iter_mut().skip(patch.first as usize).take(patch.count as usize)
            {
                channel.data_rates = patch.data_rates;
            }
        }
        if let Some(rule) = self.rx1_data_rate {
            def.rx1_data_rate = rule;
        }
        if let Some(implements_cf_list) = self.implements_cf_list {
            def.implements_cf_list = implements_cf_list;
        }
        def.version = self.version;
        def.overlays.clear();
        def
    }

    pub fn is_identity(&self) -> bool {
        self.data_rates.iter().all(Option::is_none)
            && self.uplink_channel_data_rates.is_empty()
            && self.rx1_data_rate.is_none()
            && self.implements_cf_list.is_none()
    }
}
