//! LoRaWAN region definitions (eg: AU915, EU868, US915).
//!
//! Each region module exposes a `definition()` factory returning the region's base
//! [`RegionDefinition`]: the channel plan, data rate table and constants of the latest supported
//! Regional Parameters revision, plus [`Overlay`]s describing how older revisions differ.
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use heapless::Vec;

pub(crate) mod constants;
pub use constants::{BEACON_PERIOD_SECS, MAX_CHANNELS, NUM_DATARATES};
use constants::*;

mod beacon;
mod channel;
mod datarate;
mod derivation;
mod duty_cycle;
mod overlay;

pub use beacon::{Beacon, BeaconChannel};
pub use channel::{Channel, DataRateSet};
pub use datarate::{DataRate, DataRateSlot, MaxPayloadSize, Rate};
pub use derivation::{Rx1ChannelRule, Rx1DataRateRule};
pub use duty_cycle::{DutyCycle, UNRESTRICTED};
pub use overlay::{ChannelPatch, Overlay};

use crate::{DefinitionFault, Error, InvalidParameter};

#[cfg(not(any(feature = "region-au915", feature = "region-eu868", feature = "region-us915")))]
compile_error!("You must enable at least one region! eg: `region-au915`, `region-eu868`...");

#[cfg(feature = "region-eu868")]
mod dynamic_channel_plans;
#[cfg(feature = "region-eu868")]
pub use dynamic_channel_plans::eu868;

#[cfg(any(feature = "region-au915", feature = "region-us915"))]
mod fixed_channel_plans;
#[cfg(feature = "region-au915")]
pub use fixed_channel_plans::au915;
#[cfg(feature = "region-us915")]
pub use fixed_channel_plans::us915;

/// Identifier of a regional channel plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum RegionId {
    AU_915_928,
    EU_863_870,
    US_902_928,
}

impl RegionId {
    pub const ALL: [RegionId; 3] =
        [RegionId::AU_915_928, RegionId::EU_863_870, RegionId::US_902_928];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RegionId::AU_915_928 => "AU_915_928",
            RegionId::EU_863_870 => "EU_863_870",
            RegionId::US_902_928 => "US_902_928",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ParseRegionIdError;

impl fmt::Display for ParseRegionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown region identifier")
    }
}

impl FromStr for RegionId {
    type Err = ParseRegionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::ALL.into_iter().find(|id| id.as_str() == s).ok_or(ParseRegionIdError)
    }
}

/// Revision of the LoRaWAN Regional Parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum PhyVersion {
    V1_0,
    V1_0_1,
    V1_0_2,
    V1_0_2RevB,
    V1_1RevA,
}

impl fmt::Display for PhyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhyVersion::V1_0 => "1.0",
            PhyVersion::V1_0_1 => "1.0.1",
            PhyVersion::V1_0_2 => "1.0.2",
            PhyVersion::V1_0_2RevB => "1.0.2 rev B",
            PhyVersion::V1_1RevA => "1.1 rev A",
        })
    }
}

/// Type of the CFList appended to a join-accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CfListType {
    Frequencies,
    ChannelMasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rx2Parameters {
    pub data_rate_index: u8,
    pub frequency: u32,
}

/// Channel plan, data rate table and constants of one region for one Regional Parameters
/// revision.
///
/// Definitions are plain values: the registry hands out clones, so changing a returned value
/// never affects later lookups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionDefinition {
    pub id: RegionId,
    /// Revision described by this value.
    pub version: PhyVersion,

    pub uplink_channels: Vec<Channel, MAX_CHANNELS>,
    pub downlink_channels: Vec<Channel, MAX_CHANNELS>,

    pub band_duty_cycles: Vec<DutyCycle, MAX_DUTY_CYCLES>,

    pub data_rates: [DataRateSlot; NUM_DATARATES],

    pub receive_delay_1: Duration,
    pub receive_delay_2: Duration,
    pub join_accept_delay_1: Duration,
    pub join_accept_delay_2: Duration,
    pub max_fcnt_gap: u32,
    pub adr_ack_limit: u16,
    pub adr_ack_delay: u16,
    pub min_ack_timeout: Duration,
    pub max_ack_timeout: Duration,

    /// Default maximum EIRP in dBm.
    pub default_max_eirp: f32,
    /// Offset in dB applied to `default_max_eirp`, indexed by TXPower.
    pub tx_offset: [f32; NUM_DATARATES],
    /// Highest TXPower index defined by the region.
    pub max_tx_power_index: u8,

    pub implements_cf_list: bool,
    pub cf_list_type: CfListType,

    pub rx1_channel: Rx1ChannelRule,
    pub rx1_data_rate: Rx1DataRateRule,

    pub default_rx2: Rx2Parameters,

    pub beacon: Beacon,

    pub overlays: Vec<Overlay, MAX_OVERLAYS>,
}

impl RegionDefinition {
    /// Data rate at `index`, rejecting indexes out of the table and RFU slots.
    pub fn data_rate(&self, index: u8) -> Result<&DataRate, Error> {
        let slot = self.data_rates.get(index as usize).ok_or(InvalidParameter::DataRateIndex {
            index,
            max: NUM_DATARATES as u8 - 1,
        })?;
        slot.as_populated().ok_or(InvalidParameter::ReservedDataRate(index).into())
    }

    pub fn max_payload_size(
        &self,
        index: u8,
        repeater_compatible: bool,
    ) -> Result<MaxPayloadSize, Error> {
        Ok(self.data_rate(index)?.max_payload_size(repeater_compatible))
    }

    /// Whether `dr` may be used on `channel`.
    pub fn is_legal_data_rate(&self, channel: &Channel, dr: u8) -> bool {
        channel.supports(dr)
    }

    pub fn uplink_channel(&self, index: usize) -> Option<&Channel> {
        self.uplink_channels.get(index)
    }

    pub fn downlink_channel(&self, index: usize) -> Option<&Channel> {
        self.downlink_channels.get(index)
    }

    /// Index of the uplink channel centered on `frequency`.
    pub fn uplink_channel_index(&self, frequency: u32) -> Option<usize> {
        self.uplink_channels.iter().position(|ch| ch.frequency == frequency)
    }

    /// Index of the downlink channel used for RX1 after an uplink on `uplink_channel`.
    pub fn rx1_channel(&self, uplink_channel: usize) -> Result<usize, Error> {
        let count = self.uplink_channels.len();
        let invalid = InvalidParameter::UplinkChannelIndex { index: uplink_channel, count };
        if uplink_channel >= count {
            return Err(invalid.into());
        }
        match self.rx1_channel.downlink_channel(uplink_channel) {
            Some(downlink) if downlink < self.downlink_channels.len() => Ok(downlink),
            _ => Err(invalid.into()),
        }
    }

    /// Data rate index used for RX1 after an uplink at `uplink_data_rate`.
    pub fn rx1_data_rate(
        &self,
        uplink_data_rate: u8,
        rx1_dr_offset: u8,
        ack_requested: bool,
    ) -> Result<u8, Error> {
        Ok(self.rx1_data_rate.downlink_data_rate(uplink_data_rate, rx1_dr_offset, ack_requested)?)
    }

    /// Frequency and data rate of RX1.
    pub fn rx1_parameters(
        &self,
        uplink_channel: usize,
        uplink_data_rate: u8,
        rx1_dr_offset: u8,
    ) -> Result<(u32, &DataRate), Error> {
        let channel = self.rx1_channel(uplink_channel)?;
        let dr = self.rx1_data_rate(uplink_data_rate, rx1_dr_offset, false)?;
        let frequency = self.downlink_channels[channel].frequency;
        Ok((frequency, self.data_rate(dr)?))
    }

    /// Frequency and data rate of RX2 with the region defaults.
    pub fn rx2_parameters(&self) -> Result<(u32, &DataRate), Error> {
        Ok((self.default_rx2.frequency, self.data_rate(self.default_rx2.data_rate_index)?))
    }

    /// Maximum duty cycle of the sub-band containing `frequency`, or [`UNRESTRICTED`].
    pub fn duty_cycle_for(&self, frequency: u32) -> f32 {
        self.sub_band_for(frequency).map_or(UNRESTRICTED, |dc| dc.duty_cycle)
    }

    pub fn sub_band_for(&self, frequency: u32) -> Option<&DutyCycle> {
        duty_cycle::sub_band_for(&self.band_duty_cycles, frequency)
    }

    /// EIRP in dBm for TXPower `index`, `None` if the region does not define it.
    pub fn tx_power(&self, index: u8) -> Option<f32> {
        if index > self.max_tx_power_index {
            return None;
        }
        self.tx_offset.get(index as usize).map(|offset| self.default_max_eirp + offset)
    }

    /// Revisions this value can be resolved to.
    pub fn supported_versions(&self) -> impl Iterator<Item = PhyVersion> + '_ {
        core::iter::once(self.version).chain(self.overlays.iter().map(|o| o.version))
    }

    /// The definition for `version`: a copy of `self` when it already describes `version`, or
    /// the matching overlay applied to a copy of `self`.
    pub fn resolve(&self, version: PhyVersion) -> Result<RegionDefinition, Error> {
        if version == self.version {
            return Ok(self.clone());
        }
        match self.overlays.iter().find(|o| o.version == version) {
            Some(overlay) => {
                trace!("resolving {} to {}", self.id, version);
                Ok(overlay.apply(self))
            }
            None => Err(Error::UnsupportedVersion { region: self.id, version }),
        }
    }

    /// Checks the invariants of the definition and of every version overlay.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_tables()?;
        for (i, overlay) in self.overlays.iter().enumerate() {
            let fault = |fault| Error::InvalidDefinition { region: self.id, fault };
            if overlay.version == self.version
                || self.overlays[..i].iter().any(|o| o.version == overlay.version)
            {
                return Err(fault(DefinitionFault::DuplicateOverlay(overlay.version)));
            }
            for patch in &overlay.uplink_channel_data_rates {
                if patch.first as usize + patch.count as usize > self.uplink_channels.len() {
                    return Err(fault(DefinitionFault::OverlayChannelRange {
                        version: overlay.version,
                    }));
                }
            }
            overlay.apply(self).validate_tables()?;
        }
        Ok(())
    }

    fn validate_tables(&self) -> Result<(), Error> {
        let fault = |fault| Error::InvalidDefinition { region: self.id, fault };
        if self.uplink_channels.is_empty() {
            return Err(fault(DefinitionFault::NoUplinkChannels));
        }
        if self.downlink_channels.is_empty() {
            return Err(fault(DefinitionFault::NoDownlinkChannels));
        }
        let mut channels = self.uplink_channels.iter().chain(self.downlink_channels.iter());
        if channels.any(|c| c.frequency == 0) {
            return Err(fault(DefinitionFault::ZeroFrequency));
        }
        duty_cycle::validate(self.id, &self.band_duty_cycles)?;

        match self.rx1_channel {
            Rx1ChannelRule::Identity => {
                if self.downlink_channels.len() < self.uplink_channels.len() {
                    return Err(fault(DefinitionFault::Rx1ChannelIdentity));
                }
            }
            Rx1ChannelRule::Modulo(n) => {
                if n == 0 || n as usize > self.downlink_channels.len() {
                    return Err(fault(DefinitionFault::Rx1ChannelModulo(n)));
                }
            }
        }

        let reserved = |dr: u8| self.data_rate(dr).is_err();
        let (min, max) = self.rx1_data_rate.bounds();
        if min > max {
            return Err(fault(DefinitionFault::Rx1BoundsInverted { min, max }));
        }
        if let Some(dr) = [min, max].into_iter().find(|&dr| reserved(dr)) {
            return Err(fault(DefinitionFault::Rx1BoundReserved(dr)));
        }
        let rx2 = self.default_rx2.data_rate_index;
        if reserved(rx2) {
            return Err(fault(DefinitionFault::Rx2DataRateReserved(rx2)));
        }
        let beacon = self.beacon.data_rate_index;
        if reserved(beacon) {
            return Err(fault(DefinitionFault::BeaconDataRateReserved(beacon)));
        }
        if self.beacon.broadcast_channel.is_empty() || self.beacon.ping_slot_channels.is_empty() {
            return Err(fault(DefinitionFault::NoBeaconChannels));
        }
        Ok(())
    }
}
