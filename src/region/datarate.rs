use lora_modulation::{Bandwidth, SpreadingFactor};

/// Modulation of a data rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rate {
    LoRa { spreading_factor: SpreadingFactor, bandwidth: Bandwidth },
    /// FSK modulation with the given bit rate in bits per second.
    Fsk { bit_rate: u32 },
}

/// Maximum payload sizes in bytes: `m` is the MACPayload, `n` the FRMPayload when FOpts is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxPayloadSize {
    pub m: u16,
    pub n: u16,
}

impl MaxPayloadSize {
    pub const fn new(m: u16, n: u16) -> Self {
        Self { m, n }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRate {
    pub rate: Rate,
    /// Sizes to use when the network may contain repeaters.
    pub default_max_size: MaxPayloadSize,
    pub no_repeater_max_size: MaxPayloadSize,
}

impl DataRate {
    pub(crate) const fn lora(
        spreading_factor: SpreadingFactor,
        bandwidth: Bandwidth,
        default_max_size: (u16, u16),
        no_repeater_max_size: (u16, u16),
    ) -> Self {
        Self {
            rate: Rate::LoRa { spreading_factor, bandwidth },
            default_max_size: MaxPayloadSize::new(default_max_size.0, default_max_size.1),
            no_repeater_max_size: MaxPayloadSize::new(
                no_repeater_max_size.0,
                no_repeater_max_size.1,
            ),
        }
    }

    #[cfg(feature = "region-eu868")]
    pub(crate) const fn fsk(
        bit_rate: u32,
        default_max_size: (u16, u16),
        no_repeater_max_size: (u16, u16),
    ) -> Self {
        Self {
            rate: Rate::Fsk { bit_rate },
            default_max_size: MaxPayloadSize::new(default_max_size.0, default_max_size.1),
            no_repeater_max_size: MaxPayloadSize::new(
                no_repeater_max_size.0,
                no_repeater_max_size.1,
            ),
        }
    }

    pub fn max_payload_size(&self, repeater_compatible: bool) -> MaxPayloadSize {
        if repeater_compatible {
            self.default_max_size
        } else {
            self.no_repeater_max_size
        }
    }
}

/// One entry of a region's 16 slot data rate table.
///
/// Slots marked `Reserved` are RFU in the region and must not be used as an active data rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataRateSlot {
    Populated(DataRate),
    Reserved,
}

impl DataRateSlot {
    pub fn as_populated(&self) -> Option<&DataRate> {
        match self {
            DataRateSlot::Populated(dr) => Some(dr),
            DataRateSlot::Reserved => None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, DataRateSlot::Reserved)
    }
}

impl From<DataRate> for DataRateSlot {
    fn from(dr: DataRate) -> Self {
        DataRateSlot::Populated(dr)
    }
}
