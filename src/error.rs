use core::fmt;

use crate::region::{PhyVersion, RegionId};

/// Errors returned by the registry and by region derivations.
///
/// `DuplicateRegion`, `OverlappingDutyCycleRange`, `InvalidDefinition` and `RegistryFull` can
/// only occur while regions are being registered and mean the region table is unusable.
/// The remaining variants are returned for malformed requests at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    UnknownRegion(RegionId),
    UnsupportedVersion { region: RegionId, version: PhyVersion },
    DuplicateRegion(RegionId),
    InvalidParameter(InvalidParameter),
    /// Two entries of the band duty-cycle table cover a common frequency.
    OverlappingDutyCycleRange { region: RegionId, first: usize, second: usize },
    InvalidDefinition { region: RegionId, fault: DefinitionFault },
    RegistryFull,
}

/// Out of range argument passed to a derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum InvalidParameter {
    DataRateIndex { index: u8, max: u8 },
    Rx1DataRateOffset { offset: u8, max: u8 },
    UplinkChannelIndex { index: usize, count: usize },
    /// The data rate slot is RFU in this region.
    ReservedDataRate(u8),
}

/// Reason a region definition failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DefinitionFault {
    NoUplinkChannels,
    NoDownlinkChannels,
    ZeroFrequency,
    EmptyDutyCycleRange(usize),
    DutyCycleOutOfRange(usize),
    Rx1BoundReserved(u8),
    /// The RX1 data rate rule has `min > max`.
    Rx1BoundsInverted { min: u8, max: u8 },
    /// `Modulo(n)` with `n` zero or above the number of downlink channels.
    Rx1ChannelModulo(u8),
    /// `Identity` RX1 mapping with fewer downlink than uplink channels.
    Rx1ChannelIdentity,
    Rx2DataRateReserved(u8),
    BeaconDataRateReserved(u8),
    NoBeaconChannels,
    OverlayChannelRange { version: PhyVersion },
    DuplicateOverlay(PhyVersion),
}

impl From<InvalidParameter> for Error {
    fn from(e: InvalidParameter) -> Self {
        Error::InvalidParameter(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownRegion(id) => write!(f, "unknown region {}", id),
            Error::UnsupportedVersion { region, version } => {
                write!(f, "region {} does not support regional parameters {}", region, version)
            }
            Error::DuplicateRegion(id) => write!(f, "region {} is already registered", id),
            Error::InvalidParameter(p) => write!(f, "invalid parameter: {}", p),
            Error::OverlappingDutyCycleRange { region, first, second } => write!(
                f,
                "region {}: duty cycle ranges {} and {} overlap",
                region, first, second
            ),
            Error::InvalidDefinition { region, fault } => {
                write!(f, "region {}: invalid definition: {:?}", region, fault)
            }
            Error::RegistryFull => f.write_str("region registry is full"),
        }
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::DataRateIndex { index, max } => {
                write!(f, "data rate index {} must be lower or equal to {}", index, max)
            }
            InvalidParameter::Rx1DataRateOffset { offset, max } => {
                write!(f, "RX1 data rate offset {} must be lower or equal to {}", offset, max)
            }
            InvalidParameter::UplinkChannelIndex { index, count } => {
                write!(f, "uplink channel index {} out of {} channels", index, count)
            }
            InvalidParameter::ReservedDataRate(dr) => write!(f, "data rate {} is reserved", dr),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
