use heapless::Vec;
use lora_modulation::CodingRate;

use super::constants::{BEACON_PERIOD_SECS, MAX_BEACON_CHANNELS};

/// Class B beacon and ping slot parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beacon {
    pub data_rate_index: u8,
    pub coding_rate: CodingRate,
    pub broadcast_channel: BeaconChannel,
    /// Candidate frequencies for ping slots.
    pub ping_slot_channels: Vec<u32, MAX_BEACON_CHANNELS>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeaconChannel {
    Fixed(u32),
    /// The beacon hops over the list, changing channel every beacon period.
    Hopping(Vec<u32, MAX_BEACON_CHANNELS>),
}

impl BeaconChannel {
    /// Frequency of the beacon sent at `beacon_time` (seconds since GPS epoch).
    pub fn frequency_at(&self, beacon_time: u64) -> Option<u32> {
        match self {
            BeaconChannel::Fixed(frequency) => Some(*frequency),
            BeaconChannel::Hopping(frequencies) => {
                if frequencies.is_empty() {
                    return None;
                }
                let index = (beacon_time / BEACON_PERIOD_SECS) % frequencies.len() as u64;
                frequencies.get(index as usize).copied()
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            BeaconChannel::Fixed(frequency) => *frequency == 0,
            BeaconChannel::Hopping(frequencies) => frequencies.is_empty(),
        }
    }
}
