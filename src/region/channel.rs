use super::constants::NUM_DATARATES;

/// Set of data rate indexes allowed on a channel.
///
/// Backed by a 16-bit mask, so only indexes 0..=15 can ever be members.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRateSet(u16);

impl DataRateSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All data rates from `min` to `max`, inclusive. Indexes above 15 are ignored.
    pub const fn range(min: u8, max: u8) -> Self {
        let mut bits = 0u16;
        let mut dr = min;
        while dr <= max && (dr as usize) < NUM_DATARATES {
            bits |= 1 << dr;
            dr += 1;
        }
        Self(bits)
    }

    pub const fn single(dr: u8) -> Self {
        Self::range(dr, dr)
    }

    pub const fn from_raw(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn raw_value(&self) -> u16 {
        self.0
    }

    pub const fn contains(&self, dr: u8) -> bool {
        (dr as usize) < NUM_DATARATES && self.0 & (1 << dr) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the member indexes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..NUM_DATARATES as u8).filter(move |&dr| self.contains(dr))
    }

    pub fn min_data_rate(&self) -> Option<u8> {
        self.iter().next()
    }

    pub fn max_data_rate(&self) -> Option<u8> {
        self.iter().last()
    }
}

impl FromIterator<u8> for DataRateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter()
            .filter(|&dr| (dr as usize) < NUM_DATARATES)
            .fold(Self::empty(), |set, dr| Self(set.0 | 1 << dr))
    }
}

/// A single uplink or downlink channel of a region's channel plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Center frequency in Hz.
    pub frequency: u32,
    pub data_rates: DataRateSet,
}

impl Channel {
    pub const fn new(frequency: u32, data_rates: DataRateSet) -> Self {
        Self { frequency, data_rates }
    }

    /// Whether `dr` may be used on this channel.
    pub const fn supports(&self, dr: u8) -> bool {
        self.data_rates.contains(dr)
    }
}

/// `count` channels starting at `first` Hz and spaced by `step` Hz, all sharing `data_rates`.
#[cfg(any(feature = "region-au915", feature = "region-us915"))]
pub(crate) fn evenly_spaced(
    first: u32,
    step: u32,
    count: u32,
    data_rates: DataRateSet,
) -> impl Iterator<Item = Channel> {
    (0..count).map(move |i| Channel::new(first + step * i, data_rates))
}
