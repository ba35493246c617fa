//! Regions whose channel plan starts with a few default channels and is extended by the network
//! through the CFList or NewChannelReq.
use super::*;

#[cfg(feature = "region-eu868")]
pub mod eu868;

/// Default channels, used for both uplink and RX1.
pub(crate) fn default_channels(
    frequencies: &[u32],
    data_rates: DataRateSet,
) -> Vec<Channel, MAX_CHANNELS> {
    frequencies.iter().map(|&frequency| Channel::new(frequency, data_rates)).collect()
}
