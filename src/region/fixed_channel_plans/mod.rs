//! Regions with a fixed plan of 64 + 8 uplink channels and 8 downlink channels.
use super::*;

#[cfg(feature = "region-au915")]
pub mod au915;
#[cfg(feature = "region-us915")]
pub mod us915;

/// Number of 125 kHz uplink channels, followed by 8 wide-band uplink channels.
pub(crate) const NUM_125KHZ_CHANNELS: u32 = 64;
pub(crate) const NUM_500KHZ_CHANNELS: u32 = 8;
pub(crate) const NUM_DOWNLINK_CHANNELS: u32 = 8;

/// Beacon and default ping slot frequencies shared by US902-928 and AU915-928.
pub(crate) const US_AU_BEACON_FREQUENCIES: [u32; 8] = [
    923_300_000,
    923_900_000,
    924_500_000,
    925_100_000,
    925_700_000,
    926_300_000,
    926_900_000,
    927_500_000,
];

pub(crate) fn us_au_beacon() -> Beacon {
    let frequencies: Vec<u32, MAX_BEACON_CHANNELS> = US_AU_BEACON_FREQUENCIES.into_iter().collect();
    Beacon {
        data_rate_index: 8,
        coding_rate: lora_modulation::CodingRate::_4_5,
        broadcast_channel: BeaconChannel::Hopping(frequencies.clone()),
        ping_slot_channels: frequencies,
    }
}

/// Uplink channel plan: 64 channels of 200 kHz spacing starting at `first_125khz`, then 8
/// channels of 1.6 MHz spacing starting at `first_500khz`.
pub(crate) fn uplink_channels(
    first_125khz: u32,
    data_rates_125khz: DataRateSet,
    first_500khz: u32,
    data_rates_500khz: DataRateSet,
) -> Vec<Channel, MAX_CHANNELS> {
    channel::evenly_spaced(first_125khz, 200_000, NUM_125KHZ_CHANNELS, data_rates_125khz)
        .chain(channel::evenly_spaced(
            first_500khz,
            1_600_000,
            NUM_500KHZ_CHANNELS,
            data_rates_500khz,
        ))
        .collect()
}

/// 8 downlink channels of 600 kHz spacing starting at 923.3 MHz.
pub(crate) fn downlink_channels(data_rates: DataRateSet) -> Vec<Channel, MAX_CHANNELS> {
    channel::evenly_spaced(923_300_000, 600_000, NUM_DOWNLINK_CHANNELS, data_rates).collect()
}

/// Patches the data rates of the 125 kHz and of the 500 kHz uplink channels.
#[cfg(feature = "region-au915")]
pub(crate) fn uplink_channel_patches(
    data_rates_125khz: DataRateSet,
    data_rates_500khz: DataRateSet,
) -> Vec<ChannelPatch, MAX_CHANNEL_PATCHES> {
    [
        ChannelPatch { first: 0, count: NUM_125KHZ_CHANNELS as u8, data_rates: data_rates_125khz },
        ChannelPatch {
            first: NUM_125KHZ_CHANNELS as u8,
            count: NUM_500KHZ_CHANNELS as u8,
            data_rates: data_rates_500khz,
        },
    ]
    .into_iter()
    .collect()
}
