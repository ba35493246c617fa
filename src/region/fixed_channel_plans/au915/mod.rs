//! AU915-928 region support (915..928 MHz)
//!
//! 64 uplink channels of 125 kHz from 915.2 MHz, 8 uplink channels of 500 kHz from 915.9 MHz and
//! 8 downlink channels of 500 kHz from 923.3 MHz. RX1 reuses the downlink channels cyclically.
//!
//! There are no Regional Parameters 1.0 for this region; 1.0.1 used the US902-928 data rates.
use super::*;
use lora_modulation::{Bandwidth, SpreadingFactor};

mod datarates;
use datarates::*;

const MAX_EIRP: f32 = 30.0;
const MAX_TX_POWER_INDEX: u8 = 14;

pub(crate) const RX1_DATA_RATE: Rx1DataRateRule = Rx1DataRateRule::ClampedOffset {
    max_uplink_data_rate: 6,
    max_offset: 5,
    shift: 8,
    min: 8,
    max: 13,
};

const RX1_DATA_RATE_1_0_1: Rx1DataRateRule = Rx1DataRateRule::ClampedOffset {
    max_uplink_data_rate: 4,
    max_offset: 3,
    shift: 10,
    min: 8,
    max: 13,
};

/// Base definition of AU915-928 (Regional Parameters 1.1 rev A).
pub fn definition() -> RegionDefinition {
    RegionDefinition {
        id: RegionId::AU_915_928,
        version: PhyVersion::V1_1RevA,

        uplink_channels: uplink_channels(
            915_200_000,
            DataRateSet::range(0, 5),
            915_900_000,
            DataRateSet::single(6),
        ),
        downlink_channels: downlink_channels(DataRateSet::range(8, 13)),

        band_duty_cycles: [DutyCycle::new(902_000_000, 928_000_000, 1.0)].into_iter().collect(),

        data_rates: DATARATES,

        receive_delay_1: RECEIVE_DELAY1,
        receive_delay_2: RECEIVE_DELAY2,
        join_accept_delay_1: JOIN_ACCEPT_DELAY1,
        join_accept_delay_2: JOIN_ACCEPT_DELAY2,
        max_fcnt_gap: MAX_FCNT_GAP,
        adr_ack_limit: ADR_ACK_LIMIT,
        adr_ack_delay: ADR_ACK_DELAY,
        min_ack_timeout: MIN_ACK_TIMEOUT,
        max_ack_timeout: MAX_ACK_TIMEOUT,

        default_max_eirp: MAX_EIRP,
        tx_offset: derivation::tx_offsets(MAX_TX_POWER_INDEX),
        max_tx_power_index: MAX_TX_POWER_INDEX,

        implements_cf_list: true,
        cf_list_type: CfListType::ChannelMasks,

        rx1_channel: Rx1ChannelRule::Modulo(NUM_DOWNLINK_CHANNELS as u8),
        rx1_data_rate: RX1_DATA_RATE,

        default_rx2: Rx2Parameters { data_rate_index: 8, frequency: 923_300_000 },

        beacon: us_au_beacon(),

        overlays: [
            overlay_1_0_1(),
            Overlay::identity(PhyVersion::V1_0_2),
            Overlay::identity(PhyVersion::V1_0_2RevB),
        ]
        .into_iter()
        .collect(),
    }
}

fn overlay_1_0_1() -> Overlay {
    let mut overlay = Overlay::identity(PhyVersion::V1_0_1);
    for (patch, slot) in overlay.data_rates.iter_mut().zip(DATARATES_1_0_1) {
        *patch = Some(slot);
    }
    overlay.uplink_channel_data_rates =
        uplink_channel_patches(DataRateSet::range(0, 3), DataRateSet::single(4));
    overlay.rx1_data_rate = Some(RX1_DATA_RATE_1_0_1);
    overlay
}
