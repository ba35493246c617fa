//! EU863-870 region support (863..870 MHz)
use super::*;
use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::region::DataRateSlot::{Populated, Reserved};

const MAX_EIRP: f32 = 16.0;
const MAX_TX_POWER_INDEX: u8 = 7;

const JOIN_CHANNELS: [u32; 3] = [868_100_000, 868_300_000, 868_500_000];

const RX2_FREQUENCY: u32 = 869_525_000;

pub(crate) const DATARATES: [DataRateSlot; 16] = [
    Populated(DataRate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, (123, 115), (123, 115))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, (230, 222), (250, 242))),
    Populated(DataRate::fsk(50_000, (230, 222), (250, 242))),
    // DR8..DR11: LR-FHSS, not supported
    Reserved,
    Reserved,
    Reserved,
    Reserved,
    // DR12..DR15: RFU
    Reserved,
    Reserved,
    Reserved,
    Reserved,
];

/// Sub-bands of the ETSI EN 300 220 band plan.
const DUTY_CYCLES: [DutyCycle; 6] = [
    DutyCycle::new(863_000_000, 865_000_000, 0.001),
    DutyCycle::new(865_000_000, 868_000_000, 0.01),
    DutyCycle::new(868_000_000, 868_600_000, 0.01),
    DutyCycle::new(868_700_000, 869_200_000, 0.001),
    DutyCycle::new(869_400_000, 869_650_000, 0.1),
    DutyCycle::new(869_700_000, 870_000_000, 0.01),
];

/// Base definition of EU863-870 (Regional Parameters 1.1 rev A).
pub fn definition() -> RegionDefinition {
    let channels = default_channels(&JOIN_CHANNELS, DataRateSet::range(0, 5));
    RegionDefinition {
        id: RegionId::EU_863_870,
        version: PhyVersion::V1_1RevA,

        uplink_channels: channels.clone(),
        downlink_channels: channels,

        band_duty_cycles: DUTY_CYCLES.into_iter().collect(),

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
        cf_list_type: CfListType::Frequencies,

        rx1_channel: Rx1ChannelRule::Identity,
        rx1_data_rate: Rx1DataRateRule::ClampedOffset {
            max_uplink_data_rate: 7,
            max_offset: 5,
            shift: 0,
            min: 0,
            max: 7,
        },

        default_rx2: Rx2Parameters { data_rate_index: 0, frequency: RX2_FREQUENCY },

        beacon: Beacon {
            data_rate_index: 3,
            coding_rate: lora_modulation::CodingRate::_4_5,
            broadcast_channel: BeaconChannel::Fixed(RX2_FREQUENCY),
            ping_slot_channels: [RX2_FREQUENCY].into_iter().collect(),
        },

        overlays: [
            Overlay::identity(PhyVersion::V1_0),
            Overlay::identity(PhyVersion::V1_0_1),
            Overlay::identity(PhyVersion::V1_0_2),
            Overlay::identity(PhyVersion::V1_0_2RevB),
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn test_duty_cycle() {
        let eu868 = definition();
        assert_eq!(eu868.duty_cycle_for(868_100_000), 0.01);
        assert_eq!(eu868.duty_cycle_for(869_525_000), 0.1);
        assert_eq!(eu868.duty_cycle_for(864_000_000), 0.001);
        // gap between sub-bands
        assert_eq!(eu868.duty_cycle_for(868_650_000), UNRESTRICTED);
        assert!(eu868.sub_band_for(868_650_000).is_none());
    }

    #[test]
    fn test_rx1() {
        let eu868 = definition();
        assert_eq!(eu868.rx1_channel(2), Ok(2));
        assert!(eu868.rx1_channel(3).is_err());
        assert_eq!(eu868.rx1_data_rate(5, 0, false), Ok(5));
        assert_eq!(eu868.rx1_data_rate(5, 3, false), Ok(2));
        assert_eq!(eu868.rx1_data_rate(2, 5, false), Ok(0));
        assert!(eu868.rx1_data_rate(8, 0, false).is_err());
        let (frequency, dr) = eu868.rx1_parameters(1, 5, 0).unwrap();
        assert_eq!(frequency, 868_300_000);
        assert_eq!(
            dr.rate,
            Rate::LoRa { spreading_factor: SpreadingFactor::_7, bandwidth: Bandwidth::_125KHz }
        );
    }

    #[test]
    fn test_data_rates() {
        let eu868 = definition();
        assert_eq!(
            eu868.data_rate(7).map(|dr| dr.rate.clone()),
            Ok(Rate::Fsk { bit_rate: 50_000 })
        );
        assert_eq!(eu868.max_payload_size(0, true), Ok(MaxPayloadSize::new(59, 51)));
        assert_eq!(eu868.max_payload_size(5, false), Ok(MaxPayloadSize::new(250, 242)));
        assert!(eu868.data_rate(8).is_err());
        assert_eq!(eu868.tx_power(7), Some(2.0));
        assert_eq!(eu868.tx_power(8), None);
    }

    #[test]
    fn test_beacon() {
        let eu868 = definition();
        assert_eq!(eu868.beacon.broadcast_channel.frequency_at(12_345), Some(RX2_FREQUENCY));
        assert_eq!(eu868.beacon.ping_slot_channels, [RX2_FREQUENCY]);
    }
}
