//! US902-928 region support (902..928 MHz)
//!
//! Regional Parameters before 1.0.2 rev B did not define a CFList for this region, the
//! corresponding overlays disable it.
use super::*;
use lora_modulation::{Bandwidth, SpreadingFactor};

mod datarates;
use datarates::*;

const MAX_EIRP: f32 = 30.0;
const MAX_TX_POWER_INDEX: u8 = 14;

/// Base definition of US902-928 (Regional Parameters 1.1 rev A).
pub fn definition() -> RegionDefinition {
    RegionDefinition {
        id: RegionId::US_902_928,
        version: PhyVersion::V1_1RevA,

        uplink_channels: uplink_channels(
            902_300_000,
            DataRateSet::range(0, 3),
            903_000_000,
            DataRateSet::single(4),
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
        rx1_data_rate: Rx1DataRateRule::ClampedOffset {
            max_uplink_data_rate: 4,
            max_offset: 3,
            shift: 10,
            min: 8,
            max: 13,
        },

        default_rx2: Rx2Parameters { data_rate_index: 8, frequency: 923_300_000 },

        beacon: us_au_beacon(),

        overlays: [
            without_cf_list(PhyVersion::V1_0),
            without_cf_list(PhyVersion::V1_0_1),
            without_cf_list(PhyVersion::V1_0_2),
            Overlay::identity(PhyVersion::V1_0_2RevB),
        ]
        .into_iter()
        .collect(),
    }
}

fn without_cf_list(version: PhyVersion) -> Overlay {
    Overlay { implements_cf_list: Some(false), ..Overlay::identity(version) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_definition_is_valid() {
        assert_eq!(definition().validate(), Ok(()));
    }

    #[test]
    fn test_rx1() {
        let us915 = definition();
        assert_eq!(us915.rx1_channel(70), Ok(6));
        assert_eq!(us915.rx1_data_rate(0, 0, false), Ok(10));
        assert_eq!(us915.rx1_data_rate(4, 0, false), Ok(13));
        assert_eq!(us915.rx1_data_rate(1, 3, false), Ok(8));
        assert!(us915.rx1_data_rate(5, 0, false).is_err());
        assert!(us915.rx1_data_rate(0, 4, false).is_err());
    }

    #[test]
    fn test_channel_plan() {
        let us915 = definition();
        assert_eq!(us915.uplink_channel_index(902_300_000), Some(0));
        assert_eq!(us915.uplink_channel_index(914_900_000), Some(63));
        assert_eq!(us915.uplink_channel_index(903_000_000), Some(64));
        assert_eq!(us915.uplink_channel_index(914_200_000), Some(71));
        assert_eq!(us915.uplink_channel_index(902_400_000), None);
        assert_eq!(
            us915.data_rate(4).map(|dr| dr.rate.clone()),
            Ok(Rate::LoRa { spreading_factor: SpreadingFactor::_8, bandwidth: Bandwidth::_500KHz })
        );
        assert!(us915.data_rate(5).is_err());
    }

    #[test]
    fn test_cf_list_overlays() {
        let us915 = definition();
        for version in [PhyVersion::V1_0, PhyVersion::V1_0_1, PhyVersion::V1_0_2] {
            let old = us915.resolve(version).unwrap();
            assert!(!old.implements_cf_list);
            assert_eq!(old.data_rates, us915.data_rates);
        }
        assert!(us915.resolve(PhyVersion::V1_0_2RevB).unwrap().implements_cf_list);
    }
}
