use lorawan_regional::region::NUM_DATARATES;
use lorawan_regional::{Error, PhyVersion, Registry, RegionId};

const VERSIONS: [PhyVersion; 5] = [
    PhyVersion::V1_0,
    PhyVersion::V1_0_1,
    PhyVersion::V1_0_2,
    PhyVersion::V1_0_2RevB,
    PhyVersion::V1_1RevA,
];

#[test]
fn test_all_regions_registered() {
    let registry = Registry::with_enabled_regions().unwrap();
    for id in RegionId::ALL {
        assert!(registry.contains(id), "{} missing", id);
        assert_eq!(registry.base(id).unwrap().id, id);
    }
}

#[test]
fn test_table_shapes() {
    let registry = Registry::with_enabled_regions().unwrap();
    for id in registry.ids() {
        for version in VERSIONS {
            let Ok(def) = registry.get(id, version) else {
                continue;
            };
            assert_eq!(def.data_rates.len(), NUM_DATARATES);
            assert_eq!(def.tx_offset.len(), NUM_DATARATES);
            for channel in def.uplink_channels.iter().chain(def.downlink_channels.iter()) {
                assert!(channel.data_rates.iter().all(|dr| dr <= 15));
                assert!(!channel.data_rates.is_empty());
                assert_ne!(channel.frequency, 0);
            }
            assert_eq!(def.validate(), Ok(()));
        }
    }
}

#[test]
fn test_unknown_region() {
    let mut registry = Registry::new();
    registry.register(lorawan_regional::region::us915::definition()).unwrap();
    for version in VERSIONS {
        assert_eq!(
            registry.get(RegionId::EU_863_870, version),
            Err(Error::UnknownRegion(RegionId::EU_863_870))
        );
    }
    assert_eq!(
        registry.base(RegionId::AU_915_928).err(),
        Some(Error::UnknownRegion(RegionId::AU_915_928))
    );
}

#[test]
fn test_duplicate_region() {
    let mut registry = Registry::with_enabled_regions().unwrap();
    assert_eq!(
        registry.register(lorawan_regional::region::eu868::definition()),
        Err(Error::DuplicateRegion(RegionId::EU_863_870))
    );
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_get_is_idempotent() {
    let registry = Registry::with_enabled_regions().unwrap();
    for id in RegionId::ALL {
        for version in VERSIONS {
            assert_eq!(registry.get(id, version), registry.get(id, version));
        }
    }
}

#[test]
fn test_returned_definitions_are_copies() {
    let registry = Registry::with_enabled_regions().unwrap();
    let mut def = registry.get(RegionId::AU_915_928, PhyVersion::V1_1RevA).unwrap();
    def.uplink_channels[0].frequency = 916_000_000;
    def.data_rates[0] = lorawan_regional::region::DataRateSlot::Reserved;
    def.band_duty_cycles.clear();

    let fresh = registry.get(RegionId::AU_915_928, PhyVersion::V1_1RevA).unwrap();
    assert_eq!(fresh.uplink_channels[0].frequency, 915_200_000);
    assert!(!fresh.data_rates[0].is_reserved());
    assert_eq!(fresh.band_duty_cycles.len(), 1);
    assert_ne!(def, fresh);
}

#[test]
fn test_concurrent_reads() {
    let registry = Registry::with_enabled_regions().unwrap();
    let expected = registry.get(RegionId::AU_915_928, PhyVersion::V1_0_1).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let def = registry.get(RegionId::AU_915_928, PhyVersion::V1_0_1).unwrap();
                    assert_eq!(def, expected);
                    assert_eq!(def.rx1_channel(10), Ok(2));
                }
            });
        }
    });
}

#[test]
fn test_overlapping_duty_cycles_rejected() {
    let mut def = lorawan_regional::region::eu868::definition();
    def.band_duty_cycles[1].max_frequency = 868_300_000;
    let mut registry = Registry::new();
    assert_eq!(
        registry.register(def),
        Err(Error::OverlappingDutyCycleRange { region: RegionId::EU_863_870, first: 1, second: 2 })
    );
    assert!(registry.is_empty());
}

#[test]
fn test_malformed_rx1_rules_rejected() {
    use lorawan_regional::region::{Rx1ChannelRule, Rx1DataRateRule};
    use lorawan_regional::DefinitionFault;

    let mut registry = Registry::new();

    let mut def = lorawan_regional::region::au915::definition();
    def.rx1_data_rate = Rx1DataRateRule::ClampedOffset {
        max_uplink_data_rate: 6,
        max_offset: 5,
        shift: 8,
        min: 13,
        max: 8,
    };
    assert_eq!(
        registry.register(def),
        Err(Error::InvalidDefinition {
            region: RegionId::AU_915_928,
            fault: DefinitionFault::Rx1BoundsInverted { min: 13, max: 8 },
        })
    );

    let mut def = lorawan_regional::region::au915::definition();
    def.rx1_channel = Rx1ChannelRule::Modulo(16);
    assert_eq!(
        registry.register(def),
        Err(Error::InvalidDefinition {
            region: RegionId::AU_915_928,
            fault: DefinitionFault::Rx1ChannelModulo(16),
        })
    );

    let mut def = lorawan_regional::region::us915::definition();
    def.rx1_channel = Rx1ChannelRule::Modulo(0);
    assert!(registry.register(def).is_err());

    assert!(registry.is_empty());
}
