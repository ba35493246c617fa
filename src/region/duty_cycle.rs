use super::RegionId;
use crate::{DefinitionFault, Error};

/// Returned by [`RegionDefinition::duty_cycle_for`](super::RegionDefinition::duty_cycle_for)
/// when no sub-band constrains the frequency.
pub const UNRESTRICTED: f32 = 1.0;

/// Maximum transmit duty cycle within the sub-band `[min_frequency, max_frequency)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyCycle {
    pub min_frequency: u32,
    pub max_frequency: u32,
    /// Fraction of time in `(0, 1]`.
    pub duty_cycle: f32,
}

impl DutyCycle {
    pub const fn new(min_frequency: u32, max_frequency: u32, duty_cycle: f32) -> Self {
        Self { min_frequency, max_frequency, duty_cycle }
    }

    pub fn comprises(&self, frequency: u32) -> bool {
        (self.min_frequency..self.max_frequency).contains(&frequency)
    }

    fn overlaps(&self, other: &DutyCycle) -> bool {
        self.min_frequency < other.max_frequency && other.min_frequency < self.max_frequency
    }
}

pub(crate) fn sub_band_for(table: &[DutyCycle], frequency: u32) -> Option<&DutyCycle> {
    table.iter().find(|dc| dc.comprises(frequency))
}

/// Checks every range is well formed and that no two ranges overlap.
pub(crate) fn validate(region: RegionId, table: &[DutyCycle]) -> Result<(), Error> {
    for (i, dc) in table.iter().enumerate() {
        if dc.min_frequency >= dc.max_frequency {
            return Err(Error::InvalidDefinition {
                region,
                fault: DefinitionFault::EmptyDutyCycleRange(i),
            });
        }
        if !(dc.duty_cycle > 0.0 && dc.duty_cycle <= 1.0) {
            return Err(Error::InvalidDefinition {
                region,
                fault: DefinitionFault::DutyCycleOutOfRange(i),
            });
        }
    }
    for (i, a) in table.iter().enumerate() {
        if let Some(j) = table[i + 1..].iter().position(|b| a.overlaps(b)) {
            return Err(Error::OverlappingDutyCycleRange { region, first: i, second: i + 1 + j });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const EU_LIKE: [DutyCycle; 3] = [
        DutyCycle::new(863_000_000, 865_000_000, 0.001),
        DutyCycle::new(865_000_000, 868_000_000, 0.01),
        DutyCycle::new(869_400_000, 869_650_000, 0.1),
    ];

    #[test]
    fn test_lookup_first_match() {
        assert_eq!(sub_band_for(&EU_LIKE, 864_000_000).map(|dc| dc.duty_cycle), Some(0.001));
        // upper bound belongs to the next range
        assert_eq!(sub_band_for(&EU_LIKE, 865_000_000).map(|dc| dc.duty_cycle), Some(0.01));
        assert_eq!(sub_band_for(&EU_LIKE, 869_000_000), None);
    }

    #[test]
    fn test_adjacent_ranges_are_valid() {
        assert_eq!(validate(RegionId::EU_863_870, &EU_LIKE), Ok(()));
        assert_eq!(validate(RegionId::EU_863_870, &[]), Ok(()));
    }

    #[test]
    fn test_overlap_detected() {
        let table = [
            DutyCycle::new(863_000_000, 865_000_000, 0.001),
            DutyCycle::new(866_000_000, 867_000_000, 0.01),
            DutyCycle::new(864_000_000, 864_500_000, 0.1),
        ];
        assert_eq!(
            validate(RegionId::EU_863_870, &table),
            Err(Error::OverlappingDutyCycleRange {
                region: RegionId::EU_863_870,
                first: 0,
                second: 2,
            })
        );
    }

    #[test]
    fn test_malformed_ranges() {
        let empty = [DutyCycle::new(865_000_000, 865_000_000, 0.01)];
        assert_eq!(
            validate(RegionId::EU_863_870, &empty),
            Err(Error::InvalidDefinition {
                region: RegionId::EU_863_870,
                fault: DefinitionFault::EmptyDutyCycleRange(0),
            })
        );
        let zero = [DutyCycle::new(865_000_000, 866_000_000, 0.0)];
        assert_eq!(
            validate(RegionId::EU_863_870, &zero),
            Err(Error::InvalidDefinition {
                region: RegionId::EU_863_870,
                fault: DefinitionFault::DutyCycleOutOfRange(0),
            })
        );
    }
}
