//! Region specific formulas for the first receive window.
use super::constants::NUM_DATARATES;
use crate::InvalidParameter;

/// Maps the uplink channel index to the downlink channel index used for RX1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rx1ChannelRule {
    /// RX1 uses the uplink channel.
    Identity,
    /// Downlink channels are reused cyclically: `downlink = uplink % n`.
    Modulo(u8),
}

impl Rx1ChannelRule {
    /// `None` for `Modulo(0)`, which maps no channel.
    pub fn downlink_channel(&self, uplink_channel: usize) -> Option<usize> {
        match *self {
            Rx1ChannelRule::Identity => Some(uplink_channel),
            Rx1ChannelRule::Modulo(n) => uplink_channel.checked_rem(n as usize),
        }
    }
}

/// Computes the RX1 data rate from the uplink data rate and the RX1DROffset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rx1DataRateRule {
    /// `uplink + shift - offset`, clamped to `[min, max]`.
    ///
    /// The bounds are the downlink data rate range of the region and are stored per region.
    ClampedOffset { max_uplink_data_rate: u8, max_offset: u8, shift: u8, min: u8, max: u8 },
}

impl Rx1DataRateRule {
    /// `ack_requested` is part of the signature for regions whose table depends on whether the
    /// acknowledged frame was confirmed; the clamped offset rule ignores it.
    pub fn downlink_data_rate(
        &self,
        uplink_data_rate: u8,
        rx1_dr_offset: u8,
        ack_requested: bool,
    ) -> Result<u8, InvalidParameter> {
        let _ = ack_requested;
        match *self {
            Rx1DataRateRule::ClampedOffset {
                max_uplink_data_rate,
                max_offset,
                shift,
                min,
                max,
            } => {
                if uplink_data_rate > max_uplink_data_rate {
                    return Err(InvalidParameter::DataRateIndex {
                        index: uplink_data_rate,
                        max: max_uplink_data_rate,
                    });
                }
                if rx1_dr_offset > max_offset {
                    return Err(InvalidParameter::Rx1DataRateOffset {
                        offset: rx1_dr_offset,
                        max: max_offset,
                    });
                }
                let si = uplink_data_rate as i16 + shift as i16 - rx1_dr_offset as i16;
                // `max` wins over `min` if a malformed rule inverts them
                Ok(si.max(min as i16).min(max as i16) as u8)
            }
        }
    }

    /// Data rate indexes the rule may produce.
    pub(crate) fn bounds(&self) -> (u8, u8) {
        match *self {
            Rx1DataRateRule::ClampedOffset { min, max, .. } => (min, max),
        }
    }
}

/// TX power offsets of `-2 dB * index` for indexes `0..=max_index`; the rest stays unset.
pub(crate) fn tx_offsets(max_index: u8) -> [f32; NUM_DATARATES] {
    let mut offsets = [0.0; NUM_DATARATES];
    for (i, offset) in offsets.iter_mut().enumerate().take(max_index as usize + 1) {
        *offset = -2.0 * i as f32;
    }
    offsets
}

#[cfg(test)]
mod test {
    use super::*;

    const US_LIKE: Rx1DataRateRule = Rx1DataRateRule::ClampedOffset {
        max_uplink_data_rate: 4,
        max_offset: 3,
        shift: 10,
        min: 8,
        max: 13,
    };

    #[test]
    fn test_modulo_channel() {
        let rule = Rx1ChannelRule::Modulo(8);
        assert_eq!(rule.downlink_channel(0), Some(0));
        assert_eq!(rule.downlink_channel(10), Some(2));
        assert_eq!(rule.downlink_channel(71), Some(7));
        assert_eq!(Rx1ChannelRule::Identity.downlink_channel(2), Some(2));
        assert_eq!(Rx1ChannelRule::Modulo(0).downlink_channel(2), None);
    }

    #[test]
    fn test_clamped_offset() {
        assert_eq!(US_LIKE.downlink_data_rate(0, 0, false), Ok(10));
        assert_eq!(US_LIKE.downlink_data_rate(4, 0, false), Ok(13));
        assert_eq!(US_LIKE.downlink_data_rate(0, 3, true), Ok(8));
        assert_eq!(US_LIKE.downlink_data_rate(2, 1, false), Ok(11));
    }

    #[test]
    fn test_clamped_offset_rejects_out_of_range() {
        assert_eq!(
            US_LIKE.downlink_data_rate(5, 0, false),
            Err(InvalidParameter::DataRateIndex { index: 5, max: 4 })
        );
        assert_eq!(
            US_LIKE.downlink_data_rate(0, 4, false),
            Err(InvalidParameter::Rx1DataRateOffset { offset: 4, max: 3 })
        );
    }

    #[test]
    fn test_clamped_offset_floor_at_zero() {
        let eu_like = Rx1DataRateRule::ClampedOffset {
            max_uplink_data_rate: 7,
            max_offset: 5,
            shift: 0,
            min: 0,
            max: 7,
        };
        assert_eq!(eu_like.downlink_data_rate(1, 5, false), Ok(0));
        assert_eq!(eu_like.downlink_data_rate(7, 2, false), Ok(5));
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let inverted = Rx1DataRateRule::ClampedOffset {
            max_uplink_data_rate: 6,
            max_offset: 5,
            shift: 8,
            min: 13,
            max: 8,
        };
        assert_eq!(inverted.downlink_data_rate(3, 2, false), Ok(8));
        assert_eq!(inverted.bounds(), (13, 8));
    }

    #[test]
    fn test_tx_offsets() {
        let offsets = tx_offsets(14);
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[1], -2.0);
        assert_eq!(offsets[14], -28.0);
        assert_eq!(offsets[15], 0.0);
        assert_eq!(tx_offsets(7)[8], 0.0);
        assert_eq!(tx_offsets(15)[15], -30.0);
    }
}
