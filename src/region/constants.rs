use core::time::Duration;

pub(crate) const RECEIVE_DELAY1: Duration = Duration::from_secs(1);
pub(crate) const RECEIVE_DELAY2: Duration = Duration::from_secs(2); // must be RECEIVE_DELAY1 + 1 s
pub(crate) const JOIN_ACCEPT_DELAY1: Duration = Duration::from_secs(5);
pub(crate) const JOIN_ACCEPT_DELAY2: Duration = Duration::from_secs(6);
pub(crate) const MAX_FCNT_GAP: u32 = 16384;
pub(crate) const ADR_ACK_LIMIT: u16 = 64;
pub(crate) const ADR_ACK_DELAY: u16 = 32;
// ACK_TIMEOUT is 2 s with a random jitter of +/- 1 s
pub(crate) const MIN_ACK_TIMEOUT: Duration = Duration::from_secs(1);
pub(crate) const MAX_ACK_TIMEOUT: Duration = Duration::from_secs(3);

/// Number of data rate indexes addressable by the LoRaWAN MAC.
pub const NUM_DATARATES: usize = 16;
/// Upper bound on the number of uplink or downlink channels of a region.
pub const MAX_CHANNELS: usize = 72;
pub(crate) const MAX_DUTY_CYCLES: usize = 8;
pub(crate) const MAX_BEACON_CHANNELS: usize = 8;
pub(crate) const MAX_OVERLAYS: usize = 4;
pub(crate) const MAX_CHANNEL_PATCHES: usize = 4;

/// Duration of a class B beacon period in seconds.
pub const BEACON_PERIOD_SECS: u64 = 128;
