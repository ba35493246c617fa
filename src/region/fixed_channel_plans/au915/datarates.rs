use super::{Bandwidth, DataRate, DataRateSlot, SpreadingFactor};

use DataRateSlot::{Populated, Reserved};

pub(crate) const DATARATES: [DataRateSlot; 16] = [
    Populated(DataRate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, (59, 51), (59, 51))),
    Populated(DataRate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, (123, 115), (123, 115))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, (230, 222), (250, 242))),
    Reserved, // LR-FHSS
    Populated(DataRate::lora(SpreadingFactor::_12, Bandwidth::_500KHz, (41, 33), (61, 53))),
    Populated(DataRate::lora(SpreadingFactor::_11, Bandwidth::_500KHz, (117, 109), (137, 129))),
    Populated(DataRate::lora(SpreadingFactor::_10, Bandwidth::_500KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_9, Bandwidth::_500KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, (230, 222), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_7, Bandwidth::_500KHz, (230, 222), (250, 242))),
    Reserved, // Used by LinkADRReq starting from Regional Parameters 1.1
    Reserved,
];

/// Data rates 0..=6 of LoRaWAN 1.0.1, where AU915-928 followed the US902-928 table.
pub(crate) const DATARATES_1_0_1: [DataRateSlot; 7] = [
    Populated(DataRate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, (19, 11), (19, 11))),
    Populated(DataRate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, (61, 53), (61, 53))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, (133, 125), (133, 125))),
    Populated(DataRate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, (250, 242), (250, 242))),
    Populated(DataRate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, (250, 242), (250, 242))),
    Reserved,
    Reserved,
];
