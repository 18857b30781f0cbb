// vicinity/src/utils/timing.rs
//! Timing helpers: frame delay times are expressed in carrier cycles (fc)
//! on the wire side; transports and tests often want a `Duration`.

use crate::constants::FC_HZ;
use std::time::Duration;

/// Convert carrier cycles to a `Duration`, rounding up to a whole
/// microsecond so short delays never truncate to zero.
pub fn fc_to_duration(cycles: u32) -> Duration {
    let micros = (u64::from(cycles) * 1_000_000).div_ceil(FC_HZ);
    Duration::from_micros(micros)
}

/// Convert microseconds to carrier cycles.
pub fn us_to_fc(us: u32) -> u32 {
    ((u64::from(us) * FC_HZ) / 1_000_000) as u32
}
