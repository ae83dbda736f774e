// src/core/gauge.rs
//! Gauge computation for the polling loop

/// Reading substituted when the device reports zero.
pub const DEFAULT_READING: i32 = 88;

/// Mask applied to the reading; keeps the gauge inside [0, 100].
pub const GAUGE_MASK: i32 = 100;

/// Maps a raw device reading onto the bounded gauge value.
pub fn calculate_gauge(reading: i32) -> i32 {
    let reading = if reading == 0 { DEFAULT_READING } else { reading };
    reading & GAUGE_MASK
}
