//! Engineering unit aliases used across the data model.
//!
//! Unit conversion happens before values reach this crate; these aliases only
//! document which unit a field is expected in.

/// Vibration velocity in mm/s (RMS).
pub type MmPerSec = f64;

/// Vibration acceleration in g.
pub type Gravity = f64;

/// Vibration displacement in micrometres (peak-to-peak).
pub type Micrometre = f64;

/// Temperature in degrees Celsius.
pub type Celsius = f64;

/// Gauge pressure in bar.
pub type Bar = f64;

/// Volumetric flow in m³/h.
pub type CubicMetresPerHour = f64;

/// Liquid column height in metres.
pub type Metre = f64;

/// Frequency in Hz.
pub type Hertz = f64;
