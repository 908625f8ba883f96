//! Digital Signal Processing
//!
//! Pure functions for signal processing. No I/O dependencies.

pub mod convolution;
pub mod generators;
pub mod level;
pub mod ops;
pub mod rate;

// Re-export commonly used items
pub use convolution::{convolve, ConvMode};
pub use generators::{
    complex_exponential, exponential_sequence, rect_pulse, sinusoidal_sequence, unit_impulse,
    unit_step,
};
pub use level::{db, normalize, peak};
pub use ops::{add, even_odd, even_part, odd_part, scale, shift_signal, time_reverse, time_shift};
pub use rate::{downsample, upsample};
