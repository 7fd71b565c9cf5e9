//! Streaming spectral analysis/synthesis core
//!
//! Real-time building blocks for a compiled audio signal graph: a forward
//! object that turns a sample stream into 50%-overlapped half-spectrum
//! frames, an inverse object that resynthesizes a sample stream from
//! incoming bins, and the in-place radix-2 FFT kernel underneath them.
//!
//! Both objects are single-threaded and allocation-free after
//! construction; the host scheduler calls them once per processing
//! vector from inside its audio rendering loop.

pub mod buffer;
pub mod graph;
pub mod spectrum;

pub use buffer::RingBuffer;
pub use graph::{check_pair, SpectralPair, WiringError};
pub use spectrum::{Direction, ForwardFft, InverseFft, WindowType};
