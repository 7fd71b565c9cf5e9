//! Spectral transform objects and their FFT kernel

pub mod fft;
pub mod forward;
pub mod inverse;
pub mod window;

pub use fft::{transform, Direction};
pub use forward::ForwardFft;
pub use inverse::InverseFft;
pub use window::{generate_window, WindowType};
