//! Forward spectral object: streaming real-to-complex analysis
//!
//! Accumulates time-domain samples at the audio rate and fires a windowed
//! real-to-complex transform every half frame, publishing the
//! non-negative-frequency half-spectrum into a pair of output tables.

use num_complex::Complex;

use super::fft::{self, Direction};
use super::window::{generate_window, WindowType};
use crate::buffer::RingBuffer;

/// Streaming forward transform with 50%-overlapped analysis frames
///
/// Per-call behavior: each incoming sample lands in the input table at the
/// current fill position. When the table fills, the object windows the
/// frame, runs the forward FFT, publishes bins 0..=N/2 into the output
/// tables in one go, and keeps the newest N/2 samples for the next frame.
/// Every call also emits one (re, im) value from the output tables at a
/// position that cycles continuously over all N/2+1 bins, so spectrum
/// values stream out at the caller's sample rate and refresh in bulk once
/// per hop.
///
/// The per-call cost is deliberately lumpy: most calls are a store and a
/// table read, and the call that completes a hop pays the full O(N log N)
/// transform synchronously.
#[derive(Debug)]
pub struct ForwardFft {
    frame_size: usize,
    input: RingBuffer,
    output_real: RingBuffer,
    output_imag: RingBuffer,
    /// Interleaved transform workspace, 2N floats, sized once here and
    /// reused for every hop. The hot path never allocates.
    scratch: Vec<f32>,
    window: Vec<f32>,
    window_type: WindowType,
    write_pos: usize,
    read_pos: usize,
    transforms: u64,
}

impl ForwardFft {
    /// Create a forward object with no analysis window
    ///
    /// # Arguments
    /// * `frame_size` - transform length N
    ///
    /// # Panics
    /// Panics if `frame_size` is not a power of two; the FFT kernel is
    /// only correct for such sizes, so this is a programmer error rather
    /// than a recoverable condition.
    pub fn new(frame_size: usize) -> Self {
        Self::with_window(frame_size, WindowType::Rectangular)
    }

    /// Create a forward object with the given analysis window
    ///
    /// Window coefficients are precomputed here; applying them per hop is
    /// a single multiply per sample.
    pub fn with_window(frame_size: usize, window_type: WindowType) -> Self {
        assert!(
            frame_size.is_power_of_two(),
            "frame size must be a power of two, got {}",
            frame_size
        );
        let num_bins = frame_size / 2 + 1;
        Self {
            frame_size,
            input: RingBuffer::new(frame_size),
            output_real: RingBuffer::new(num_bins),
            output_imag: RingBuffer::new(num_bins),
            scratch: vec![0.0; 2 * frame_size],
            window: generate_window(window_type, frame_size),
            window_type,
            write_pos: 0,
            read_pos: 0,
            transforms: 0,
        }
    }

    /// Process one sample; returns this call's (re, im) output pair
    pub fn process(&mut self, sample: f32) -> (f32, f32) {
        self.input.put(self.write_pos, sample);
        self.write_pos += 1;

        if self.write_pos == self.frame_size {
            self.run_transform();
        }

        let re = self.output_real.read(self.read_pos);
        let im = self.output_imag.read(self.read_pos);
        self.read_pos += 1;
        if self.read_pos == self.num_bins() {
            self.read_pos = 0;
        }
        (re, im)
    }

    /// Process one vector of `W` samples
    ///
    /// Width is fixed at compile time so builds configured for a given
    /// processing vector size pay no per-sample width dispatch.
    pub fn process_vector<const W: usize>(
        &mut self,
        input: &[f32; W],
        out_re: &mut [f32; W],
        out_im: &mut [f32; W],
    ) {
        for lane in 0..W {
            let (re, im) = self.process(input[lane]);
            out_re[lane] = re;
            out_im[lane] = im;
        }
    }

    /// Window the current frame, transform it, and publish the half-spectrum
    fn run_transform(&mut self) {
        let n = self.frame_size;

        let frame = self.input.as_slice();
        for i in 0..n {
            self.scratch[2 * i] = frame[i] * self.window[i];
            self.scratch[2 * i + 1] = 0.0;
        }

        fft::transform(&mut self.scratch, Direction::Forward);

        for k in 0..=n / 2 {
            self.output_real.put(k, self.scratch[2 * k]);
            self.output_imag.put(k, self.scratch[2 * k + 1]);
        }

        // Keep the newest half frame: the next transform fires after N/2
        // more samples, giving 50%-overlapped analysis frames.
        self.input.as_mut_slice().copy_within(n / 2.., 0);
        self.write_pos = n / 2;
        self.transforms += 1;
    }

    /// Most recently published value of bin `k`
    pub fn bin(&self, k: usize) -> Complex<f32> {
        Complex::new(self.output_real.read(k), self.output_imag.read(k))
    }

    /// Transform length N
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Number of published half-spectrum bins (N/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.frame_size / 2 + 1
    }

    /// Samples consumed between successive transforms (N/2)
    pub fn hop_size(&self) -> usize {
        self.frame_size / 2
    }

    /// Analysis window in use
    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Number of transforms fired since construction
    pub fn transform_count(&self) -> u64 {
        self.transforms
    }
}
