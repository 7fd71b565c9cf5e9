//! Inverse spectral object: streaming complex-to-real synthesis
//!
//! Accumulates half-spectrum bins one pair per call, and once a full
//! half-spectrum has arrived, rebuilds the symmetric N-point spectrum,
//! runs the inverse FFT, and serially emits the resulting time-domain
//! block from an output table.

use num_complex::Complex;

use super::fft::{self, Direction};
use crate::buffer::RingBuffer;

/// Streaming inverse transform
///
/// Each reconstruction overwrites the whole output table with a fresh
/// non-overlapped N-sample block; there is no synthesis window and no
/// overlap-add cross-fade between blocks, mirroring the 50%-overlap
/// asymmetry of the forward object. Because the kernel applies no 1/N
/// normalization in either direction, a forward half-spectrum fed
/// straight into this object reproduces the analysis frame scaled by N.
#[derive(Debug)]
pub struct InverseFft {
    frame_size: usize,
    input_real: RingBuffer,
    input_imag: RingBuffer,
    output: RingBuffer,
    /// Interleaved transform workspace, 2N floats, allocated once.
    scratch: Vec<f32>,
    write_pos: usize,
    read_pos: usize,
    transforms: u64,
}

impl InverseFft {
    /// Create an inverse object for frame length N
    ///
    /// # Panics
    /// Panics if `frame_size` is not a power of two.
    pub fn new(frame_size: usize) -> Self {
        assert!(
            frame_size.is_power_of_two(),
            "frame size must be a power of two, got {}",
            frame_size
        );
        let num_bins = frame_size / 2 + 1;
        Self {
            frame_size,
            input_real: RingBuffer::new(num_bins),
            input_imag: RingBuffer::new(num_bins),
            output: RingBuffer::new(frame_size),
            scratch: vec![0.0; 2 * frame_size],
            write_pos: 0,
            read_pos: 0,
            transforms: 0,
        }
    }

    /// Process one (re, im) bin pair; returns this call's output sample
    pub fn process(&mut self, re: f32, im: f32) -> f32 {
        self.input_real.put(self.write_pos, re);
        self.input_imag.put(self.write_pos, im);
        self.write_pos += 1;

        if self.write_pos == self.num_bins() {
            self.run_transform();
        }

        let sample = self.output.read(self.read_pos);
        self.read_pos += 1;
        if self.read_pos == self.frame_size {
            self.read_pos = 0;
        }
        sample
    }

    /// Process one bin given as a complex value
    pub fn process_bin(&mut self, bin: Complex<f32>) -> f32 {
        self.process(bin.re, bin.im)
    }

    /// Process one vector of `W` bin pairs
    ///
    /// Compile-time width selection, matching the forward object's
    /// delivery adapter.
    pub fn process_vector<const W: usize>(
        &mut self,
        in_re: &[f32; W],
        in_im: &[f32; W],
        out: &mut [f32; W],
    ) {
        for lane in 0..W {
            out[lane] = self.process(in_re[lane], in_im[lane]);
        }
    }

    /// Rebuild the full spectrum by conjugate symmetry and synthesize
    fn run_transform(&mut self) {
        let n = self.frame_size;
        let re = self.input_real.as_slice();
        let im = self.input_imag.as_slice();

        // DC and Nyquist bins map to themselves
        self.scratch[0] = re[0];
        self.scratch[1] = im[0];
        self.scratch[n] = re[n / 2];
        self.scratch[n + 1] = im[n / 2];
        // Bin N-k is the conjugate of bin k
        for k in 1..n / 2 {
            self.scratch[2 * k] = re[k];
            self.scratch[2 * k + 1] = im[k];
            self.scratch[2 * (n - k)] = re[k];
            self.scratch[2 * (n - k) + 1] = -im[k];
        }

        fft::transform(&mut self.scratch, Direction::Inverse);

        // Overwrite the output block wholesale; no overlap-add
        let out = self.output.as_mut_slice();
        for i in 0..n {
            out[i] = self.scratch[2 * i];
        }
        self.write_pos = 0;
        self.transforms += 1;
    }

    /// Frame length N
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Number of half-spectrum bins consumed per reconstruction (N/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.frame_size / 2 + 1
    }

    /// Number of reconstructions fired since construction
    pub fn transform_count(&self) -> u64 {
        self.transforms
    }
}
