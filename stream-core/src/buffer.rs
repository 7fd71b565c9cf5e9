//! Fixed-capacity circular sample store
//!
//! Single-threaded indexed ring used by the spectral objects for their
//! input accumulation and output emission tables. Allocated once at
//! construction; never grows.

/// Fixed-capacity circular buffer of `f32` samples
///
/// Every index wraps modulo the capacity, so callers can address the
/// buffer with a free-running logical position. There is no overflow or
/// underflow condition: the wrap is the only bounds behavior.
#[derive(Debug)]
pub struct RingBuffer {
    storage: Box<[f32]>,
    cursor: usize,
}

impl RingBuffer {
    /// Create a zero-filled buffer with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is zero (a zero-length ring has no valid cursor).
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self {
            storage: vec![0.0; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Store `value` at the cursor and advance it, wrapping at capacity
    pub fn write(&mut self, value: f32) {
        self.storage[self.cursor] = value;
        self.cursor += 1;
        if self.cursor == self.storage.len() {
            self.cursor = 0;
        }
    }

    /// Read the value at a logical index without mutating state
    ///
    /// The index wraps: `read(i) == read(i % capacity)` for all `i`.
    pub fn read(&self, offset: usize) -> f32 {
        self.storage[offset % self.storage.len()]
    }

    /// Store `value` at a logical index without moving the cursor
    ///
    /// Used by owners that track their own fill position separately from
    /// the ring's write cursor.
    pub fn put(&mut self, offset: usize, value: f32) {
        let capacity = self.storage.len();
        self.storage[offset % capacity] = value;
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Current write cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Borrow the underlying storage
    pub fn as_slice(&self) -> &[f32] {
        &self.storage
    }

    /// Mutably borrow the underlying storage
    ///
    /// Used for the bulk phases of a transform (windowed copy-out, shift,
    /// wholesale overwrite).
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.storage
    }
}
