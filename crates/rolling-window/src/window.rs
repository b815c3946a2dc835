//! Rolling Window Implementation

use crate::summation::exact_sum;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Default window capacity (5 readings)
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(capacity) => capacity,
    None => panic!("default window capacity must be non-zero"),
};

/// Fixed-capacity FIFO window of readings
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    /// Readings, oldest first
    values: VecDeque<f64>,
    /// Maximum number of readings held
    capacity: NonZeroUsize,
}

impl RollingWindow {
    /// Create a new window with given capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Create a window with default capacity (5 readings)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Push a reading (evicts the oldest once the window is over capacity)
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);

        if self.values.len() > self.capacity.get() {
            self.values.pop_front();
        }
    }

    /// Arithmetic mean of the current readings, 0.0 when empty.
    ///
    /// The result is the exact mean rounded once, so a window averaging
    /// exactly to a threshold compares equal to it.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let n = self.values.len() as f64;
        if self.values.iter().any(|v| !v.is_finite()) {
            return self.values.iter().sum::<f64>() / n;
        }

        let quotient = exact_sum(self.values.iter().copied()) / n;
        let product = quotient * n;
        if !product.is_finite() {
            return quotient;
        }

        // quotient * n split exactly into product + product_error
        let product_error = quotient.mul_add(n, -product);
        let residual = exact_sum(
            self.values
                .iter()
                .copied()
                .chain([-product, -product_error]),
        );
        quotient + residual / n
    }

    /// Get the number of readings currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if window is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the window capacity
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Readings in insertion order (oldest first)
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
