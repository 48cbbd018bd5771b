//! Capacity-bounded quantity store.
//!
//! A [`BoundedAccumulator`] holds a non-negative `balance` that can never
//! exceed its fixed `capacity`. Every operation is total: out-of-range input
//! is clamped or ignored rather than rejected, so the store always lands in a
//! valid state. Callers that want to report bad input (non-numeric text,
//! non-positive amounts) must validate before calling in.

use depot_core::ValueObject;

/// A single capacity-limited quantity store.
///
/// Invariants, after construction and after every operation:
/// - `capacity >= 0`
/// - `0 <= balance <= capacity`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundedAccumulator {
    capacity: f64,
    balance: f64,
}

impl ValueObject for BoundedAccumulator {}

impl BoundedAccumulator {
    /// Create a store with the given capacity and initial balance.
    ///
    /// A non-positive (or NaN) capacity collapses to exactly `0`. The initial
    /// balance is clamped into `[0, capacity]` using the *stored* capacity.
    pub fn new(capacity: f64, initial_balance: f64) -> Self {
        let capacity = if capacity > 0.0 { capacity } else { 0.0 };
        let balance = clamp_initial_balance(initial_balance, capacity);
        Self { capacity, balance }
    }

    /// Create an empty store.
    pub fn with_capacity(capacity: f64) -> Self {
        Self::new(capacity, 0.0)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Free space left: `capacity - balance`.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.balance
    }

    /// Add `amount`, saturating at capacity.
    ///
    /// Negative (or NaN) amounts are ignored. Any excess over the remaining
    /// space is discarded; this method does not report how much was actually
    /// stored. Use [`increase_reporting`](Self::increase_reporting) for that.
    pub fn increase(&mut self, amount: f64) {
        if !(amount >= 0.0) {
            return;
        }
        self.balance = self.capacity.min(self.balance + amount);
    }

    /// Extension: same as [`increase`](Self::increase), but returns the
    /// quantity that was actually stored (`0` for ignored input).
    pub fn increase_reporting(&mut self, amount: f64) -> f64 {
        let before = self.balance;
        self.increase(amount);
        self.balance - before
    }

    /// Take up to `amount` out of the store and return what was taken.
    ///
    /// The result is less than `amount` when the store holds less. Negative
    /// (or NaN) amounts leave the store untouched and return `0`.
    pub fn decrease(&mut self, amount: f64) -> f64 {
        if !(amount >= 0.0) {
            return 0.0;
        }
        let taken = amount.min(self.balance);
        self.balance = if taken >= self.balance {
            0.0
        } else {
            self.balance - taken
        };
        taken
    }

    /// Human-readable summary of balance and free space.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn clamp_initial_balance(initial_balance: f64, capacity: f64) -> f64 {
    if !(initial_balance >= 0.0) {
        0.0
    } else if initial_balance > capacity {
        capacity
    } else {
        initial_balance
    }
}

impl core::fmt::Display for BoundedAccumulator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "balance = {}, space left {}",
            self.balance,
            self.remaining_capacity()
        )
    }
}
