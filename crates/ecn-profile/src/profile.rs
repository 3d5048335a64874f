//! Immutable time/current sample sequence.

use ecn_core::Real;

use crate::error::{ProfileError, ProfileResult};

/// A validated charge/discharge schedule: ordered `(t_s, I_A)` samples.
///
/// Sign convention: positive current = discharge, negative = charge.
/// Two consecutive samples may share the same time to model an instantaneous
/// step in current. Construction goes through [`CurrentProfile::new`], which
/// enforces the invariants; after that the sequence is immutable (slice
/// accessors only, no mutators).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentProfile {
    times_s: Vec<Real>,
    currents_a: Vec<Real>,
}

impl CurrentProfile {
    /// Validating factory.
    ///
    /// Invariants checked, in order: equal-length inputs, at least one
    /// sample, all values finite, times non-decreasing (equal consecutive
    /// times are permitted).
    pub fn new(times_s: Vec<Real>, currents_a: Vec<Real>) -> ProfileResult<Self> {
        if times_s.len() != currents_a.len() {
            return Err(ProfileError::InvalidParameter {
                what: "times_s and currents_a must have the same length",
            });
        }
        if times_s.is_empty() {
            return Err(ProfileError::EmptyDataset);
        }
        for (index, &t) in times_s.iter().enumerate() {
            if !t.is_finite() {
                return Err(ProfileError::NonFiniteValue { what: "t_s", index });
            }
        }
        for (index, &i) in currents_a.iter().enumerate() {
            if !i.is_finite() {
                return Err(ProfileError::NonFiniteValue { what: "I_A", index });
            }
        }
        for index in 1..times_s.len() {
            if times_s[index] < times_s[index - 1] {
                return Err(ProfileError::NonMonotonicTime {
                    index,
                    prev: times_s[index - 1],
                    next: times_s[index],
                });
            }
        }
        Ok(Self { times_s, currents_a })
    }

    pub fn times_s(&self) -> &[Real] {
        &self.times_s
    }

    pub fn currents_a(&self) -> &[Real] {
        &self.currents_a
    }

    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false for a constructed profile; kept for slice-like ergonomics.
        self.times_s.is_empty()
    }

    pub fn first_time_s(&self) -> Real {
        self.times_s[0]
    }

    pub fn last_time_s(&self) -> Real {
        self.times_s[self.times_s.len() - 1]
    }

    /// Number of instantaneous steps (consecutive samples sharing a time).
    pub fn step_count(&self) -> usize {
        self.times_s
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .count()
    }
}
