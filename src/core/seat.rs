//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe identifier for one of the four seats at the table.
//!
//! ## Seats
//!
//! Per-seat data backed by a fixed `[T; 4]`, so every per-seat sequence
//! (names, totals, round input, round points) has exactly one entry per seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table. Both 400 and Trix are four-player games.
pub const SEAT_COUNT: usize = 4;

/// Seat identifier, 0-based: the first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(u8);

impl SeatId {
    /// Create a seat ID, or `None` if `index` is not a valid seat.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SEAT_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a seat ID from a 1-based seat number as players call it.
    #[must_use]
    pub const fn from_number(number: usize) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Self::new(number - 1)
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat number as shown to players (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all seats in table order.
    ///
    /// ```
    /// use trix_scorekeeper::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3].number(), 4);
    /// ```
    pub fn all() -> impl Iterator<Item = SeatId> {
        (0..SEAT_COUNT as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.number())
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use trix_scorekeeper::core::{SeatId, Seats};
///
/// let mut totals: Seats<i64> = Seats::with_value(0);
/// let east = SeatId::new(1).unwrap();
/// totals[east] += 150;
/// assert_eq!(totals[east], 150);
/// assert_eq!(totals.sum(), 150);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seats<T> {
    data: [T; SEAT_COUNT],
}

impl<T> Seats<T> {
    /// Create per-seat values from a factory function.
    pub fn new(mut factory: impl FnMut(SeatId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(SeatId(i as u8))),
        }
    }

    /// Create per-seat values with every entry set to `value`.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over values in table order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply `f` to every seat's value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Seats<U> {
        Seats::new(|seat| f(self.get(seat)))
    }

    /// Borrow the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &[T; SEAT_COUNT] {
        &self.data
    }
}

impl Seats<i64> {
    /// Sum over all seats, widened so it cannot overflow.
    #[must_use]
    pub fn sum(&self) -> i128 {
        self.data.iter().map(|v| i128::from(*v)).sum()
    }

    /// Seat-by-seat sum, or `None` if any seat overflows.
    #[must_use]
    pub fn checked_add(&self, deltas: &Seats<i64>) -> Option<Seats<i64>> {
        let mut out = *self;
        for (total, delta) in out.data.iter_mut().zip(deltas.values()) {
            *total = total.checked_add(*delta)?;
        }
        Some(out)
    }

    /// Seat-by-seat difference, or `None` if any seat overflows.
    #[must_use]
    pub fn checked_sub(&self, deltas: &Seats<i64>) -> Option<Seats<i64>> {
        let mut out = *self;
        for (total, delta) in out.data.iter_mut().zip(deltas.values()) {
            *total = total.checked_sub(*delta)?;
        }
        Some(out)
    }
}

impl<T> From<[T; SEAT_COUNT]> for Seats<T> {
    fn from(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }
}

impl<T> Index<SeatId> for Seats<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for Seats<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
