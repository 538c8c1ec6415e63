//! Differential-selection tables.
//!
//! Given how many non-zero differentials fall inside the method's window,
//! these tables fix how many of the best (lowest) ones are averaged. Every
//! boundary is an exact contract; off-by-one errors here are the dominant
//! bug class in this subsystem.

use crate::domain::index::Method;

/// Number of best differentials to average for `n` available ones.
pub fn num_differentials_to_use(n: usize, method: Method) -> usize {
    match method {
        // USGA schedule: 1 up to n=5, then steps to 8 at n=19; capped at 8.
        Method::Usga => match n {
            0..=5 => 1,
            6..=8 => 2,
            9..=11 => 3,
            12..=14 => 4,
            15..=16 => 5,
            17 => 6,
            18 => 7,
            _ => 8,
        },
        // Roch schedule: 1 up to n=3, then n-2; capped at 5.
        Method::Roch => match n {
            0..=3 => 1,
            4 => 2,
            5 => 3,
            6 => 4,
            _ => 5,
        },
    }
}
