//! Random ring selection.
//!
//! Picks a uniformly random subset of the roster to call on. Uses the `rand`
//! crate's Fisher-Yates shuffle, so every subset of the requested size is
//! equally likely.

use rand::seq::SliceRandom;
use rand::Rng;
use rollcall_types::Student;
use thiserror::Error;

/// How many students a ring should select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingSize {
    /// Every student, in shuffled order.
    All,
    /// Exactly this many students.
    Count(u32),
}

/// Rejected ring requests. No state is mutated on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("cannot ring an empty roster")]
    EmptyRoster,

    #[error("invalid number of students: requested {requested}, roster has {roster}")]
    InvalidCount { requested: u32, roster: usize },
}

/// Selects `size` students from the roster, uniformly at random.
///
/// A count of 0 or greater than the roster size is rejected; an empty roster
/// rejects every request. [`RingSize::All`] returns the whole roster in
/// shuffled order.
pub fn ring_random<'a, R: Rng + ?Sized>(
    students: &'a [Student],
    size: RingSize,
    rng: &mut R,
) -> Result<Vec<&'a Student>, RingError> {
    if students.is_empty() {
        return Err(RingError::EmptyRoster);
    }

    let take = match size {
        RingSize::All => students.len(),
        RingSize::Count(n) => {
            if n == 0 || n as usize > students.len() {
                return Err(RingError::InvalidCount {
                    requested: n,
                    roster: students.len(),
                });
            }
            n as usize
        }
    };

    let mut shuffled: Vec<&Student> = students.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(take);
    Ok(shuffled)
}
