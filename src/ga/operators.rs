//! Timetable crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: cut both parents at one index and swap
//!   tails, O(L)
//!
//! # Mutation
//!
//! - [`mutate`]: with probability `rate`, reassign one field (teacher,
//!   room, or slot) of one lecture, O(1)
//!
//! Neither operator changes which courses a timetable contains: crossover
//! only moves whole assignments between positions of equal index, and
//! mutation never touches the course field.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::models::{Chromosome, TimetableDomain};

/// Field of an assignment that mutation rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationField {
    /// Reassign the teacher.
    Teacher,
    /// Reassign the room.
    Room,
    /// Reassign the time slot.
    TimeSlot,
}

impl MutationField {
    const ALL: [MutationField; 3] = [Self::Teacher, Self::Room, Self::TimeSlot];
}

/// Single-point crossover.
///
/// Picks a cut index uniformly in `[0, L)` and returns
/// `(p1[..cut] ++ p2[cut..], p2[..cut] ++ p1[cut..])`.
///
/// When the parents differ in length or are empty, no random draw is made
/// and clones of both parents are returned unchanged.
///
/// # Complexity
/// O(L) time and space
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    if n != parent2.len() || n == 0 {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.random_range(0..n);
    let (head1, tail1) = parent1.assignments().split_at(cut);
    let (head2, tail2) = parent2.assignments().split_at(cut);

    let child1 = head1.iter().chain(tail2).cloned().collect();
    let child2 = head2.iter().chain(tail1).cloned().collect();
    (child1, child2)
}

/// Mutates a chromosome in place with probability `rate`.
///
/// One Bernoulli draw decides whether mutation happens. If it does, one
/// lecture is picked uniformly, then one of teacher / room / slot is picked
/// uniformly and redrawn from the domain. The redraw may land on the
/// current value. An empty chromosome or an empty domain set for the chosen
/// field leaves the chromosome untouched.
///
/// Returns `true` if a field was rewritten.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`; [`GaConfig::validate`](super::GaConfig::validate)
/// rules that out for engine runs.
pub fn mutate<R: Rng>(
    chromosome: &mut Chromosome,
    domain: &TimetableDomain,
    rate: f64,
    rng: &mut R,
) -> bool {
    if !rng.random_bool(rate) || chromosome.is_empty() {
        return false;
    }

    let idx = rng.random_range(0..chromosome.len());
    let field = MutationField::ALL[rng.random_range(0..MutationField::ALL.len())];
    let target = &mut chromosome.assignments_mut()[idx];

    let rewritten = match field {
        MutationField::Teacher => match domain.teachers.choose(rng) {
            Some(teacher) => {
                target.teacher = teacher.clone();
                true
            }
            None => false,
        },
        MutationField::Room => match domain.rooms.choose(rng) {
            Some(room) => {
                target.room = room.clone();
                true
            }
            None => false,
        },
        MutationField::TimeSlot => match domain.time_slots.choose(rng) {
            Some(slot) => {
                target.time_slot = slot.clone();
                true
            }
            None => false,
        },
    };

    trace!(index = idx, ?field, rewritten, "mutation");
    rewritten
}
