//! Random population initialization.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::models::{Assignment, Chromosome, TimetableDomain};

/// Creates one random timetable.
///
/// For each course, in domain order, emits `required_lectures(course)`
/// assignments with teacher, room, and slot drawn independently and
/// uniformly. When teachers, rooms, or slots are empty no lecture can be
/// placed and the chromosome is empty.
pub fn random_chromosome<R: Rng>(domain: &TimetableDomain, rng: &mut R) -> Chromosome {
    if !domain.can_assign() {
        return Chromosome::new();
    }

    let mut chromosome = Chromosome::with_capacity(domain.total_lectures());
    for course in &domain.courses {
        for _ in 0..domain.required_lectures(course) {
            if let Some(assignment) = random_assignment(course, domain, rng) {
                chromosome.push(assignment);
            }
        }
    }

    chromosome
}

/// Creates `population_size` independent random timetables.
///
/// Logs one warning per call if the domain has no teachers, rooms, or
/// time slots.
pub fn initialize_population<R: Rng>(
    domain: &TimetableDomain,
    population_size: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    if population_size > 0 && !domain.can_assign() {
        warn!(
            teachers = domain.teachers.len(),
            rooms = domain.rooms.len(),
            time_slots = domain.time_slots.len(),
            "not enough teachers, rooms, or time slots to schedule any lecture"
        );
    }

    (0..population_size)
        .map(|_| random_chromosome(domain, rng))
        .collect()
}

fn random_assignment<R: Rng>(
    course: &str,
    domain: &TimetableDomain,
    rng: &mut R,
) -> Option<Assignment> {
    let teacher = domain.teachers.choose(rng)?;
    let room = domain.rooms.choose(rng)?;
    let slot = domain.time_slots.choose(rng)?;
    Some(Assignment::new(course, teacher.clone(), room.clone(), slot.clone()))
}
