//! Timetabling domain models.
//!
//! - [`TimetableDomain`]: the finite domain sets a run draws from
//!   (courses, teachers, rooms, time slots) plus required lecture counts.
//! - [`Assignment`]: one lecture bound to a teacher, a room, and a slot.
//! - [`Chromosome`]: an ordered sequence of assignments, i.e. one
//!   candidate timetable.

mod chromosome;
mod domain;

pub use chromosome::{Assignment, Chromosome};
pub use domain::{CourseId, Room, SlotId, TeacherId, TimetableDomain};
