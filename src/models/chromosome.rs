//! Assignment and chromosome encoding.
//!
//! A chromosome is a direct encoding of a timetable: gene `i` is the
//! `i`-th lecture, carrying its course, teacher, room, and time slot.
//! Every field is an owned value, so `Clone` is a deep copy and a clone
//! never shares data with its source.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::domain::{CourseId, Room, SlotId, TeacherId};

/// One lecture bound to a teacher, a room, and a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// Course this lecture belongs to. Never changed by mutation.
    pub course: CourseId,
    /// Teacher giving the lecture.
    pub teacher: TeacherId,
    /// Room hosting the lecture.
    pub room: Room,
    /// Time slot of the lecture.
    pub time_slot: SlotId,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        course: impl Into<CourseId>,
        teacher: impl Into<TeacherId>,
        room: Room,
        time_slot: impl Into<SlotId>,
    ) -> Self {
        Self {
            course: course.into(),
            teacher: teacher.into(),
            room,
            time_slot: time_slot.into(),
        }
    }

    /// Whether both lectures share a time slot.
    pub fn same_slot(&self, other: &Self) -> bool {
        self.time_slot == other.time_slot
    }

    /// Same teacher in the same slot.
    pub fn teacher_clash(&self, other: &Self) -> bool {
        self.same_slot(other) && self.teacher == other.teacher
    }

    /// Same room (by name) in the same slot.
    pub fn room_clash(&self, other: &Self) -> bool {
        self.same_slot(other) && self.room.name == other.room.name
    }

    /// Same course twice in the same slot.
    pub fn course_clash(&self, other: &Self) -> bool {
        self.same_slot(other) && self.course == other.course
    }
}

/// A candidate timetable: an ordered sequence of assignments.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Assignment, Chromosome, Room};
///
/// let mut timetable = Chromosome::new();
/// timetable.push(Assignment::new("Math", "Dr. Alpha", Room::new("Room101", 30), "Mon 9-10"));
/// assert_eq!(timetable.len(), 1);
///
/// let copy = timetable.clone();
/// timetable.assignments_mut()[0].teacher = "Prof. Beta".into();
/// assert_eq!(copy.assignments()[0].teacher, "Dr. Alpha");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chromosome {
    assignments: Vec<Assignment>,
}

impl Chromosome {
    /// Creates an empty chromosome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chromosome with room for `capacity` assignments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(capacity),
        }
    }

    /// Number of assignments (lectures).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the chromosome holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// The assignments in order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Mutable access to the assignments. The length cannot change through
    /// a slice.
    pub fn assignments_mut(&mut self) -> &mut [Assignment] {
        &mut self.assignments
    }

    /// Iterates over the assignments.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Number of assignments of `course`.
    pub fn lectures_of(&self, course: &str) -> usize {
        self.assignments.iter().filter(|a| a.course == course).count()
    }

    /// Consumes the chromosome, returning its assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}

impl From<Vec<Assignment>> for Chromosome {
    fn from(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }
}

impl FromIterator<Assignment> for Chromosome {
    fn from_iter<T: IntoIterator<Item = Assignment>>(iter: T) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
