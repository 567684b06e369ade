//! Domain sets consumed by the engine.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Course identifier (e.g. `"Math"`).
pub type CourseId = String;

/// Teacher identifier (e.g. `"Dr. Alpha"`).
pub type TeacherId = String;

/// Time slot identifier (e.g. `"Mon 9-10"`).
pub type SlotId = String;

/// A room lectures can be placed in.
///
/// Two rooms are the same physical room when their names match; room
/// conflicts are detected by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Room name, unique within a domain.
    pub name: String,
    /// Seat count. `None` means the capacity is unknown.
    pub capacity: Option<u32>,
}

impl Room {
    /// Creates a room with a known capacity.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity: Some(capacity),
        }
    }

    /// Creates a room whose capacity is unknown.
    pub fn without_capacity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: None,
        }
    }
}

/// The finite domain sets a timetable is built from.
///
/// Treated as immutable for the duration of a run. Course order matters:
/// the initializer emits lectures course by course in this order.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Room, TimetableDomain};
///
/// let domain = TimetableDomain::new()
///     .with_courses(["Math", "Physics"])
///     .with_teachers(["Dr. Alpha"])
///     .with_rooms([Room::new("Room101", 30)])
///     .with_time_slots(["Mon 9-10", "Mon 10-11"])
///     .with_lectures("Math", 2);
///
/// assert_eq!(domain.required_lectures("Math"), 2);
/// assert_eq!(domain.required_lectures("Physics"), 1);
/// assert_eq!(domain.total_lectures(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimetableDomain {
    /// Courses to schedule.
    pub courses: Vec<CourseId>,
    /// Teachers available for any lecture.
    pub teachers: Vec<TeacherId>,
    /// Rooms available for any lecture.
    pub rooms: Vec<Room>,
    /// Time slots available for any lecture.
    pub time_slots: Vec<SlotId>,
    /// Required lectures per course. Courses absent here need one lecture.
    pub lectures_per_course: HashMap<CourseId, usize>,
}

impl TimetableDomain {
    /// Lecture count assumed for a course missing from `lectures_per_course`.
    pub const DEFAULT_LECTURES: usize = 1;

    /// Creates an empty domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the courses.
    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseId>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the teachers.
    pub fn with_teachers<I, S>(mut self, teachers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TeacherId>,
    {
        self.teachers = teachers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the rooms.
    pub fn with_rooms<I>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = Room>,
    {
        self.rooms = rooms.into_iter().collect();
        self
    }

    /// Sets the time slots.
    pub fn with_time_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SlotId>,
    {
        self.time_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the required lecture count for one course.
    pub fn with_lectures(mut self, course: impl Into<CourseId>, count: usize) -> Self {
        self.lectures_per_course.insert(course.into(), count);
        self
    }

    /// Required lectures for `course`, defaulting to
    /// [`DEFAULT_LECTURES`](Self::DEFAULT_LECTURES).
    pub fn required_lectures(&self, course: &str) -> usize {
        self.lectures_per_course
            .get(course)
            .copied()
            .unwrap_or(Self::DEFAULT_LECTURES)
    }

    /// Sum of required lectures over all courses.
    ///
    /// This is the length of every chromosome the initializer builds when
    /// no domain set is empty.
    pub fn total_lectures(&self) -> usize {
        self.courses
            .iter()
            .map(|c| self.required_lectures(c))
            .sum()
    }

    /// Whether `course` is one of the domain's courses.
    pub fn has_course(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    /// Whether teachers, rooms, and time slots are all non-empty, so every
    /// lecture can be assigned.
    pub fn can_assign(&self) -> bool {
        !self.teachers.is_empty() && !self.rooms.is_empty() && !self.time_slots.is_empty()
    }
}
