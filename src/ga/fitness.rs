//! Constraint-based fitness evaluation.
//!
//! A timetable starts from a base score (1000) and loses points for every
//! violated constraint. The score is floored at zero; **higher is better**.
//!
//! # Constraints
//!
//! | Constraint | Scope | Penalty |
//! |---|---|---|
//! | Lecture count deviation | per course, per missing/extra lecture | heavy |
//! | Unknown course | per assignment | heavy |
//! | Missing room capacity | per assignment | light |
//! | Room smaller than class size | per assignment | medium |
//! | Teacher double-booked in a slot | per pair | heavy |
//! | Room double-booked in a slot | per pair | heavy |
//! | Course twice in one slot | per pair | medium |
//!
//! Pairwise checks compare every unordered pair, so evaluation is
//! O(L²) in the number of lectures L (not in population size).
//!
//! A course with no entry in `lectures_per_course` is required once, the
//! same count [`random_chromosome`](super::initializer::random_chromosome)
//! generates, rather than zero times: scheduling it once is not penalized.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::{Chromosome, TimetableDomain};

/// Fitness of a timetable. Higher is better; never negative.
pub type FitnessScore = u32;

/// Penalty magnitudes, by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PenaltyWeights {
    /// Hard violations: clashes and lecture-count deviation (default 100).
    pub heavy: u32,
    /// Undersized rooms and course double-booking (default 50).
    pub medium: u32,
    /// Missing capacity data (default 10).
    pub light: u32,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            heavy: 100,
            medium: 50,
            light: 10,
        }
    }
}

/// Scoring parameters.
///
/// ```
/// use u_timetable::ga::{FitnessConfig, PenaltyWeights};
///
/// let config = FitnessConfig::default()
///     .with_class_size(30)
///     .with_weights(PenaltyWeights { heavy: 200, medium: 50, light: 5 });
/// assert_eq!(config.base_score, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitnessConfig {
    /// Score of a timetable with no violations.
    pub base_score: u32,
    /// Assumed enrollment of every course. Rooms with fewer seats are
    /// penalized.
    pub class_size: u32,
    /// Penalty magnitudes.
    pub weights: PenaltyWeights,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            base_score: 1000,
            class_size: 25,
            weights: PenaltyWeights::default(),
        }
    }
}

impl FitnessConfig {
    /// Sets the base score.
    pub fn with_base_score(mut self, score: u32) -> Self {
        self.base_score = score;
        self
    }

    /// Sets the assumed class size.
    pub fn with_class_size(mut self, size: u32) -> Self {
        self.class_size = size;
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Violation counts found while scoring one timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitnessReport {
    /// Final score, `max(0, base_score - total_penalty)`.
    pub score: FitnessScore,
    /// Sum of all penalties before flooring.
    pub total_penalty: u64,
    /// Sum over courses of `|required - scheduled|`.
    pub lecture_count_deviation: usize,
    /// Assignments whose course is not in the domain.
    pub unknown_courses: usize,
    /// Assignments whose room has no capacity data.
    pub missing_capacity: usize,
    /// Assignments whose room is smaller than the class size.
    pub undersized_rooms: usize,
    /// Pairs with the same teacher in the same slot.
    pub teacher_conflicts: usize,
    /// Pairs with the same room in the same slot.
    pub room_conflicts: usize,
    /// Pairs with the same course in the same slot.
    pub course_slot_conflicts: usize,
}

impl FitnessReport {
    /// Whether no constraint was violated.
    pub fn is_feasible(&self) -> bool {
        self.total_penalty == 0
    }

    /// Number of clashing pairs of any kind.
    pub fn clashes(&self) -> usize {
        self.teacher_conflicts + self.room_conflicts + self.course_slot_conflicts
    }
}

/// Scores chromosomes against a [`FitnessConfig`].
///
/// Evaluation is pure: the same chromosome and domain always produce the
/// same score, and nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessEvaluator {
    config: FitnessConfig,
}

impl FitnessEvaluator {
    /// Creates an evaluator.
    pub fn new(config: FitnessConfig) -> Self {
        Self { config }
    }

    /// The scoring parameters.
    pub fn config(&self) -> &FitnessConfig {
        &self.config
    }

    /// Scores a chromosome.
    pub fn evaluate(&self, chromosome: &Chromosome, domain: &TimetableDomain) -> FitnessScore {
        self.report(chromosome, domain).score
    }

    /// Scores a chromosome and reports every violation found.
    pub fn report(&self, chromosome: &Chromosome, domain: &TimetableDomain) -> FitnessReport {
        let w = self.config.weights;
        let mut report = FitnessReport::default();

        // Lecture counts
        let mut scheduled: HashMap<&str, usize> = domain
            .courses
            .iter()
            .map(|c| (c.as_str(), 0))
            .collect();
        for assignment in chromosome {
            match scheduled.get_mut(assignment.course.as_str()) {
                Some(count) => *count += 1,
                None => report.unknown_courses += 1,
            }
        }
        for course in &domain.courses {
            let required = domain.required_lectures(course);
            let actual = scheduled.get(course.as_str()).copied().unwrap_or(0);
            report.lecture_count_deviation += required.abs_diff(actual);
        }

        // Room capacity
        for assignment in chromosome {
            match assignment.room.capacity {
                None => report.missing_capacity += 1,
                Some(seats) if seats < self.config.class_size => report.undersized_rooms += 1,
                Some(_) => {}
            }
        }

        // Pairwise clashes
        let lectures = chromosome.assignments();
        for (i, a) in lectures.iter().enumerate() {
            for b in &lectures[i + 1..] {
                if !a.same_slot(b) {
                    continue;
                }
                if a.teacher == b.teacher {
                    report.teacher_conflicts += 1;
                }
                if a.room.name == b.room.name {
                    report.room_conflicts += 1;
                }
                if a.course == b.course {
                    report.course_slot_conflicts += 1;
                }
            }
        }

        let heavy = u64::from(w.heavy);
        let medium = u64::from(w.medium);
        let light = u64::from(w.light);
        report.total_penalty = heavy * report.lecture_count_deviation as u64
            + heavy * report.unknown_courses as u64
            + light * report.missing_capacity as u64
            + medium * report.undersized_rooms as u64
            + heavy * report.teacher_conflicts as u64
            + heavy * report.room_conflicts as u64
            + medium * report.course_slot_conflicts as u64;

        report.score = u64::from(self.config.base_score)
            .saturating_sub(report.total_penalty) as FitnessScore;
        report
    }
}

/// Scores a chromosome with the default [`FitnessConfig`].
pub fn evaluate(chromosome: &Chromosome, domain: &TimetableDomain) -> FitnessScore {
    FitnessEvaluator::default().evaluate(chromosome, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Room};
    use proptest::prelude::*;

    fn domain() -> TimetableDomain {
        TimetableDomain::new()
            .with_courses(["Math", "Physics", "History"])
            .with_teachers(["Dr. Alpha", "Prof. Beta"])
            .with_rooms([Room::new("Room101", 30), Room::new("Room102", 25)])
            .with_time_slots(["Mon 9-10", "Mon 10-11", "Tue 9-10"])
            .with_lectures("Math", 2)
            .with_lectures("Physics", 1)
            .with_lectures("History", 1)
    }

    fn room101() -> Room {
        Room::new("Room101", 30)
    }

    fn room102() -> Room {
        Room::new("Room102", 25)
    }

    /// Conflict-free timetable for [`domain`].
    fn good_timetable() -> Chromosome {
        vec![
            Assignment::new("Math", "Dr. Alpha", room101(), "Mon 9-10"),
            Assignment::new("Math", "Dr. Alpha", room101(), "Mon 10-11"),
            Assignment::new("Physics", "Prof. Beta", room102(), "Mon 9-10"),
            Assignment::new("History", "Prof. Beta", room102(), "Tue 9-10"),
        ]
        .into()
    }

    #[test]
    fn test_conflict_free_scores_base() {
        let report = FitnessEvaluator::default().report(&good_timetable(), &domain());
        assert!(report.is_feasible(), "unexpected violations: {report:?}");
        assert_eq!(report.score, 1000);
        assert!(evaluate(&good_timetable(), &domain()) >= 900);
    }

    #[test]
    fn test_teacher_conflict_costs_heavy() {
        let mut t = good_timetable();
        // Physics moves to Dr. Alpha, who already teaches Math at Mon 9-10
        t.assignments_mut()[2].teacher = "Dr. Alpha".into();

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.teacher_conflicts, 1);
        assert_eq!(report.clashes(), 1);
        assert_eq!(report.score, 900);
    }

    #[test]
    fn test_room_conflict_costs_heavy() {
        let mut t = good_timetable();
        t.assignments_mut()[2].room = room101();

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.room_conflicts, 1);
        assert_eq!(report.score, 900);
    }

    #[test]
    fn test_course_slot_conflict_costs_medium() {
        let mut t = good_timetable();
        // Second Math lecture lands in the first one's slot, with another
        // teacher and room so only the course clash fires
        let second = &mut t.assignments_mut()[1];
        second.time_slot = "Mon 9-10".into();
        second.teacher = "Prof. Beta".into();
        second.room = room102();
        t.assignments_mut()[2].time_slot = "Mon 10-11".into();

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.course_slot_conflicts, 1);
        assert_eq!(report.teacher_conflicts, 0);
        assert_eq!(report.room_conflicts, 0);
        assert_eq!(report.score, 950);
    }

    #[test]
    fn test_course_without_lecture_count_requires_one() {
        let d = domain().with_courses(["Math", "Physics", "History", "Art"]);
        let mut assignments = good_timetable().into_assignments();
        assignments.push(Assignment::new("Art", "Dr. Alpha", room101(), "Tue 9-10"));
        let scheduled_once = Chromosome::from(assignments);

        let report = FitnessEvaluator::default().report(&scheduled_once, &d);
        assert_eq!(report.lecture_count_deviation, 0);
        assert_eq!(report.score, 1000);

        let report = FitnessEvaluator::default().report(&good_timetable(), &d);
        assert_eq!(report.lecture_count_deviation, 1);
        assert_eq!(report.score, 900);
    }

    #[test]
    fn test_missing_and_extra_lectures() {
        let mut assignments = good_timetable().into_assignments();
        assignments.remove(3); // History missing
        assignments.push(Assignment::new("Physics", "Prof. Beta", room102(), "Tue 9-10")); // Physics extra
        let t = Chromosome::from(assignments);

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.lecture_count_deviation, 2);
        assert_eq!(report.score, 800);
    }

    #[test]
    fn test_unknown_course_penalized_once() {
        let mut assignments = good_timetable().into_assignments();
        assignments.push(Assignment::new("Chemistry", "Prof. Beta", room101(), "Tue 9-10"));
        let t = Chromosome::from(assignments);

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.unknown_courses, 1);
        assert_eq!(report.lecture_count_deviation, 0);
        // Also a teacher clash with History at Tue 9-10
        assert_eq!(report.teacher_conflicts, 1);
        assert_eq!(report.score, 800);
    }

    #[test]
    fn test_capacity_penalties() {
        let mut t = good_timetable();
        t.assignments_mut()[0].room = Room::new("Room101", 24);
        t.assignments_mut()[1].room = Room::without_capacity("Room101");

        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.undersized_rooms, 1);
        assert_eq!(report.missing_capacity, 1);
        assert_eq!(report.score, 1000 - 50 - 10);
    }

    #[test]
    fn test_capacity_equal_to_class_size_is_fine() {
        let report = FitnessEvaluator::default().report(&good_timetable(), &domain());
        assert_eq!(report.undersized_rooms, 0);
    }

    #[test]
    fn test_score_floors_at_zero() {
        // Everything in one slot with one teacher and one room
        let t: Chromosome = (0..10)
            .map(|_| Assignment::new("Math", "Dr. Alpha", room101(), "Mon 9-10"))
            .collect();
        let report = FitnessEvaluator::default().report(&t, &domain());
        assert_eq!(report.score, 0);
        assert!(report.total_penalty > 1000);
    }

    #[test]
    fn test_empty_chromosome_penalized_for_missing_lectures() {
        assert_eq!(evaluate(&Chromosome::new(), &domain()), 600);
    }

    #[test]
    fn test_custom_weights() {
        let mut t = good_timetable();
        t.assignments_mut()[2].teacher = "Dr. Alpha".into();

        let evaluator = FitnessEvaluator::new(FitnessConfig::default().with_weights(
            PenaltyWeights {
                heavy: 7,
                medium: 3,
                light: 1,
            },
        ));
        assert_eq!(evaluator.evaluate(&t, &domain()), 993);
    }

    #[test]
    fn test_custom_class_size() {
        let evaluator = FitnessEvaluator::new(FitnessConfig::default().with_class_size(28));
        // Physics and History sit in the 25-seat room
        assert_eq!(evaluator.evaluate(&good_timetable(), &domain()), 900);
    }

    fn arb_chromosome() -> impl Strategy<Value = Chromosome> {
        let course = prop::sample::select(vec!["Math", "Physics", "History", "Art"]);
        let teacher = prop::sample::select(vec!["Dr. Alpha", "Prof. Beta"]);
        let room = prop::sample::select(vec![room101(), room102(), Room::without_capacity("Lab")]);
        let slot = prop::sample::select(vec!["Mon 9-10", "Mon 10-11", "Tue 9-10"]);
        prop::collection::vec((course, teacher, room, slot), 0..12).prop_map(|genes| {
            genes
                .into_iter()
                .map(|(c, t, r, s)| Assignment::new(c, t, r, s))
                .collect::<Chromosome>()
        })
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_deterministic(t in arb_chromosome()) {
            let d = domain();
            prop_assert_eq!(evaluate(&t, &d), evaluate(&t, &d));
        }

        #[test]
        fn prop_score_never_exceeds_base(t in arb_chromosome()) {
            prop_assert!(evaluate(&t, &domain()) <= 1000);
        }

        #[test]
        fn prop_score_matches_penalty(t in arb_chromosome()) {
            let r = FitnessEvaluator::default().report(&t, &domain());
            prop_assert_eq!(u64::from(r.score), 1000u64.saturating_sub(r.total_penalty));
        }
    }
}
