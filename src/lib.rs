//! Course timetabling with a generational genetic algorithm.
//!
//! Assigns a teacher, a room, and a time slot to every required lecture of
//! every course, scoring candidate timetables against hard constraints
//! (teacher, room, and course clashes; lecture counts) and soft ones (room
//! capacity). The search is heuristic: it returns the best timetable seen,
//! which is not guaranteed to be optimal or even conflict-free.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimetableDomain`, `Room`, `Assignment`,
//!   `Chromosome`
//! - **`ga`**: The evolutionary engine: initialization, fitness, tournament
//!   selection, crossover, mutation, and the generational runner
//! - **`validation`**: Input integrity checks for hosts to run before the
//!   engine
//! - **`random`**: Seedable RNG construction for reproducible runs
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::models::{Room, TimetableDomain};
//!
//! let domain = TimetableDomain::new()
//!     .with_courses(["Math", "Physics", "History"])
//!     .with_teachers(["Dr. Alpha", "Prof. Beta"])
//!     .with_rooms([Room::new("Room101", 30), Room::new("Room102", 25)])
//!     .with_time_slots(["Mon 9-10", "Mon 10-11", "Tue 9-10"])
//!     .with_lectures("Math", 2);
//!
//! u_timetable::validation::validate_domain(&domain).unwrap();
//!
//! let config = GaConfig::default().with_seed(7);
//! let timetable = u_timetable::run(&domain, &config).unwrap();
//! assert_eq!(timetable.map(|t| t.len()), Some(4));
//! ```

pub mod error;
pub mod ga;
pub mod models;
pub mod random;
pub mod validation;

pub use error::{TimetableError, TimetableResult};

use ga::{GaConfig, GaRunner};
use models::{Chromosome, TimetableDomain};

/// Runs the GA and returns the best timetable found.
///
/// `Ok(None)` means no timetable was produced (zero generations or an
/// empty population). Use [`GaRunner`] directly for the termination reason,
/// fitness history, progress reporting, or cancellation.
///
/// # Errors
/// [`TimetableError::InvalidConfig`] if `config` fails validation.
pub fn run(domain: &TimetableDomain, config: &GaConfig) -> TimetableResult<Option<Chromosome>> {
    GaRunner::run(domain, config).map(|result| result.into_best())
}
