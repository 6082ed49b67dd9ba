//! Automatic doctor assignment for new appointments.
//!
//! Assignment ignores the requested service and the symptoms: any available
//! doctor is an equally valid candidate. The picker is a trait so tests can
//! pin the choice while production draws uniformly at random.

use rand::seq::SliceRandom;

use super::AvailableDoctor;

/// Chooses which available doctor receives an appointment.
pub trait DoctorPicker: Send + Sync {
    /// Return one of `candidates`, or `None` when the slice is empty.
    fn pick<'a>(&self, candidates: &'a [AvailableDoctor]) -> Option<&'a AvailableDoctor>;
}

/// Picks uniformly at random using the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformDoctorPicker;

impl DoctorPicker for UniformDoctorPicker {
    fn pick<'a>(&self, candidates: &'a [AvailableDoctor]) -> Option<&'a AvailableDoctor> {
        candidates.choose(&mut rand::thread_rng())
    }
}

/// Always picks the first candidate. Useful for deterministic wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstDoctorPicker;

impl DoctorPicker for FirstDoctorPicker {
    fn pick<'a>(&self, candidates: &'a [AvailableDoctor]) -> Option<&'a AvailableDoctor> {
        candidates.first()
    }
}
