//! Service catalogue entries offered by the clinic.

use super::ServiceId;

/// A bookable service. Prices are stored as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicService {
    pub id: ServiceId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration_minutes: Option<i32>,
}
