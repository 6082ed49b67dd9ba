//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_repository;
mod appointments_command;
mod appointments_query;
mod auth_command;
mod clinic_service_repository;
mod doctor_directory_query;
mod doctor_repository;
mod faq_query;
mod faq_repository;
mod service_catalogue_query;
mod user_repository;

pub use appointment_repository::{AppointmentRepository, AppointmentRepositoryError};
#[cfg(test)]
pub use appointments_command::MockAppointmentsCommand;
pub use appointments_command::AppointmentsCommand;
#[cfg(test)]
pub use appointments_query::MockAppointmentsQuery;
pub use appointments_query::AppointmentsQuery;
#[cfg(test)]
pub use auth_command::MockAuthCommand;
pub use auth_command::{AuthCommand, AuthSession};
#[cfg(test)]
pub use clinic_service_repository::MockClinicServiceRepository;
pub use clinic_service_repository::{ClinicServiceRepository, ClinicServiceRepositoryError};
#[cfg(test)]
pub use doctor_directory_query::MockDoctorDirectoryQuery;
pub use doctor_directory_query::DoctorDirectoryQuery;
#[cfg(test)]
pub use doctor_repository::MockDoctorRepository;
pub use doctor_repository::{DoctorRepository, DoctorRepositoryError};
#[cfg(test)]
pub use faq_query::MockFaqQuery;
pub use faq_query::FaqQuery;
#[cfg(test)]
pub use faq_repository::MockFaqRepository;
pub use faq_repository::{FaqRepository, FaqRepositoryError};
#[cfg(test)]
pub use service_catalogue_query::MockServiceCatalogueQuery;
pub use service_catalogue_query::ServiceCatalogueQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{NewUser, UserPersistenceError, UserRepository};

#[cfg(test)]
mod tests;
