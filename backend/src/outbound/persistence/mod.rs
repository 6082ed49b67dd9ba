//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! `diesel-async` over a `bb8` pool.
//!
//! - Row structs (`models.rs`) and table declarations (`schema.rs`) stay
//!   private to this module.
//! - Every repository method checks out exactly one connection.
//! - Database failures map to the port's `Connection` or `Query` error.
//!
//! ```ignore
//! use clinic_backend::outbound::persistence::{DbPool, DieselDoctorRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/clinic")).await?;
//! let doctors = DieselDoctorRepository::new(pool);
//! ```

mod diesel_appointment_repository;
mod diesel_basic_error_mapping;
mod diesel_clinic_service_repository;
mod diesel_doctor_repository;
mod diesel_faq_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_appointment_repository::DieselAppointmentRepository;
pub use diesel_clinic_service_repository::DieselClinicServiceRepository;
pub use diesel_doctor_repository::DieselDoctorRepository;
pub use diesel_faq_repository::DieselFaqRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
