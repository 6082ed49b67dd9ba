//! In-memory clinic database implementing every driven port.
//!
//! Mirrors the PostgreSQL adapters: serial ids from 1, unique emails,
//! left-join semantics for listing names and newest-first ordering with the
//! id as tie-breaker. An appointment's `created_at` is the instant it was
//! booked.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    AppointmentRepository, AppointmentRepositoryError, ClinicServiceRepository,
    ClinicServiceRepositoryError, DoctorRepository, DoctorRepositoryError, FaqRepository,
    FaqRepositoryError, NewUser, UserPersistenceError, UserRepository,
};
use crate::domain::{
    AppointmentDraft, AppointmentId, AppointmentRecord, AppointmentScope, AppointmentStatus,
    AvailableDoctor, BookedAppointment, ClinicService, Doctor, DoctorId, DoctorPicker, FaqEntry,
    PasswordDigest, ServiceId, UserId, UserProfile, booking_lead_time,
};

/// Password stored for users created through [`InMemoryClinic::insert_user`].
pub const DEFAULT_TEST_PASSWORD: &str = "password";

struct StoredUser {
    profile: UserProfile,
    password_digest: PasswordDigest,
}

struct StoredAppointment {
    id: AppointmentId,
    user_id: UserId,
    doctor_id: Option<DoctorId>,
    service_id: Option<ServiceId>,
    symptoms: String,
    status: AppointmentStatus,
    scheduled_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct ClinicState {
    users: Vec<StoredUser>,
    doctors: Vec<Doctor>,
    services: Vec<ClinicService>,
    faq: Vec<FaqEntry>,
    appointments: Vec<StoredAppointment>,
}

impl ClinicState {
    fn next_user_id(&self) -> i32 {
        next_serial(self.users.len())
    }

    fn user(&self, id: UserId) -> Option<&StoredUser> {
        self.users.iter().find(|user| user.profile.id() == id)
    }

    fn doctor(&self, id: Option<DoctorId>) -> Option<&Doctor> {
        id.and_then(|id| self.doctors.iter().find(|doctor| doctor.id == id))
    }

    fn service(&self, id: Option<ServiceId>) -> Option<&ClinicService> {
        id.and_then(|id| self.services.iter().find(|service| service.id == id))
    }

    fn record(&self, stored: &StoredAppointment, with_patient: bool) -> AppointmentRecord {
        let doctor = self.doctor(stored.doctor_id);
        AppointmentRecord {
            id: stored.id,
            symptoms: stored.symptoms.clone(),
            status: stored.status.into(),
            scheduled_date: stored.scheduled_date,
            created_at: stored.created_at,
            patient_name: with_patient
                .then(|| self.user(stored.user_id))
                .flatten()
                .map(|user| user.profile.full_name().to_owned()),
            doctor_name: doctor.map(|d| d.full_name.clone()),
            specialization: doctor.map(|d| d.specialization.clone()),
            service_name: self.service(stored.service_id).map(|s| s.title.clone()),
        }
    }
}

fn next_serial(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}

/// Shared in-memory store. Wrap it in an `Arc` and hand the same instance to
/// every service.
#[derive(Default)]
pub struct InMemoryClinic {
    state: Mutex<ClinicState>,
}

impl InMemoryClinic {
    fn lock(&self) -> MutexGuard<'_, ClinicState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clinic state mutex"),
        }
    }

    /// Insert a patient whose password is [`DEFAULT_TEST_PASSWORD`].
    pub fn insert_user(&self, email: &str, full_name: &str) -> UserId {
        let mut state = self.lock();
        let id = UserId::new(state.next_user_id()).expect("serial ids are positive");
        let profile = UserProfile::try_new(id, email, full_name).expect("valid test profile");
        state.users.push(StoredUser {
            profile,
            password_digest: PasswordDigest::of(DEFAULT_TEST_PASSWORD),
        });
        id
    }

    pub fn insert_doctor(&self, doctor: Doctor) {
        self.lock().doctors.push(doctor);
    }

    pub fn insert_service(&self, service: ClinicService) {
        self.lock().services.push(service);
    }

    pub fn insert_faq(&self, entry: FaqEntry) {
        self.lock().faq.push(entry);
    }

    /// Flip a doctor's availability flag.
    pub fn set_doctor_available(&self, id: DoctorId, available: bool) {
        let mut state = self.lock();
        if let Some(doctor) = state.doctors.iter_mut().find(|d| d.id == id) {
            doctor.available = available;
        }
    }

    pub fn appointment_count(&self) -> usize {
        self.lock().appointments.len()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryClinic {
    async fn create(&self, user: &NewUser) -> Result<UserProfile, UserPersistenceError> {
        let mut state = self.lock();
        if state
            .users
            .iter()
            .any(|stored| stored.profile.email() == user.email)
        {
            return Err(UserPersistenceError::query("unique constraint violated"));
        }
        let id = UserId::new(state.next_user_id())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let profile = UserProfile::try_new(id, user.email.as_str(), user.full_name.as_str())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        state.users.push(StoredUser {
            profile: profile.clone(),
            password_digest: user.password_digest.clone(),
        });
        Ok(profile)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserPersistenceError> {
        let state = self.lock();
        Ok(state
            .users
            .iter()
            .find(|stored| stored.profile.email() == email && &stored.password_digest == digest)
            .map(|stored| stored.profile.clone()))
    }
}

#[async_trait]
impl DoctorRepository for InMemoryClinic {
    async fn list_available(&self) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        let mut doctors: Vec<Doctor> = self
            .lock()
            .doctors
            .iter()
            .filter(|doctor| doctor.available)
            .cloned()
            .collect();
        doctors.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        Ok(doctors)
    }
}

#[async_trait]
impl FaqRepository for InMemoryClinic {
    async fn list_all(&self) -> Result<Vec<FaqEntry>, FaqRepositoryError> {
        let mut entries = self.lock().faq.clone();
        entries.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(&b.id)));
        Ok(entries)
    }
}

#[async_trait]
impl ClinicServiceRepository for InMemoryClinic {
    async fn list_all(&self) -> Result<Vec<ClinicService>, ClinicServiceRepositoryError> {
        let mut services = self.lock().services.clone();
        services.sort_by_key(|service| service.id);
        Ok(services)
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryClinic {
    async fn list(
        &self,
        scope: AppointmentScope,
    ) -> Result<Vec<AppointmentRecord>, AppointmentRepositoryError> {
        let state = self.lock();
        let mut matching: Vec<&StoredAppointment> = state
            .appointments
            .iter()
            .filter(|stored| match scope {
                AppointmentScope::ForUser(user_id) => stored.user_id == user_id,
                AppointmentScope::Recent { .. } => true,
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let (limit, with_patient) = match scope {
            AppointmentScope::ForUser(_) => (usize::MAX, false),
            AppointmentScope::Recent { limit } => (usize::try_from(limit).unwrap_or(0), true),
        };
        Ok(matching
            .into_iter()
            .take(limit)
            .map(|stored| state.record(stored, with_patient))
            .collect())
    }

    async fn book(
        &self,
        draft: AppointmentDraft,
        picker: &dyn DoctorPicker,
    ) -> Result<Option<BookedAppointment>, AppointmentRepositoryError> {
        let mut state = self.lock();
        let mut candidates: Vec<AvailableDoctor> = state
            .doctors
            .iter()
            .filter(|doctor| doctor.available)
            .map(|doctor| AvailableDoctor {
                id: doctor.id,
                full_name: doctor.full_name.clone(),
                specialization: doctor.specialization.clone(),
            })
            .collect();
        candidates.sort_by_key(|doctor| doctor.id);

        let Some(doctor) = picker.pick(&candidates).cloned() else {
            return Ok(None);
        };
        if state.user(draft.user_id).is_none() {
            return Err(AppointmentRepositoryError::query(
                "referenced row does not exist",
            ));
        }

        let id = AppointmentId::new(next_serial(state.appointments.len()));
        state.appointments.push(StoredAppointment {
            id,
            user_id: draft.user_id,
            doctor_id: Some(doctor.id),
            service_id: draft.service_id,
            symptoms: draft.symptoms.clone(),
            status: draft.status,
            scheduled_date: draft.scheduled_date,
            created_at: draft.scheduled_date - booking_lead_time(),
        });

        Ok(Some(BookedAppointment {
            id,
            symptoms: draft.symptoms,
            status: draft.status,
            scheduled_date: draft.scheduled_date,
            doctor,
        }))
    }
}
