//! Read-only services over clinic reference data.
//!
//! Doctors, FAQ entries and catalogue services are listed verbatim; each
//! service only translates repository failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ClinicServiceRepository, DoctorDirectoryQuery, DoctorRepository, FaqQuery, FaqRepository,
    ServiceCatalogueQuery,
};
use crate::domain::{ClinicService, Doctor, Error, FaqEntry};

/// Doctor directory implementing [`DoctorDirectoryQuery`].
#[derive(Clone)]
pub struct DoctorDirectoryService<R> {
    doctors: Arc<R>,
}

impl<R> DoctorDirectoryService<R> {
    pub fn new(doctors: Arc<R>) -> Self {
        Self { doctors }
    }
}

#[async_trait]
impl<R> DoctorDirectoryQuery for DoctorDirectoryService<R>
where
    R: DoctorRepository,
{
    async fn available_doctors(&self) -> Result<Vec<Doctor>, Error> {
        self.doctors.list_available().await.map_err(Error::from)
    }
}

/// FAQ listing implementing [`FaqQuery`].
#[derive(Clone)]
pub struct FaqService<R> {
    entries: Arc<R>,
}

impl<R> FaqService<R> {
    pub fn new(entries: Arc<R>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl<R> FaqQuery for FaqService<R>
where
    R: FaqRepository,
{
    async fn list_faq(&self) -> Result<Vec<FaqEntry>, Error> {
        self.entries.list_all().await.map_err(Error::from)
    }
}

/// Service catalogue implementing [`ServiceCatalogueQuery`].
#[derive(Clone)]
pub struct ServiceCatalogueService<R> {
    services: Arc<R>,
}

impl<R> ServiceCatalogueService<R> {
    pub fn new(services: Arc<R>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl<R> ServiceCatalogueQuery for ServiceCatalogueService<R>
where
    R: ClinicServiceRepository,
{
    async fn list_services(&self) -> Result<Vec<ClinicService>, Error> {
        self.services.list_all().await.map_err(Error::from)
    }
}
