//! `DieselClinicServiceRepository` against embedded PostgreSQL.

use clinic_backend::domain::ServiceId;
use clinic_backend::domain::ports::ClinicServiceRepository;
use clinic_backend::outbound::persistence::{DbPool, DieselClinicServiceRepository, PoolConfig};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

#[path = "support/clinic_db.rs"]
mod clinic_db;

use clinic_db::{ClinicDatabase, handle_cluster_setup_failure};

struct TestContext {
    repository: DieselClinicServiceRepository,
    runtime: Runtime,
    database: ClinicDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = ClinicDatabase::provision("service_repo")?;
    let config = PoolConfig::new(database.url()).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;
    Ok(TestContext {
        repository: DieselClinicServiceRepository::new(pool),
        runtime,
        database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn catalogue_is_listed_in_id_order_with_optional_columns(repo_context: Option<TestContext>) {
    let Some(mut context) = repo_context else {
        eprintln!(
            "SKIP-TEST-CLUSTER: catalogue_is_listed_in_id_order_with_optional_columns skipped"
        );
        return;
    };
    let xray = context
        .database
        .seed_service("X-ray", None, None)
        .expect("seed service");
    let consultation = context
        .database
        .seed_service("Consultation", Some("1500"), Some(30))
        .expect("seed service");

    let repository = &context.repository;
    let services = context
        .runtime
        .block_on(async { repository.list_all().await })
        .expect("list services");

    let ids: Vec<ServiceId> = services.iter().map(|service| service.id).collect();
    assert_eq!(ids, vec![ServiceId::new(xray), ServiceId::new(consultation)]);
    assert_eq!(services[0].price, None);
    assert_eq!(services[0].duration_minutes, None);
    assert_eq!(services[1].title, "Consultation");
    assert_eq!(services[1].price.as_deref(), Some("1500"));
    assert_eq!(services[1].duration_minutes, Some(30));
}
