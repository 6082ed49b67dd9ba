//! `DieselFaqRepository` against embedded PostgreSQL.

use clinic_backend::domain::ports::FaqRepository;
use clinic_backend::outbound::persistence::{DbPool, DieselFaqRepository, PoolConfig};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

#[path = "support/clinic_db.rs"]
mod clinic_db;

use clinic_db::{ClinicDatabase, handle_cluster_setup_failure};

struct TestContext {
    repository: DieselFaqRepository,
    runtime: Runtime,
    database: ClinicDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = ClinicDatabase::provision("faq_repo")?;
    let config = PoolConfig::new(database.url()).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;
    Ok(TestContext {
        repository: DieselFaqRepository::new(pool),
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
fn entries_are_grouped_by_category_then_insertion(repo_context: Option<TestContext>) {
    let Some(mut context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: entries_are_grouped_by_category_then_insertion skipped");
        return;
    };
    let db = &mut context.database;
    let pay_first = db.seed_faq("payments", "Do you take cards?").expect("seed faq");
    let book_first = db.seed_faq("booking", "How do I book?").expect("seed faq");
    let pay_second = db.seed_faq("payments", "Can I get a receipt?").expect("seed faq");
    let book_second = db.seed_faq("booking", "Can I cancel?").expect("seed faq");

    let repository = &context.repository;
    let entries = context
        .runtime
        .block_on(async { repository.list_all().await })
        .expect("list faq");

    let ids: Vec<i32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![book_first, book_second, pay_first, pay_second]);
    assert_eq!(entries[0].category, "booking");
    assert_eq!(entries[0].question, "How do I book?");
    assert_eq!(entries[0].answer, "Answer to How do I book?");
}

#[rstest]
fn empty_table_lists_nothing(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: empty_table_lists_nothing skipped");
        return;
    };

    let repository = &context.repository;
    let entries = context
        .runtime
        .block_on(async { repository.list_all().await })
        .expect("list faq");

    assert!(entries.is_empty());
}
