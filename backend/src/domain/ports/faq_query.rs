//! Driving port for FAQ retrieval.

use async_trait::async_trait;

use crate::domain::{Error, FaqEntry};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqQuery: Send + Sync {
    async fn list_faq(&self) -> Result<Vec<FaqEntry>, Error>;
}
