use std::sync::Arc;

use answerdesk_core::constants::DIAGNOSTIC_SAMPLE_LIMIT;
use answerdesk_core::{FaqEntry, FaqInput};
use answerdesk_storage::Store;
use serde::Serialize;

use crate::blocking::blocking;
use crate::ServiceError;

/// Health probe payload for the FAQ collection.
#[derive(Debug, Clone, Serialize)]
pub struct FaqDiagnostics {
    pub status: &'static str,
    pub db_connected: bool,
    pub total_faqs: usize,
    pub samples: Vec<FaqEntry>,
}

/// CRUD over the FAQ knowledge base.
///
/// Cache invalidation is not visible here: the store clears the answer
/// cache inside the same transaction as every create/delete, so no stale
/// entry can be observed after a mutation returns.
pub struct FaqService {
    store: Arc<Store>,
}

impl FaqService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Creates a FAQ entry with the next auto-increment id.
    pub async fn create_faq(&self, input: FaqInput) -> Result<FaqEntry, ServiceError> {
        if input.question.trim().is_empty() {
            return Err(ServiceError::InvalidInput("question must not be empty".to_owned()));
        }
        if input.department.trim().is_empty() {
            return Err(ServiceError::InvalidInput("department must not be empty".to_owned()));
        }
        let store = Arc::clone(&self.store);
        blocking(move || store.insert_faq(&input)).await
    }

    /// All FAQ entries ordered by id.
    pub async fn list_faqs(&self) -> Result<Vec<FaqEntry>, ServiceError> {
        let store = Arc::clone(&self.store);
        blocking(move || store.list_faqs()).await
    }

    /// Deletes a FAQ by id; `NotFound` if the id does not exist.
    pub async fn delete_faq(&self, id: i64) -> Result<(), ServiceError> {
        let store = Arc::clone(&self.store);
        blocking(move || store.delete_faq(id)).await
    }

    /// Connection check plus count and samples for the diagnostic endpoint.
    pub async fn diagnostics(&self) -> Result<FaqDiagnostics, ServiceError> {
        let store = Arc::clone(&self.store);
        blocking(move || {
            store.ping()?;
            let total_faqs = store.count_faqs()?;
            let samples = store.sample_faqs(DIAGNOSTIC_SAMPLE_LIMIT)?;
            Ok(FaqDiagnostics { status: "success", db_connected: true, total_faqs, samples })
        })
        .await
    }

    /// Seeds a handful of sample FAQs on first startup against an empty
    /// store. No-op otherwise.
    pub async fn seed_if_empty(&self) -> Result<usize, ServiceError> {
        let store = Arc::clone(&self.store);
        blocking(move || {
            if store.count_faqs()? > 0 {
                return Ok(0);
            }
            let samples = sample_faqs();
            let count = samples.len();
            for input in samples {
                store.insert_faq(&input)?;
            }
            tracing::info!(count, "seeded sample FAQs into empty store");
            Ok(count)
        })
        .await
    }
}

fn sample_faqs() -> Vec<FaqInput> {
    vec![
        FaqInput {
            question: "How do I request vacation time?".to_owned(),
            answer: "Login to the HR portal and navigate to 'Time Off Request'. Fill out the \
                     form with your desired dates and submit for approval."
                .to_owned(),
            department: "HR".to_owned(),
            tags: vec!["vacation".to_owned(), "time off".to_owned()],
        },
        FaqInput {
            question: "How does IDMS handle Input Tax Credit (ITC)?".to_owned(),
            answer: "IDMS maintains a ledger of ITC claims and reconciles them with GSTR-2A \
                     data to ensure accurate tax credits."
                .to_owned(),
            department: "Finance".to_owned(),
            tags: vec!["ITC".to_owned(), "Tax Credits".to_owned(), "Reconciliation".to_owned()],
        },
        FaqInput {
            question: "What are our current sales targets?".to_owned(),
            answer: "Current quarterly sales targets are $1.2M for domestic and $800K for \
                     international markets. Check the Sales Dashboard for your personal targets."
                .to_owned(),
            department: "Sales".to_owned(),
            tags: vec!["targets".to_owned(), "quotas".to_owned(), "goals".to_owned()],
        },
    ]
}
