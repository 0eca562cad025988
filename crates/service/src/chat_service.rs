use std::sync::Arc;

use answerdesk_core::constants::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD};
use answerdesk_core::{
    answer_cache_key, history_user_id, AnswerSource, ConversationTurn, EscalationRecord,
};
use answerdesk_llm::{chat_prompt, score_confidence, Generator};
use answerdesk_matcher::{FaqMatch, FaqMatcher};
use answerdesk_storage::Store;
use chrono::Utc;
use uuid::Uuid;

use crate::blocking::blocking;
use crate::history_service::HistoryService;
use crate::ServiceError;

/// Response a chat user sees is never an error; pipeline failures collapse
/// into this apology with `source=error`.
const APOLOGY: &str = "Sorry, I encountered an error processing your request.";

/// Prefix for user-facing escalation responses; the generative draft is
/// surfaced after it.
const ESCALATION_PREFIX: &str = "Escalated to support team. Initial AI response: ";

/// Thresholds for the routing pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RouterConfig {
    /// Minimum similarity for a FAQ candidate to count as a hit.
    pub similarity_threshold: f64,
    /// Generative replies below this confidence are escalated.
    pub confidence_threshold: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

/// Terminal outcome of the chat pipeline, one per request.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub source: AnswerSource,
    pub llm_reply: Option<String>,
    pub faq_used: Option<bool>,
    pub confidence: Option<f64>,
    pub chat_history_id: Option<String>,
}

/// The escalation router: decides whether a query is answered from cached
/// knowledge, answered by the generative backend, or routed to a human.
///
/// Pipeline, terminal on first match:
/// 1. cached answer for (department, query)
/// 2. FAQ match (exact, then TF-IDF similarity above threshold)
/// 3. generative reply, confidence-gated: below threshold escalates,
///    at or above answers verbatim
/// Every user-visible turn is recorded in the history ledger; low-confidence
/// generative drafts land in the escalation queue.
pub struct ChatService {
    store: Arc<Store>,
    generator: Arc<dyn Generator>,
    matcher: FaqMatcher,
    history: Arc<HistoryService>,
    config: RouterConfig,
}

impl ChatService {
    #[must_use]
    pub fn new(
        store: Arc<Store>,
        generator: Arc<dyn Generator>,
        history: Arc<HistoryService>,
        config: RouterConfig,
    ) -> Self {
        Self {
            store,
            generator,
            matcher: FaqMatcher::with_threshold(config.similarity_threshold),
            history,
            config,
        }
    }

    /// Processes one chat message. Infallible from the caller's view:
    /// unexpected failures become an apologetic `source=error` reply with
    /// the underlying error logged, never exposed.
    pub async fn process(&self, message: &str, department: &str, username: &str) -> ChatReply {
        match self.route(message, department, username).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("chat pipeline failed: {e}");
                let user_id = history_user_id(username, department);
                self.history
                    .append_best_effort(&user_id, vec![ConversationTurn::error(APOLOGY)])
                    .await;
                ChatReply {
                    response: APOLOGY.to_owned(),
                    source: AnswerSource::Error,
                    llm_reply: None,
                    faq_used: None,
                    confidence: None,
                    chat_history_id: None,
                }
            },
        }
    }

    async fn route(
        &self,
        message: &str,
        department: &str,
        username: &str,
    ) -> Result<ChatReply, ServiceError> {
        tracing::info!(department, username, "chat request: {message}");

        let history = self.history.get_or_create(username, department).await?;
        let user_id = history.user_id.clone();
        let history_id = history.id;

        // The user turn is recorded unconditionally, before any routing.
        self.history
            .append_best_effort(&user_id, vec![ConversationTurn::user(message)])
            .await;

        if let Some(hit) = self.lookup_faq(message, department).await {
            self.history
                .append_best_effort(&user_id, vec![ConversationTurn::assistant(
                    hit.answer.clone(),
                    AnswerSource::KnowledgeBase,
                    Some(hit.score),
                )])
                .await;
            return Ok(ChatReply {
                response: hit.answer,
                source: AnswerSource::KnowledgeBase,
                llm_reply: None,
                faq_used: Some(true),
                confidence: Some(hit.score),
                chat_history_id: Some(history_id),
            });
        }
        tracing::info!("no FAQ match, proceeding with generative backend");

        let llm_reply = self.generator.generate(&chat_prompt(message, department)).await?;
        let confidence = score_confidence(self.generator.as_ref(), &llm_reply, message).await;
        tracing::info!(confidence, "generative reply scored");

        if confidence < self.config.confidence_threshold {
            tracing::info!(
                confidence,
                threshold = self.config.confidence_threshold,
                "low confidence, escalating"
            );
            let record = EscalationRecord {
                id: Uuid::new_v4().to_string(),
                query: message.to_owned(),
                department: department.to_owned(),
                user_id: Some(user_id.clone()),
                username: Some(username.to_owned()),
                timestamp: Utc::now(),
                llm_reply: llm_reply.clone(),
            };
            let store = Arc::clone(&self.store);
            blocking(move || store.insert_escalation(&record)).await?;

            let response = format!("{ESCALATION_PREFIX}{llm_reply}");
            self.history
                .append_best_effort(&user_id, vec![ConversationTurn::assistant(
                    response.clone(),
                    AnswerSource::Escalated,
                    Some(confidence),
                )])
                .await;
            return Ok(ChatReply {
                response,
                source: AnswerSource::Escalated,
                llm_reply: Some(llm_reply),
                faq_used: Some(false),
                confidence: Some(confidence),
                chat_history_id: Some(history_id),
            });
        }

        self.history
            .append_best_effort(&user_id, vec![ConversationTurn::assistant(
                llm_reply.clone(),
                AnswerSource::Llm,
                Some(confidence),
            )])
            .await;
        Ok(ChatReply {
            response: llm_reply.clone(),
            source: AnswerSource::Llm,
            llm_reply: Some(llm_reply),
            faq_used: Some(false),
            confidence: Some(confidence),
            chat_history_id: Some(history_id),
        })
    }

    /// Cache + knowledge-base lookup. Upstream failures here are logged and
    /// treated as "no match" so the pipeline can fall through to the
    /// generative backend; they never surface to the user.
    async fn lookup_faq(&self, query: &str, department: &str) -> Option<FaqMatch> {
        let cache_key = answer_cache_key(department, query);

        let store = Arc::clone(&self.store);
        let key = cache_key.clone();
        match blocking(move || store.get_cached_answer(&key)).await {
            Ok(Some(cached)) => {
                tracing::debug!(cache_key, "answer cache hit");
                return Some(FaqMatch {
                    answer: cached.answer,
                    score: 1.0,
                    matched_question: query.to_owned(),
                });
            },
            Ok(None) => {},
            Err(e) => tracing::error!("answer cache read failed: {e}"),
        }

        let hit = match self.knowledge_base_match(query, department).await {
            Ok(Some(hit)) => hit,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("FAQ lookup failed: {e}");
                return None;
            },
        };
        tracing::info!(score = hit.score, "FAQ match: {}", hit.matched_question);

        let store = Arc::clone(&self.store);
        let answer = hit.answer.clone();
        if let Err(e) = blocking(move || store.put_cached_answer(&cache_key, &answer)).await {
            tracing::error!("answer cache write failed: {e}");
        }
        Some(hit)
    }

    /// Exact pass first, scanning the whole department; the similarity pass
    /// only sees a capped candidate set.
    async fn knowledge_base_match(
        &self,
        query: &str,
        department: &str,
    ) -> Result<Option<FaqMatch>, ServiceError> {
        let store = Arc::clone(&self.store);
        let dept = department.to_owned();
        let q = query.to_owned();
        if let Some(entry) = blocking(move || store.exact_faq(&dept, &q)).await? {
            return Ok(Some(FaqMatch {
                answer: entry.answer,
                score: 1.0,
                matched_question: entry.question,
            }));
        }

        let store = Arc::clone(&self.store);
        let dept = department.to_owned();
        let candidates = blocking(move || {
            store.department_faqs(&dept, answerdesk_core::constants::MAX_FAQ_CANDIDATES)
        })
        .await?;
        Ok(self.matcher.find_match(query, &candidates))
    }

    /// All escalation records for the human review queue.
    pub async fn list_escalations(&self) -> Result<Vec<EscalationRecord>, ServiceError> {
        let store = Arc::clone(&self.store);
        blocking(move || store.list_escalations()).await
    }
}
