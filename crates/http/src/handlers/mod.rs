pub mod chat;
pub mod diagnostic;
pub mod escalations;
pub mod faqs;
pub mod history;
