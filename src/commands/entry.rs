//! Entry Submission
//!
//! Where a submitted feeding draft goes. No persistence target exists yet,
//! so the only sink writes the draft to the diagnostic log.

use crate::models::FeedingDraft;

/// Destination for submitted feeding entries
pub trait EntrySink {
    fn submit(&self, draft: &FeedingDraft);
}

/// Logs each submitted draft
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// JSON line written to the log for a draft
    pub fn describe(draft: &FeedingDraft) -> String {
        serde_json::to_string(draft).unwrap_or_else(|e| format!("<unserializable draft: {}>", e))
    }
}

impl EntrySink for LogSink {
    fn submit(&self, draft: &FeedingDraft) {
        log::info!("[ENTRY] {}", Self::describe(draft));
        log_structured(draft);
    }
}

/// Structured copy so the fields can be expanded in devtools
#[cfg(target_arch = "wasm32")]
fn log_structured(draft: &FeedingDraft) {
    if let Ok(value) = serde_wasm_bindgen::to_value(draft) {
        web_sys::console::log_2(&wasm_bindgen::JsValue::from_str("[ENTRY] draft"), &value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn log_structured(_draft: &FeedingDraft) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        submitted: RefCell<Vec<FeedingDraft>>,
    }

    impl EntrySink for RecordingSink {
        fn submit(&self, draft: &FeedingDraft) {
            self.submitted.borrow_mut().push(draft.clone());
        }
    }

    #[test]
    fn test_describe_incomplete_draft() {
        let line = LogSink::describe(&FeedingDraft::new("2024-03-01"));
        assert_eq!(line, r#"{"date":"2024-03-01","time":"","amount":"","note":""}"#);
    }

    #[test]
    fn test_describe_complete_draft() {
        let draft = FeedingDraft {
            date: "2024-03-01".to_string(),
            time: "21:30".to_string(),
            amount: Amount::Ml(110),
            note: "".to_string(),
        };
        assert_eq!(
            LogSink::describe(&draft),
            r#"{"date":"2024-03-01","time":"21:30","amount":110,"note":""}"#
        );
    }

    #[test]
    fn test_sink_receives_draft_as_is() {
        let sink = RecordingSink::default();
        let draft = FeedingDraft::new("2024-03-01");
        sink.submit(&draft);
        sink.submit(&draft);
        assert_eq!(sink.submitted.borrow().len(), 2);
        assert_eq!(sink.submitted.borrow()[0], draft);
    }
}
