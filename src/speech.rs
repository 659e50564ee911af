//! Optional speech capabilities.
//!
//! Neither trait is required by the cart or order logic. Callers hold them as
//! `Option<Arc<dyn ...>>` and degrade to a no-op when the capability is absent.

use thiserror::Error;
use tracing::info;

use crate::domain::Language;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpeechError {
    #[error("speech capability not supported")]
    Unsupported,
    #[error("nothing recognised")]
    #[allow(dead_code)]
    NoMatch,
    #[error("speech failed: {0}")]
    #[allow(dead_code)]
    Failed(String),
}

/// Text-to-speech output. Fire and forget.
pub trait SpeechSynthesizer: Send + Sync {
    /// Stop whatever is currently being spoken.
    fn cancel(&self);
    fn speak(&self, text: &str, language: Language);
}

/// One-shot voice capture producing a transcript.
pub trait SpeechRecognizer: Send + Sync {
    fn listen(&self, language: Language) -> Result<String, SpeechError>;
}

/// Narrates into the log instead of a speaker.
#[derive(Debug, Default)]
pub struct TracingSynthesizer;

impl SpeechSynthesizer for TracingSynthesizer {
    fn cancel(&self) {}

    fn speak(&self, text: &str, language: Language) {
        info!(%language, "🔊 {text}");
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every call so tests can assert on narration.
    #[derive(Debug, Default)]
    pub struct RecordingSynthesizer {
        pub log: Mutex<Vec<String>>,
    }

    impl RecordingSynthesizer {
        pub fn calls(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn cancel(&self) {
            self.log.lock().unwrap().push("<cancel>".to_string());
        }

        fn speak(&self, text: &str, _language: Language) {
            self.log.lock().unwrap().push(text.to_string());
        }
    }

    /// Always hears the same transcript (or the same failure).
    pub struct FixedRecognizer(pub Result<String, SpeechError>);

    impl SpeechRecognizer for FixedRecognizer {
        fn listen(&self, _language: Language) -> Result<String, SpeechError> {
            self.0.clone()
        }
    }
}
