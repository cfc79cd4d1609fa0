use std::path::Path;

use crate::foundation::error::CardResult;

/// Explicitly constructed collaborator with a start/stop lifecycle.
pub trait Service {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn init(&mut self) -> CardResult<()>;

    fn close(&mut self) -> CardResult<()>;
}

/// Speech-to-text over a lesson recording.
pub trait Transcriber: Service {
    fn transcribe(&mut self, audio: &Path) -> CardResult<String>;
}

/// Text completion used to derive the assessment JSON.
pub trait LanguageModel: Service {
    fn complete(&mut self, prompt: &str) -> CardResult<String>;
}
