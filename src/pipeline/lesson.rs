use std::path::{Path, PathBuf};

use crate::{
    content::{
        analysis::{assessment_or_default, build_analysis_prompt, parse_analysis},
        assessment::Assessment,
        session::SessionContext,
    },
    foundation::error::{CardError, CardResult},
    pipeline::services::{LanguageModel, Transcriber},
    render::generator::ReportGenerator,
};

/// Result of running one recording through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedLesson {
    pub transcript: String,
    pub assessment: Assessment,
    pub report_path: PathBuf,
    /// The canned assessment replaced unusable model output.
    pub used_fallback: bool,
}

/// Recording → transcript → assessment → report card.
pub struct LessonPipeline<T, L> {
    transcriber: T,
    model: L,
    generator: ReportGenerator,
    started: bool,
}

impl<T: Transcriber, L: LanguageModel> LessonPipeline<T, L> {
    pub fn new(transcriber: T, model: L, generator: ReportGenerator) -> Self {
        Self {
            transcriber,
            model,
            generator,
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Initialize both services. If the model fails to start, the transcriber is
    /// closed again before the error is returned.
    pub fn start(&mut self) -> CardResult<()> {
        if self.started {
            return Ok(());
        }
        self.transcriber.init()?;
        if let Err(err) = self.model.init() {
            if let Err(close_err) = self.transcriber.close() {
                tracing::warn!(
                    service = self.transcriber.name(),
                    %close_err,
                    "close after failed start"
                );
            }
            return Err(err);
        }
        tracing::info!(
            transcriber = self.transcriber.name(),
            model = self.model.name(),
            "pipeline started"
        );
        self.started = true;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(audio = %audio.display()))]
    pub fn process(&mut self, audio: &Path, context: &SessionContext) -> CardResult<ProcessedLesson> {
        if !self.started {
            return Err(CardError::validation("pipeline used before start()"));
        }

        let transcript = self.transcriber.transcribe(audio)?;
        tracing::debug!(chars = transcript.len(), "transcribed");

        let prompt = build_analysis_prompt(&transcript);
        let parsed = self
            .model
            .complete(&prompt)
            .and_then(|raw| parse_analysis(&raw));
        let (assessment, used_fallback) =
            assessment_or_default(parsed, self.generator.config().locale);

        let report_path = self.generator.generate(&assessment, context)?;
        Ok(ProcessedLesson {
            transcript,
            assessment,
            report_path,
            used_fallback,
        })
    }

    /// Close both services. Both are attempted; the first error is returned.
    pub fn shutdown(&mut self) -> CardResult<()> {
        if !self.started {
            return Ok(());
        }
        self.started = false;
        let transcriber = self.transcriber.close();
        let model = self.model.close();
        tracing::info!("pipeline stopped");
        transcriber.and(model)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/lesson.rs"]
mod tests;
