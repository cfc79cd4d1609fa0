use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    foundation::config::{FontConfig, ReportConfig},
    pipeline::services::Service,
};

type Log = Rc<RefCell<Vec<String>>>;

struct FakeTranscriber {
    log: Log,
    text: String,
}

impl Service for FakeTranscriber {
    fn name(&self) -> &str {
        "fake-transcriber"
    }

    fn init(&mut self) -> CardResult<()> {
        self.log.borrow_mut().push("transcriber.init".into());
        Ok(())
    }

    fn close(&mut self) -> CardResult<()> {
        self.log.borrow_mut().push("transcriber.close".into());
        Ok(())
    }
}

impl Transcriber for FakeTranscriber {
    fn transcribe(&mut self, _audio: &Path) -> CardResult<String> {
        self.log.borrow_mut().push("transcribe".into());
        Ok(self.text.clone())
    }
}

struct FakeModel {
    log: Log,
    reply: CardResult<String>,
    fail_init: bool,
}

impl Service for FakeModel {
    fn name(&self) -> &str {
        "fake-model"
    }

    fn init(&mut self) -> CardResult<()> {
        self.log.borrow_mut().push("model.init".into());
        if self.fail_init {
            return Err(CardError::validation("model offline"));
        }
        Ok(())
    }

    fn close(&mut self) -> CardResult<()> {
        self.log.borrow_mut().push("model.close".into());
        Ok(())
    }
}

impl LanguageModel for FakeModel {
    fn complete(&mut self, prompt: &str) -> CardResult<String> {
        assert!(prompt.contains("TRANSCRIPCIÓN DE LA CLASE"));
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(_) => Err(CardError::validation("timeout")),
        }
    }
}

fn pipeline(
    reply: CardResult<String>,
    fail_init: bool,
    reports: &Path,
) -> (LessonPipeline<FakeTranscriber, FakeModel>, Log) {
    let log = Log::default();
    let config = ReportConfig {
        reports_dir: reports.to_path_buf(),
        fonts: FontConfig {
            system_fonts: false,
            ..FontConfig::default()
        },
        ..ReportConfig::default()
    };
    let p = LessonPipeline::new(
        FakeTranscriber {
            log: log.clone(),
            text: "Hoy repasamos fracciones.".into(),
        },
        FakeModel {
            log: log.clone(),
            reply,
            fail_init,
        },
        ReportGenerator::new(config),
    );
    (p, log)
}

const GOOD_REPLY: &str = r#"```json
{"objetivos": ["Fracciones"], "desarrollo": "Bien.", "actitud": 90, "recomendaciones": "Seguir."}
```"#;

#[test]
fn process_before_start_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (mut p, log) = pipeline(Ok(GOOD_REPLY.into()), false, dir.path());
    let err = p
        .process(Path::new("clase.wav"), &SessionContext::default())
        .unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
    assert!(log.borrow().is_empty());
}

#[test]
fn full_run_parses_and_writes_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let (mut p, log) = pipeline(Ok(GOOD_REPLY.into()), false, dir.path());
    p.start().unwrap();
    assert!(p.is_started());

    let out = p
        .process(Path::new("clase.wav"), &SessionContext::default())
        .unwrap();
    assert!(!out.used_fallback);
    assert_eq!(out.transcript, "Hoy repasamos fracciones.");
    assert_eq!(out.assessment.objectives, vec!["Fracciones".to_string()]);
    assert!(out.report_path.is_file());

    p.shutdown().unwrap();
    assert!(!p.is_started());
    assert_eq!(
        *log.borrow(),
        vec![
            "transcriber.init",
            "model.init",
            "transcribe",
            "transcriber.close",
            "model.close"
        ]
    );
}

#[test]
fn unusable_model_output_falls_back_to_the_default() {
    let dir = tempfile::tempdir().unwrap();
    for reply in [Ok("no json here".to_string()), Err(CardError::validation("x"))] {
        let (mut p, _log) = pipeline(reply, false, dir.path());
        p.start().unwrap();
        let out = p
            .process(Path::new("clase.wav"), &SessionContext::default())
            .unwrap();
        assert!(out.used_fallback);
        assert_eq!(out.assessment, default_assessment_es());
    }
}

#[test]
fn failed_model_start_closes_the_transcriber() {
    let dir = tempfile::tempdir().unwrap();
    let (mut p, log) = pipeline(Ok(GOOD_REPLY.into()), true, dir.path());
    assert!(p.start().is_err());
    assert!(!p.is_started());
    assert_eq!(
        *log.borrow(),
        vec!["transcriber.init", "model.init", "transcriber.close"]
    );
}

fn default_assessment_es() -> Assessment {
    crate::content::analysis::default_assessment(crate::foundation::core::Locale::Es)
}
