pub mod lesson;
pub mod services;

pub use lesson::{LessonPipeline, ProcessedLesson};
pub use services::{LanguageModel, Service, Transcriber};
