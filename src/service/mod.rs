pub mod extractor;
pub mod submission;

pub use extractor::ExtractionService;
pub use submission::SubmissionService;
