mod detect;
mod registry;

pub use detect::{detect_languages, parse_language_list, DetectedLanguage};
pub use registry::{Lang, Strategy};
