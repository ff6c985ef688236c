pub mod config;
pub mod core;
pub mod data;
pub mod detection;

pub use crate::config::TransliterationConfig;
pub use crate::core::phrases::{PhraseMatch, PhraseMatcher};
pub use crate::core::rules::{PostRule, RuleEngine};
pub use crate::core::transliterator::Transliterator;
pub use crate::core::types::{MappingPack, Token, TokenKind, TransliterationResult};
pub use crate::detection::EnglishWordDetector;
