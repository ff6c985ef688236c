//! 영어(외래어) 단어 유지 판별 모듈

mod english;
mod patterns;

pub use english::{EnglishDetectionConfig, EnglishWordDetector};
pub use patterns::ARABIZI_MARKERS;
