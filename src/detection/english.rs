//! 영어(외래어) 단어 판별
//!
//! 사전 조회가 아닌 휴리스틱이다. 오탐/미탐은 허용되며
//! 정확도는 유지 목록과 단어/구 오버라이드로 보완한다.

use std::collections::HashSet;

use super::patterns::{has_arabizi_marker, is_ascii_letters, ARABIZI_MARKERS, MAX_AMBIGUOUS_LEN};
use crate::config::TransliterationConfig;

/// 영어 판별기 설정
#[derive(Debug, Clone)]
pub struct EnglishDetectionConfig {
    /// 영어 단어 유지 여부
    pub keep_english_words: bool,
    /// 항상 영어로 취급할 단어 (소문자)
    pub english_keep_words: HashSet<String>,
    /// 포함 시 아랍지로 확정하는 문자
    pub arabizi_markers: String,
}

impl Default for EnglishDetectionConfig {
    fn default() -> Self {
        Self::from(&TransliterationConfig::default())
    }
}

impl From<&TransliterationConfig> for EnglishDetectionConfig {
    fn from(config: &TransliterationConfig) -> Self {
        Self {
            keep_english_words: config.keep_english_words,
            english_keep_words: config
                .english_keep_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .collect(),
            arabizi_markers: ARABIZI_MARKERS.to_string(),
        }
    }
}

/// 영어 단어 판별기
#[derive(Debug, Clone)]
pub struct EnglishWordDetector {
    config: EnglishDetectionConfig,
}

impl EnglishWordDetector {
    pub fn new(config: EnglishDetectionConfig) -> Self {
        Self { config }
    }

    /// 기본 설정으로 생성
    pub fn with_defaults() -> Self {
        Self::new(EnglishDetectionConfig::default())
    }

    /// 영어 유지가 활성화되어 있는지
    pub fn is_enabled(&self) -> bool {
        self.config.keep_english_words
    }

    /// 토큰을 변환하지 않고 그대로 둘지 판별
    ///
    /// 1. 빈 토큰 -> false
    /// 2. 아랍지 표지(숫자 2-9, 아포스트로피) 포함 -> false
    /// 3. 유지 목록에 있음 -> true
    /// 4. ASCII 영문자가 아닌 문자 포함 -> false
    /// 5. 2글자 이하 -> false
    /// 6. 그 외 -> true
    pub fn is_english_word(&self, token: &str) -> bool {
        let t = token.trim().to_lowercase();
        if t.is_empty() {
            return false;
        }

        if has_arabizi_marker(&t, &self.config.arabizi_markers) {
            return false;
        }

        if self.config.english_keep_words.contains(&t) {
            return true;
        }

        if !is_ascii_letters(&t) {
            return false;
        }

        t.chars().count() > MAX_AMBIGUOUS_LEN
    }
}

impl Default for EnglishWordDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
