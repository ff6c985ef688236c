//! 변환 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 변환 설정
///
/// 각 필드는 서로 독립적인 토글이므로 잘못된 조합은 존재하지 않는다.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransliterationConfig {
    /// 단어 단위 오버라이드 사용
    #[serde(default = "default_true")]
    pub use_word_overrides: bool,
    /// 구두점/기호 유지 (false면 제거)
    #[serde(default = "default_true")]
    pub preserve_punctuation: bool,
    /// 숫자만으로 된 토큰 유지 (false면 제거)
    #[serde(default = "default_true")]
    pub preserve_numbers: bool,
    /// 입력을 소문자로 변환 (매핑 키와 오버라이드는 모두 소문자)
    #[serde(default = "default_true")]
    pub lowercase_input: bool,
    /// 같은 글자 반복 압축 (예: "yallaaaa" -> "yallaa")
    #[serde(default = "default_true")]
    pub compress_repeated_letters: bool,
    /// 반복 허용 최대 횟수 (1 미만은 1로 취급)
    #[serde(default = "default_max_repeat")]
    pub max_repeat: usize,
    /// 영어(외래어)로 판단된 단어는 변환하지 않음
    #[serde(default = "default_true")]
    pub keep_english_words: bool,
    /// 항상 유지할 단어 목록 (기술 용어 등)
    #[serde(default = "default_english_keep_words")]
    pub english_keep_words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_max_repeat() -> usize {
    2
}

fn default_english_keep_words() -> Vec<String> {
    [
        "voltage", "cell", "cells", "sensor", "connected", "menu", "context", "bq", "esp", "i2c",
        "testing", "balancing", "csv",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            use_word_overrides: true,
            preserve_punctuation: true,
            preserve_numbers: true,
            lowercase_input: true,
            compress_repeated_letters: true,
            max_repeat: default_max_repeat(),
            keep_english_words: true,
            english_keep_words: default_english_keep_words(),
        }
    }
}

impl TransliterationConfig {
    /// 실제 적용되는 반복 상한
    pub fn effective_max_repeat(&self) -> usize {
        self.max_repeat.max(1)
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> TransliterationConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {} ({})", path.display(), e);
            TransliterationConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            TransliterationConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &TransliterationConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransliterationConfig::default();
        assert!(config.use_word_overrides);
        assert!(config.lowercase_input);
        assert_eq!(config.max_repeat, 2);
        assert!(config.english_keep_words.iter().any(|w| w == "voltage"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = TransliterationConfig {
            preserve_punctuation: false,
            max_repeat: 3,
            english_keep_words: vec!["latex".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TransliterationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 일부 필드만 있는 설정 파일은 나머지를 기본값으로 채움
        let json = r#"{"keep_english_words": false}"#;
        let config: TransliterationConfig = serde_json::from_str(json).unwrap();
        assert!(!config.keep_english_words);
        assert!(config.preserve_numbers);
        assert_eq!(config.max_repeat, 2);
        assert_eq!(config.english_keep_words.len(), 13);
    }

    #[test]
    fn test_effective_max_repeat() {
        let config = TransliterationConfig {
            max_repeat: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_max_repeat(), 1);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("franko-config-does-not-exist.json");
        assert_eq!(load_config(&path), TransliterationConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("franko-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = TransliterationConfig {
            use_word_overrides: false,
            ..Default::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path), config);
        let _ = fs::remove_dir_all(&dir);
    }
}
