//! 단어 오버라이드 조회 및 출력 후처리 규칙

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 연속 공백
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("고정 공백 패턴은 항상 유효"));

/// 데이터 파일에서 읽는 후처리 규칙 (패턴 -> 대체 문자열)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRule {
    pub pattern: String,
    pub replacement: String,
}

/// 규칙 엔진
///
/// 기본 규칙(공백 압축) 뒤에 등록 순서대로 추가 규칙을 적용하고 마지막에 양끝 공백을 제거한다.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    word_overrides: HashMap<String, String>,
    rules: Vec<(Regex, String)>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl RuleEngine {
    pub fn new(word_overrides: HashMap<String, String>) -> Self {
        Self {
            word_overrides: HashMap::new(),
            rules: vec![(WHITESPACE_RUN.clone(), " ".to_string())],
        }
        .with_word_overrides(word_overrides)
    }

    /// 단어 오버라이드 교체. 키는 소문자로 저장
    pub fn with_word_overrides(mut self, word_overrides: HashMap<String, String>) -> Self {
        self.word_overrides = word_overrides
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        self
    }

    /// 후처리 규칙 추가
    pub fn with_rule(mut self, pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        self.rules.push((re, replacement.to_string()));
        Ok(self)
    }

    /// 토큰은 이미 정규화(소문자)되어 있어야 함
    pub fn apply_word_override(&self, token: &str) -> Option<&str> {
        self.word_overrides.get(token).map(String::as_str)
    }

    pub fn override_count(&self) -> usize {
        self.word_overrides.len()
    }

    pub fn postprocess(&self, text: &str) -> String {
        let mut t = text.to_string();
        for (re, replacement) in &self.rules {
            t = re.replace_all(&t, replacement.as_str()).into_owned();
        }
        t.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_override_lookup() {
        let engine = RuleEngine::new(HashMap::from([("Enta".to_string(), "إنت".to_string())]));
        assert_eq!(engine.apply_word_override("enta"), Some("إنت"));
        assert_eq!(engine.apply_word_override("Enta"), None);
        assert_eq!(engine.override_count(), 1);
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        let engine = RuleEngine::new(HashMap::new());
        assert_eq!(engine.postprocess("  a \t\n b  "), "a b");
        assert_eq!(engine.postprocess(""), "");
    }

    #[test]
    fn test_rules_in_registration_order() {
        let engine = RuleEngine::new(HashMap::new())
            .with_rule("ال ", "ال")
            .unwrap()
            .with_rule("الب", "ب")
            .unwrap();
        assert_eq!(engine.postprocess("ال   بيت"), "بيت");
    }

    #[test]
    fn test_replace_overrides_keeps_rules() {
        let engine = RuleEngine::default()
            .with_rule("x", "y")
            .unwrap()
            .with_word_overrides(HashMap::from([("BAS".to_string(), "بس".to_string())]));
        assert_eq!(engine.apply_word_override("bas"), Some("بس"));
        assert_eq!(engine.postprocess(" x  x "), "y y");
    }

    #[test]
    fn test_builtin_whitespace_rule_compiles() {
        // 기본 규칙은 항상 하나 등록되어 있음
        let engine = RuleEngine::default();
        assert_eq!(engine.rules.len(), 1);
        assert_eq!(engine.postprocess("a\u{a0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_invalid_rule() {
        assert!(RuleEngine::new(HashMap::new()).with_rule("(", "").is_err());
    }
}
