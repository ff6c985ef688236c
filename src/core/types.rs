//! 변환 파이프라인 공용 타입

use serde::Serialize;
use std::collections::HashMap;

/// 문자 단위 매핑 테이블 묶음
///
/// - `multi`: 두 글자 이상 시퀀스 -> 아랍 문자 (예: "sh" -> "ش", "7'" -> "خ")
/// - `single`: 한 글자 -> 아랍 문자
///
/// 생성 후 변경되지 않는다. 모든 키는 비어 있지 않아야 한다.
#[derive(Debug, Clone, Default)]
pub struct MappingPack {
    multi: HashMap<String, String>,
    single: HashMap<char, String>,
}

impl MappingPack {
    pub fn new(multi: HashMap<String, String>, single: HashMap<char, String>) -> Self {
        Self { multi, single }
    }

    /// 다중 문자 매핑 조회
    pub fn multi(&self, key: &str) -> Option<&str> {
        self.multi.get(key).map(String::as_str)
    }

    /// 단일 문자 매핑 조회
    pub fn single(&self, c: char) -> Option<&str> {
        self.single.get(&c).map(String::as_str)
    }

    /// 다중 문자 키 목록 (순서 없음)
    pub fn multi_keys(&self) -> impl Iterator<Item = &str> {
        self.multi.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.multi.is_empty() && self.single.is_empty()
    }
}

/// 토큰 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[a-z0-9']` 최장 연속 구간
    Word,
    /// 공백 연속 구간
    Whitespace,
    /// 그 외 단일 문자 (구두점, 기호 등)
    Symbol,
}

/// 토크나이저가 만든 원자 단위
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// 변환 결과
///
/// `transliterate` 호출마다 한 번 생성되며 이후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransliterationResult {
    /// 원본 입력
    pub input_text: String,
    /// 최종 출력
    pub output_text: String,
    /// 정규화된 입력의 토큰 열
    pub tokens: Vec<String>,
    /// 매핑되지 않은 문자 등 비치명적 기록
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_lookup() {
        let multi = HashMap::from([("sh".to_string(), "ش".to_string())]);
        let single = HashMap::from([('b', "ب".to_string())]);
        let pack = MappingPack::new(multi, single);

        assert_eq!(pack.multi("sh"), Some("ش"));
        assert_eq!(pack.multi("kh"), None);
        assert_eq!(pack.single('b'), Some("ب"));
        assert_eq!(pack.single('q'), None);
        assert!(!pack.is_empty());
        assert!(MappingPack::default().is_empty());
    }

    #[test]
    fn test_result_serializes() {
        let result = TransliterationResult {
            input_text: "bas".into(),
            output_text: "بس".into(),
            tokens: vec!["bas".into()],
            notes: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"output_text\":\"بس\""));
    }
}
