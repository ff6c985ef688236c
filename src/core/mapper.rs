//! 최장 일치 우선 문자/클러스터 매퍼
//!
//! 한 단어 토큰을 왼쪽부터 훑으며 다중 문자 키(긴 것부터) -> 단일 문자 -> 원문 유지 순으로 변환한다.
//! 예: "sh"는 "s" + "h"보다 먼저 하나의 단위로 매핑된다.

use crate::core::types::MappingPack;

/// 단어 하나의 매핑 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedToken {
    pub text: String,
    /// 매핑 없는 문자 기록
    pub notes: Vec<String>,
}

/// 최장 일치 매퍼
#[derive(Debug, Clone)]
pub struct GreedyMapper {
    mapping: MappingPack,
    /// 길이 내림차순 정렬된 다중 문자 키
    multi_keys: Vec<String>,
}

impl GreedyMapper {
    pub fn new(mapping: MappingPack) -> Self {
        let mut multi_keys: Vec<String> = mapping
            .multi_keys()
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        multi_keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));

        Self {
            mapping,
            multi_keys,
        }
    }

    /// 소문자 단어 토큰을 매핑
    pub fn map_token(&self, token: &str) -> MappedToken {
        let mut text = String::new();
        let mut notes = Vec::new();
        let mut i = 0;

        while i < token.len() {
            let rest = &token[i..];

            if let Some(key) = self.multi_keys.iter().find(|k| rest.starts_with(k.as_str())) {
                if let Some(replacement) = self.mapping.multi(key) {
                    text.push_str(replacement);
                }
                i += key.len();
                continue;
            }

            let Some(c) = rest.chars().next() else {
                break;
            };

            match self.mapping.single(c) {
                Some(replacement) => text.push_str(replacement),
                None => {
                    log::debug!("매핑 없는 문자 유지: {:?} ({})", c, token);
                    text.push(c);
                    notes.push(format!("Unmapped char kept: {:?}", c));
                }
            }
            i += c.len_utf8();
        }

        MappedToken { text, notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pack(multi: &[(&str, &str)], single: &[(char, &str)]) -> MappingPack {
        MappingPack::new(
            multi.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            single.iter().map(|(k, v)| (*k, v.to_string())).collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_longest_match_wins() {
        let mapper = GreedyMapper::new(pack(&[("sh", "X"), ("s", "Y")], &[('h', "H")]));
        assert_eq!(mapper.map_token("sh").text, "X");
        assert_eq!(mapper.map_token("s").text, "Y");
        assert_eq!(mapper.map_token("hs").text, "HY");
    }

    #[test]
    fn test_longer_multi_before_shorter() {
        let mapper = GreedyMapper::new(pack(&[("kh", "خ"), ("khh", "ءء")], &[('k', "ك"), ('h', "ه")]));
        assert_eq!(mapper.map_token("khh").text, "ءء");
        assert_eq!(mapper.map_token("kha").notes.len(), 1);
    }

    #[test]
    fn test_multi_with_apostrophe() {
        let mapper = GreedyMapper::new(pack(
            &[("7'", "خ")],
            &[('7', "ح"), ('a', "ا"), ('l', "ل"), ('i', "ي")],
        ));
        assert_eq!(mapper.map_token("7'ali").text, "خالي");
        assert_eq!(mapper.map_token("7ali").text, "حالي");
    }

    #[test]
    fn test_unmapped_passthrough_with_note() {
        let mapper = GreedyMapper::new(pack(&[], &[('b', "ب")]));
        let mapped = mapper.map_token("bqb");
        assert_eq!(mapped.text, "بqب");
        assert_eq!(mapped.notes, vec!["Unmapped char kept: 'q'".to_string()]);
    }

    #[test]
    fn test_empty_token() {
        let mapper = GreedyMapper::new(MappingPack::default());
        let mapped = mapper.map_token("");
        assert_eq!(mapped.text, "");
        assert!(mapped.notes.is_empty());
    }

    #[test]
    fn test_non_ascii_char() {
        let mapper = GreedyMapper::new(pack(&[], &[('é', "ي")]));
        assert_eq!(mapper.map_token("é").text, "ي");
    }
}
