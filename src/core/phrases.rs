//! 단어 토큰 열에 대한 구(phrase) 오버라이드 매칭
//!
//! 왼쪽부터, 단어 수가 많은 구부터 시도하는 탐욕적 비중첩 매칭.
//! 전역 최적은 아니지만 결정적이다.

use std::collections::HashMap;

/// 매칭 결과: 단어 인덱스 구간 `[start, end)`과 대체 문자열
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// 구 매처
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher {
    /// (구성 단어, 대체 문자열), 단어 수 내림차순
    phrases: Vec<(Vec<String>, String)>,
}

impl PhraseMatcher {
    /// 키는 소문자화 후 공백 기준으로 나눈다. 빈 키는 무시.
    pub fn new(phrases: &HashMap<String, String>) -> Self {
        let mut sorted: Vec<(Vec<String>, String)> = phrases
            .iter()
            .map(|(k, v)| {
                let parts: Vec<String> = k.to_lowercase().split_whitespace().map(str::to_string).collect();
                (parts, v.clone())
            })
            .filter(|(parts, _)| !parts.is_empty())
            .collect();

        // 단어 수 내림차순, 같으면 키 순서로 고정
        sorted.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self { phrases: sorted }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// 소문자 단어 열에서 비중첩 매칭 목록 반환
    pub fn find_matches<S: AsRef<str>>(&self, words: &[S]) -> Vec<PhraseMatch> {
        let mut matches = Vec::new();
        let mut i = 0;

        while i < words.len() {
            match self.match_at(words, i) {
                Some(m) => {
                    i = m.end;
                    matches.push(m);
                }
                None => i += 1,
            }
        }

        matches
    }

    fn match_at<S: AsRef<str>>(&self, words: &[S], start: usize) -> Option<PhraseMatch> {
        self.phrases.iter().find_map(|(parts, replacement)| {
            let end = start + parts.len();
            let window = words.get(start..end)?;
            window
                .iter()
                .zip(parts)
                .all(|(w, p)| w.as_ref() == p)
                .then(|| PhraseMatch {
                    start,
                    end,
                    replacement: replacement.clone(),
                })
        })
    }
}
