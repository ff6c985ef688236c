//! 입력 정규화 (따옴표 통일, 소문자화, 반복 글자 압축)

use crate::config::TransliterationConfig;

/// 스마트 따옴표 -> 일반 따옴표
const SMART_QUOTES: [(char, char); 4] = [('’', '\''), ('‘', '\''), ('“', '"'), ('”', '"')];

/// 입력 정규화기
#[derive(Debug, Clone)]
pub struct Normalizer {
    lowercase: bool,
    /// 반복 압축 상한 (None이면 압축하지 않음)
    max_repeat: Option<usize>,
}

impl Normalizer {
    pub fn new(config: &TransliterationConfig) -> Self {
        Self {
            lowercase: config.lowercase_input,
            max_repeat: config
                .compress_repeated_letters
                .then(|| config.effective_max_repeat()),
        }
    }

    /// 정규화 수행. 실패하지 않는다.
    pub fn normalize(&self, text: &str) -> String {
        let mut t: String = text
            .chars()
            .map(|c| {
                SMART_QUOTES
                    .iter()
                    .find(|(from, _)| *from == c)
                    .map(|(_, to)| *to)
                    .unwrap_or(c)
            })
            .collect();

        if self.lowercase {
            t = t.to_lowercase();
        }

        if let Some(max) = self.max_repeat {
            t = compress_repeats(&t, max);
        }

        t
    }
}

/// 같은 소문자(a-z)가 `max`회 넘게 연속되면 정확히 `max`회로 줄임
///
/// 숫자, 구두점, 대문자 반복은 건드리지 않는다.
pub fn compress_repeats(text: &str, max: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }

        if c.is_ascii_lowercase() && run > max {
            continue;
        }
        out.push(c);
    }

    out
}
