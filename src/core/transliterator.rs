//! 프랑코(아랍지) -> 아랍 문자 통합 변환기
//!
//! 정규화 -> 토큰화 -> 구 오버라이드 -> 단어 오버라이드 -> 영어 유지 -> 문자 매핑 -> 후처리

use std::collections::HashMap;

use crate::config::TransliterationConfig;
use crate::core::mapper::GreedyMapper;
use crate::core::normalizer::Normalizer;
use crate::core::phrases::{PhraseMatch, PhraseMatcher};
use crate::core::rules::{PostRule, RuleEngine};
use crate::core::tokenizer::tokenize;
use crate::core::types::{MappingPack, Token, TokenKind, TransliterationResult};
use crate::detection::{EnglishDetectionConfig, EnglishWordDetector};

/// 변환 단계에서 본 토큰의 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenRole {
    Whitespace,
    /// 아포스트로피를 제외한 단일 구두점/기호
    Punctuation,
    /// 숫자만으로 된 토큰
    Number,
    /// 변환 대상 단어
    Word,
}

fn classify(token: &Token) -> TokenRole {
    match token.kind {
        TokenKind::Whitespace => TokenRole::Whitespace,
        TokenKind::Word if token.text.chars().all(|c| c.is_ascii_digit()) => TokenRole::Number,
        TokenKind::Word => TokenRole::Word,
        // 아랍-인도 숫자(٣), 위첨자(²) 등 유니코드 숫자
        TokenKind::Symbol if token.text.chars().all(char::is_numeric) => TokenRole::Number,
        // 라틴 외 문자(é, س 등)도 글자라면 단어로 취급
        TokenKind::Symbol if token.text.chars().all(char::is_alphanumeric) => TokenRole::Word,
        TokenKind::Symbol => TokenRole::Punctuation,
    }
}

/// 단어 하나의 확정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    text: String,
    notes: Vec<String>,
}

impl Resolved {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            notes: Vec::new(),
        }
    }
}

/// 단어 해석기: (원본 토큰, 소문자 키) -> 확정 결과 또는 None(의견 없음)
type WordResolver = fn(&Transliterator, &str, &str) -> Option<Resolved>;

/// 단어 단위 우선순위. 마지막 문자 매핑은 항상 결과를 낸다.
const WORD_RESOLVERS: [WordResolver; 3] = [
    Transliterator::resolve_word_override,
    Transliterator::resolve_english,
    Transliterator::resolve_greedy,
];

/// 전체 토큰 열과 단어 토큰 열을 함께 따라가는 두 커서
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    /// 전체 토큰 인덱스
    token: usize,
    /// 단어 토큰 인덱스
    word: usize,
}

impl Cursor {
    /// 단어가 아닌 토큰 하나 통과
    fn pass(&mut self) {
        self.token += 1;
    }

    /// 단어 토큰 하나 소비
    fn consume_word(&mut self) {
        self.token += 1;
        self.word += 1;
    }

    /// 구가 덮는 마지막 단어 토큰 다음으로 이동 (사이의 공백/기호 포함)
    fn skip_phrase(&mut self, last_token: usize, word_end: usize) {
        self.token = last_token + 1;
        self.word = word_end;
    }
}

/// 추출된 단어 토큰 (위치 + 소문자 키)
#[derive(Debug)]
struct WordIndex {
    positions: Vec<usize>,
    keys: Vec<String>,
}

impl WordIndex {
    fn build(tokens: &[Token]) -> Self {
        let (positions, keys) = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| classify(t) == TokenRole::Word)
            .map(|(i, t)| (i, t.text.to_lowercase()))
            .unzip();
        Self { positions, keys }
    }
}

/// 변환기
///
/// 생성 후에는 불변이며 호출 간 상태를 공유하지 않는다.
/// 여러 스레드에서 하나의 인스턴스를 잠금 없이 공유할 수 있다.
#[derive(Debug, Clone)]
pub struct Transliterator {
    config: TransliterationConfig,
    normalizer: Normalizer,
    mapper: GreedyMapper,
    rules: RuleEngine,
    phrases: PhraseMatcher,
    english: EnglishWordDetector,
}

impl Transliterator {
    /// 매핑과 설정으로 생성 (오버라이드 없음)
    pub fn new(mapping: MappingPack, config: TransliterationConfig) -> Self {
        Self {
            normalizer: Normalizer::new(&config),
            mapper: GreedyMapper::new(mapping),
            rules: RuleEngine::default(),
            phrases: PhraseMatcher::default(),
            english: EnglishWordDetector::new(EnglishDetectionConfig::from(&config)),
            config,
        }
    }

    /// 단어 오버라이드 지정 (키는 소문자화)
    pub fn with_word_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.rules = self.rules.with_word_overrides(overrides);
        log::debug!("단어 오버라이드 {}개", self.rules.override_count());
        self
    }

    /// 구 오버라이드 지정 (키는 공백으로 이어진 소문자 단어 열)
    pub fn with_phrase_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        let overrides: HashMap<String, String> = overrides
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        self.phrases = PhraseMatcher::new(&overrides);
        log::debug!("구 오버라이드 {}개", self.phrases.len());
        self
    }

    /// 추가 후처리 규칙 등록 (순서대로 적용)
    pub fn with_post_rules(mut self, rules: Vec<PostRule>) -> Result<Self, regex::Error> {
        for rule in rules {
            self.rules = self.rules.with_rule(&rule.pattern, &rule.replacement)?;
        }
        Ok(self)
    }

    pub fn config(&self) -> &TransliterationConfig {
        &self.config
    }

    /// 텍스트 변환. 어떤 입력에도 실패하지 않는다.
    pub fn transliterate(&self, text: &str) -> TransliterationResult {
        let normalized = self.normalizer.normalize(text);
        let tokens = tokenize(&normalized);

        let words = WordIndex::build(&tokens);
        let phrase_starts: HashMap<usize, PhraseMatch> = if self.phrases.is_empty() {
            HashMap::new()
        } else {
            self.phrases
                .find_matches(words.keys.as_slice())
                .into_iter()
                .map(|m| (m.start, m))
                .collect()
        };

        let mut out = String::with_capacity(normalized.len() * 2);
        let mut notes = Vec::new();
        let mut cursor = Cursor::default();

        while let Some(token) = tokens.get(cursor.token) {
            match classify(token) {
                TokenRole::Whitespace => {
                    out.push_str(&token.text);
                    cursor.pass();
                }
                TokenRole::Punctuation => {
                    if self.config.preserve_punctuation {
                        out.push_str(&token.text);
                    }
                    cursor.pass();
                }
                TokenRole::Number => {
                    if self.config.preserve_numbers {
                        out.push_str(&token.text);
                    }
                    cursor.pass();
                }
                TokenRole::Word => {
                    if let Some(m) = phrase_starts.get(&cursor.word) {
                        log::debug!("구 매칭: {:?} -> {}", &words.keys[m.start..m.end], m.replacement);
                        out.push_str(&m.replacement);
                        cursor.skip_phrase(words.positions[m.end - 1], m.end);
                        continue;
                    }

                    match words.keys.get(cursor.word) {
                        Some(key) => {
                            debug_assert_eq!(words.positions[cursor.word], cursor.token);
                            let resolved = self.resolve_word(&token.text, key);
                            out.push_str(&resolved.text);
                            notes.extend(resolved.notes);
                            cursor.consume_word();
                        }
                        None => {
                            // 단어 색인과 어긋난 경우 원문 유지
                            out.push_str(&token.text);
                            cursor.pass();
                        }
                    }
                }
            }
        }

        TransliterationResult {
            input_text: text.to_string(),
            output_text: self.rules.postprocess(&out),
            tokens: tokens.into_iter().map(|t| t.text).collect(),
            notes,
        }
    }

    /// 단어 해석기를 순서대로 시도
    fn resolve_word(&self, token: &str, key: &str) -> Resolved {
        WORD_RESOLVERS
            .iter()
            .find_map(|resolve| resolve(self, token, key))
            .unwrap_or_else(|| Resolved::plain(token))
    }

    fn resolve_word_override(&self, _token: &str, key: &str) -> Option<Resolved> {
        if !self.config.use_word_overrides {
            return None;
        }
        self.rules.apply_word_override(key).map(Resolved::plain)
    }

    /// 영어로 판단되면 원래 토큰 그대로
    fn resolve_english(&self, token: &str, _key: &str) -> Option<Resolved> {
        (self.english.is_enabled() && self.english.is_english_word(token)).then(|| Resolved::plain(token))
    }

    fn resolve_greedy(&self, _token: &str, key: &str) -> Option<Resolved> {
        let mapped = self.mapper.map_token(key);
        Some(Resolved {
            text: mapped.text,
            notes: mapped.notes,
        })
    }
}
