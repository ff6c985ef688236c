//! 외부 데이터 파일 로드
//!
//! 매핑 팩, 단어/구 오버라이드, 후처리 규칙을 JSON 파일에서 읽어
//! 변환기를 구성합니다.
//!
//! # 파일 구성
//!
//! | 파일                  | 필수 | 내용                                   |
//! |-----------------------|------|----------------------------------------|
//! | `base_mapping.json`   | O    | `{"multi": {..}, "single": {..}}`      |
//! | `egyptian_words.json` | X    | 단어 -> 아랍어                         |
//! | `phrases_eg.json`     | X    | 공백으로 이은 단어 열 -> 아랍어        |
//! | `post_rules.json`     | X    | `[{"pattern": .., "replacement": ..}]` |
//!
//! ```no_run
//! use franko::data::load_transliterator;
//! use franko::TransliterationConfig;
//!
//! let tr = load_transliterator("data".as_ref(), TransliterationConfig::default()).unwrap();
//! println!("{}", tr.transliterate("yalla bena").output_text);
//! ```

mod loader;

pub use loader::{
    load_mapping, load_overrides, load_post_rules, load_transliterator, mapping_from_json,
    overrides_from_json, DataError, MAPPING_FILE, PHRASES_FILE, POST_RULES_FILE, WORDS_FILE,
};
