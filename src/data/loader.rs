//! JSON 데이터 파일 파싱 및 검증

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::TransliterationConfig;
use crate::core::rules::PostRule;
use crate::core::transliterator::Transliterator;
use crate::core::types::MappingPack;

pub const MAPPING_FILE: &str = "base_mapping.json";
pub const WORDS_FILE: &str = "egyptian_words.json";
pub const PHRASES_FILE: &str = "phrases_eg.json";
pub const POST_RULES_FILE: &str = "post_rules.json";

/// 데이터 로드/파싱 에러
#[derive(Debug)]
pub enum DataError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 데이터 형식 오류
    Format(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            DataError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            DataError::Format(s) => write!(f, "데이터 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// 매핑 파일 원형
#[derive(Debug, Deserialize)]
struct RawMapping {
    #[serde(default)]
    multi: HashMap<String, String>,
    #[serde(default)]
    single: HashMap<String, String>,
}

fn read_json(path: &Path) -> Result<serde_json::Value, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DataError::Parse(format!("{}: {}", path.display(), e)))
}

/// JSON 문자열에서 매핑 팩 생성
///
/// # 형식
/// ```json
/// { "multi": { "sh": "ش", "7'": "خ" }, "single": { "b": "ب", "3": "ع" } }
/// ```
///
/// 빈 키, 한 글자가 아닌 `single` 키는 `DataError::Format`.
pub fn mapping_from_json(json_str: &str) -> Result<MappingPack, DataError> {
    let raw: RawMapping =
        serde_json::from_str(json_str).map_err(|e| DataError::Parse(e.to_string()))?;

    if raw.multi.keys().any(|k| k.is_empty()) {
        return Err(DataError::Format("multi에 빈 키가 있습니다".into()));
    }

    let mut single = HashMap::with_capacity(raw.single.len());
    for (key, value) in raw.single {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                single.insert(c, value);
            }
            _ => {
                return Err(DataError::Format(format!(
                    "single 키는 한 글자여야 합니다: {:?}",
                    key
                )))
            }
        }
    }

    Ok(MappingPack::new(raw.multi, single))
}

/// 매핑 파일 로드
pub fn load_mapping(path: &Path) -> Result<MappingPack, DataError> {
    let content = std::fs::read_to_string(path)?;
    let pack = mapping_from_json(&content)?;
    if pack.is_empty() {
        log::warn!("매핑이 비어 있음, 모든 문자를 그대로 유지: {}", path.display());
    }
    log::info!("매핑 로드: {}", path.display());
    Ok(pack)
}

/// JSON 객체에서 오버라이드 테이블 생성
///
/// `@`로 시작하는 키(메타데이터)는 건너뛰고, 문자열이 아닌 값은 경고 후 무시.
/// 키는 소문자화한다.
pub fn overrides_from_json(value: &serde_json::Value) -> Result<HashMap<String, String>, DataError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DataError::Format("최상위가 객체가 아닙니다".into()))?;

    let mut table = HashMap::with_capacity(obj.len());
    for (key, val) in obj {
        if key.starts_with('@') {
            continue;
        }
        match val.as_str() {
            Some(s) => {
                table.insert(key.trim().to_lowercase(), s.to_string());
            }
            None => log::warn!("문자열이 아닌 값 무시: {}", key),
        }
    }

    Ok(table)
}

/// 오버라이드 파일 로드
pub fn load_overrides(path: &Path) -> Result<HashMap<String, String>, DataError> {
    let value = read_json(path)?;
    let table = overrides_from_json(&value)?;
    log::info!("오버라이드 {}개 로드: {}", table.len(), path.display());
    Ok(table)
}

/// 후처리 규칙 파일 로드
pub fn load_post_rules(path: &Path) -> Result<Vec<PostRule>, DataError> {
    let value = read_json(path)?;
    serde_json::from_value(value).map_err(|e| DataError::Format(format!("{}: {}", path.display(), e)))
}

/// 선택 파일: 없으면 기본값
fn optional<T: Default>(
    path: &Path,
    load: impl FnOnce(&Path) -> Result<T, DataError>,
) -> Result<T, DataError> {
    if !path.exists() {
        log::debug!("선택 파일 없음: {}", path.display());
        return Ok(T::default());
    }
    load(path)
}

/// 데이터 디렉토리에서 변환기 구성
///
/// 매핑 파일은 필수, 나머지는 없으면 비어 있는 것으로 취급.
pub fn load_transliterator(dir: &Path, config: TransliterationConfig) -> Result<Transliterator, DataError> {
    let mapping = load_mapping(&dir.join(MAPPING_FILE))?;
    let words = optional(&dir.join(WORDS_FILE), load_overrides)?;
    let phrases = optional(&dir.join(PHRASES_FILE), load_overrides)?;
    let post_rules = optional(&dir.join(POST_RULES_FILE), load_post_rules)?;

    Transliterator::new(mapping, config)
        .with_word_overrides(words)
        .with_phrase_overrides(phrases)
        .with_post_rules(post_rules)
        .map_err(|e| DataError::Format(format!("후처리 규칙 오류: {}", e)))
}
