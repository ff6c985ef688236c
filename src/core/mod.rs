//! 변환 파이프라인 핵심 모듈

pub mod mapper;
pub mod normalizer;
pub mod phrases;
pub mod rules;
pub mod tokenizer;
pub mod transliterator;
pub mod types;
