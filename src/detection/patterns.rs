//! 아랍지(Arabizi) 표기 패턴 데이터

/// 아랍지 표기 표지 문자
///
/// 라틴 문자에 없는 아랍 자음을 대신하는 숫자(2-9)와 아포스트로피.
/// 이 문자가 들어간 토큰은 영어로 보지 않는다.
pub const ARABIZI_MARKERS: &str = "23456789'";

/// 영어로 보기엔 너무 짧은 길이 ("el", "ya" 같은 아랍지 조사와 겹침)
pub const MAX_AMBIGUOUS_LEN: usize = 2;

/// 토큰에 아랍지 표지가 있는지 확인
pub fn has_arabizi_marker(token: &str, markers: &str) -> bool {
    token.chars().any(|c| markers.contains(c))
}

/// 토큰이 ASCII 영문자로만 이루어졌는지 확인
pub fn is_ascii_letters(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}
