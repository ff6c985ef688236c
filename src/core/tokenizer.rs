//! 정규화된 텍스트를 단어/공백/기호 토큰으로 분리

use crate::core::types::{Token, TokenKind};

/// 단어 구성 문자: `[a-z0-9']` (대소문자 무시)
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// 왼쪽에서 오른쪽으로 최장 일치 분리
///
/// 각 위치에서 (단어 구간 | 공백 구간 | 단일 문자) 순으로 시도한다.
/// 토큰을 이어 붙이면 입력이 그대로 복원된다.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = if is_word_char(c) {
            TokenKind::Word
        } else if c.is_whitespace() {
            TokenKind::Whitespace
        } else {
            tokens.push(Token::new(TokenKind::Symbol, &text[start..start + c.len_utf8()]));
            continue;
        };

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            let same = match kind {
                TokenKind::Word => is_word_char(next),
                _ => next.is_whitespace(),
            };
            if !same {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        tokens.push(Token::new(kind, &text[start..end]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_basic_split() {
        let tokens = tokenize("ana eh?!");
        assert_eq!(texts(&tokens), vec!["ana", " ", "eh", "?", "!"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[3].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_digits_and_apostrophe_are_word_chars() {
        assert_eq!(texts(&tokenize("7'ales 3ala")), vec!["7'ales", " ", "3ala"]);
        assert_eq!(texts(&tokenize("123")), vec!["123"]);
        assert_eq!(texts(&tokenize("'")), vec!["'"]);
    }

    #[test]
    fn test_whitespace_runs() {
        let tokens = tokenize("a \t\n b");
        assert_eq!(texts(&tokens), vec!["a", " \t\n ", "b"]);
    }

    #[test]
    fn test_case_insensitive_word() {
        assert_eq!(texts(&tokenize("Yalla")), vec!["Yalla"]);
    }

    #[test]
    fn test_non_ascii_single_chars() {
        // 라틴 외 문자는 한 글자씩
        assert_eq!(texts(&tokenize("éé")), vec!["é", "é"]);
        assert_eq!(texts(&tokenize("bسb")), vec!["b", "س", "b"]);
    }

    #[test]
    fn test_reconstructs_input() {
        for input in ["", "hwa bda2?", "  yalla,,bena  ", "3la 2nhy link , CFR follow up?", "x\u{a0}y"] {
            let joined: String = tokenize(input).iter().map(Token::as_str).collect();
            assert_eq!(joined, input);
        }
    }
}
