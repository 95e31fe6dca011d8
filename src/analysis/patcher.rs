//! Token stream repair before rendering
//!
//! Three passes over the analyzer output:
//! 1. every token gets a katakana reading
//! 2. a verb absorbs a following auxiliary う (行こ + う -> 行こう)
//! 3. a verb or adjective ending in small tsu absorbs the next token
//!    (行っ + た -> 行った)

use crate::core::converter::to_katakana;
use crate::core::unicode::is_sokuon;
use crate::detection::{has_hiragana, has_japanese, is_all_kana};

use super::token::{non_empty, Token, POS_ADJECTIVE, POS_AUXILIARY_VERB, POS_VERB};

/// Fill in readings and merge split conjugations
pub fn patch_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let tokens: Vec<Token> = tokens.into_iter().map(infer_reading).collect();
    let tokens = merge_auxiliary_u(tokens);
    merge_sokuon_tail(tokens)
}

fn infer_reading(mut token: Token) -> Token {
    if !has_japanese(&token.surface_form) {
        token.reading = Some(token.surface_form.clone());
        return token;
    }

    token.reading = match non_empty(&token.reading) {
        None if is_all_kana(&token.surface_form) => Some(to_katakana(&token.surface_form)),
        None => Some(token.surface_form.clone()),
        Some(reading) if has_hiragana(reading) => Some(to_katakana(reading)),
        Some(reading) => Some(reading.to_string()),
    };
    token
}

fn is_auxiliary_u(token: &Token) -> bool {
    token.has_pos(POS_AUXILIARY_VERB) && matches!(token.surface_form.as_str(), "う" | "ウ")
}

fn merge_auxiliary_u(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let verb = merged.last_mut().filter(|prev| prev.has_pos(POS_VERB));
        if let Some(prev) = verb.filter(|_| is_auxiliary_u(&token)) {
            log::trace!("merging auxiliary {} into {}", token.surface_form, prev.surface_form);
            let pronunciation = match non_empty(&prev.pronunciation) {
                Some(p) => format!("{}ー", p),
                None => format!("{}ー", prev.reading_text()),
            };
            let reading = format!("{}ウ", prev.reading_text());
            prev.surface_form.push('う');
            prev.pronunciation = Some(pronunciation);
            prev.reading = Some(reading);
            continue;
        }
        merged.push(token);
    }

    merged
}

fn ends_in_sokuon(token: &Token) -> bool {
    (token.has_pos(POS_VERB) || token.has_pos(POS_ADJECTIVE))
        && token.surface_form.chars().count() > 1
        && token.surface_form.chars().next_back().is_some_and(is_sokuon)
}

fn merge_sokuon_tail(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let Some(prev) = merged.last_mut().filter(|prev| ends_in_sokuon(prev)) {
            log::trace!("merging {} into {}", token.surface_form, prev.surface_form);
            let pronunciation = match non_empty(&prev.pronunciation) {
                Some(p) => format!("{}{}", p, token.pronunciation_text()),
                None => format!("{}{}", prev.reading_text(), token.reading_text()),
            };
            let reading = format!("{}{}", prev.reading_text(), token.reading_text());
            prev.surface_form.push_str(&token.surface_form);
            prev.pronunciation = Some(pronunciation);
            prev.reading = Some(reading);
            continue;
        }
        merged.push(token);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.surface_form.as_str()).collect()
    }

    #[test]
    fn test_reading_from_kana_surface() {
        let tokens = patch_tokens(vec![Token::new("ひらがな"), Token::new("カナ")]);
        assert_eq!(tokens[0].reading.as_deref(), Some("ヒラガナ"));
        assert_eq!(tokens[1].reading.as_deref(), Some("カナ"));
    }

    #[test]
    fn test_reading_unknown_kanji_keeps_surface() {
        let tokens = patch_tokens(vec![Token::new("𠀋")]);
        assert_eq!(tokens[0].reading.as_deref(), Some("𠀋"));
    }

    #[test]
    fn test_reading_hiragana_normalized() {
        let tokens = patch_tokens(vec![Token::new("猫").with_reading("ねこ")]);
        assert_eq!(tokens[0].reading.as_deref(), Some("ネコ"));
    }

    #[test]
    fn test_reading_empty_treated_as_missing() {
        let tokens = patch_tokens(vec![Token::new("すし").with_reading("")]);
        assert_eq!(tokens[0].reading.as_deref(), Some("スシ"));
    }

    #[test]
    fn test_reading_non_japanese() {
        let tokens = patch_tokens(vec![
            Token::new("Rust").with_reading("ラスト"),
            Token::new("。"),
        ]);
        assert_eq!(tokens[0].reading.as_deref(), Some("Rust"));
        assert_eq!(tokens[1].reading.as_deref(), Some("。"));
    }

    #[test]
    fn test_merge_auxiliary_u() {
        let tokens = patch_tokens(vec![
            Token::new("行こ").with_reading("イコ").with_pos(POS_VERB),
            Token::new("う").with_reading("ウ").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["行こう"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("イコウ"));
        assert_eq!(tokens[0].pronunciation.as_deref(), Some("イコー"));
    }

    #[test]
    fn test_merge_auxiliary_u_extends_pronunciation() {
        let tokens = patch_tokens(vec![
            Token::new("しよ")
                .with_reading("シヨ")
                .with_pronunciation("シヨ")
                .with_pos(POS_VERB),
            Token::new("ウ").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["しよう"]);
        assert_eq!(tokens[0].pronunciation.as_deref(), Some("シヨー"));
    }

    #[test]
    fn test_auxiliary_u_needs_verb() {
        let tokens = patch_tokens(vec![
            Token::new("そ").with_pos("副詞"),
            Token::new("う").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["そ", "う"]);

        let tokens = patch_tokens(vec![
            Token::new("食べ").with_reading("タベ").with_pos(POS_VERB),
            Token::new("う").with_pos("助詞"),
        ]);
        assert_eq!(surfaces(&tokens), vec!["食べ", "う"]);
    }

    #[test]
    fn test_auxiliary_u_chains() {
        let tokens = patch_tokens(vec![
            Token::new("行こ").with_reading("イコ").with_pos(POS_VERB),
            Token::new("う").with_pos(POS_AUXILIARY_VERB),
            Token::new("う").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["行こうう"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("イコウウ"));
        assert_eq!(tokens[0].pronunciation.as_deref(), Some("イコーー"));
    }

    #[test]
    fn test_merge_sokuon_tail() {
        let tokens = patch_tokens(vec![
            Token::new("行っ").with_reading("イッ").with_pos(POS_VERB),
            Token::new("た").with_reading("タ").with_pos(POS_AUXILIARY_VERB),
            Token::new("。").with_pos("記号"),
        ]);
        assert_eq!(surfaces(&tokens), vec!["行った", "。"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("イッタ"));
        assert_eq!(tokens[0].pronunciation.as_deref(), Some("イッタ"));
    }

    #[test]
    fn test_merge_sokuon_tail_uses_next_pronunciation() {
        let tokens = patch_tokens(vec![
            Token::new("よかっ")
                .with_reading("ヨカッ")
                .with_pronunciation("ヨカッ")
                .with_pos(POS_ADJECTIVE),
            Token::new("たろ")
                .with_reading("タロ")
                .with_pronunciation("タロ")
                .with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["よかったろ"]);
        assert_eq!(tokens[0].pronunciation.as_deref(), Some("ヨカッタロ"));
    }

    #[test]
    fn test_sokuon_tail_cascades() {
        let tokens = patch_tokens(vec![
            Token::new("言っ").with_reading("イッ").with_pos(POS_VERB),
            Token::new("ちゃっ").with_reading("チャッ").with_pos(POS_AUXILIARY_VERB),
            Token::new("た").with_reading("タ").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["言っちゃった"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("イッチャッタ"));
    }

    #[test]
    fn test_sokuon_tail_requires_two_chars_and_pos() {
        let tokens = patch_tokens(vec![
            Token::new("っ").with_pos(POS_VERB),
            Token::new("た").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["っ", "た"]);

        let tokens = patch_tokens(vec![
            Token::new("あっ").with_pos("感動詞"),
            Token::new("た").with_pos(POS_AUXILIARY_VERB),
        ]);
        assert_eq!(surfaces(&tokens), vec!["あっ", "た"]);
    }

    #[test]
    fn test_sokuon_tail_at_end() {
        let tokens = patch_tokens(vec![Token::new("行っ").with_reading("イッ").with_pos(POS_VERB)]);
        assert_eq!(surfaces(&tokens), vec!["行っ"]);
        assert_eq!(tokens[0].pronunciation, None);
    }

    #[test]
    fn test_empty() {
        assert!(patch_tokens(Vec::new()).is_empty());
    }
}
