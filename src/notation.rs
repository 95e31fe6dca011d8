//! Okurigana and furigana rendering
//!
//! Each patched token is split into notations: a base string, its script kind,
//! its reading in hiragana and its pronunciation in katakana. Mixed
//! kanji/kana tokens are aligned against their reading so that only the kanji
//! runs get annotated.

use std::fmt::Write;

use regex::Regex;

use crate::analysis::Token;
use crate::config::{ConversionOptions, Mode, Target};
use crate::core::converter::{to_hiragana, to_katakana};
use crate::core::romaji::to_romaji;
use crate::core::unicode::{is_kanji, is_katakana};
use crate::detection::{get_str_type, StrType};

/// Script kind of a notation base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotationKind {
    Kanji = 1,
    Kana = 2,
    Other = 3,
}

/// One annotated unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    pub base: String,
    pub kind: NotationKind,
    /// Reading in hiragana
    pub reading: String,
    /// Pronunciation in katakana, used for romaji
    pub pronunciation: String,
}

impl Notation {
    fn new(base: impl Into<String>, kind: NotationKind, reading: String, pronunciation: String) -> Self {
        Self {
            base: base.into(),
            kind,
            reading,
            pronunciation,
        }
    }

    fn kana(base: &str) -> Self {
        Self::new(base, NotationKind::Kana, to_hiragana(base), to_katakana(base))
    }
}

/// Split patched tokens into notations
pub fn build_notations(tokens: &[Token]) -> Vec<Notation> {
    let mut notations = Vec::with_capacity(tokens.len());

    for token in tokens {
        let surface = token.surface_form.as_str();
        let reading = token.reading_text();
        let pronunciation = token.pronunciation_text();

        match get_str_type(surface) {
            StrType::Kanji => notations.push(Notation::new(
                surface,
                NotationKind::Kanji,
                to_hiragana(reading),
                pronunciation.to_string(),
            )),
            StrType::Mixed => match align_mixed(surface, reading) {
                Some(aligned) => notations.extend(aligned),
                None => {
                    log::warn!("could not align reading {} with {}", reading, surface);
                    notations.push(Notation::new(
                        surface,
                        NotationKind::Kanji,
                        to_hiragana(reading),
                        pronunciation.to_string(),
                    ));
                }
            },
            StrType::Kana => {
                let mut readings = reading.chars();
                let mut pronunciations = pronunciation.chars();
                for ch in surface.chars() {
                    let read = readings.next().unwrap_or(ch);
                    let pron = pronunciations.next().unwrap_or(read);
                    notations.push(Notation::new(
                        ch,
                        NotationKind::Kana,
                        to_hiragana(&read.to_string()),
                        pron.to_string(),
                    ));
                }
            }
            StrType::Other => {
                for ch in surface.chars() {
                    let s = ch.to_string();
                    notations.push(Notation::new(ch, NotationKind::Other, s.clone(), s));
                }
            }
        }
    }

    notations
}

enum Segment {
    KanjiRun(String),
    Char(char),
}

fn segments(surface: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for ch in surface.chars() {
        if !is_kanji(ch) {
            segments.push(Segment::Char(ch));
            continue;
        }
        if let Some(Segment::KanjiRun(run)) = segments.last_mut() {
            run.push(ch);
            continue;
        }
        segments.push(Segment::KanjiRun(ch.to_string()));
    }
    segments
}

/// Match the kana of a mixed token against its reading
///
/// 食べ物 / タベモノ -> 食(た) べ 物(もの)
fn align_mixed(surface: &str, reading: &str) -> Option<Vec<Notation>> {
    let segments = segments(surface);

    let mut pattern = String::from("^");
    for segment in &segments {
        match segment {
            Segment::KanjiRun(_) => pattern.push_str("(.*?)"),
            Segment::Char(ch) => pattern.push_str(&regex::escape(&to_hiragana(&ch.to_string()))),
        }
    }
    pattern.push('$');

    let re = Regex::new(&pattern).ok()?;
    let hiragana_reading = to_hiragana(reading);
    let captures = re.captures(&hiragana_reading)?;
    let mut groups = captures.iter().skip(1);

    let mut notations = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::KanjiRun(run) => {
                let kana = groups.next()??.as_str();
                notations.push(Notation::new(
                    run,
                    NotationKind::Kanji,
                    kana.to_string(),
                    to_katakana(kana),
                ));
            }
            Segment::Char(ch) => notations.push(Notation::kana(&ch.to_string())),
        }
    }
    Some(notations)
}

/// Hiragana reading of a kanji token that keeps its katakana
///
/// ブラック企業 / ブラックキギョウ -> ブラックきぎょう
pub(crate) fn hiragana_keeping_katakana(surface: &str, reading: &str) -> String {
    let hiragana_reading = to_hiragana(reading);

    let mut pattern = String::new();
    for ch in surface.chars() {
        if is_kanji(ch) {
            pattern.push_str("(.*)");
        } else if is_katakana(ch) {
            pattern.push_str(&regex::escape(&to_hiragana(&ch.to_string())));
        } else {
            pattern.push_str(&regex::escape(&ch.to_string()));
        }
    }

    let captures = Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(&hiragana_reading));
    let Some(captures) = captures else {
        log::trace!("no katakana alignment for {}, using full reading", surface);
        return hiragana_reading;
    };

    let mut groups = captures.iter().skip(1);
    let mut output = String::with_capacity(hiragana_reading.len());
    for ch in surface.chars() {
        if is_kanji(ch) {
            if let Some(group) = groups.next().flatten() {
                output.push_str(group.as_str());
            }
        } else {
            output.push(ch);
        }
    }
    output
}

/// Render notations for okurigana or furigana mode
pub fn render_notations(notations: &[Notation], options: &ConversionOptions) -> String {
    let ds = options.delimiter_start.as_str();
    let de = options.delimiter_end.as_str();
    let mut output = String::new();

    if options.to == Target::Romaji && options.mode == Mode::Furigana {
        output.push_str("<ruby>");
        for notation in notations {
            let romaji = to_romaji(&notation.pronunciation, options.romaji_system);
            let _ = write!(
                output,
                "{}<rp>{}</rp><rt>{}</rt><rp>{}</rp>",
                notation.base, ds, romaji, de
            );
        }
        output.push_str("</ruby>");
        return output;
    }

    for notation in notations {
        if notation.kind != NotationKind::Kanji {
            output.push_str(&notation.base);
            continue;
        }

        let reading = match options.to {
            Target::Hiragana => notation.reading.clone(),
            Target::Katakana => to_katakana(&notation.reading),
            Target::Romaji => to_romaji(&notation.pronunciation, options.romaji_system),
        };

        let _ = match options.mode {
            Mode::Furigana => write!(
                output,
                "<ruby>{}<rp>{}</rp><rt>{}</rt><rp>{}</rp></ruby>",
                notation.base, ds, reading, de
            ),
            _ => write!(output, "{}{}{}{}", notation.base, ds, reading, de),
        };
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanji(base: &str, reading: &str, pronunciation: &str) -> Notation {
        Notation::new(
            base,
            NotationKind::Kanji,
            reading.to_string(),
            pronunciation.to_string(),
        )
    }

    #[test]
    fn test_build_kanji() {
        let tokens = vec![Token::new("東京")
            .with_reading("トウキョウ")
            .with_pronunciation("トーキョー")];
        assert_eq!(build_notations(&tokens), vec![kanji("東京", "とうきょう", "トーキョー")]);
    }

    #[test]
    fn test_build_mixed() {
        let tokens = vec![Token::new("食べ物").with_reading("タベモノ")];
        let notations = build_notations(&tokens);
        assert_eq!(
            notations,
            vec![
                kanji("食", "た", "タ"),
                Notation::kana("べ"),
                kanji("物", "もの", "モノ"),
            ]
        );
    }

    #[test]
    fn test_build_mixed_groups_kanji_runs() {
        let tokens = vec![Token::new("話し合い").with_reading("ハナシアイ")];
        let notations = build_notations(&tokens);
        assert_eq!(notations[0], kanji("話", "はな", "ハナ"));
        assert_eq!(notations[2], kanji("合", "あ", "ア"));

        let tokens = vec![Token::new("大人しい").with_reading("オトナシイ")];
        let notations = build_notations(&tokens);
        assert_eq!(notations.len(), 3);
        assert_eq!(notations[0], kanji("大人", "おとな", "オトナ"));
    }

    #[test]
    fn test_build_mixed_katakana_literal() {
        let tokens = vec![Token::new("ダメ元").with_reading("ダメモト")];
        let notations = build_notations(&tokens);
        assert_eq!(notations[0].base, "ダ");
        assert_eq!(notations[0].kind, NotationKind::Kana);
        assert_eq!(notations[2], kanji("元", "もと", "モト"));
    }

    #[test]
    fn test_build_mixed_fallback() {
        // reading does not contain the kana of the surface
        let tokens = vec![Token::new("行く").with_reading("ユキ")];
        assert_eq!(build_notations(&tokens), vec![kanji("行く", "ゆき", "ユキ")]);
    }

    #[test]
    fn test_build_kana_and_other() {
        let tokens = vec![
            Token::new("ありがとう")
                .with_reading("アリガトウ")
                .with_pronunciation("アリガトー"),
            Token::new("!?"),
        ];
        let notations = build_notations(&tokens);
        assert_eq!(notations.len(), 7);
        assert_eq!(notations[4].base, "う");
        assert_eq!(notations[4].reading, "う");
        assert_eq!(notations[4].pronunciation, "ー");
        assert_eq!(notations[5].kind, NotationKind::Other);
        assert_eq!(notations[6].reading, "?");
    }

    #[test]
    fn test_hiragana_keeping_katakana() {
        assert_eq!(hiragana_keeping_katakana("ブラック企業", "ブラックキギョウ"), "ブラックきぎょう");
        assert_eq!(hiragana_keeping_katakana("小テスト", "ショウテスト"), "しょうテスト");
    }

    #[test]
    fn test_hiragana_keeping_katakana_no_match() {
        assert_eq!(hiragana_keeping_katakana("ウ冠", "ワカンムリ"), "わかんむり");
    }

    #[test]
    fn test_render_okurigana() {
        let notations = vec![kanji("食", "た", "タ"), Notation::kana("べ")];
        let options = ConversionOptions::new().with_mode(Mode::Okurigana);
        assert_eq!(render_notations(&notations, &options), "食(た)べ");

        let options = options.with_target(Target::Katakana).with_delimiters("[", "]");
        assert_eq!(render_notations(&notations, &options), "食[タ]べ");
    }

    #[test]
    fn test_render_furigana() {
        let notations = vec![kanji("東京", "とうきょう", "トーキョー"), Notation::kana("へ")];
        let options = ConversionOptions::new().with_mode(Mode::Furigana);
        assert_eq!(
            render_notations(&notations, &options),
            "<ruby>東京<rp>(</rp><rt>とうきょう</rt><rp>)</rp></ruby>へ"
        );
    }

    #[test]
    fn test_render_romaji_okurigana() {
        let notations = vec![kanji("東京", "とうきょう", "トーキョー"), Notation::kana("へ")];
        let options = ConversionOptions::new()
            .with_target(Target::Romaji)
            .with_mode(Mode::Okurigana);
        assert_eq!(render_notations(&notations, &options), "東京(tōkyō)へ");
    }

    #[test]
    fn test_render_romaji_furigana_wraps_everything() {
        let notations = vec![kanji("東京", "とうきょう", "トーキョー"), Notation::kana("へ")];
        let options = ConversionOptions::new()
            .with_target(Target::Romaji)
            .with_mode(Mode::Furigana)
            .with_romaji_system(crate::config::RomajiSystem::Passport);
        assert_eq!(
            render_notations(&notations, &options),
            "<ruby>東京<rp>(</rp><rt>tokyo</rt><rp>)</rp>へ<rp>(</rp><rt>he</rt><rp>)</rp></ruby>"
        );
    }
}
