//! Mapping of IPADIC feature rows onto [`Token`]
//!
//! IPADIC details are `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`.
//! Unknown words may carry fewer fields; missing or `*` fields are skipped.

use super::token::{PartOfSpeech, Token};

const UNSET: &str = "*";

/// Build a token from a surface form and its IPADIC details
pub fn token_from_details(surface: &str, details: &[&str]) -> Token {
    let field = |index: usize| details.get(index).copied().filter(|f| *f != UNSET);

    let tag = details
        .iter()
        .take(4)
        .copied()
        .filter(|f| *f != UNSET && !f.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let lemma = field(6).unwrap_or(surface);

    Token::new(surface, part_of_speech(field(0), field(1)), tag, lemma)
}

/// Coarse UD category for an IPADIC major / minor class
pub fn part_of_speech(major: Option<&str>, minor: Option<&str>) -> PartOfSpeech {
    match (major.unwrap_or_default(), minor.unwrap_or_default()) {
        ("名詞", "固有名詞") => PartOfSpeech::Propn,
        ("名詞", "代名詞") => PartOfSpeech::Pron,
        ("名詞", "数") => PartOfSpeech::Num,
        ("名詞", _) | ("接頭詞", _) => PartOfSpeech::Noun,
        ("動詞", _) => PartOfSpeech::Verb,
        ("形容詞", _) => PartOfSpeech::Adj,
        ("副詞", _) => PartOfSpeech::Adv,
        ("連体詞", _) => PartOfSpeech::Det,
        ("接続詞", _) => PartOfSpeech::Cconj,
        ("助詞", "接続助詞") => PartOfSpeech::Sconj,
        ("助詞", "終助詞") => PartOfSpeech::Part,
        ("助詞", _) => PartOfSpeech::Adp,
        ("助動詞", _) => PartOfSpeech::Aux,
        ("感動詞", _) | ("フィラー", _) => PartOfSpeech::Intj,
        ("記号", "空白") => PartOfSpeech::Space,
        ("記号", "句点" | "読点" | "括弧開" | "括弧閉") => PartOfSpeech::Punct,
        ("記号", _) => PartOfSpeech::Sym,
        _ => PartOfSpeech::X,
    }
}
