//! Morphological tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse part of speech (Universal Dependencies UPOS, plus `SPACE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Adjective
    Adj,
    /// Adposition (postpositional particles such as が, を)
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
    /// Whitespace token
    Space,
}

impl PartOfSpeech {
    /// Every tag, in UPOS order
    pub const ALL: [PartOfSpeech; 18] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Propn,
        PartOfSpeech::Punct,
        PartOfSpeech::Sconj,
        PartOfSpeech::Sym,
        PartOfSpeech::Verb,
        PartOfSpeech::X,
        PartOfSpeech::Space,
    ];

    /// The tag as written in analyzer output
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech '{0}'")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPartOfSpeech(s.to_string()))
    }
}

/// One morpheme as reported by an analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text as it appears in the input
    pub surface: String,
    /// Coarse part of speech
    pub part_of_speech: PartOfSpeech,
    /// Fine-grained tag, e.g. "動詞-非自立可能"
    pub tag: String,
    /// Dictionary form
    pub lemma: String,
}

impl Token {
    /// Create a token
    pub fn new(
        surface: impl Into<String>,
        part_of_speech: PartOfSpeech,
        tag: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            part_of_speech,
            tag: tag.into(),
            lemma: lemma.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_of_speech_round_trips_through_str() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.as_str().parse::<PartOfSpeech>().unwrap(), pos);
        }
    }

    #[test]
    fn test_part_of_speech_parse_is_case_insensitive() {
        assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("Propn".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Propn);
    }

    #[test]
    fn test_unknown_part_of_speech() {
        let err = "WORD".parse::<PartOfSpeech>().unwrap_err();
        assert_eq!(err.to_string(), "unknown part of speech 'WORD'");
    }

    #[test]
    fn test_serde_uses_upos_names() {
        let json = serde_json::to_string(&PartOfSpeech::Cconj).unwrap();
        assert_eq!(json, "\"CCONJ\"");
        let pos: PartOfSpeech = serde_json::from_str("\"SCONJ\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Sconj);
    }
}
