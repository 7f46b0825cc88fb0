//! Stop-word policy
//!
//! A token is kept only if its part of speech, fine tag, lemma and surface
//! all pass. The default policy removes Japanese function words and a few
//! boilerplate verbs and fillers.
//!
//! Lemma and surface comparisons are made on composed (NFC) text, so a policy
//! entry "する" still matches a token produced from decomposed normalizer
//! output.

use super::token::{PartOfSpeech, Token};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// The default policy as a commented TOML document
pub const JAPANESE_POLICY_TOML: &str = include_str!("../../configs/stop_words/japanese.toml");

/// Parts of speech removed by the default policy
const EXCLUDED_POS: [PartOfSpeech; 9] = [
    PartOfSpeech::Adp,
    PartOfSpeech::Aux,
    PartOfSpeech::Punct,
    PartOfSpeech::Sym,
    PartOfSpeech::Intj,
    PartOfSpeech::Sconj,
    PartOfSpeech::Det,
    PartOfSpeech::Part,
    PartOfSpeech::X,
];

/// Fine-tag marker of bound forms ("can be non-independent")
const BOUND_FORM_MARKER: &str = "非自立可能";

/// する (do), こと (thing), ある / 有る / いる (be, exist)
const EXCLUDED_LEMMAS: [&str; 5] = ["する", "こと", "ある", "いる", "有る"];

/// いう (casual "say"), つい (just, unintentionally), まあ (well)
const EXCLUDED_SURFACES: [&str; 3] = ["いう", "つい", "まあ"];

fn composed(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// On-disk form of a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicyFile {
    stop_words: PolicySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PolicySection {
    #[serde(default)]
    excluded_pos: Vec<PartOfSpeech>,
    #[serde(default)]
    bound_form_marker: Option<String>,
    #[serde(default)]
    excluded_lemmas: Vec<String>,
    #[serde(default)]
    excluded_surfaces: Vec<String>,
}

/// Token filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordPolicy {
    excluded_pos: HashSet<PartOfSpeech>,
    bound_form_marker: Option<String>,
    excluded_lemmas: HashSet<String>,
    excluded_surfaces: HashSet<String>,
}

impl Default for StopWordPolicy {
    fn default() -> Self {
        Self::japanese()
    }
}

impl StopWordPolicy {
    /// The default Japanese policy
    pub fn japanese() -> Self {
        Self::new(
            EXCLUDED_POS,
            Some(BOUND_FORM_MARKER),
            EXCLUDED_LEMMAS,
            EXCLUDED_SURFACES,
        )
    }

    /// A policy that keeps everything
    pub fn permissive() -> Self {
        Self::new(
            Vec::<PartOfSpeech>::new(),
            None::<&str>,
            Vec::<String>::new(),
            Vec::<String>::new(),
        )
    }

    /// Build a policy from its parts
    pub fn new<P, L, S>(
        excluded_pos: P,
        bound_form_marker: Option<impl Into<String>>,
        excluded_lemmas: L,
        excluded_surfaces: S,
    ) -> Self
    where
        P: IntoIterator<Item = PartOfSpeech>,
        L: IntoIterator,
        L::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            excluded_pos: excluded_pos.into_iter().collect(),
            bound_form_marker: bound_form_marker
                .map(Into::into)
                .filter(|marker: &String| !marker.is_empty()),
            excluded_lemmas: excluded_lemmas
                .into_iter()
                .map(|w| composed(w.as_ref()).into_owned())
                .collect(),
            excluded_surfaces: excluded_surfaces
                .into_iter()
                .map(|w| composed(w.as_ref()).into_owned())
                .collect(),
        }
    }

    /// Parse a policy from TOML
    ///
    /// ```toml
    /// [stop_words]
    /// excluded_pos = ["ADP", "AUX"]
    /// bound_form_marker = "非自立可能"
    /// excluded_lemmas = ["する"]
    /// excluded_surfaces = ["まあ"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: PolicyFile = toml::from_str(content)?;
        let section = file.stop_words;

        if section.excluded_lemmas.iter().any(|w| w.trim().is_empty())
            || section.excluded_surfaces.iter().any(|w| w.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "stop words must not be empty strings".to_string(),
            ));
        }

        Ok(Self::new(
            section.excluded_pos,
            section.bound_form_marker,
            section.excluded_lemmas,
            section.excluded_surfaces,
        ))
    }

    /// Load a policy from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to the TOML accepted by [`StopWordPolicy::from_toml_str`]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let mut excluded_pos: Vec<PartOfSpeech> = self.excluded_pos.iter().copied().collect();
        excluded_pos.sort_by_key(|pos| PartOfSpeech::ALL.iter().position(|p| p == pos));
        let mut excluded_lemmas: Vec<String> = self.excluded_lemmas.iter().cloned().collect();
        excluded_lemmas.sort();
        let mut excluded_surfaces: Vec<String> = self.excluded_surfaces.iter().cloned().collect();
        excluded_surfaces.sort();

        let file = PolicyFile {
            stop_words: PolicySection {
                excluded_pos,
                bound_form_marker: self.bound_form_marker.clone(),
                excluded_lemmas,
                excluded_surfaces,
            },
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Whether `token` survives filtering
    pub fn allows(&self, token: &Token) -> bool {
        if self.excluded_pos.contains(&token.part_of_speech) {
            return false;
        }

        if let Some(marker) = &self.bound_form_marker {
            if token.tag.contains(marker.as_str()) {
                return false;
            }
        }

        !self.excluded_lemmas.contains(&*composed(&token.lemma))
            && !self.excluded_surfaces.contains(&*composed(&token.surface))
    }

    /// Excluded parts of speech
    pub fn excluded_pos(&self) -> &HashSet<PartOfSpeech> {
        &self.excluded_pos
    }

    /// Excluded lemmas, composed
    pub fn excluded_lemmas(&self) -> &HashSet<String> {
        &self.excluded_lemmas
    }

    /// Excluded surface forms, composed
    pub fn excluded_surfaces(&self) -> &HashSet<String> {
        &self.excluded_surfaces
    }

    /// Bound-form tag marker, if any
    pub fn bound_form_marker(&self) -> Option<&str> {
        self.bound_form_marker.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(surface: &str, pos: PartOfSpeech, tag: &str, lemma: &str) -> Token {
        Token::new(surface, pos, tag, lemma)
    }

    #[test]
    fn test_excluded_parts_of_speech() {
        let policy = StopWordPolicy::japanese();
        assert!(!policy.allows(&token("が", PartOfSpeech::Adp, "助詞-格助詞", "が")));
        assert!(!policy.allows(&token("です", PartOfSpeech::Aux, "助動詞", "です")));
        assert!(!policy.allows(&token("。", PartOfSpeech::Punct, "補助記号-句点", "。")));
        assert!(policy.allows(&token("銀座", PartOfSpeech::Propn, "名詞-固有名詞-地名-一般", "銀座")));
    }

    #[test]
    fn test_embedded_default_matches_japanese() {
        let embedded = StopWordPolicy::from_toml_str(JAPANESE_POLICY_TOML).unwrap();
        assert_eq!(embedded, StopWordPolicy::japanese());
    }

    #[test]
    fn test_bound_form_marker() {
        let policy = StopWordPolicy::japanese();
        assert!(!policy.allows(&token("くる", PartOfSpeech::Verb, "動詞-非自立可能", "来る")));
        assert!(policy.allows(&token("食べる", PartOfSpeech::Verb, "動詞-一般", "食べる")));
    }

    #[test]
    fn test_excluded_lemmas_and_surfaces() {
        let policy = StopWordPolicy::japanese();
        assert!(!policy.allows(&token("し", PartOfSpeech::Verb, "動詞-一般", "する")));
        assert!(!policy.allows(&token("こと", PartOfSpeech::Noun, "名詞-普通名詞-一般", "こと")));
        assert!(!policy.allows(&token("有っ", PartOfSpeech::Verb, "動詞-一般", "有る")));
        assert!(!policy.allows(&token("まあ", PartOfSpeech::Adv, "副詞", "まあ")));
        assert!(!policy.allows(&token("つい", PartOfSpeech::Adv, "副詞", "つい")));
    }

    #[test]
    fn test_decomposed_token_matches_composed_entry() {
        let policy = StopWordPolicy::new(
            Vec::<PartOfSpeech>::new(),
            None::<&str>,
            ["ござる"],
            Vec::<String>::new(),
        );
        let decomposed: String = "ござる".nfd().collect();
        assert_ne!(decomposed, "ござる");
        assert!(!policy.allows(&token("ござい", PartOfSpeech::Verb, "動詞", &decomposed)));
    }

    #[test]
    fn test_permissive_keeps_everything() {
        let policy = StopWordPolicy::permissive();
        assert!(policy.allows(&token("が", PartOfSpeech::Adp, "助詞-格助詞", "が")));
        assert!(policy.allows(&token("し", PartOfSpeech::Verb, "動詞-非自立可能", "する")));
    }

    #[test]
    fn test_toml_round_trip_of_default() {
        let toml = StopWordPolicy::japanese().to_toml().unwrap();
        assert!(toml.contains("[stop_words]"));
        assert!(toml.contains("非自立可能"));
        let parsed = StopWordPolicy::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, StopWordPolicy::japanese());
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(matches!(
            StopWordPolicy::from_toml_str("[stop_words]\nexcluded_pos = [\"WORD\"]"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StopWordPolicy::from_toml_str("[stop_words]\nexcluded_lemmas = [\" \"]"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(StopWordPolicy::from_toml_str("").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.toml");
        fs::write(&path, "[stop_words]\nexcluded_pos = [\"PUNCT\"]\n").unwrap();

        let policy = StopWordPolicy::from_file(&path).unwrap();
        assert_eq!(policy.excluded_pos().len(), 1);
        assert!(policy.bound_form_marker().is_none());

        let missing = StopWordPolicy::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
