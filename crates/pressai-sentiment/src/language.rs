//! Release-level language detection.

use serde::Serialize;
use whatlang::Lang;

/// Language classifier for a text, e.g. `"en"`, `"de"` or `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self("unknown".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// German text selects the German sentence rules, keywords and lexicon.
    #[must_use]
    pub fn is_german(&self) -> bool {
        self.0.starts_with("de")
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classifies the dominant language of a text.
///
/// Implementations must be deterministic and must never fail: anything that
/// cannot be classified is [`LanguageTag::unknown`].
pub trait DetectLanguage {
    fn detect(&self, text: &str) -> LanguageTag;
}

/// Trigram-based detector backed by `whatlang`.
///
/// `whatlang` has no random component, so identical input always yields the
/// same tag across runs and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl DetectLanguage for WhatlangDetector {
    fn detect(&self, text: &str) -> LanguageTag {
        if text.trim().is_empty() {
            return LanguageTag::unknown();
        }
        match whatlang::detect(text) {
            Some(info) => LanguageTag::new(short_code(info.lang())),
            None => {
                tracing::debug!("language detection gave no result");
                LanguageTag::unknown()
            }
        }
    }
}

/// Two-letter tag for common languages, ISO 639-3 code otherwise.
fn short_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Por => "pt",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Rus => "ru",
        other => other.code(),
    }
}
