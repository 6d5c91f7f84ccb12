//! Free-text checks used by the education and bonus evaluators.
//!
//! Each check is a [`TextCriterion`] so locale-specific keyword lists or smarter matchers
//! can be swapped in through [`Heuristics`] without touching the aggregation.

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;

/// Answers a single yes/no question about an already lower-cased block of text.
pub trait TextCriterion: Send + Sync + fmt::Debug {
    fn is_satisfied_by(&self, text: &str) -> bool;
}

/// Satisfied when any keyword occurs as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCriterion {
    keywords: Vec<String>,
}

impl KeywordCriterion {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl TextCriterion for KeywordCriterion {
    fn is_satisfied_by(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
    }
}

/// Satisfied when the regular expression finds a match anywhere in the text.
#[derive(Debug, Clone)]
pub struct PatternCriterion {
    pattern: Regex,
}

impl PatternCriterion {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl TextCriterion for PatternCriterion {
    fn is_satisfied_by(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

const RELEVANT_EDUCATION: [&str; 7] = [
    "экономика",
    "менеджмент",
    "маркетинг",
    "бизнес",
    "финан",
    "управлен",
    "коммерц",
];

const NOTABLE_EMPLOYERS: [&str; 14] = [
    "яндекс",
    "google",
    "microsoft",
    "сбер",
    "банк",
    "альфа",
    "авито",
    "mail.ru",
    "мегафон",
    "билайн",
    "ozon",
    "wildberries",
    "тинькофф",
    "втб",
];

const QUANTIFIED_ACHIEVEMENT: &str = r"\d+%|\+\d+|увеличил|снизил|рост|план|выполн|перевыполн";

fn quantified_achievement_regex() -> Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(QUANTIFIED_ACHIEVEMENT).expect("achievement pattern compiles"))
        .clone()
}

/// The set of free-text criteria an engine evaluates against.
#[derive(Debug, Clone)]
pub struct Heuristics {
    pub relevant_education: Arc<dyn TextCriterion>,
    pub notable_employer: Arc<dyn TextCriterion>,
    pub quantified_achievement: Arc<dyn TextCriterion>,
}

impl Heuristics {
    /// Keyword lists tuned for Russian-language sales resumes.
    pub fn russian_sales() -> Self {
        Self {
            relevant_education: Arc::new(KeywordCriterion::new(RELEVANT_EDUCATION)),
            notable_employer: Arc::new(KeywordCriterion::new(NOTABLE_EMPLOYERS)),
            quantified_achievement: Arc::new(PatternCriterion::from_regex(
                quantified_achievement_regex(),
            )),
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::russian_sales()
    }
}
