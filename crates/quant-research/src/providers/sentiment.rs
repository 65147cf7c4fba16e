//! Rule-based sentiment scoring
//!
//! [`LexiconScorer`] follows the VADER approach: every known word carries a
//! valence, nearby intensifiers and negations adjust it, exclamation marks
//! add emphasis, and the sum is squashed into `[-1, 1]`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Scores free text on a `[-1, 1]` scale (negative to positive)
#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// Sentiment of `text`
    fn score(&self, text: &str) -> f64;
}

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").expect("token pattern is valid"));

const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_WINDOW: usize = 3;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "without",
    "cannot", "hardly", "rarely", "seldom", "despite",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("significantly", BOOSTER_INCREMENT),
    ("sharply", BOOSTER_INCREMENT),
    ("strongly", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("marginally", -BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
    ("partly", -BOOSTER_INCREMENT),
];

/// Valences on VADER's -4..4 scale, with a finance-leaning vocabulary
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("advance", 1.3),
    ("beat", 1.4),
    ("beats", 1.4),
    ("best", 3.2),
    ("boom", 2.0),
    ("breakthrough", 2.2),
    ("bullish", 2.0),
    ("confident", 2.2),
    ("deepen", 0.6),
    ("exceed", 1.4),
    ("exceeds", 1.4),
    ("excellent", 2.7),
    ("expands", 1.2),
    ("gain", 2.0),
    ("gains", 1.8),
    ("good", 1.9),
    ("great", 3.1),
    ("grow", 1.4),
    ("growth", 1.6),
    ("happy", 2.7),
    ("improve", 1.9),
    ("improved", 2.1),
    ("innovative", 1.9),
    ("leads", 0.9),
    ("love", 3.2),
    ("optimistic", 1.9),
    ("outperform", 1.8),
    ("partnership", 1.3),
    ("positive", 2.6),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("rally", 1.6),
    ("record", 1.0),
    ("recovery", 1.5),
    ("rise", 1.2),
    ("robust", 1.8),
    ("soar", 2.2),
    ("soars", 2.2),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("surge", 1.8),
    ("upgrade", 1.6),
    ("win", 2.8),
    // negative
    ("awful", -2.0),
    ("bad", -2.5),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("bearish", -2.0),
    ("collapse", -2.4),
    ("concern", -1.3),
    ("concerns", -1.3),
    ("crash", -2.4),
    ("crisis", -3.1),
    ("decline", -1.5),
    ("declines", -1.5),
    ("default", -1.6),
    ("disappointing", -2.2),
    ("downgrade", -1.6),
    ("drop", -1.1),
    ("fail", -2.5),
    ("failure", -2.3),
    ("fear", -2.2),
    ("fears", -2.2),
    ("fraud", -2.8),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("lawsuit", -1.8),
    ("layoffs", -1.9),
    ("lose", -1.7),
    ("loss", -1.3),
    ("losses", -1.7),
    ("miss", -1.2),
    ("misses", -1.2),
    ("negative", -2.7),
    ("plunge", -2.1),
    ("plunges", -2.1),
    ("poor", -2.1),
    ("recession", -2.3),
    ("risk", -1.1),
    ("risky", -1.6),
    ("scandal", -2.6),
    ("selloff", -1.7),
    ("slump", -1.9),
    ("terrible", -2.1),
    ("weak", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
];

/// Lexicon and rule based [`SentimentScorer`]
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    /// Create a scorer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            valences: LEXICON
                .iter()
                .map(|&(word, valence)| (word.to_string(), valence))
                .collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }

    /// Valence of the token at `index` after booster and negation rules
    fn token_valence(&self, tokens: &[String], index: usize) -> Option<f64> {
        let mut valence = *self.valences.get(&tokens[index])?;
        let preceding = &tokens[index.saturating_sub(NEGATION_WINDOW)..index];

        // Boosters closer to the word weigh more.
        for (distance, token) in preceding.iter().rev().enumerate() {
            if let Some(&boost) = self.boosters.get(token.as_str()) {
                let decay = 1.0 - 0.05 * distance as f64;
                let signed = if valence < 0.0 { -boost } else { boost };
                valence += signed * decay;
            }
        }

        if preceding.iter().any(|token| Self::is_negation(token)) {
            valence *= NEGATION_SCALAR;
        }

        Some(valence)
    }

    fn normalize(sum: f64) -> f64 {
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let tokens = Self::tokenize(text);
        let mut sum: f64 = (0..tokens.len())
            .filter_map(|i| self.token_valence(&tokens, i))
            .sum();

        if sum == 0.0 {
            return 0.0;
        }

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        let emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
        sum += emphasis.copysign(sum);

        Self::normalize(sum)
    }
}
