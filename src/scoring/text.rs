//! Keyword-based text risk scoring

use crate::{RedFlag, RiskLevel, TextScore, clamp_score};

/// A red flag with its lowercased needle precomputed
#[derive(Debug, Clone)]
struct CompiledFlag {
    flag: RedFlag,
    needle: String,
}

/// Ordered, immutable table of red flags.
///
/// Order only affects the order of reported hits, never the score.
#[derive(Debug, Clone, Default)]
pub struct RedFlagTable {
    flags: Vec<CompiledFlag>,
}

impl RedFlagTable {
    pub fn new(flags: impl IntoIterator<Item = RedFlag>) -> Self {
        let flags = flags
            .into_iter()
            .map(|flag| CompiledFlag {
                needle: flag.keyword.to_lowercase(),
                flag,
            })
            .collect();
        Self { flags }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RedFlag> {
        self.flags.iter().map(|c| &c.flag)
    }
}

/// Scores free-form text against a [`RedFlagTable`]
#[derive(Debug, Clone)]
pub struct TextScorer {
    table: RedFlagTable,
}

impl TextScorer {
    pub fn new(table: RedFlagTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RedFlagTable {
        &self.table
    }

    /// Score `text`; `None` is treated as empty.
    ///
    /// Every table entry whose keyword occurs in the lowercased text adds
    /// its weight, so synonyms stack. The sum is capped at 100.
    pub fn score<'a>(&self, text: impl Into<Option<&'a str>>) -> TextScore {
        let normalized = text.into().unwrap_or_default().to_lowercase();
        if normalized.is_empty() {
            return TextScore::empty();
        }

        let mut total: u32 = 0;
        let mut hits = Vec::new();
        for compiled in &self.table.flags {
            if normalized.contains(&compiled.needle) {
                total = total.saturating_add(compiled.flag.weight);
                hits.push(compiled.flag.keyword.clone());
            }
        }

        let score = clamp_score(total);
        tracing::debug!(score, hits = hits.len(), "scored text");

        TextScore {
            score,
            level: RiskLevel::from_score(score),
            hits,
        }
    }
}
