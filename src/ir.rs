use serde::{Deserialize, Serialize};

/// Scores per category (rows) and company (columns), as parsed from a KPI table.
///
/// `scores[category][company]` always has `companies.len()` entries per row and one row per
/// category. The extractor never produces a table with no companies or no categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub companies: Vec<String>,
    pub categories: Vec<String>,
    pub scores: Vec<Vec<f32>>,
}

impl ScoreTable {
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Score for a cell, `0.0` when either index is out of range.
    pub fn score(&self, category: usize, company: usize) -> f32 {
        self.scores
            .get(category)
            .and_then(|row| row.get(company))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_rectangular(&self) -> bool {
        self.scores.len() == self.categories.len()
            && self
                .scores
                .iter()
                .all(|row| row.len() == self.companies.len())
    }
}

/// The source document cut around its KPI table.
///
/// Each segment is a contiguous slice of the original text, line endings included, so
/// `before_table + table + after_table` is the original input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSplit {
    pub before_table: String,
    pub table: String,
    pub after_table: String,
}

impl DocumentSplit {
    pub fn reconstruct(&self) -> String {
        let len = self.before_table.len() + self.table.len() + self.after_table.len();
        let mut out = String::with_capacity(len);
        out.push_str(&self.before_table);
        out.push_str(&self.table);
        out.push_str(&self.after_table);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_out_of_range_is_zero() {
        let table = ScoreTable {
            companies: vec!["A".to_string()],
            categories: vec!["X".to_string()],
            scores: vec![vec![3.0]],
        };
        assert_eq!(table.score(0, 0), 3.0);
        assert_eq!(table.score(1, 0), 0.0);
        assert_eq!(table.score(0, 4), 0.0);
        assert!(table.is_rectangular());
    }

    #[test]
    fn counts_follow_companies_and_categories() {
        let table = ScoreTable {
            companies: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            categories: vec!["X".to_string(), "Y".to_string()],
            scores: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        };
        assert_eq!(table.company_count(), 3);
        assert_eq!(table.category_count(), 2);
        assert!(table.is_rectangular());

        let ragged = ScoreTable {
            scores: vec![vec![1.0]],
            ..table.clone()
        };
        assert_eq!(ragged.company_count(), 3);
        assert_eq!(ragged.category_count(), 2);
        assert!(!ragged.is_rectangular());
    }

    #[test]
    fn split_serializes_camel_case() {
        let split = DocumentSplit {
            before_table: "a\n".to_string(),
            table: "| KPI |\n".to_string(),
            after_table: String::new(),
        };
        let json = serde_json::to_string(&split).unwrap();
        assert!(json.contains("\"beforeTable\""));
        assert!(json.contains("\"afterTable\""));
        assert_eq!(split.reconstruct(), "a\n| KPI |\n");
    }
}
