use crate::ir::{DocumentSplit, ScoreTable};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)kpi|category").unwrap());
static NUMBER_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)").unwrap());

/// Parses the numeric content of a table cell.
///
/// Every character other than ASCII digits and `.` is removed first, then the longest
/// leading decimal number is read. Anything that leaves no number behind is `0.0`.
pub fn parse_cell_number(raw: &str) -> f32 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    NUMBER_PREFIX_RE
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Finds the first pipe table whose header mentions "kpi" or "category" and reads it.
///
/// Returns `None` when no such header exists or when the table yields no companies or no
/// usable category rows. Malformed rows are skipped and unreadable cells become `0.0`.
pub fn extract_score_table(markdown: &str) -> Option<ScoreTable> {
    let lines: Vec<&str> = markdown.lines().collect();
    let Some(header_idx) = lines.iter().position(|line| is_header_line(line)) else {
        tracing::debug!("no KPI table header found");
        return None;
    };

    let header = split_cells(lines[header_idx]);
    if header.len() < 2 {
        tracing::debug!(line = header_idx, "KPI header has no company columns");
        return None;
    }
    let companies: Vec<String> = header[1..].iter().map(|cell| cell.to_string()).collect();

    let mut categories = Vec::new();
    let mut scores = Vec::new();
    // header_idx + 1 is the dashes row
    for line in lines.iter().skip(header_idx + 2) {
        if !is_table_line(line) {
            break;
        }
        let cells = split_cells(line);
        if cells.len() < 2 {
            continue;
        }
        let label = cells[0];
        if is_artifact_label(label) {
            continue;
        }
        let row: Vec<f32> = (1..=companies.len())
            .map(|idx| cells.get(idx).map_or(0.0, |cell| parse_cell_number(cell)))
            .collect();
        categories.push(label.to_string());
        scores.push(row);
    }

    if companies.is_empty() || categories.is_empty() || scores.is_empty() {
        tracing::debug!(line = header_idx, "KPI table has no data rows");
        return None;
    }

    tracing::debug!(
        companies = companies.len(),
        categories = categories.len(),
        "extracted KPI table"
    );
    Some(ScoreTable {
        companies,
        categories,
        scores,
    })
}

/// Cuts the document into the text before the KPI table, the table itself and the rest.
///
/// Only the header line has to qualify; the table runs from the header until the first
/// empty or pipe-less line after the separator row, or to the end of the document.
pub fn split_around_table(markdown: &str) -> Option<DocumentSplit> {
    let lines: Vec<&str> = markdown.split_inclusive('\n').collect();
    let header_idx = lines
        .iter()
        .position(|line| is_header_line(strip_line_ending(line)))?;

    let mut end_idx = lines.len() - 1;
    for (idx, line) in lines.iter().enumerate().skip(header_idx + 2) {
        if !is_table_line(strip_line_ending(line)) {
            end_idx = idx - 1;
            break;
        }
    }

    let start: usize = lines[..header_idx].iter().map(|line| line.len()).sum();
    let end: usize = start
        + lines[header_idx..=end_idx]
            .iter()
            .map(|line| line.len())
            .sum::<usize>();

    Some(DocumentSplit {
        before_table: markdown[..start].to_string(),
        table: markdown[start..end].to_string(),
        after_table: markdown[end..].to_string(),
    })
}

fn is_header_line(line: &str) -> bool {
    line.contains('|') && HEADER_RE.is_match(line)
}

fn is_table_line(line: &str) -> bool {
    line.contains('|') && !line.trim().is_empty()
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

/// Splits a table row on `|`, trimming cells and dropping the empty cells that a
/// leading or trailing pipe produces. Interior empty cells are kept.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    cells
}

fn is_artifact_label(label: &str) -> bool {
    let plain = label.trim_matches(|ch| ch == '*' || ch == '_').trim();
    if plain.is_empty() {
        return true;
    }
    if plain.eq_ignore_ascii_case("overall") {
        return true;
    }
    if plain.contains("...") || plain.contains('\u{2026}') {
        return true;
    }
    plain.split_whitespace().any(|token| {
        let dashes = token.trim_matches(':');
        dashes.len() >= 3 && dashes.chars().all(|ch| ch == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_A: &str = concat!(
        "| KPI Category | Nike | Adidas |\n|---|---|---|\n",
        "| Innovation | 4 | 3.5 |\n| Overall | 4 | 3.5 |"
    );

    #[test]
    fn parse_cell_number_strips_suffixes() {
        assert_eq!(parse_cell_number("4.5x"), 4.5);
        assert_eq!(parse_cell_number(" 3 / 5 "), 35.0);
        assert_eq!(parse_cell_number("**4**"), 4.0);
        assert_eq!(parse_cell_number(".5"), 0.5);
    }

    #[test]
    fn parse_cell_number_defaults_to_zero() {
        assert_eq!(parse_cell_number("N/A"), 0.0);
        assert_eq!(parse_cell_number(""), 0.0);
        assert_eq!(parse_cell_number("."), 0.0);
        assert_eq!(parse_cell_number("-"), 0.0);
    }

    #[test]
    fn parse_cell_number_reads_leading_number_only() {
        assert_eq!(parse_cell_number("1.2.3"), 1.2);
        assert_eq!(parse_cell_number("4."), 4.0);
    }

    #[test]
    fn extracts_scenario_a() {
        let table = extract_score_table(SCENARIO_A).unwrap();
        assert_eq!(table.companies, vec!["Nike", "Adidas"]);
        assert_eq!(table.categories, vec!["Innovation"]);
        assert_eq!(table.scores, vec![vec![4.0, 3.5]]);
    }

    #[test]
    fn no_table_yields_none() {
        let input = "# Report\n\nNo tables here, only KPI prose.\n";
        assert!(extract_score_table(input).is_none());
        assert!(split_around_table(input).is_none());
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let input = "|category|A|B|\n|-|-|-|\n|Reach|1|2|";
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.companies, vec!["A", "B"]);
        assert_eq!(table.categories, vec!["Reach"]);
    }

    #[test]
    fn header_without_companies_is_none() {
        let input = "| KPI |\n|---|\n| Reach |";
        assert!(extract_score_table(input).is_none());
    }

    #[test]
    fn first_qualifying_table_wins() {
        let input = concat!(
            "| Name | Value |\n|---|---|\n| x | 1 |\n\n",
            "| KPI | A |\n|---|---|\n| Speed | 2 |\n\n",
            "| KPI | B |\n|---|---|\n| Cost | 5 |"
        );
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.companies, vec!["A"]);
        assert_eq!(table.categories, vec!["Speed"]);
    }

    #[test]
    fn artifact_rows_are_skipped() {
        let input = concat!(
            "| KPI | A | B |\n|---|---|---|\n",
            "| Reach | 1 | 2 |\n",
            "| overall | 3 | 3 |\n",
            "| **Overall** | 3 | 3 |\n",
            "| ... | 0 | 0 |\n",
            "| More\u{2026} | 1 | 1 |\n",
            "| --- | --- | --- |\n",
            "| Cost | 4 | 5 |"
        );
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.categories, vec!["Reach", "Cost"]);
        assert_eq!(table.scores, vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
    }

    #[test]
    fn rows_are_padded_and_truncated_to_company_count() {
        let input = concat!(
            "| KPI | A | B | C |\n|---|---|---|---|\n",
            "| Short | 1 |\n",
            "| Long | 1 | 2 | 3 | 4 | 5 |\n",
            "| Gap | 1 |  | 3 |"
        );
        let table = extract_score_table(input).unwrap();
        assert!(table.is_rectangular());
        assert_eq!(table.scores[0], vec![1.0, 0.0, 0.0]);
        assert_eq!(table.scores[1], vec![1.0, 2.0, 3.0]);
        assert_eq!(table.scores[2], vec![1.0, 0.0, 3.0]);
    }

    #[test]
    fn single_cell_rows_are_skipped() {
        let input = "| KPI | A |\n|---|---|\n| lonely |\n| Reach | 2 |";
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.categories, vec!["Reach"]);
    }

    #[test]
    fn table_ends_at_blank_or_prose_line() {
        let input = "| KPI | A |\n|---|---|\n| Reach | 2 |\n\n| Cost | 4 |";
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.categories, vec!["Reach"]);

        let input = "| KPI | A |\n|---|---|\n| Reach | 2 |\nSummary follows\n| Cost | 4 |";
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.categories, vec!["Reach"]);
    }

    #[test]
    fn table_with_only_filtered_rows_is_none() {
        let input = "| KPI | A |\n|---|---|\n| Overall | 2 |\n| ... | 1 |";
        assert!(extract_score_table(input).is_none());
    }

    #[test]
    fn rows_without_outer_pipes_are_read() {
        let input = "KPI | A | B\n--- | --- | ---\nReach | 4 | 2";
        let table = extract_score_table(input).unwrap();
        assert_eq!(table.companies, vec!["A", "B"]);
        assert_eq!(table.scores, vec![vec![4.0, 2.0]]);
    }

    #[test]
    fn split_reconstructs_input() {
        let input = concat!(
            "# Title\n\nIntro text.\n\n",
            "| KPI | A |\n|---|---|\n| Reach | 2 |\n",
            "\nClosing words.\n"
        );
        let split = split_around_table(input).unwrap();
        assert_eq!(split.before_table, "# Title\n\nIntro text.\n\n");
        assert_eq!(split.table, "| KPI | A |\n|---|---|\n| Reach | 2 |\n");
        assert_eq!(split.after_table, "\nClosing words.\n");
        assert_eq!(split.reconstruct(), input);
    }

    #[test]
    fn split_runs_to_end_of_document() {
        let input = "Intro\n| KPI | A |\n|---|---|\n| Reach | 2 |";
        let split = split_around_table(input).unwrap();
        assert_eq!(split.before_table, "Intro\n");
        assert_eq!(split.table, "| KPI | A |\n|---|---|\n| Reach | 2 |");
        assert_eq!(split.after_table, "");
        assert_eq!(split.reconstruct(), input);
    }

    #[test]
    fn split_only_needs_a_header() {
        let input = "| KPI |\nafter";
        let split = split_around_table(input).unwrap();
        assert_eq!(split.table, "| KPI |\nafter");
        assert!(extract_score_table(input).is_none());
    }

    #[test]
    fn split_preserves_crlf() {
        let input = "Intro\r\n| KPI | A |\r\n|---|---|\r\n| Reach | 2 |\r\n\r\nEnd\r\n";
        let split = split_around_table(input).unwrap();
        assert_eq!(split.table, "| KPI | A |\r\n|---|---|\r\n| Reach | 2 |\r\n");
        assert_eq!(split.after_table, "\r\nEnd\r\n");
        assert_eq!(split.reconstruct(), input);
    }
}
