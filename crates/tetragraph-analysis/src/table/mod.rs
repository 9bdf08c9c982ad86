//! Edge table: ordered (source, target, type) rows with CSV
//! serialization.
//!
//! Append-only during parsing, never deduplicated or sorted: row
//! order is file order. An optional `weight` column is carried when a
//! re-parsed table provides one; weights feed the weighted-degree
//! variant and nothing else.

pub mod csv;

use tetragraph_core::errors::ParseError;
use tetragraph_core::types::{EdgeKind, ParsedEdge};

use csv::{escape_field, split_record};

/// Columnar edge table preserving input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    rows: Vec<ParsedEdge>,
    /// Per-row weights, present only when the source CSV had a
    /// `weight` column. Aligned with `rows`.
    weights: Option<Vec<f64>>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: Vec<ParsedEdge>) -> Self {
        Self {
            rows: edges,
            weights: None,
        }
    }

    pub fn push(&mut self, edge: ParsedEdge) {
        self.rows.push(edge);
    }

    pub fn rows(&self) -> &[ParsedEdge] {
        &self.rows
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize to CSV with a header row. Fields containing commas,
    /// quotes, or newlines are quoted per RFC 4180.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("source,target,type\n");
        if self.weights.is_some() {
            out = String::from("source,target,type,weight\n");
        }
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&escape_field(&row.source));
            out.push(',');
            out.push_str(&escape_field(&row.target));
            out.push(',');
            out.push_str(row.kind.as_str());
            if let Some(weights) = &self.weights {
                out.push(',');
                out.push_str(&format_weight(weights[i]));
            }
            out.push('\n');
        }
        out
    }

    /// Parse an edge-table CSV back into rows.
    ///
    /// Requires `source`, `target`, and `type` columns (any order); an
    /// optional `weight` column enables the weighted-degree variant.
    /// Blank lines are skipped.
    pub fn from_csv(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((n, line)) if !line.trim().is_empty() => break (n, line),
                Some(_) => continue,
                None => {
                    return Err(ParseError::MissingColumn {
                        name: "source".to_string(),
                    })
                }
            }
        };
        let columns = split_record(header.1).map_err(|message| ParseError::MalformedCsv {
            line: header.0 + 1,
            message,
        })?;

        let col = |name: &str| columns.iter().position(|c| c == name);
        let source_col = col("source").ok_or_else(|| ParseError::MissingColumn {
            name: "source".to_string(),
        })?;
        let target_col = col("target").ok_or_else(|| ParseError::MissingColumn {
            name: "target".to_string(),
        })?;
        let type_col = col("type").ok_or_else(|| ParseError::MissingColumn {
            name: "type".to_string(),
        })?;
        let weight_col = col("weight");

        let mut table = Self::new();
        let mut weights = weight_col.map(|_| Vec::new());

        for (n, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = n + 1;
            let fields = split_record(line).map_err(|message| ParseError::MalformedCsv {
                line: line_number,
                message,
            })?;
            let field = |idx: usize| -> Result<&str, ParseError> {
                fields
                    .get(idx)
                    .map(String::as_str)
                    .ok_or_else(|| ParseError::MalformedCsv {
                        line: line_number,
                        message: format!("expected at least {} fields", idx + 1),
                    })
            };

            let kind_label = field(type_col)?;
            let kind = EdgeKind::from_label(kind_label).ok_or_else(|| {
                ParseError::InvalidEdgeType {
                    line: line_number,
                    value: kind_label.to_string(),
                }
            })?;
            table.push(ParsedEdge::new(field(source_col)?, field(target_col)?, kind));

            if let (Some(weights), Some(wc)) = (weights.as_mut(), weight_col) {
                let raw = field(wc)?;
                let weight = raw.parse::<f64>().map_err(|_| ParseError::MalformedCsv {
                    line: line_number,
                    message: format!("invalid weight {raw:?}"),
                })?;
                weights.push(weight);
            }
        }

        table.weights = weights;
        Ok(table)
    }
}

/// Render a weight without a trailing `.0` for integer values.
fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 && w.abs() < 1e15 {
        format!("{}", w as i64)
    } else {
        format!("{w}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_rows() {
        let table = EdgeTable::from_edges(vec![
            ParsedEdge::new("A", "B", EdgeKind::Directed),
            ParsedEdge::new("B", "C", EdgeKind::Undirected),
            ParsedEdge::new("A", "B", EdgeKind::Directed), // duplicate kept
        ]);
        let reparsed = EdgeTable::from_csv(&table.to_csv()).unwrap();
        assert_eq!(reparsed.rows(), table.rows());
    }

    #[test]
    fn test_quoting_round_trip() {
        let table = EdgeTable::from_edges(vec![ParsedEdge::new(
            "Diet, poor",
            "BMI \"high\"",
            EdgeKind::Directed,
        )]);
        let csv = table.to_csv();
        assert!(csv.contains("\"Diet, poor\""));
        assert!(csv.contains("\"BMI \"\"high\"\"\""));
        let reparsed = EdgeTable::from_csv(&csv).unwrap();
        assert_eq!(reparsed.rows(), table.rows());
    }

    #[test]
    fn test_weight_column_optional() {
        let csv = "source,target,type,weight\nA,B,directed,2\nB,C,undirected,0.5\n";
        let table = EdgeTable::from_csv(csv).unwrap();
        assert_eq!(table.weights(), Some(&[2.0, 0.5][..]));
    }

    #[test]
    fn test_missing_column_rejected() {
        let err = EdgeTable::from_csv("source,target\nA,B\n").unwrap_err();
        assert!(matches!(
            err,
            tetragraph_core::errors::ParseError::MissingColumn { .. }
        ));
    }

    #[test]
    fn test_invalid_type_rejected() {
        let err = EdgeTable::from_csv("source,target,type\nA,B,sideways\n").unwrap_err();
        assert!(matches!(
            err,
            tetragraph_core::errors::ParseError::InvalidEdgeType { line: 2, .. }
        ));
    }
}
