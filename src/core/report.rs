//! Console presentation of usage records
//!
//! Renders records as a grid-style text table. Rendering returns a `String`
//! so the layout can be asserted on; printing is a thin wrapper.

use crate::core::models::UsageRecord;

/// What the report covers, for titles and empty-result messages
#[derive(Debug, Clone)]
pub enum ReportScope {
    /// A single named region
    Region(String),
    /// The fixed multi-region sweep
    AllRegions,
}

/// Grid-style text table with column headers
#[derive(Debug)]
pub struct UsageTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl UsageTable {
    /// Build a table from a non-empty record sequence.
    ///
    /// Columns are derived from the fields present on the records: the
    /// detailed and region columns appear exactly when the records carry
    /// those fields, which is uniform within a run.
    pub fn from_records(records: &[UsageRecord]) -> Self {
        let detailed = records.first().is_some_and(|r| r.model_name.is_some());
        let with_region = records.first().is_some_and(|r| r.region.is_some());

        let mut headers = vec!["Model ID", "Provider", "Invocations"];
        if detailed {
            headers.extend(["Model Name", "Output Modality", "Input Modality"]);
        }
        if with_region {
            headers.push("Region");
        }

        let cell = |value: &Option<String>| value.clone().unwrap_or_default();
        let rows = records
            .iter()
            .map(|record| {
                let mut row = vec![
                    record.model_id.clone(),
                    record.provider.clone(),
                    record.invocations.to_string(),
                ];
                if detailed {
                    row.push(cell(&record.model_name));
                    row.push(cell(&record.output_modality));
                    row.push(cell(&record.input_modality));
                }
                if with_region {
                    row.push(cell(&record.region));
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Render the table with `+`/`-`/`|` borders and a `=` header separator
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = |fill: char| {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat(fill).take(width + 2));
                line.push('+');
            }
            line
        };
        let format_row = |cells: &[String]| {
            let mut line = String::from("|");
            for (i, cell) in cells.iter().enumerate() {
                line.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
            }
            line
        };

        let header_cells: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        let mut lines = vec![border('-'), format_row(&header_cells), border('=')];
        for row in &self.rows {
            lines.push(format_row(row));
            lines.push(border('-'));
        }
        lines.join("\n")
    }
}

/// Title line printed above a non-empty table
pub fn report_title(scope: &ReportScope, days: u32) -> String {
    match scope {
        ReportScope::Region(region) => {
            format!("AWS Bedrock LLM Usage in {region} (Last {days} days):")
        }
        ReportScope::AllRegions => "AWS Bedrock LLM Usage Across All Regions:".to_string(),
    }
}

/// Message printed instead of an empty table
pub fn no_usage_message(scope: &ReportScope, days: u32) -> String {
    let place = match scope {
        ReportScope::Region(region) => region.as_str(),
        ReportScope::AllRegions => "any region",
    };
    format!("No Bedrock LLM usage found in {place} in the last {days} days.")
}

/// Print the report for `records`, or the no-usage message when empty
pub fn print_report(records: &[UsageRecord], scope: &ReportScope, days: u32) {
    if records.is_empty() {
        println!("\n{}", no_usage_message(scope, days));
        return;
    }

    println!("\n{}", report_title(scope, days));
    println!("{}", UsageTable::from_records(records).render());
}
