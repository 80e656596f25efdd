//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use juxta_client::prompts;
use juxta_domain::{ComparisonResult, IndexedFact, ParsedFacts, QueryResult, RawAnswer};
use juxta_extractor::parse_answer;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};

/// Column width facts are wrapped at in tables
const FACT_COLUMN_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    show_prompts: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            show_prompts: false,
        }
    }

    /// Also print the prompt each endpoint sends to its model.
    pub fn with_prompts(mut self, show_prompts: bool) -> Self {
        self.show_prompts = show_prompts;
        self
    }

    /// Selected output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a complete comparison report.
    pub fn format_report(
        &self,
        result: &QueryResult,
        comparison: &ComparisonResult,
        analysis: Option<&str>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report = json!({
                    "query": result,
                    "comparison": comparison,
                    "analysis": analysis,
                });
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{}\t{}\t{}\t{}",
                result.id(),
                comparison.similar.len(),
                comparison.unique_to_direct.len(),
                comparison.unique_to_agent.len()
            )),
            OutputFormat::Table => {
                let mut sections = vec![
                    self.format_answer(
                        "Direct Model",
                        result.city(),
                        result.direct_answer(),
                        result.direct_latency_secs(),
                    ),
                    self.format_answer(
                        "Agent with Knowledge Base",
                        result.city(),
                        result.agent_answer(),
                        result.agent_latency_secs(),
                    ),
                    self.format_comparison(comparison),
                ];
                if let Some(text) = analysis {
                    sections.push(self.format_analysis(text));
                }
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format one side's answer about `city` as a table section.
    pub fn format_answer(
        &self,
        title: &str,
        city: &str,
        answer: &RawAnswer,
        latency_secs: f64,
    ) -> String {
        let mut lines = vec![format!(
            "{} {}",
            self.colorize(title, "cyan"),
            self.colorize(&format!("({:.2}s)", latency_secs), "magenta")
        )];

        lines.extend(metadata_lines(answer));

        if self.show_prompts {
            let prompt = match answer {
                RawAnswer::Direct(_) => prompts::direct_prompt(city),
                RawAnswer::Agent(_) => prompts::agent_prompt(city),
            };
            lines.push(format!("Prompt:\n{}", prompt));
        }

        match parse_answer(answer) {
            Some(parsed) => lines.push(self.format_parsed(&parsed)),
            None => match answer {
                RawAnswer::Agent(agent) if !agent.agent_response.trim().is_empty() => {
                    lines.push(agent.agent_response.trim().to_string());
                }
                _ => lines.push(self.colorize("No facts returned.", "yellow")),
            },
        }

        lines.join("\n")
    }

    /// Format the comparison section.
    pub fn format_comparison(&self, comparison: &ComparisonResult) -> String {
        let mut lines = vec![
            self.colorize("Comparison", "cyan"),
            format!(
                "Direct: {} facts | Agent: {} facts | Similar: {} | Unique to direct: {} | Unique to agent: {}",
                comparison.direct_total,
                comparison.agent_total,
                comparison.similar.len(),
                comparison.unique_to_direct.len(),
                comparison.unique_to_agent.len()
            ),
        ];

        if comparison.is_empty() {
            lines.push(self.colorize("Neither source produced any facts.", "yellow"));
            return lines.join("\n");
        }

        if !comparison.similar.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Direct #", "Direct fact", "Agent #", "Agent fact"]);
            for pair in &comparison.similar {
                builder.push_record([
                    pair.direct_index.to_string(),
                    pair.direct_fact.clone(),
                    pair.agent_index.to_string(),
                    pair.agent_fact.clone(),
                ]);
            }
            lines.push("Similar facts:".to_string());
            lines.push(render(builder, FACT_COLUMN_WIDTH / 2));
        }

        lines.push(self.indexed_section("Unique to direct model:", &comparison.unique_to_direct));
        lines.push(self.indexed_section("Unique to agent:", &comparison.unique_to_agent));

        lines.join("\n")
    }

    /// Format the output of the extract command.
    pub fn format_extracted(&self, parsed: Option<&ParsedFacts>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&parsed)?),
            OutputFormat::Quiet => Ok(parsed.map(|p| p.facts().join("\n")).unwrap_or_default()),
            OutputFormat::Table => Ok(match parsed {
                Some(parsed) => self.format_parsed(parsed),
                None => self.warning("No structured facts found."),
            }),
        }
    }

    /// Format the knowledge-base city list.
    pub fn format_cities(&self, cities: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(cities)?),
            OutputFormat::Quiet => Ok(cities.join("\n")),
            OutputFormat::Table => {
                if cities.is_empty() {
                    return Ok(self.colorize(
                        "No knowledge-base city matches. Any city can still be compared.",
                        "yellow",
                    ));
                }
                let mut builder = Builder::default();
                builder.push_record(["City"]);
                for city in cities {
                    builder.push_record([*city]);
                }
                Ok(render(builder, FACT_COLUMN_WIDTH))
            }
        }
    }

    /// Format the narrative analysis.
    pub fn format_analysis(&self, text: &str) -> String {
        format!("{}\n{}", self.colorize("On-device analysis", "cyan"), text.trim())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn format_parsed(&self, parsed: &ParsedFacts) -> String {
        let mut lines = Vec::new();
        if !parsed.preamble().is_empty() {
            lines.push(parsed.preamble().to_string());
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Fact"]);
        for (idx, fact) in parsed.facts().iter().enumerate() {
            builder.push_record([(idx + 1).to_string(), fact.clone()]);
        }
        lines.push(render(builder, FACT_COLUMN_WIDTH));

        if !parsed.postamble().is_empty() {
            lines.push(parsed.postamble().to_string());
        }
        lines.join("\n")
    }

    fn indexed_section(&self, heading: &str, facts: &[IndexedFact]) -> String {
        if facts.is_empty() {
            return format!("{} none", heading);
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Fact"]);
        for item in facts {
            builder.push_record([item.index.to_string(), item.fact.clone()]);
        }
        format!("{}\n{}", heading, render(builder, FACT_COLUMN_WIDTH))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder, wrap_at: usize) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(wrap_at)))
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn metadata_lines(answer: &RawAnswer) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(message) = answer.message() {
        lines.push(format!("Message: {}", message));
    }
    match answer {
        RawAnswer::Direct(direct) => {
            if let Some(model) = &direct.model_used {
                lines.push(format!("Model: {}", model));
            }
            if let Some(total) = direct.total_facts {
                lines.push(format!("Total facts: {}", total));
            }
            if let Some(source) = &direct.source {
                lines.push(format!("Source: {}", source));
            }
        }
        RawAnswer::Agent(agent) => {
            if let Some(agent_id) = &agent.agent_id {
                lines.push(format!("Agent: {}", agent_id));
            }
            if let Some(session_id) = &agent.session_id {
                lines.push(format!("Session: {}", session_id));
            }
            if let Some(source) = &agent.source {
                lines.push(format!("Source: {}", source));
            }
        }
    }
    lines
}
