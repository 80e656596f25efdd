//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use juxta_client::JuxtaClient;
use juxta_comparator::compare_answers;
use juxta_domain::{AnalysisCapability, ComparisonResult, QueryResult};
use juxta_extractor::answer_facts;
use juxta_llm::{Analyzer, LlmError, OllamaCapability};
use std::time::Duration;
use tracing::{debug, info};

/// Everything one comparison produced
#[derive(Debug)]
pub struct CompareReport {
    /// Both answers with their latencies
    pub result: QueryResult,
    /// Classification of the two fact lists
    pub comparison: ComparisonResult,
    /// Narrative from the on-device model, when requested and available
    pub analysis: Option<String>,
    /// Non-fatal problems to show the user
    pub warnings: Vec<String>,
    /// Analysis failure other than an unavailable capability
    pub analysis_error: Option<LlmError>,
}

/// Execute the compare command.
pub async fn execute_compare(
    args: CompareArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let profile = config.get_active_profile()?;
    let token = resolve_token(args.token, profile);
    compare_and_print(&args.city, token.as_deref(), args.analyze, config, formatter).await
}

/// Run a comparison and print the report; shared with the REPL.
pub async fn compare_and_print(
    city: &str,
    token: Option<&str>,
    analyze: bool,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let report = if analyze && config.analysis.enabled {
        let capability =
            OllamaCapability::new(&config.analysis.endpoint, &config.analysis.model)?;
        let analyzer = Analyzer::new(capability);
        run_compare(config, city, token, Some(&analyzer)).await?
    } else {
        let mut report =
            run_compare::<OllamaCapability>(config, city, token, None).await?;
        if analyze {
            report
                .warnings
                .push("On-device analysis is disabled in the configuration".to_string());
        }
        report
    };

    println!(
        "{}",
        formatter.format_report(&report.result, &report.comparison, report.analysis.as_deref())?
    );
    for warning in &report.warnings {
        eprintln!("{}", formatter.warning(warning));
    }

    match report.analysis_error {
        Some(e) => Err(CliError::Analysis(e)),
        None => Ok(()),
    }
}

/// Query both sources, compare their facts and optionally narrate the result.
///
/// An unavailable capability becomes a warning; any other analysis failure
/// is returned in `analysis_error` so the comparison itself is not lost.
pub async fn run_compare<C>(
    config: &Config,
    city: &str,
    token: Option<&str>,
    analyzer: Option<&Analyzer<C>>,
) -> Result<CompareReport>
where
    C: AnalysisCapability<Error = LlmError>,
{
    let profile = config.get_active_profile()?;
    let client = client_for(profile)?;

    let result = client.run_query(city, token).await?;
    let comparison = compare_answers(result.direct_answer(), result.agent_answer());
    info!(
        "Compared {} direct and {} agent facts for '{}': {} similar",
        comparison.direct_total,
        comparison.agent_total,
        result.city(),
        comparison.similar.len()
    );

    let mut report = CompareReport {
        result,
        comparison,
        analysis: None,
        warnings: Vec::new(),
        analysis_error: None,
    };

    if let Some(analyzer) = analyzer {
        let direct_facts = answer_facts(report.result.direct_answer());
        let agent_facts = answer_facts(report.result.agent_answer());

        match analyzer
            .analyze(report.result.city(), &direct_facts, &agent_facts)
            .await
        {
            Ok(text) => report.analysis = Some(text),
            Err(LlmError::CapabilityUnavailable(availability)) => {
                debug!("Skipping analysis, capability is {}", availability);
                report.warnings.push(format!(
                    "On-device analysis unavailable ({}); showing the comparison only",
                    availability
                ));
            }
            Err(e) => report.analysis_error = Some(e),
        }
    }

    Ok(report)
}

/// Pick the identity token: the flag (or `JUXTA_ID_TOKEN`) first, then the profile.
pub fn resolve_token(flag: Option<String>, profile: &Profile) -> Option<String> {
    flag.filter(|t| !t.trim().is_empty())
        .or_else(|| profile.id_token.clone())
}

/// Build a client for a profile.
pub fn client_for(profile: &Profile) -> Result<JuxtaClient> {
    Ok(JuxtaClient::with_timeout(
        &profile.api_base_url,
        Duration::from_secs(profile.request_timeout_secs),
    )?)
}
