//! `skanr plan`

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use skanr_application::{GenerationPass, PlanReport, Reporter, SourceEmitter, resolve_dialect};
use skanr_infrastructure::{AppConfig, HostManifest, TracingDiagnosticSink};

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of `skanr plan`
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Manifest describing a build unit (JSON, YAML or TOML)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Run `skanr plan`
///
/// The report is printed even when the pass fails, so the diagnostics that
/// explain the failure are visible; the failure is returned afterwards.
pub fn plan(
    args: &PlanArgs,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<PlanReport> {
    let input = HostManifest::from_path(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?
        .into_pass_input();

    let dialect = resolve_dialect(&config.generator.dialect)?;
    let emitter = SourceEmitter::new(dialect, config.generator.emitter_options(&input.unit));
    let pass = GenerationPass::new(emitter).with_options(config.generator.pass_options());
    let mut sink = TracingDiagnosticSink::new(&input.unit);

    let (registrations, failure) = match pass.plan(&input, &mut sink) {
        Ok(registrations) => (registrations, None),
        Err(err) => (Vec::new(), Some(err)),
    };

    let report = PlanReport::new(&input.unit, registrations, sink.into_collected().records());
    let rendered = match args.format {
        ReportFormat::Text => Reporter::to_human_readable(&report),
        ReportFormat::Json => Reporter::to_json(&report) + "\n",
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to write plan report")?;

    match failure {
        Some(err) => Err(anyhow::Error::new(err)
            .context(format!("Registration pass failed for {}", args.manifest.display()))),
        None => Ok(report),
    }
}
