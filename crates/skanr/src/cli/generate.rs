//! `skanr generate`
//!
//! One registration pass per manifest. Passes are independent, so several
//! manifests run in parallel; results are still delivered in manifest order.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Args;
use rayon::prelude::*;
use skanr_application::{EmitDialect, GenerationPass, PassOutcome, SourceEmitter, resolve_dialect};
use skanr_domain::DiagnosticRecord;
use skanr_infrastructure::{
    AppConfig, GeneratorConfig, HostManifest, TracingDiagnosticSink, write_document,
};
use tracing::{error, info};

/// Arguments of `skanr generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Manifest describing a build unit (JSON, YAML or TOML); repeatable
    #[arg(short, long = "manifest", required = true, num_args = 1..)]
    pub manifests: Vec<PathBuf>,

    /// Directory to write generated files into; stdout when absent
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Emission dialect, overriding configuration
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Namespace of the generated type, overriding configuration
    #[arg(short, long)]
    pub namespace: Option<String>,
}

/// What a `generate` run produced
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Files written under the output directory
    pub written: Vec<PathBuf>,
    /// Documents printed to stdout
    pub printed: usize,
    /// Manifests that produced no registrations
    pub empty: usize,
}

/// Completed pass for one manifest
struct UnitRun {
    manifest: PathBuf,
    unit: String,
    outcome: PassOutcome,
    diagnostics: Vec<DiagnosticRecord>,
}

/// Run `skanr generate`
///
/// Fails when any manifest fails; documents of the other manifests are still
/// delivered first.
pub fn generate(
    args: &GenerateArgs,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<GenerateSummary> {
    let dialect_name = args
        .dialect
        .as_deref()
        .unwrap_or(config.generator.dialect.as_str());
    let dialect = resolve_dialect(dialect_name)?;

    let mut generator = config.generator.clone();
    if let Some(namespace) = &args.namespace {
        generator.namespace = Some(namespace.clone());
    }

    let runs: Vec<anyhow::Result<UnitRun>> = args
        .manifests
        .par_iter()
        .map(|path| run_manifest(path, &dialect, &generator))
        .collect();

    let nested = args.manifests.len() > 1;
    let mut unit_dirs = UnitDirs::default();
    let mut summary = GenerateSummary::default();
    let mut failures = Vec::new();

    for run in runs {
        let run = match run {
            Ok(run) => run,
            Err(err) => {
                error!(error = %format!("{err:#}"), "Generation failed");
                failures.push(err);
                continue;
            }
        };

        let rejected = run
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_failure())
            .count();

        let Some(document) = run.outcome.document else {
            info!(manifest = %run.manifest.display(), "Nothing to generate");
            summary.empty += 1;
            continue;
        };

        match &args.out_dir {
            Some(dir) => {
                let dir = if nested {
                    dir.join(unit_dirs.claim(&run.unit, &run.manifest))
                } else {
                    dir.clone()
                };
                match write_document(&dir, &document) {
                    Ok(path) => summary.written.push(path),
                    Err(err) => {
                        let err = anyhow::Error::new(err).context(format!(
                            "Failed to write output for {}",
                            run.manifest.display()
                        ));
                        error!(error = %format!("{err:#}"), "Generation failed");
                        failures.push(err);
                        continue;
                    }
                }
            }
            None => {
                out.write_all(document.text.as_bytes())
                    .context("Failed to write generated source to stdout")?;
                summary.printed += 1;
            }
        }

        info!(
            unit = %run.unit,
            registrations = run.outcome.registrations.len(),
            rejected,
            "Unit generated"
        );
    }

    if failures.is_empty() {
        Ok(summary)
    } else {
        let details = failures
            .iter()
            .map(|err| format!("{err:#}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(anyhow!(
            "{} of {} manifests failed: {details}",
            failures.len(),
            args.manifests.len()
        ))
    }
}

fn run_manifest(
    path: &Path,
    dialect: &Arc<dyn EmitDialect>,
    generator: &GeneratorConfig,
) -> anyhow::Result<UnitRun> {
    let input = HostManifest::from_path(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?
        .into_pass_input();

    let emitter = SourceEmitter::new(Arc::clone(dialect), generator.emitter_options(&input.unit));
    let pass = GenerationPass::new(emitter).with_options(generator.pass_options());
    let mut sink = TracingDiagnosticSink::new(&input.unit);

    let outcome = pass
        .run(&input, &mut sink)
        .with_context(|| format!("Registration pass failed for {}", path.display()))?;

    Ok(UnitRun {
        manifest: path.to_path_buf(),
        unit: input.unit,
        outcome,
        diagnostics: sink.into_collected().records(),
    })
}

/// Output directory names handed out so far
///
/// Names come from the unit, or the manifest file stem when the unit is blank.
/// A repeated name gets a numeric suffix so no two units share a directory.
#[derive(Default)]
struct UnitDirs {
    taken: HashSet<String>,
}

impl UnitDirs {
    fn claim(&mut self, unit: &str, manifest: &Path) -> String {
        let base = unit_dir_name(unit, manifest);
        let mut name = base.clone();
        let mut suffix = 2;
        while !self.taken.insert(name.clone()) {
            name = format!("{base}-{suffix}");
            suffix += 1;
        }
        name
    }
}

fn unit_dir_name(unit: &str, manifest: &Path) -> String {
    let name = if unit.trim().is_empty() {
        manifest
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        unit.trim().to_string()
    };
    let name = name.replace(['/', '\\'], "_");
    if name.is_empty() || name == "." || name == ".." {
        "unit".to_string()
    } else {
        name
    }
}
