//! `vigil run` — verify benches against their behavioural DUTs.
//!
//! Loads `vigil.toml`, selects benches by name or filter, resolves each
//! bench's run settings (config overrides, then CLI flags), runs it through
//! the full environment lifecycle and prints one verdict per bench plus a
//! summary line.

use std::path::PathBuf;
use std::sync::Arc;

use vigil_common::Width;
use vigil_config::{resolve_bench, OutputFormat, PolicyKind, ResolvedRun, VigilConfig};
use vigil_engine::RunError;
use vigil_report::{JsonRenderer, ReportRenderer, ReportSink, RunSummary, TextRenderer};
use vigil_tb::{BenchKind, Setup};

use crate::{logging, GlobalArgs, PolicyArg, ReportFormat, RunArgs};

/// Runs the `vigil run` command.
///
/// Returns exit code 0 if every selected bench passes, 1 otherwise.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load(global)?;
    logging::init(logging::level_for(global, config.report.log_level));

    let benches = select_benches(args.bench.as_deref(), args.filter.as_deref())?;
    if benches.is_empty() {
        if !global.quiet {
            eprintln!("warning: no benches match the given filter");
        }
        return Ok(0);
    }

    let setup = Setup {
        alu_width: Width::new(config.alu.width)?,
        corrupt_every: args.corrupt_every,
    };
    let format = match args.format {
        Some(ReportFormat::Json) => OutputFormat::Json,
        Some(ReportFormat::Text) => OutputFormat::Text,
        None => config.report.format,
    };
    let renderer: Box<dyn ReportRenderer> = match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer::new(
            args.coverage_report || config.report.coverage_details,
        )),
    };

    if !global.quiet && format == OutputFormat::Text {
        eprintln!("   Running {} bench(es)", benches.len());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let sink = Arc::new(ReportSink::new());
    let mut passed = 0;

    for kind in &benches {
        let resolved = apply_flags(resolve_bench(&config, kind.name())?, args);
        let options = resolved.run_options();
        let result = runtime.block_on(vigil_tb::run(*kind, &options, &setup, Arc::clone(&sink)));

        let pass = matches!(&result, Ok(summary) if summary.is_pass());
        if pass {
            passed += 1;
        }

        match format {
            OutputFormat::Json => println!("{}", verdict_line(*kind, &result, renderer.as_ref())),
            OutputFormat::Text => {
                if !global.quiet {
                    for record in sink.records_for(kind.name()) {
                        if record.outcome.is_failure() {
                            eprintln!("         {}", renderer.render_record(&record));
                        }
                    }
                }
                if !global.quiet || !pass {
                    eprintln!("{}", verdict_line(*kind, &result, renderer.as_ref()));
                }
            }
        }
    }

    let failed = benches.len() - passed;
    if !global.quiet && format == OutputFormat::Text {
        eprintln!();
        eprintln!(
            "   Result: {passed} passed, {failed} failed out of {} bench(es)",
            benches.len()
        );
    }

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Loads the configuration named by `--config`, or `vigil.toml` in the
/// current directory when present.
fn load(global: &GlobalArgs) -> Result<VigilConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => {
            let path = PathBuf::from(path);
            if path.is_dir() {
                vigil_config::load_config(&path)?
            } else {
                vigil_config::load_config_file(&path)?
            }
        }
        None => vigil_config::load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Selects benches by exact name or by substring filter.
///
/// An exact name that is unknown is an error; a filter that matches nothing
/// selects nothing.
fn select_benches(
    name: Option<&str>,
    filter: Option<&str>,
) -> Result<Vec<BenchKind>, Box<dyn std::error::Error>> {
    if let Some(name) = name {
        return Ok(vec![name.parse::<BenchKind>()?]);
    }
    Ok(BenchKind::ALL
        .into_iter()
        .filter(|k| filter.map_or(true, |f| k.name().contains(f)))
        .collect())
}

/// Applies CLI flags on top of the configured settings.
fn apply_flags(mut resolved: ResolvedRun, args: &RunArgs) -> ResolvedRun {
    if let Some(seed) = args.seed {
        resolved.seed = Some(seed);
    }
    if let Some(policy) = args.policy {
        resolved.policy = Some(match policy {
            PolicyArg::Fixed => PolicyKind::Fixed,
            PolicyArg::Coverage => PolicyKind::Coverage,
        });
    }
    if let Some(count) = args.count {
        resolved.random_count = count;
    }
    if let Some(max) = args.max_iterations {
        resolved.max_iterations = max;
    }
    if let Some(ms) = args.timeout_ms {
        resolved.timeout_ms = ms;
    }
    resolved
}

/// Renders the verdict of one bench, whether it finished or aborted.
fn verdict_line(
    kind: BenchKind,
    result: &Result<RunSummary, RunError>,
    renderer: &dyn ReportRenderer,
) -> String {
    match result {
        Ok(summary) => renderer.render_summary(summary),
        Err(e) => renderer.render_error(kind.name(), &e.to_string(), e.coverage_report()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(argv: &[&str]) -> RunArgs {
        let mut full = vec!["vigil", "run"];
        full.extend_from_slice(argv);
        match crate::Cli::parse_from(full).command {
            crate::Command::Run(args) => args,
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn select_all_by_default() {
        assert_eq!(select_benches(None, None).unwrap().len(), 8);
    }

    #[test]
    fn select_by_filter() {
        let selected = select_benches(None, Some("adder")).unwrap();
        assert_eq!(
            selected,
            vec![BenchKind::HalfAdder, BenchKind::FullAdder, BenchKind::Adder4]
        );
        assert!(select_benches(None, Some("zzz")).unwrap().is_empty());
    }

    #[test]
    fn select_unknown_name_errors() {
        let err = select_benches(Some("adder8"), None).unwrap_err();
        assert_eq!(err.to_string(), "unknown bench 'adder8'");
    }

    #[test]
    fn flags_override_config() {
        let config = vigil_config::load_config_from_str(
            "[run]\nseed = 1\ntimeout_ms = 500\n[benches.mux]\npolicy = \"fixed\"\n",
        )
        .unwrap();
        let resolved = resolve_bench(&config, "mux").unwrap();
        let args = run_args(&["--seed", "9", "--policy", "coverage", "--max-iterations", "77"]);
        let resolved = apply_flags(resolved, &args);
        assert_eq!(resolved.seed, Some(9));
        assert_eq!(
            resolved.policy(),
            vigil_engine::Policy::CoverageClosure { max_iterations: 77 }
        );
        assert_eq!(resolved.timeout_ms, 500);
    }

    #[test]
    fn load_from_config_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vigil.toml"), "[alu]\nwidth = 4\n").unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.path().to_str().unwrap().to_string()),
        };
        assert_eq!(load(&global).unwrap().alu.width, 4);
    }

    #[test]
    fn load_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.path().join("nope.toml").to_str().unwrap().to_string()),
        };
        assert!(load(&global).is_err());
    }

    #[test]
    fn passing_run_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.path().to_str().unwrap().to_string()),
        };
        let args = run_args(&["half_adder", "--seed", "5"]);
        assert_eq!(run(&args, &global).unwrap(), 0);
    }

    fn capped_mux_run() -> Result<RunSummary, RunError> {
        let options = vigil_engine::RunOptions {
            policy: Some(vigil_engine::Policy::CoverageClosure { max_iterations: 20 }),
            seed: Some(1),
            ..Default::default()
        };
        tokio::runtime::Runtime::new().unwrap().block_on(vigil_tb::run(
            BenchKind::Mux,
            &options,
            &Setup::default(),
            Arc::new(ReportSink::new()),
        ))
    }

    #[test]
    fn aborted_bench_still_gets_a_json_verdict() {
        let result = capped_mux_run();
        assert!(result.is_err());
        let line = verdict_line(BenchKind::Mux, &result, &JsonRenderer);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["bench"], "mux");
        assert_eq!(value["verdict"]["status"], "error");
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("coverage not reached after 20 iterations"));
        assert!(value["coverage"]["percent"].as_f64().unwrap() < 100.0);
    }

    #[test]
    fn capped_closure_lists_missing_bins_with_coverage_report() {
        let result = capped_mux_run();
        let missing: Vec<String> = result
            .as_ref()
            .unwrap_err()
            .coverage_report()
            .unwrap()
            .uncovered()
            .map(str::to_string)
            .collect();
        assert!(!missing.is_empty());

        let detailed = verdict_line(BenchKind::Mux, &result, &TextRenderer::new(true));
        assert!(detailed.starts_with("   FAIL  mux  error: coverage not reached"));
        for bin in &missing {
            assert!(detailed.contains(&format!("missing {bin}")), "{bin}");
        }
        let brief = verdict_line(BenchKind::Mux, &result, &TextRenderer::new(false));
        assert!(brief.contains(&format!("{} of ", missing.len())));
    }

    #[test]
    fn json_run_with_aborted_bench_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.path().to_str().unwrap().to_string()),
        };
        let args = run_args(&["mux", "--seed", "1", "--max-iterations", "20", "--format", "json"]);
        assert_eq!(run(&args, &global).unwrap(), 1);
    }

    #[test]
    fn corrupted_run_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(dir.path().to_str().unwrap().to_string()),
        };
        let args = run_args(&["adder4", "--seed", "5", "--corrupt-every", "2"]);
        assert_eq!(run(&args, &global).unwrap(), 1);
    }
}
