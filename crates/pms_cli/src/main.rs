//! `pms` command-line entry point.
//!
//! # Responsibility
//! - Load atomic sets and composite definitions, then run one visitor over
//!   the requested set.
//! - Keep stdout for results; diagnostics go to stderr.

mod args;

use args::{Cli, Commands};
use clap::Parser;
use log::debug;
use pms_core::{
    load_all_metadata_sets, AttributeListVisitor, CsvVisitor, MetadataSet, PmsConfig,
    PrintVisitor, Registry, Visitable,
};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| pms_core::default_log_level().to_string());
    if let Err(err) = pms_core::init_stderr_logging(&level) {
        eprintln!("pms: error: {err}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pms: error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one command, writing results to `out`.
fn run<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    debug!(
        "event=cli_start module=cli status=ok version={}",
        pms_core::core_version()
    );

    let mut config = match &cli.config {
        Some(path) => PmsConfig::load(path)?,
        None => PmsConfig::default(),
    };
    if let Some(separator) = cli.separator {
        config.prefix_separator = separator;
    }

    let registry = load_all_metadata_sets(&cli.atomic_dir, cli.composites.as_deref(), &config)?;

    match cli.command {
        Commands::List { set: None } => {
            for (name, set) in registry.iter() {
                writeln!(out, "{name}\t{}\t{}", set.kind(), set.description())?;
            }
        }
        Commands::List { set: Some(name) } => {
            let mut visitor = AttributeListVisitor::with_config(&config);
            lookup(&registry, &name)?.accept(&mut visitor);
            for attribute in visitor.attribute_names() {
                writeln!(out, "{attribute}")?;
            }
        }
        Commands::Print { set } => {
            let mut visitor = PrintVisitor::with_config(&mut *out, &config);
            lookup(&registry, &set)?.accept(&mut visitor);
            visitor.finish()?;
        }
        Commands::Export { set, output } => {
            let root = lookup(&registry, &set)?;
            let rows = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
                    export(root, BufWriter::new(file), &config)?
                }
                None => export(root, &mut *out, &config)?,
            };
            debug!("event=export module=cli status=ok set={set} rows={rows}");
        }
        Commands::Json { set } => {
            let mut visitor = AttributeListVisitor::with_config(&config);
            lookup(&registry, &set)?.accept(&mut visitor);
            serde_json::to_writer_pretty(&mut *out, visitor.records())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn lookup<'a>(registry: &'a Registry, name: &str) -> CliResult<&'a MetadataSet> {
    registry
        .get(name)
        .ok_or_else(|| format!("unknown metadata set `{name}`").into())
}

fn export<W: Write>(root: &MetadataSet, out: W, config: &PmsConfig) -> CliResult<usize> {
    let mut visitor = CsvVisitor::with_config(out, config);
    root.accept(&mut visitor);
    let rows = visitor.rows();
    visitor.finish()?.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::args::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("pms_core")
            .join("tests")
            .join("data")
    }

    fn cli(extra: &[&str]) -> Cli {
        let data = data_dir();
        let atomic_dir = data.join("atomic");
        let composites = data.join("composites.yaml");
        let mut args = vec![
            "pms".to_string(),
            "--atomic-dir".to_string(),
            atomic_dir.to_str().expect("utf8 path").to_string(),
            "--composites".to_string(),
            composites.to_str().expect("utf8 path").to_string(),
        ];
        args.extend(extra.iter().map(|arg| arg.to_string()));
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    fn run_to_string(extra: &[&str]) -> String {
        let mut out = Vec::new();
        run(cli(extra), &mut out).expect("command should succeed");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn list_shows_every_set_in_registration_order() {
        let text = run_to_string(&["list"]);
        let names: Vec<&str> = text
            .lines()
            .map(|line| line.split('\t').next().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            vec!["test_dummy", "test_pcic_common_subset", "foo", "bar", "qux", "nested"]
        );
        assert!(text.contains("bar\tcomposite\tBar\n"));
    }

    #[test]
    fn list_set_prints_qualified_names() {
        let text = run_to_string(&["list", "qux"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4 + 13);
        assert_eq!(&lines[..5], ["a", "b", "pfx__a", "pfx__b", "other__contact"]);
    }

    #[test]
    fn separator_flag_overrides_default() {
        assert_eq!(run_to_string(&["list", "bar", "-s", "."]), "pfx.a\npfx.b\n");
    }

    #[test]
    fn print_renders_indented_set() {
        assert_eq!(
            run_to_string(&["print", "bar"]),
            "Bar [bar]\n   Dummy attribute set for tests [test_dummy]\n      pfx__a\n      pfx__b\n"
        );
    }

    #[test]
    fn export_writes_csv_to_sink_or_file() {
        let expected = "set,role,name,source,required,comments\n\
                        test_dummy,,pfx__a,global,yes,First dummy attribute\n\
                        test_dummy,,pfx__b,global,no,Second dummy attribute\n";
        assert_eq!(run_to_string(&["export", "bar"]), expected);

        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("bar.csv");
        let stdout = run_to_string(&[
            "export",
            "bar",
            "--output",
            output.to_str().expect("utf8 path"),
        ]);
        assert!(stdout.is_empty());
        let written = std::fs::read_to_string(&output).expect("export file should exist");
        assert_eq!(written, expected);
    }

    #[test]
    fn json_emits_flattened_records() {
        let text = run_to_string(&["json", "bar"]);
        let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(json[0]["name"], "pfx__a");
        assert_eq!(json[1]["required"], "no");
    }

    #[test]
    fn unknown_set_is_an_error() {
        for command in ["list", "print", "export", "json"] {
            let mut out = Vec::new();
            let err = run(cli(&[command, "missing"]), &mut out)
                .expect_err("unknown set should fail");
            assert_eq!(err.to_string(), "unknown metadata set `missing`");
            assert!(out.is_empty(), "{command} wrote output before failing");
        }
    }
}
