use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use common::EntityKind;
use common::config::AppConfig;
use serde_json::Value;
use shapes::{ShapesDoc, normalize_batch};
use tracing::info;
use utoipa::OpenApi;

use crate::input;

#[derive(Parser, Debug)]
#[command(name = "shapes", version, about = "Normalize evaluation-event records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in every missing field of partial records
    ///
    /// Ids and integer counts must fit in a signed 32-bit integer; larger
    /// values are rejected as decode errors.
    Normalize(NormalizeArgs),

    /// List the entity kinds
    Kinds,

    /// Print the OpenAPI document for all record shapes
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Entity kind of the records (user, event, participant, ...)
    pub kind: EntityKind,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// One JSON document per line in, one per line out
    #[arg(long)]
    pub lines: bool,

    /// Pretty-print the output. Ignored with --lines
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Pretty-print the document
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn run(self, config: &AppConfig) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Normalize(args) => run_normalize(args, config, &mut out),
            Commands::Kinds => {
                for kind in EntityKind::ALL {
                    writeln!(out, "{kind}")?;
                }
                Ok(())
            }
            Commands::Schema(args) => {
                let doc = ShapesDoc::openapi();
                let text = if args.pretty || config.output.pretty {
                    doc.to_pretty_json()?
                } else {
                    doc.to_json()?
                };
                writeln!(out, "{text}")?;
                Ok(())
            }
        }
    }
}

fn run_normalize<W: Write>(
    args: NormalizeArgs,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let kind = args.kind;
    let text = input::read_input(args.input.as_deref())?;

    if args.lines {
        let records = input::normalize_lines(kind, &text)?;
        for record in &records {
            input::write_json(out, record, false)?;
        }
        info!(%kind, count = records.len(), "Normalized records");
        return Ok(());
    }

    let value: Value = serde_json::from_str(&text).context("Input is not valid JSON")?;
    let count = value.as_array().map_or(1, Vec::len);
    let normalized = normalize_batch(kind, value)
        .with_context(|| format!("Failed to normalize {kind} input"))?;

    input::write_json(out, &normalized, args.pretty || config.output.pretty)?;
    info!(%kind, count, "Normalized records");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shapes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parses_normalize_arguments() {
        let cli = parse(&["normalize", "criterion", "--input", "in.json", "--pretty"]);
        match cli.command {
            Commands::Normalize(args) => {
                assert_eq!(args.kind, EntityKind::Criterion);
                assert_eq!(args.input, Some(PathBuf::from("in.json")));
                assert!(args.pretty);
                assert!(!args.lines);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let result = Cli::try_parse_from(["shapes", "normalize", "judge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_file_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}, {{"email": "a@b.com"}}]"#).unwrap();

        let args = NormalizeArgs {
            kind: EntityKind::Evaluator,
            input: Some(file.path().to_path_buf()),
            lines: false,
            pretty: false,
        };
        let mut out = Vec::new();
        run_normalize(args, &AppConfig::default(), &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["acceptedInvite"], false);
        assert_eq!(items[1]["id"], 0);
        assert_eq!(items[1]["email"], "a@b.com");
    }

    #[test]
    fn test_normalize_file_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"id": 2, "assignedAt": "2024-01-01T00:00:00Z"}}"#).unwrap();

        let args = NormalizeArgs {
            kind: EntityKind::Assignment,
            input: Some(file.path().to_path_buf()),
            lines: true,
            pretty: true,
        };
        let mut out = Vec::new();
        run_normalize(args, &AppConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["id"], 2);
        assert_eq!(second["assignedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(second["evaluatorId"], 0);
    }

    #[test]
    fn test_normalize_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let args = NormalizeArgs {
            kind: EntityKind::User,
            input: Some(file.path().to_path_buf()),
            lines: false,
            pretty: false,
        };
        let err = run_normalize(args, &AppConfig::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Input is not valid JSON");
    }

    #[test]
    fn test_normalize_output_keeps_whole_scores_and_field_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"score": 5, "criteriaId": 9, "assignmentId": 3}}"#).unwrap();

        let args = NormalizeArgs {
            kind: EntityKind::Evaluation,
            input: Some(file.path().to_path_buf()),
            lines: true,
            pretty: false,
        };
        let mut out = Vec::new();
        run_normalize(args, &AppConfig::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap().trim_end(),
            r#"{"id":0,"assignmentId":3,"criteriaId":9,"score":5,"comments":"","createdAt":"","updatedAt":""}"#
        );
    }

    #[test]
    fn test_normalize_rejects_id_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 3000000000}}"#).unwrap();

        let args = NormalizeArgs {
            kind: EntityKind::Assignment,
            input: Some(file.path().to_path_buf()),
            lines: false,
            pretty: false,
        };
        let err = run_normalize(args, &AppConfig::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to normalize assignment input");

        let help = Cli::command()
            .find_subcommand("normalize")
            .and_then(|cmd| cmd.get_long_about())
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(help.contains("32-bit"));
    }
}
