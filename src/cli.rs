//! Command-line interface
//!
//! 引数を解析し、生成処理を実行して結果をログに出力します。

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};
use xlsx2sql::{GeneratorBuilder, SheetSelector, SqlMode, Xlsx2SqlError};

/// SQL生成モード（CLI表記）
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One UPDATE statement per row
    PerRow,
    /// One UPDATE joined against an inline VALUES list
    Batch,
}

impl From<ModeArg> for SqlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::PerRow => SqlMode::PerRow,
            ModeArg::Batch => SqlMode::Batch,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "xlsx2sql",
    author,
    version,
    about = "Generate JSONB name updates for the documents table from a code/name spreadsheet"
)]
pub struct CliArgs {
    /// Input spreadsheet (xlsx, xlsm, xlsb, xls, ods)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output SQL script; parent directories are created if missing
    #[arg(long = "out", value_name = "PATH", default_value = "updates.sql")]
    pub output: PathBuf,

    /// Sheet name (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// SQL shape to generate
    #[arg(long, value_enum, default_value_t = ModeArg::Batch)]
    pub mode: ModeArg,

    /// Only update rows whose current name differs (batch mode only)
    #[arg(long = "only-diff", action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub only_diff: bool,
}

/// 生成処理を実行する
pub fn run(args: CliArgs) -> Result<(), Xlsx2SqlError> {
    let mode = SqlMode::from(args.mode);
    debug!(?mode, only_diff = args.only_diff, input = %args.input.display(), "starting");

    let generator = GeneratorBuilder::new()
        .with_sheet_selector(SheetSelector::from_name(args.sheet))
        .with_mode(mode)
        .only_diff(args.only_diff)
        .build()?;

    let generated = generator.run_to_file(&args.input, &args.output)?;

    if generated.skipped.total() > 0 {
        info!(
            sheet = %generated.sheet_name,
            too_few_columns = generated.skipped.too_few_columns,
            empty_code = generated.skipped.empty_code,
            empty_short_name = generated.skipped.empty_short_name,
            "skipped {} rows",
            generated.skipped.total()
        );
    }

    info!(
        "Done: generated {} ({} updates)",
        args.output.display(),
        generated.record_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["xlsx2sql", "--in", "codes.xlsx"]).unwrap();
        assert_eq!(args.input, PathBuf::from("codes.xlsx"));
        assert_eq!(args.output, PathBuf::from("updates.sql"));
        assert_eq!(args.sheet, None);
        assert_eq!(args.mode, ModeArg::Batch);
        assert!(args.only_diff);
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::try_parse_from([
            "xlsx2sql",
            "--in",
            "codes.xlsx",
            "--out",
            "out/u.sql",
            "--sheet",
            "Codes",
            "--mode",
            "per-row",
            "--only-diff=false",
        ])
        .unwrap();

        assert_eq!(args.output, PathBuf::from("out/u.sql"));
        assert_eq!(args.sheet.as_deref(), Some("Codes"));
        assert_eq!(SqlMode::from(args.mode), SqlMode::PerRow);
        assert!(!args.only_diff);
    }

    #[test]
    fn test_input_is_required() {
        assert!(CliArgs::try_parse_from(["xlsx2sql"]).is_err());
    }
}
