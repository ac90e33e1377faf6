//! Builder Module
//!
//! Fluent Builder APIを提供し、`Generator`インスタンスを段階的に構築する。

use crate::api::{SheetSelector, SqlMode};
use crate::error::Xlsx2SqlError;
use crate::extract::extract_records;
use crate::parser::WorkbookParser;
use crate::security::SecurityConfig;
use crate::sql::{emit, TransactionScript};
use crate::types::{RawRow, SkipCounts};
use std::io::Read;
use std::path::Path;

/// 生成処理の設定を保持する内部構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeneratorConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// SQL生成モード
    pub mode: SqlMode,

    /// 変更のない行の更新を抑止するか（バッチモードのみ）
    pub only_diff: bool,

    /// 入力サイズの上限
    pub security: SecurityConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            mode: SqlMode::Batch,
            only_diff: true,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2sql::{GeneratorBuilder, SheetSelector, SqlMode};
///
/// # fn main() -> Result<(), xlsx2sql::Xlsx2SqlError> {
/// let generator = GeneratorBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Codes".to_string()))
///     .with_mode(SqlMode::PerRow)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート
    /// - 生成モード: バッチ
    /// - 差分のみ更新: 有効
    /// - 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込むシートを選択する
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// SQL生成モードを指定する
    pub fn with_mode(mut self, mode: SqlMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// 現在の`name`と異なる行のみを更新するかを指定する
    ///
    /// `SqlMode::Batch`の場合のみ有効です。`SqlMode::PerRow`では無視されます。
    pub fn only_diff(mut self, only_diff: bool) -> Self {
        self.config.only_diff = only_diff;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Generator`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `Xlsx2SqlError::Config(String)`: 設定の検証に失敗した場合
    ///   * シート名が空
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<Generator, Xlsx2SqlError> {
        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.trim().is_empty() {
                return Err(Xlsx2SqlError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        if self.config.security.max_input_file_size == 0 {
            return Err(Xlsx2SqlError::Config(
                "Maximum input size must be greater than zero".to_string(),
            ));
        }

        if self.config.mode == SqlMode::PerRow && self.config.only_diff {
            tracing::debug!("only_diff has no effect in per-row mode");
        }

        Ok(Generator {
            config: self.config,
        })
    }
}

/// 1回の生成処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// 読み込んだシート名
    pub sheet_name: String,
    /// 生成されたスクリプト
    pub script: TransactionScript,
    /// スキップされた行の集計
    pub skipped: SkipCounts,
}

impl Generated {
    /// スクリプトに含まれるレコード数
    pub fn record_count(&self) -> usize {
        self.script.record_count()
    }
}

/// 生成処理のファサード
///
/// ワークブックを開き、シートを解決し、行を抽出してSQLを生成します。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2sql::GeneratorBuilder;
///
/// # fn main() -> Result<(), xlsx2sql::Xlsx2SqlError> {
/// let generator = GeneratorBuilder::new().build()?;
/// let generated = generator.run_to_file("codes.xlsx", "out/updates.sql")?;
/// println!("{} updates", generated.record_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// パスからワークブックを読み込んでスクリプトを生成する
    ///
    /// 空のパスは`Xlsx2SqlError::Config`になります。
    pub fn generate_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Generated, Xlsx2SqlError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Xlsx2SqlError::Config(
                "Input path must not be empty".to_string(),
            ));
        }

        let mut parser = WorkbookParser::open_path(path, &self.config.security)?;
        let sheet_name = parser.resolve_sheet(&self.config.sheet_selector)?;
        tracing::debug!(sheet = %sheet_name, "reading sheet");
        let rows = parser.read_rows(&sheet_name)?;
        Ok(self.generate_from_rows(sheet_name, &rows))
    }

    /// リーダーからワークブックを読み込んでスクリプトを生成する
    ///
    /// 入力はすべてメモリに読み込まれます。
    pub fn generate<R: Read>(&self, input: R) -> Result<Generated, Xlsx2SqlError> {
        let mut parser = WorkbookParser::open(input, &self.config.security)?;
        let sheet_name = parser.resolve_sheet(&self.config.sheet_selector)?;
        tracing::debug!(sheet = %sheet_name, "reading sheet");
        let rows = parser.read_rows(&sheet_name)?;
        Ok(self.generate_from_rows(sheet_name, &rows))
    }

    /// リーダーからワークブックを読み込み、スクリプトを文字列として返す
    pub fn generate_to_string<R: Read>(&self, input: R) -> Result<String, Xlsx2SqlError> {
        Ok(self.generate(input)?.script.to_string())
    }

    /// 入力ワークブックからスクリプトを生成し、出力パスに書き込む
    ///
    /// 出力先の親ディレクトリが存在しなければ作成します。
    pub fn run_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Generated, Xlsx2SqlError> {
        let generated = self.generate_from_path(input)?;
        crate::output::write_script(output, &generated.script)?;
        Ok(generated)
    }

    fn generate_from_rows(&self, sheet_name: String, rows: &[RawRow]) -> Generated {
        let extraction = extract_records(rows);
        let script = emit(&extraction.records, self.config.mode, self.config.only_diff);
        Generated {
            sheet_name,
            script,
            skipped: extraction.skipped,
        }
    }
}
