//! SQL Emitter Module
//!
//! 検証済みレコードからトランザクションスクリプトを生成するモジュール。
//! 生成モードは`SqlMode`で選択し、各モードの文の形は`statements`に実装します。
//! このモジュールはI/Oを行わず、スクリプトをデータとして返します。

mod statements;

use crate::api::SqlMode;
use crate::types::RecordPair;
use std::fmt;
use std::io::Write;

pub use statements::{BatchStatement, PerRowStatements};

/// 更新対象のテーブル
pub const TARGET_TABLE: &str = "documents";

/// トランザクション開始行
pub const BEGIN: &str = "BEGIN;";

/// トランザクション確定行
pub const COMMIT: &str = "COMMIT;";

/// SQL文字列リテラル用のエスケープ
///
/// シングルクォートを2つに置き換えます。それ以外の文字は変更しません。
///
/// ```rust
/// assert_eq!(xlsx2sql::escape_literal("O'Brien"), "O''Brien");
/// ```
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// 生成されたトランザクションスクリプト
///
/// 常に`BEGIN;`で始まり`COMMIT;`で終わります（レコードが0件の場合も同様）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionScript {
    lines: Vec<String>,
    record_count: usize,
}

impl TransactionScript {
    /// 本体の行を`BEGIN;`/`COMMIT;`で囲んでスクリプトを作る
    fn wrap(body: Vec<String>, record_count: usize) -> Self {
        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(BEGIN.to_string());
        lines.extend(body);
        lines.push(COMMIT.to_string());
        Self {
            lines,
            record_count,
        }
    }

    /// スクリプトの各行（改行文字を含まない）
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// スクリプトに含まれるレコード数
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// レコードが1件も含まれていないか
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// スクリプトをそのままライターに書き出す
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for TransactionScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// レコードからトランザクションスクリプトを生成する
///
/// # 引数
///
/// * `records` - 入力順のレコード
/// * `mode` - 生成モード
/// * `only_diff` - `SqlMode::Batch`の場合のみ有効。現在の`name`と異なる行だけを更新する
///
/// # 戻り値
///
/// 生成されたスクリプト。この関数は失敗しません。
pub fn emit(records: &[RecordPair], mode: SqlMode, only_diff: bool) -> TransactionScript {
    let body = match mode {
        SqlMode::PerRow => PerRowStatements.render(records),
        SqlMode::Batch => BatchStatement { only_diff }.render(records),
    };
    TransactionScript::wrap(body, records.len())
}
