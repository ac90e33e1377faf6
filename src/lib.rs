//! xlsx2sql - Spreadsheet to PostgreSQL JSONB update scripts
//!
//! コード／名称の対応表（Excelなど）を読み込み、`documents`テーブルの
//! JSON列`data`の`name`を業務コードで更新する冪等なSQLスクリプトを生成します。
//! データベースには接続せず、テキストを出力するだけです。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsx2sql::GeneratorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定: 最初のシート、バッチ文、差分のみ更新
//!     let generator = GeneratorBuilder::new().build()?;
//!
//!     let generated = generator.run_to_file("codes.xlsx", "updates.sql")?;
//!     println!("{} updates", generated.record_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rows to SQL
//!
//! シートの読み込みを介さずに、抽出と生成だけを使うこともできます。
//!
//! ```rust
//! use xlsx2sql::{emit, extract_records, SqlMode};
//!
//! let rows = vec![
//!     vec!["code", "full", "short"],
//!     vec!["A1", "Full Name", "O'Brien"],
//! ];
//! let extraction = extract_records(rows);
//! let script = emit(&extraction.records, SqlMode::PerRow, false);
//!
//! assert!(script.to_string().contains("to_jsonb('O''Brien'::text)"));
//! ```

mod api;
mod builder;
mod error;
mod extract;
mod output;
mod parser;
mod security;
mod sql;
mod types;

// 公開API
pub use api::{SheetSelector, SqlMode};
pub use builder::{Generated, Generator, GeneratorBuilder};
pub use error::Xlsx2SqlError;
pub use extract::{extract_records, Extraction, CODE_COLUMN, MIN_COLUMNS, SHORT_NAME_COLUMN};
pub use output::write_script;
pub use sql::{emit, escape_literal, TransactionScript};
pub use types::{RawRow, RecordPair, SkipCounts, SkipReason};
