//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! 行データの品質問題（列不足・空フィールド）はエラーではなく、
//! 抽出段階で黙ってスキップされます（`SkipCounts`で集計）。

use std::path::PathBuf;
use thiserror::Error;

/// xlsx2sqlクレート全体で使用するエラー型
///
/// いずれのバリアントも実行全体を中断する致命的なエラーです。
///
/// # エラーの種類
///
/// - `Io`: 入力の読み込み中に発生したI/Oエラー
/// - `Open`: 入力ファイルが存在しない、または読めないエラー
/// - `ReadInput`: リーダーからワークブックのバイト列を読み込めなかったエラー
/// - `Parse`: ワークブックの解析・行の列挙に失敗したエラー（calamine由来）
/// - `Config`: 設定の検証やシート解決に失敗したエラー
/// - `CreateDir` / `Write`: 出力スクリプトの書き込みに失敗したエラー
/// - `SecurityViolation`: 入力サイズの上限に違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2sql::Xlsx2SqlError;
/// use std::fs::File;
///
/// fn open_input(path: &str) -> Result<(), Xlsx2SqlError> {
///     let _file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Xlsx2SqlError {
    /// 入力の読み込み中に発生したI/Oエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイル、シートの行が列挙できない場合などに
    /// calamineが返すエラーです。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 入力ファイルを開けなかったエラー
    #[error("Failed to open workbook '{}': {source}", .path.display())]
    Open {
        /// 入力ファイルのパス
        path: PathBuf,
        /// 元のI/Oエラー
        source: std::io::Error,
    },

    /// リーダーからワークブックのバイト列を読み込めなかったエラー
    #[error("Failed to read workbook input: {0}")]
    ReadInput(#[source] std::io::Error),

    /// 設定の検証、またはシートの解決に失敗したエラー
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsx2sql::{GeneratorBuilder, SheetSelector, Xlsx2SqlError};
    ///
    /// let result = GeneratorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name(String::new()))
    ///     .build();
    ///
    /// match result {
    ///     Err(Xlsx2SqlError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// 出力先の親ディレクトリを作成できなかったエラー
    #[error("Failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        /// 作成しようとしたディレクトリ
        path: PathBuf,
        /// 元のI/Oエラー
        source: std::io::Error,
    },

    /// 出力ファイルの作成・書き込みに失敗したエラー
    #[error("Failed to write output file '{}': {source}", .path.display())]
    Write {
        /// 出力ファイルのパス
        path: PathBuf,
        /// 元のI/Oエラー
        source: std::io::Error,
    },

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルのサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Xlsx2SqlError = io_err.into();

        match error {
            Xlsx2SqlError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = calamine::Error::Msg("Corrupted file");
        let error: Xlsx2SqlError = parse_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.starts_with("Failed to parse workbook"));
        assert!(error_msg.contains("Corrupted file"));
    }

    #[test]
    fn test_config_error_display() {
        let error = Xlsx2SqlError::Config("Sheet 'Codes' not found".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: Sheet 'Codes' not found"
        );
    }

    #[test]
    fn test_write_error_names_path() {
        let error = Xlsx2SqlError::Write {
            path: PathBuf::from("out/updates.sql"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("Failed to write output file"));
        assert!(error_msg.contains("out/updates.sql"));
        assert!(error_msg.contains("Permission denied"));
    }

    #[test]
    fn test_create_dir_error_names_path() {
        let error = Xlsx2SqlError::CreateDir {
            path: PathBuf::from("out"),
            source: io::Error::other("read-only file system"),
        };

        let error_msg = error.to_string();
        assert!(error_msg.starts_with("Failed to create output directory 'out'"));
        assert!(error_msg.contains("read-only file system"));
    }

    #[test]
    fn test_read_input_error_display() {
        let error = Xlsx2SqlError::ReadInput(io::Error::other("connection reset"));

        let error_msg = error.to_string();
        assert!(error_msg.starts_with("Failed to read workbook input"));
        assert!(error_msg.contains("connection reset"));
    }

    // ?演算子による自動変換の確認
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), Xlsx2SqlError> {
            let _file = std::fs::File::open("nonexistent_file.xlsx")?;
            Ok(())
        }

        match io_operation() {
            Err(Xlsx2SqlError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
