//! Row Extractor Module
//!
//! シートの生の行から検証済みの`RecordPair`を取り出すモジュール。
//! 先頭行はヘッダーとして無条件に読み飛ばし、不正な行は黙ってスキップします。

use crate::types::{RecordPair, SkipCounts, SkipReason};

/// コード列（A列）
pub const CODE_COLUMN: usize = 0;

/// 略称列（C列）。B列は読み込まれるが使用しない
pub const SHORT_NAME_COLUMN: usize = 2;

/// 有効な行に必要な最小列数
pub const MIN_COLUMNS: usize = SHORT_NAME_COLUMN + 1;

/// 抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// 入力の行順を保ったレコード（重複もそのまま残る）
    pub records: Vec<RecordPair>,
    /// スキップされた行の理由別集計（ヘッダー行は含まない）
    pub skipped: SkipCounts,
}

/// 行のシーケンスからレコードを抽出する
///
/// # 引数
///
/// * `rows` - ヘッダー行を含む行のシーケンス
///
/// # 戻り値
///
/// 抽出されたレコードとスキップ集計。この関数は失敗しません。
///
/// # 使用例
///
/// ```rust
/// use xlsx2sql::extract_records;
///
/// let rows = vec![
///     vec!["code", "full", "short"],
///     vec!["A1", "Full Name", "O'Brien"],
///     vec!["", "x", "y"],
/// ];
/// let extraction = extract_records(rows);
/// assert_eq!(extraction.records.len(), 1);
/// assert_eq!(extraction.records[0].short_name(), "O'Brien");
/// ```
pub fn extract_records<I, R, S>(rows: I) -> Extraction
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut extraction = Extraction::default();

    for (row_idx, row) in rows.into_iter().enumerate().skip(1) {
        match extract_row(row.as_ref()) {
            Ok(record) => extraction.records.push(record),
            Err(reason) => {
                tracing::debug!(row = row_idx + 1, %reason, "skipping row");
                extraction.skipped.record(reason);
            }
        }
    }

    extraction
}

/// 1行を検証してレコードに変換する
fn extract_row<S: AsRef<str>>(row: &[S]) -> Result<RecordPair, SkipReason> {
    if row.len() < MIN_COLUMNS {
        return Err(SkipReason::TooFewColumns);
    }

    RecordPair::try_new(
        row[CODE_COLUMN].as_ref(),
        row[SHORT_NAME_COLUMN].as_ref(),
    )
}
