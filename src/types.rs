//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::fmt;

/// スプレッドシートの1行（列の値をテキストとして保持）
///
/// 列数は保証されません。末尾の空セルは含まれないため、想定より短いことがあります。
pub type RawRow = Vec<String>;

/// 検証済みのレコード（コードと略称のペア）
///
/// 両フィールドは前後の空白を除去済みで、空でないことが保証されます。
/// `try_new`以外の方法では構築できません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPair {
    code: String,
    short_name: String,
}

impl RecordPair {
    /// 値をトリムし、空でなければレコードを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(RecordPair)` - 両方の値が空でない場合
    /// * `Err(SkipReason)` - どちらかが空の場合（コードが先に判定される）
    pub fn try_new(code: &str, short_name: &str) -> Result<Self, SkipReason> {
        let code = code.trim();
        let short_name = short_name.trim();

        if code.is_empty() {
            return Err(SkipReason::EmptyCode);
        }
        if short_name.is_empty() {
            return Err(SkipReason::EmptyShortName);
        }

        Ok(Self {
            code: code.to_string(),
            short_name: short_name.to_string(),
        })
    }

    /// 業務コード（JSONの`code`フィールドと照合される）
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 略称（JSONの`name`フィールドに書き込まれる）
    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

/// 行がスキップされた理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 列数が3未満
    TooFewColumns,
    /// トリム後のコードが空
    EmptyCode,
    /// トリム後の略称が空
    EmptyShortName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewColumns => write!(f, "fewer than 3 columns"),
            SkipReason::EmptyCode => write!(f, "empty code"),
            SkipReason::EmptyShortName => write!(f, "empty short name"),
        }
    }
}

/// スキップされた行の理由別集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub too_few_columns: usize,
    pub empty_code: usize,
    pub empty_short_name: usize,
}

impl SkipCounts {
    /// 理由に応じてカウンタを1つ増やす
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooFewColumns => self.too_few_columns += 1,
            SkipReason::EmptyCode => self.empty_code += 1,
            SkipReason::EmptyShortName => self.empty_short_name += 1,
        }
    }

    /// スキップされた行の合計
    pub fn total(&self) -> usize {
        self.too_few_columns + self.empty_code + self.empty_short_name
    }
}
