//! Statement Shapes
//!
//! 各生成モードのSQL文の形を実装するモジュール。
//! いずれも`BEGIN;`/`COMMIT;`の間に入る本体の行だけを返します。

use super::{escape_literal, TARGET_TABLE};
use crate::types::RecordPair;

/// バッチ文で値が1件もない場合に出力するコメント
pub const NO_VALUES_MARKER: &str = "-- no values generated";

/// レコードごとの`UPDATE`文
pub struct PerRowStatements;

impl PerRowStatements {
    pub fn render(&self, records: &[RecordPair]) -> Vec<String> {
        let mut lines = Vec::with_capacity(records.len() * 3);
        for record in records {
            lines.push(format!("UPDATE {}", TARGET_TABLE));
            lines.push(format!(
                "SET data = jsonb_set(data, '{{name}}', to_jsonb('{}'::text), false)",
                escape_literal(record.short_name())
            ));
            lines.push(format!(
                "WHERE data->>'code' = '{}';",
                escape_literal(record.code())
            ));
        }
        lines
    }
}

/// `VALUES`リストと結合する1つのバッチ`UPDATE`文
pub struct BatchStatement {
    /// `IS DISTINCT FROM`条件で変更のない行を除外するか
    pub only_diff: bool,
}

impl BatchStatement {
    pub fn render(&self, records: &[RecordPair]) -> Vec<String> {
        // 空のVALUESリストは不正なSQLになるため、コメントのみを出力する
        if records.is_empty() {
            return vec![NO_VALUES_MARKER.to_string()];
        }

        let mut lines = Vec::with_capacity(records.len() + 11);
        lines.push(String::new());
        lines.push("WITH vals(code, name) AS (".to_string());
        lines.push("VALUES".to_string());

        let last = records.len() - 1;
        for (idx, record) in records.iter().enumerate() {
            let separator = if idx < last { "," } else { "" };
            lines.push(format!("    {}{}", value_tuple(record), separator));
        }

        lines.push(")".to_string());
        lines.push(String::new());
        lines.push(format!("UPDATE {} d", TARGET_TABLE));
        lines.push(
            "SET data = jsonb_set(d.data, '{name}', to_jsonb(v.name::text), false)".to_string(),
        );
        lines.push("FROM vals v".to_string());

        let mut condition = String::from("WHERE d.data->>'code' = v.code");
        if self.only_diff {
            condition.push_str(" AND d.data->>'name' IS DISTINCT FROM v.name");
        }
        condition.push(';');
        lines.push(condition);
        lines.push(String::new());

        lines
    }
}

/// `('<code>','<short_name>')`形式の値タプル
fn value_tuple(record: &RecordPair) -> String {
    format!(
        "('{}','{}')",
        escape_literal(record.code()),
        escape_literal(record.short_name())
    )
}
