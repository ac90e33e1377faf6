//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// SQL生成モード
///
/// 抽出したレコードをどの形のSQLに変換するかを指定します。
/// 1回の実行につき1つだけ選択され、`emit`に明示的に渡されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlMode {
    /// レコードごとに1つの`UPDATE`文を出力
    ///
    /// # 出力例
    ///
    /// ```sql
    /// UPDATE documents
    /// SET data = jsonb_set(data, '{name}', to_jsonb('Short'::text), false)
    /// WHERE data->>'code' = 'A1';
    /// ```
    PerRow,

    /// `WITH vals(code, name) AS (VALUES ...)`による1つのバッチ`UPDATE`文を出力（デフォルト）
    ///
    /// `only_diff`が有効な場合、現在の`name`と異なる行のみを更新する
    /// `IS DISTINCT FROM`条件が付加されます。
    #[default]
    Batch,
}

/// シート選択方式
///
/// 読み込むシートを1つだけ選択します。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelector {
    /// ワークブックの最初のシート（デフォルト）
    #[default]
    First,

    /// インデックス指定（0始まり）
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Codes".to_string())`
    Name(String),
}

impl SheetSelector {
    /// CLIの`--sheet`引数から選択方式を作成する
    ///
    /// 名前が指定されていなければ最初のシートを選択します。
    pub fn from_name(name: Option<String>) -> Self {
        match name {
            Some(name) => SheetSelector::Name(name),
            None => SheetSelector::First,
        }
    }
}
