//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! シートの行をテキストの並びとして取り出し、抽出段階に渡します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
