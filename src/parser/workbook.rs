//! Workbook Reader
//!
//! calamineを使用したワークブック読み込みの実装。
//! シートを解決し、行を「セルのテキストの並び」として取り出します。

use calamine::{
    open_workbook_auto, open_workbook_auto_from_rs, Data, DataType, Range, Reader, Sheets,
};
use chrono::{NaiveDateTime, Timelike};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::api::SheetSelector;
use crate::error::Xlsx2SqlError;
use crate::security::SecurityConfig;
use crate::types::RawRow;

/// ワークブックパーサー
///
/// calamineのラッパーとして、シートの解決と行の読み込みを提供します。
/// 形式（xlsx/xlsm/xlsb/xls/ods）はcalamineが自動判定します。
pub(crate) struct WorkbookParser<RS: Read + Seek> {
    workbook: Sheets<RS>,
}

impl WorkbookParser<BufReader<File>> {
    /// パスからワークブックを開く
    ///
    /// 開く前にファイルサイズを検証します。
    pub fn open_path<P: AsRef<Path>>(
        path: P,
        security: &SecurityConfig,
    ) -> Result<Self, Xlsx2SqlError> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)
            .map_err(|source| Xlsx2SqlError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        security.check_input_size(size)?;

        let workbook = open_workbook_auto(path)?;
        Ok(Self { workbook })
    }
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// リーダーの内容をすべてメモリに読み込んでワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックのバイト列を読み込むリーダー
    /// * `security` - 入力サイズの上限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(Xlsx2SqlError::ReadInput)` - リーダーからの読み込みに失敗した場合
    /// * `Err(Xlsx2SqlError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(Xlsx2SqlError::Parse)` - ワークブックとして解析できない場合
    pub fn open<R: Read>(mut reader: R, security: &SecurityConfig) -> Result<Self, Xlsx2SqlError> {
        // 上限+1バイトまでしか読まない
        let limit = security.max_input_file_size.saturating_add(1);
        let mut buffer = Vec::new();
        reader
            .by_ref()
            .take(limit)
            .read_to_end(&mut buffer)
            .map_err(Xlsx2SqlError::ReadInput)?;
        security.check_input_size(buffer.len() as u64)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { workbook })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// すべてのシート名を取得
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシート名を1つ解決する
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(Xlsx2SqlError::Config)` - シートがない、見つからない、またはインデックスが範囲外の場合
    pub fn resolve_sheet(&self, selector: &SheetSelector) -> Result<String, Xlsx2SqlError> {
        let all_sheet_names = self.get_sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .into_iter()
                .next()
                .ok_or_else(|| Xlsx2SqlError::Config("no sheets in workbook".to_string())),

            SheetSelector::Index(index) => {
                let total = all_sheet_names.len();
                all_sheet_names.into_iter().nth(*index).ok_or_else(|| {
                    Xlsx2SqlError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index, total
                    ))
                })
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(Xlsx2SqlError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートの全行をテキストとして読み込む
    pub fn read_rows(&mut self, sheet_name: &str) -> Result<Vec<RawRow>, Xlsx2SqlError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        Ok(rows_from_range(&range))
    }
}

/// calamineの範囲を、A1起点・末尾の空セルを除いた行の並びに変換する
///
/// calamineの範囲は使用中の最初のセルから始まるため、先頭の空行・空列を補います。
/// 空セルしか含まない末尾の行は出力しません。
pub(crate) fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<RawRow> = (0..start_row).map(|_| RawRow::new()).collect();

    for cells in range.rows() {
        let mut row: RawRow = Vec::with_capacity(start_col as usize + cells.len());
        row.extend((0..start_col).map(|_| String::new()));
        row.extend(cells.iter().map(cell_text));

        while row.last().is_some_and(|cell| cell.is_empty()) {
            row.pop();
        }
        rows.push(row);
    }

    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    rows
}

/// セルの値を表示用テキストに変換する
///
/// Excelの「標準」表示に合わせて、数値は有効数字15桁に丸めた最短表記
/// （`123.0` → `123`、`0.1 + 0.2` → `0.3`）、日付書式のセルは`YYYY-MM-DD`
/// （時刻があれば`YYYY-MM-DD HH:MM:SS`）、空セルは空文字列になります。
///
/// calamineはユーザー定義の表示形式（`"000"`など）を公開しないため、
/// ゼロ埋めなどの書式は反映されません。
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => general_number(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) if dt.is_duration() => general_number(dt.as_f64()),
        Data::DateTime(dt) => match cell.as_datetime() {
            Some(datetime) => datetime_text(&datetime),
            None => general_number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match cell.as_datetime() {
            Some(datetime) => datetime_text(&datetime),
            None => s.clone(),
        },
        other => other.to_string(),
    }
}

/// 数値を有効数字15桁に丸めて最短の10進表記にする
fn general_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    match format!("{:.14e}", value).parse::<f64>() {
        // -0は0と表示する
        Ok(rounded) if rounded == 0.0 => "0".to_string(),
        Ok(rounded) => rounded.to_string(),
        Err(_) => value.to_string(),
    }
}

/// 日時を`YYYY-MM-DD`（時刻があれば`YYYY-MM-DD HH:MM:SS`）で表示する
fn datetime_text(datetime: &NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
