//! Output Module
//!
//! 生成されたスクリプトをファイルに書き込むモジュール。

use crate::error::Xlsx2SqlError;
use crate::sql::TransactionScript;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// スクリプトを出力パスにそのまま書き込む
///
/// 親ディレクトリが存在しなければ作成します。既存のファイルは上書きされます。
///
/// # 戻り値
///
/// * `Ok(())` - 書き込みに成功した場合
/// * `Err(Xlsx2SqlError::CreateDir)` - 親ディレクトリを作成できない場合
/// * `Err(Xlsx2SqlError::Write)` - ファイルの作成・書き込みに失敗した場合
pub fn write_script<P: AsRef<Path>>(
    path: P,
    script: &TransactionScript,
) -> Result<(), Xlsx2SqlError> {
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        // "" と "." はカレントディレクトリ
        if !dir.as_os_str().is_empty() && dir != Path::new(".") {
            fs::create_dir_all(dir).map_err(|source| Xlsx2SqlError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let write_err = |source: std::io::Error| Xlsx2SqlError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    script.write_to(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
