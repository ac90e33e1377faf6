//! Security Module
//!
//! 入力ファイルのサイズ制限を実装するモジュール。
//! ワークブックは解析前にすべてメモリに読み込むため、上限を超える入力は拒否します。

use crate::error::Xlsx2SqlError;

/// 入力ファイルの最大サイズのデフォルト値（2GB）
pub(crate) const DEFAULT_MAX_INPUT_FILE_SIZE: u64 = 2_147_483_648;

/// セキュリティ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_FILE_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 入力サイズを検証する
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(Xlsx2SqlError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, size: u64) -> Result<(), Xlsx2SqlError> {
        if size > self.max_input_file_size {
            return Err(Xlsx2SqlError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(
            SecurityConfig::default().max_input_file_size,
            2_147_483_648
        );
    }

    #[test]
    fn test_check_input_size_within_limit() {
        let config = SecurityConfig {
            max_input_file_size: 10,
        };
        assert!(config.check_input_size(0).is_ok());
        assert!(config.check_input_size(10).is_ok());
    }

    #[test]
    fn test_check_input_size_over_limit() {
        let config = SecurityConfig {
            max_input_file_size: 10,
        };
        match config.check_input_size(11) {
            Err(Xlsx2SqlError::SecurityViolation(msg)) => {
                assert!(msg.contains("11 bytes"));
                assert!(msg.contains("max: 10 bytes"));
            }
            other => panic!("Expected SecurityViolation, got {:?}", other),
        }
    }
}
