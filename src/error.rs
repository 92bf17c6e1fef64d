use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 空のSeriesに対して結果を持たない集約を要求した
    #[error("データがありません: {0}")]
    EmptyData(String),
}

// 旧名との互換性を維持する
pub type SeriesError = Error;

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 空入力エラーを作成
    pub(crate) fn empty(operation: &str, name: &str) -> Self {
        Error::EmptyData(format!(
            "空のSeries '{}' の{}は計算できません",
            name, operation
        ))
    }
}
