mod counts;
mod ops;
mod stats;

use std::fmt::{self, Debug, Display};

pub use self::counts::TieBreak;

/// Series構造体: 名前付きの一次元の値の配列
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// Seriesのデータ値
    values: Vec<T>,

    /// 名前
    name: String,
}

// 基本実装
impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// 新しいSeriesをベクトルから作成
    pub fn new(values: Vec<T>, name: impl Into<String>) -> Self {
        Series {
            values,
            name: name.into(),
        }
    }

    /// Seriesの長さを取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Seriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 位置から値を取得
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// 値の配列を取得
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// 名前を取得
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Seriesを消費して値の配列を返す
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Display for Series<T>
where
    T: Debug + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series(name={}, data={:?})", self.name, self.values)
    }
}

impl<'a, T> IntoIterator for &'a Series<T>
where
    T: Debug + Clone,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
