use std::fmt::Debug;

use num_traits::Float;

use super::counts::{self, TieBreak};
use super::Series;
use crate::error::{Error, Result};

// 浮動小数点型のSeriesに対する集約
impl<T> Series<T>
where
    T: Debug + Float,
{
    /// 合計を計算（空なら0）
    pub fn sum(&self) -> T {
        self.values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// 平均を計算
    ///
    /// 空のSeriesではエラーではなくNaNを返す。
    pub fn mean(&self) -> T {
        if self.values.is_empty() {
            return T::nan();
        }

        match num_traits::cast::<usize, T>(self.len()) {
            Some(count) => self.sum() / count,
            None => T::nan(),
        }
    }

    /// 最小値を計算（NaNは比較から除外）
    pub fn min(&self) -> Result<T> {
        self.ensure_not_empty("最小値")?;
        Ok(self.values.iter().copied().fold(T::nan(), T::min))
    }

    /// 最大値を計算（NaNは比較から除外）
    pub fn max(&self) -> Result<T> {
        self.ensure_not_empty("最大値")?;
        Ok(self.values.iter().copied().fold(T::nan(), T::max))
    }

    /// 最頻値を計算（同数の場合は最初に出現した値）
    pub fn mode(&self) -> Result<T> {
        self.mode_with(TieBreak::default())
    }

    /// 同数時の選び方を指定して最頻値を計算
    pub fn mode_with(&self, tie_break: TieBreak) -> Result<T> {
        self.ensure_not_empty("最頻値")?;
        let table = counts::frequency_table(&self.values);
        counts::pick_mode(&table, tie_break).ok_or_else(|| Error::empty("最頻値", &self.name))
    }

    /// 各値の出現回数を最初の出現順で返す
    pub fn value_counts(&self) -> Vec<(T, usize)> {
        counts::frequency_table(&self.values)
    }

    fn ensure_not_empty(&self, operation: &str) -> Result<()> {
        if self.values.is_empty() {
            log::debug!("empty series '{}': {} has no value", self.name, operation);
            return Err(Error::empty(operation, &self.name));
        }
        Ok(())
    }
}
