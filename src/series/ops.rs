use std::fmt::Debug;

use num_traits::Float;

use super::counts;
use super::Series;

// 検索と変換。変換は常に新しいSeriesを返し、元のSeriesは変更しない。
impl<T> Series<T>
where
    T: Debug + Float,
{
    /// 重複を除いた値を返す（順序は保証しない）
    pub fn unique_val(&self) -> Vec<T> {
        counts::frequency_table(&self.values)
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }

    /// 値が含まれているかどうか（厳密な等価比較。NaNは常にfalse）
    pub fn contains(&self, value: T) -> bool {
        self.values.iter().any(|&v| v == value)
    }

    /// `current_val` と等しい要素を `new_val` に置き換えた新しいSeriesを返す
    pub fn replace(&self, current_val: T, new_val: T) -> Series<T> {
        let mut replaced = 0usize;
        let values: Vec<T> = self
            .values
            .iter()
            .map(|&v| {
                if v == current_val {
                    replaced += 1;
                    new_val
                } else {
                    v
                }
            })
            .collect();

        log::debug!(
            "replace on '{}': {} of {} values substituted",
            self.name,
            replaced,
            values.len()
        );
        Series::new(values, self.name.clone())
    }

    /// 各要素に関数を適用した新しいSeriesを返す
    ///
    /// `func` は要素ごとに先頭から順に一度だけ呼ばれる。
    pub fn apply<F>(&self, mut func: F) -> Series<T>
    where
        F: FnMut(T) -> T,
    {
        let values: Vec<T> = self.values.iter().map(|&v| func(v)).collect();
        log::trace!("apply on '{}': {} values mapped", self.name, values.len());
        Series::new(values, self.name.clone())
    }
}
