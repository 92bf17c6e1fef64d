use std::collections::hash_map::Entry;
use std::collections::HashMap;

use num_traits::Float;

/// 最頻値が複数ある場合の選び方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// 系列中で最初に出現した値を優先
    #[default]
    FirstSeen,
    /// 数値として最小の値を優先（NaNはどの数値にも負ける）
    Smallest,
}

/// 度数計算に使う値のキー
///
/// `0.0` と `-0.0` は同じキー、全てのNaNは一つのキーにまとめる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ValueKey {
    NaN,
    Decoded(u64, i16, i8),
}

impl ValueKey {
    fn of<T: Float>(value: T) -> Self {
        if value.is_nan() {
            return ValueKey::NaN;
        }
        let canonical = if value == T::zero() { T::zero() } else { value };
        let (mantissa, exponent, sign) = canonical.integer_decode();
        ValueKey::Decoded(mantissa, exponent, sign)
    }
}

/// 出現順を保った度数表を作成
pub(crate) fn frequency_table<T: Float>(values: &[T]) -> Vec<(T, usize)> {
    let mut slots: HashMap<ValueKey, usize> = HashMap::new();
    let mut table: Vec<(T, usize)> = Vec::new();

    for &value in values {
        match slots.entry(ValueKey::of(value)) {
            Entry::Occupied(slot) => table[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(table.len());
                table.push((value, 1));
            }
        }
    }

    table
}

/// 度数表から最頻値を選ぶ（空の表ならNone）
pub(crate) fn pick_mode<T: Float>(table: &[(T, usize)], tie_break: TieBreak) -> Option<T> {
    let mut best: Option<(T, usize)> = None;

    for &(value, count) in table {
        best = match best {
            None => Some((value, count)),
            Some((best_value, best_count)) => {
                let wins = count > best_count
                    || (count == best_count
                        && tie_break == TieBreak::Smallest
                        && precedes(value, best_value));
                if wins {
                    Some((value, count))
                } else {
                    Some((best_value, best_count))
                }
            }
        };
    }

    best.map(|(value, _)| value)
}

fn precedes<T: Float>(candidate: T, current: T) -> bool {
    if current.is_nan() {
        return !candidate.is_nan();
    }
    candidate < current
}
