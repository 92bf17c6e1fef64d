use dataframe::{Result, Series, TieBreak};

fn main() -> Result<()> {
    println!("=== Series 基本的な使い方 ===");

    let prices = Series::new(vec![120.0, 98.5, 120.0, 143.25, 98.5, 120.0], "prices");
    println!("{}", prices);

    println!("合計: {}", prices.sum());
    println!("平均: {:.3}", prices.mean());
    println!("最小値: {}", prices.min()?);
    println!("最大値: {}", prices.max()?);
    println!("最頻値: {}", prices.mode()?);
    println!("最頻値 (最小優先): {}", prices.mode_with(TieBreak::Smallest)?);
    println!("度数: {:?}", prices.value_counts());
    println!("ユニーク値: {:?}", prices.unique_val());
    println!("98.5を含む: {}", prices.contains(98.5));

    let discounted = prices.replace(143.25, 130.0).apply(|v| v * 0.9);
    println!("値引き後: {}", discounted);
    println!("元のSeries: {}", prices);

    println!("\n=== 空のSeries ===");
    let empty: Series<f64> = Series::new(vec![], "empty");
    println!("平均: {}", empty.mean());
    match empty.max() {
        Ok(v) => println!("最大値: {}", v),
        Err(e) => println!("エラー: {}", e),
    }

    Ok(())
}
