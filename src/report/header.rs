use crate::app_config::Reference;
use std::io::{self, Write};

pub fn write_header<W: Write>(out: &mut W, reference: &Reference, spot_count: usize, rule_width: usize) -> io::Result<()> {
    let rule = "=".repeat(rule_width);
    let location = reference.location();

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}撮影スポット{}か所 - 距離計算結果", reference.name(), spot_count)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "基準点: {}（緯度: {} N, 経度: {} E, 高さ: {:.0}m）",
        reference.name(),
        location.latitude,
        location.longitude,
        location.altitude
    )?;
    writeln!(out, "距離計算方式: Haversine公式（地球半径 = 6,371km）")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}
