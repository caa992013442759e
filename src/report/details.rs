use crate::domain::RankedSpot;
use std::io::{self, Write};

pub fn write_details<W: Write>(out: &mut W, ranked: &[RankedSpot], rule_width: usize) -> io::Result<()> {
    writeln!(out, "【詳細情報】")?;
    writeln!(out, "{}", "=".repeat(rule_width))?;

    for entry in ranked {
        let spot = entry.spot();
        writeln!(out)?;
        writeln!(out, "{}. {}", entry.rank(), spot.name())?;
        writeln!(out, "   座標: {}°N, {}°E", spot.location().latitude, spot.location().longitude)?;
        writeln!(out, "   距離: {}", entry.distance())?;
        writeln!(out, "   難易度: {}", spot.difficulty())?;
        writeln!(out, "   特徴: {}", spot.description())?;
        writeln!(out, "   Wikimedia Commons画像: {}", spot.image_url())?;
    }

    Ok(())
}
