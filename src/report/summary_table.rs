use crate::domain::RankedSpot;
use std::io::{self, Write};

pub fn write_summary_table<W: Write>(out: &mut W, ranked: &[RankedSpot], rule_width: usize) -> io::Result<()> {
    writeln!(out, "{:<4} | {:<28} | {:<10} | {:<6} | {:<12} | {:<12}", "No.", "スポット名", "距離", "難易度", "緯度", "経度")?;
    writeln!(out, "{}", "-".repeat(rule_width))?;

    for entry in ranked {
        let spot = entry.spot();
        writeln!(
            out,
            "{:<4} | {:<28} | {:<10} | {:<6} | {:<12.6} | {:<12.6}",
            entry.rank(),
            spot.name(),
            entry.distance(),
            spot.difficulty(),
            spot.location().latitude,
            spot.location().longitude
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(rule_width))?;
    writeln!(out)
}
