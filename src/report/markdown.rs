use crate::domain::RankedSpot;
use crate::extensions::str_ext::TruncateChars;
use std::io::{self, Write};

pub fn write_markdown<W: Write>(out: &mut W, ranked: &[RankedSpot], rule_width: usize, description_limit: usize) -> io::Result<()> {
    let rule = "=".repeat(rule_width);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "【マークダウン形式出力】")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(out, "| No. | スポット名 | 距離 | 難易度 | 画像URL | 特徴 |")?;
    writeln!(out, "|-----|-----------|------|--------|---------|------|")?;

    for entry in ranked {
        let spot = entry.spot();
        writeln!(
            out,
            "| {} | {} | {} | {} | [画像]({}) | {} |",
            entry.rank(),
            spot.name(),
            entry.distance(),
            spot.difficulty(),
            spot.image_url(),
            spot.description().truncate_with_ellipsis(description_limit)
        )?;
    }

    Ok(())
}
