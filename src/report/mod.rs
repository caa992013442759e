mod details;
mod header;
mod markdown;
mod summary_table;

use crate::app_config::AppConfig;
use crate::domain::RankedSpot;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Writes the header followed by the summary table, the detail listing and the markdown table, all in ranking order.
#[instrument(skip_all, fields(spot_count = ranked.len()))]
pub fn write_report<W: Write>(out: &mut W, config: &AppConfig, ranked: &[RankedSpot]) -> io::Result<()> {
    let rule_width = config.report().rule_width();

    header::write_header(out, config.reference(), ranked.len(), rule_width)?;
    summary_table::write_summary_table(out, ranked, rule_width)?;
    details::write_details(out, ranked, rule_width)?;
    markdown::write_markdown(out, ranked, rule_width, config.report().description_limit())?;
    out.flush()?;

    debug!("Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::catalog::builtin_spots;
    use crate::domain::GeoLocation;
    use crate::ranking::rank_by_distance;
    use pretty_assertions::assert_eq;
    use std::fs;
    use test_log::test;

    fn render(config: &AppConfig) -> String {
        let spots = builtin_spots().unwrap();
        let ranked = rank_by_distance(config.reference().location(), &spots);

        let mut out = Vec::new();
        write_report(&mut out, config, &ranked).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_matches_the_reference_output() {
        let expected = fs::read_to_string(format!("{}/tests/resources/report/expectedReport.txt", env!("CARGO_MANIFEST_DIR"))).unwrap();

        assert_eq!(render(&AppConfigBuilder::new().build()), expected);
    }

    #[test]
    fn every_view_lists_the_spots_in_the_same_order() {
        let config = AppConfigBuilder::new().build();
        let spots = builtin_spots().unwrap();
        let ranked = rank_by_distance(config.reference().location(), &spots);
        let output = render(&config);

        let table_names = output
            .lines()
            .filter(|line| line.split(" | ").count() == 6 && !line.starts_with("No.") && !line.starts_with('|'))
            .map(|line| line.split(" | ").nth(1).unwrap().trim_end().to_string())
            .collect::<Vec<_>>();
        let detail_positions = ranked
            .iter()
            .map(|entry| output.find(&format!("\n{}. {}\n", entry.rank(), entry.spot().name())))
            .collect::<Vec<_>>();
        let markdown_names = output
            .lines()
            .filter(|line| line.starts_with("| ") && !line.starts_with("| No."))
            .map(|line| line.split(" | ").nth(1).unwrap().to_string())
            .collect::<Vec<_>>();
        let expected = ranked.iter().map(|entry| entry.spot().name().to_string()).collect::<Vec<_>>();

        assert_eq!(table_names, expected);
        assert_eq!(markdown_names, expected);
        assert!(detail_positions.iter().all(Option::is_some), "missing detail blocks");
        assert!(detail_positions.windows(2).all(|pair| pair[0] < pair[1]), "detail blocks out of order");
    }

    #[test]
    fn rules_follow_the_configured_width() {
        let output = render(&AppConfigBuilder::new().rule_width(20).build());

        assert_eq!(output.lines().next(), Some("=".repeat(20).as_str()));
        assert!(output.lines().any(|line| line == "-".repeat(20)));
        assert!(!output.contains(&"=".repeat(21)));
    }

    #[test]
    fn a_different_reference_reorders_the_report() {
        let tokyo_tower = GeoLocation::new(35.6586, 139.7454);
        let output = render(&AppConfigBuilder::new().reference("東京タワー", tokyo_tower).description_limit(10).build());

        assert!(output.contains("\n1. 東京タワー付近\n"));
        assert!(output.contains("東京タワー撮影スポット15か所 - 距離計算結果"));
        assert!(output.contains("| 1 | 東京タワー付近 | 0m | 上級 |"));
    }
}
