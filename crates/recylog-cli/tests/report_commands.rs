//! Stats, analysis and chart commands over seeded and empty stores.

use anyhow::Result;
use recylog_testing::TestWorld;

fn seeded_world() -> Result<TestWorld> {
    let world = TestWorld::new();
    let result = world.run(&["seed"])?;
    assert!(result.success(), "seed failed: {}", result.stderr());
    Ok(world)
}

#[test]
fn test_stats_summary_sections() -> Result<()> {
    let world = seeded_world()?;

    let result = world.run(&["stats"])?;
    assert!(result.success());
    assert!(result.stdout().contains("--- General Statistics ---"));
    assert!(result.stdout().contains("Total Records:"));
    assert!(result.stdout().contains("--- Materials by Type ---"));
    assert!(result.stdout().contains("--- Materials by Location ---"));
    Ok(())
}

#[test]
fn test_stats_json_matches_store_totals() -> Result<()> {
    let world = seeded_world()?;
    let count = world.store()?.count()?;

    let result = world.run(&["--format", "json", "stats"])?;
    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["overall"]["count"], count);
    assert!(json["by_type"].as_array().expect("array").len() > 1);
    Ok(())
}

#[test]
fn test_stats_on_empty_store() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["stats"])?;
    assert!(result.success());
    assert!(result.stdout().contains("No data available for statistics"));
    Ok(())
}

#[test]
fn test_analyze_full_reports_shares() -> Result<()> {
    let world = seeded_world()?;

    let result = world.run(&["analyze"])?;
    assert!(result.success());
    assert!(result.stdout().contains("FULL DATA ANALYSIS"));
    assert!(result.stdout().contains("BY TYPE:"));
    assert!(result.stdout().contains("BY LOCATION:"));
    assert!(result.stdout().contains('%'));
    Ok(())
}

#[test]
fn test_analyze_trends_and_forecast_are_static() -> Result<()> {
    let world = TestWorld::new();

    // Qualitative notes render even without data
    let result = world.run(&["analyze", "--mode", "trends"])?;
    assert!(result.success());
    assert!(result.stdout().contains("TREND ANALYSIS"));

    let result = world.run(&["analyze", "--mode", "forecast"])?;
    assert!(result.success());
    assert!(result.stdout().contains("FORECAST"));
    Ok(())
}

#[test]
fn test_every_chart_kind_renders_on_seeded_data() -> Result<()> {
    let world = seeded_world()?;

    for kind in ["bars", "pie", "lines", "histogram", "scatter", "compare"] {
        let result = world.run(&["chart", kind])?;
        assert!(
            result.success(),
            "chart {} failed: {}",
            kind,
            result.stderr()
        );
        assert!(
            !result.stdout().trim().is_empty(),
            "chart {} produced no output",
            kind
        );
    }
    Ok(())
}

#[test]
fn test_bar_chart_draws_bars() -> Result<()> {
    let world = seeded_world()?;

    let result = world.run(&["chart", "bars"])?;
    assert!(result.stdout().contains('█'));
    Ok(())
}

#[test]
fn test_charts_on_empty_store_show_placeholder() -> Result<()> {
    let world = TestWorld::new();

    for kind in ["bars", "pie", "lines", "histogram", "scatter", "compare"] {
        let result = world.run(&["chart", kind])?;
        assert!(result.success(), "chart {} failed on empty store", kind);
        assert!(
            result.stdout().contains("No data to display"),
            "chart {} missing placeholder",
            kind
        );
    }
    Ok(())
}

#[test]
fn test_chart_and_analyze_reject_json_format() -> Result<()> {
    let world = seeded_world()?;

    let result = world.run(&["--format", "json", "chart", "bars"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("plain text only"));

    let result = world.run(&["--format", "json", "analyze"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("plain text only"));
    Ok(())
}

#[test]
fn test_output_has_no_escape_codes_when_color_disabled() -> Result<()> {
    let world = seeded_world()?;

    // TestWorld always passes --color never
    let result = world.run(&["chart", "pie"])?;
    assert!(!result.stdout().contains('\u{1b}'));
    Ok(())
}
