use crate::infra::sample_dataset;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use str_snapshot::analytics::dataset::PerformanceDataset;
use str_snapshot::analytics::{compare, snapshot_insights, ComparisonResult, SnapshotInsights};
use str_snapshot::analytics::{summarize, InsightLabel, PropertySummary};
use str_snapshot::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct SnapshotReportArgs {
    /// Path to a performance CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// First property identifier (defaults to the first one in the dataset)
    #[arg(long)]
    pub(crate) first: Option<String>,
    /// Second property identifier (defaults to the second one in the dataset)
    #[arg(long)]
    pub(crate) second: Option<String>,
    /// Include the weekly record listing in the output
    #[arg(long)]
    pub(crate) list_records: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the weekly record listing in the output
    #[arg(long)]
    pub(crate) list_records: bool,
}

pub(crate) fn run_snapshot_report(args: SnapshotReportArgs) -> Result<(), AppError> {
    let SnapshotReportArgs {
        csv,
        first,
        second,
        list_records,
    } = args;

    let dataset = PerformanceDataset::from_path(csv)?;
    report(&dataset, first, second, list_records)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let dataset = sample_dataset()?;
    println!("Performance snapshot demo (bundled sample data)");
    report(&dataset, None, None, args.list_records)
}

fn report(
    dataset: &PerformanceDataset,
    first: Option<String>,
    second: Option<String>,
    list_records: bool,
) -> Result<(), AppError> {
    let (default_first, default_second) = dataset.default_pair()?;
    let first_id = first.unwrap_or(default_first);
    let second_id = second.unwrap_or(default_second);

    let records = dataset.records();
    let first = summarize(records, &first_id)?;
    let second = summarize(records, &second_id)?;
    let comparison = compare(&first, &second);
    let insights = snapshot_insights(&comparison);

    render_snapshot(&comparison, &insights);

    if list_records {
        println!("\nWeekly records");
        for record in records {
            println!(
                "- {} | week {} | occupancy {:.0}% | ADR R{:.0} | rating {:.1} | achievement {:.0}% | {} day(s) to next booking | revenue R{:.0} of R{:.0}",
                record.property_id,
                record.week,
                record.occupancy_pct,
                record.average_daily_rate,
                record.guest_rating,
                record.revenue_achievement_pct,
                record.days_to_next_booking,
                record.weekly_revenue,
                record.revenue_potential
            );
        }
    }

    Ok(())
}

fn render_snapshot(comparison: &ComparisonResult, insights: &SnapshotInsights) {
    println!("Performance snapshot (generated {})", Local::now().date_naive());

    println!("\nProperty summaries");
    render_summary(&comparison.first, &insights.first);
    render_summary(&comparison.second, &insights.second);

    println!(
        "\nMetric deltas ({} - {})",
        comparison.first.property_name, comparison.second.property_name
    );
    for delta in &comparison.deltas {
        println!(
            "- {}: {:.1} vs {:.1} (delta {:+.1})",
            delta.metric.label(),
            delta.first,
            delta.second,
            delta.delta
        );
    }

    let weaker = comparison.weaker();
    println!(
        "\nWeaker property: {} ({:.1}% occupancy)",
        weaker.property_name, weaker.occupancy_pct
    );

    println!("\nRecommended actions");
    for action in &insights.recommended_actions {
        println!("- {action}");
    }
}

fn render_summary(summary: &PropertySummary, labels: &[InsightLabel]) {
    println!(
        "- {} ({}): occupancy {:.1}%, ADR R{:.0}, rating {:.1}, revenue achievement {:.1}%, {:.1} days to next booking, {} week(s)",
        summary.property_name,
        summary.location,
        summary.occupancy_pct,
        summary.average_daily_rate,
        summary.guest_rating,
        summary.revenue_achievement_pct,
        summary.days_to_next_booking,
        summary.record_count
    );
    for label in labels {
        println!("    [{}] {}", label.tier.label(), label.message);
    }
}
