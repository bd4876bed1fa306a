use simfin_rs::{Dashboard, Query, SfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    simfin_rs::init_tracing();

    let dash = Dashboard::new(SfClient::from_env()?);
    let view = dash
        .prices(&Query::new(["AAPL", "MSFT", "GOOG"], 2021, 2022))
        .await?;
    println!("--- {} daily rows ---", view.projected.len());

    let altman = view.line_chart("Altman Z Score (ttm)")?;
    println!(
        "Altman Z chart: {} traces, reference line at {:?}",
        altman.figure.data.len(),
        altman.figure.reference_line()
    );

    // Each spread chart fails on its own; print what could be drawn.
    for spread in view.spread_charts() {
        match spread {
            Ok(chart) => println!(
                "{} (expanded: {}): {} traces, visible {:?}",
                chart.preset.label(),
                chart.expanded,
                chart.figure.data.len(),
                chart.visible_categories()
            ),
            Err(e) => println!("spread chart unavailable: {e}"),
        }
    }
    Ok(())
}
