use simfin_rs::{Dashboard, Preset, Query, SfClient, Statement};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    simfin_rs::init_tracing();

    // 1. Build a client from SIMFIN_API_KEY.
    let dash = Dashboard::new(SfClient::from_env()?);

    // 2. Derived ratios for the big-tech preset over two fiscal years.
    let query = Query::from_preset(Preset::BigTech, 2019, 2020).statement(Statement::Derived);
    let view = dash.fundamentals(&query).await?;
    if view.is_empty() {
        println!("No data for {:?}", query.tickers);
        return Ok(());
    }
    println!(
        "--- {} rows, {} columns after projection ---",
        view.projected.len(),
        view.projected.width()
    );
    println!("Chartable: {}", view.indicators.join(", "));
    println!();

    // 3. Chart one indicator and print the Plotly JSON.
    let chart = view.line_chart("Net Profit Margin")?;
    println!("Visible at first: {:?}", chart.visible_categories());
    println!("{}", serde_json::to_string_pretty(&chart.figure.to_json()?)?);

    Ok(())
}
