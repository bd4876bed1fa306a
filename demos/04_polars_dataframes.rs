use simfin_rs::core::dataframe::ToDataFrame;
use simfin_rs::{PricesBuilder, SfClient, Statement, StatementsBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SfClient::from_env()?;

    let income = StatementsBuilder::new(&client, ["AAPL", "MSFT"])
        .statement(Statement::ProfitLoss)
        .year_start(2020)
        .year_end(2021)
        .fetch()
        .await?;
    let df = income.to_dataframe()?;
    println!("--- Profit & loss ---\n{df}");

    let prices = PricesBuilder::new(&client, ["AAPL"])
        .year_start(2021)
        .year_end(2021)
        .fetch()
        .await?;
    let df = prices.to_dataframe()?;
    println!("--- Prices ({} rows) ---\n{}", df.height(), df.head(Some(5)));
    Ok(())
}
