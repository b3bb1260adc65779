//! Interactive menu over the portfolio ledger.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use lotfolio_core::utils::time_utils::instant_for_date;
use lotfolio_core::{AssetKind, PortfolioService, PortfolioServiceTrait};

use crate::prompt;

const MENU: &str = "\
Please make one selection from the given options:
1. Add Funds
2. Withdraw Funds
3. Get Assets w/ Holdings
4. Display Available Funds
5. Purchase Asset
6. Sell Asset
7. Get Trending Stocks
8. Get Historical Data
9. Get Exchange Summary
10. Get Asset Information
11. Get Asset Quotes
12. Get Asset Quote
13. Get Portfolio Value
14. List All Investments
15. List Portfolio Assets by Type
16. List Portfolio Assets by Name
17. List Portfolio Purchases in Range
18. List Portfolio Sales in Range
19. Exit Menu";

pub async fn run(service: Arc<PortfolioService>) -> anyhow::Result<()> {
    loop {
        println!("\tPORTFOLIO MANAGEMENT SYSTEM");
        println!("{}", MENU);
        let selection: u32 = prompt::read_parsed("Enter your selection")?;
        match selection {
            1 => add_funds(&service).await?,
            2 => withdraw_funds(&service).await?,
            3 => view_holdings(&service).await?,
            4 => view_available_funds(&service).await?,
            5 => purchase_asset(&service).await?,
            6 => sell_asset(&service).await?,
            7 => view_trending(&service).await?,
            8 => view_historical_data(&service).await?,
            9 => view_exchange_summary(&service).await?,
            10 => view_asset_information(&service).await?,
            11 | 12 => view_asset_quotes(&service).await?,
            13 => view_portfolio_value(&service).await?,
            14 => list_all_investments(&service).await?,
            15 => list_assets_by_type(&service).await?,
            16 => list_assets_by_name(&service).await?,
            17 => list_purchases_in_range(&service).await?,
            18 => list_sales_in_range(&service).await?,
            19 => {
                println!("Logging off...");
                return Ok(());
            }
            other => println!("No such option: {}", other),
        }
    }
}

fn print_title(title: &str) {
    println!("{}", title);
}

fn print_report(report: &str) {
    if report.is_empty() {
        println!("No records to show.");
    } else {
        println!("{}", report);
    }
}

fn pause() -> anyhow::Result<()> {
    prompt::read_line("Press any key to return to the menu...")?;
    Ok(())
}

async fn add_funds(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***ADD FUNDS***");
    let amount: Decimal = prompt::read_parsed("Enter deposit amount:")?;
    service.add_funds(amount).await;
    println!("Funds added.");
    println!("Current account balance: {}", service.available_funds().await);
    pause()
}

async fn withdraw_funds(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***WITHDRAW FUNDS***");
    let amount: Decimal = prompt::read_parsed("Enter withdrawal amount:")?;
    if service.withdraw_funds(amount).await {
        println!("Funds successfully withdrawn.");
        println!("Current account balance: {}", service.available_funds().await);
    } else {
        println!("Unable to withdraw funds. Insufficient funds.");
    }
    pause()
}

async fn view_holdings(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW ASSETS WITH HOLDINGS***");
    let symbol = prompt::read_line("Please enter stock symbol:")?.to_uppercase();
    let lots = service.open_lots(&symbol).await;

    let mut seen = HashSet::new();
    let symbols: Vec<String> = lots
        .iter()
        .filter(|lot| seen.insert(lot.symbol().to_string()))
        .map(|lot| lot.symbol().to_string())
        .collect();
    let quotes = service.get_quotes(&symbols).await;

    for lot in &lots {
        let price = quotes
            .iter()
            .find(|quote| quote.symbol == lot.symbol())
            .map(|quote| quote.price)
            .unwrap_or_default();
        println!("{}", lot.describe(price));
    }
    println!();
    pause()
}

async fn view_available_funds(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW AVAILABLE FUNDS***");
    println!("{}", service.available_funds().await);
    pause()
}

async fn purchase_asset(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***PURCHASE ASSET(s)***");
    let symbol = prompt::read_line("Please enter symbol of asset you wish to purchase:")?;
    let amount: Decimal = prompt::read_parsed("Please enter amount you wish to purchase:")?;
    if service.purchase_asset(&symbol, amount).await {
        println!("You have purchased {} of {}", amount, symbol);
    } else {
        println!("Unable to complete the purchase. Please check inputs and try again.");
    }
    pause()
}

async fn sell_asset(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***SELL ASSET(s)***");
    let symbol = prompt::read_line("Please enter symbol of asset you wish to sell:")?;
    let amount: Decimal = prompt::read_parsed("Please enter amount you wish to sell:")?;
    if service.sell_asset(&symbol, amount).await {
        println!("{} of {} sold.", amount, symbol);
    } else {
        println!("Unable to process asset sale. Please check inputs and try again.");
    }
    pause()
}

async fn view_trending(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW TRENDING STOCKS***");
    let region = prompt::read_line("Enter region:")?;
    for symbol in service.trending_symbols(&region).await {
        println!("{}", symbol);
    }
    pause()
}

async fn view_historical_data(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW HISTORICAL DATA***");
    let mut symbols = Vec::new();
    for symbol in prompt::read_symbol_list(
        "Enter symbols of the assets you wish to retrieve historical data for, one at a time:",
    )? {
        if service.check_symbol(&symbol).await {
            symbols.push(symbol);
        } else {
            println!("Invalid asset symbol...");
        }
    }

    let interval = prompt::read_line("Enter data interval: (1m, 5m, 15m, 1d, 1wk, 1mo)")?;
    let range = prompt::read_line(
        "Enter the range of the data you require: (1d, 5d, 1mo, 3mo, 6mo, 1y, 5y, max)",
    )?;

    for series in service
        .get_historical_data(&symbols, &interval, &range)
        .await
    {
        print!("{}", series.display_block());
    }
    pause()
}

async fn view_exchange_summary(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW EXCHANGE SUMMARY***");
    let region = prompt::read_line("Enter region:")?;
    let exchange = prompt::read_line("Enter exchange symbol:")?;
    match service.exchange_summary(&region, &exchange).await {
        Some(summary) => println!("{}", summary),
        None => println!("No exchange information available."),
    }
    pause()
}

async fn view_asset_information(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW ASSET INFORMATION***");
    let names = prompt::read_symbol_list(
        "Enter symbols of the assets you wish to retrieve data for, one at a time:",
    )?;
    for quote in service.held_asset_quotes(&names).await {
        println!("{}", quote.ticker_summary());
    }
    pause()
}

async fn view_asset_quotes(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW ASSET QUOTES***");
    let symbols = prompt::read_symbol_list(
        "Enter symbols of the assets you wish to retrieve quotes for, one at a time:",
    )?;
    for quote in service.get_quotes(&symbols).await {
        println!("{}", quote.ticker_summary());
    }
    pause()
}

async fn view_portfolio_value(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW PORTFOLIO VALUE***");
    println!("{}", service.portfolio_value().await);
    pause()
}

async fn list_all_investments(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW CURRENT INVESTMENTS***");
    println!("{}", service.list_all_investments().await);
    pause()
}

async fn list_assets_by_type(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW ASSETS BY TYPE***");
    let label = prompt::read_line("Enter asset type: (stock or crypto)")?;
    if AssetKind::from_label(&label).is_none() {
        println!("Invalid input, enter 'stock' or 'crypto'.");
        return pause();
    }
    print_report(&service.list_assets_by_type(&label).await);
    pause()
}

async fn list_assets_by_name(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW ASSETS BY NAME***");
    let names = prompt::read_symbol_list(
        "Enter names or symbols of the assets you wish to retrieve data for, one at a time:",
    )?;
    print_report(&service.list_assets_by_name(&names).await);
    pause()
}

async fn list_purchases_in_range(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW PORTFOLIO PURCHASES IN RANGE***");
    let (start, end) = read_date_range()?;
    print_report(&service.list_purchases_in_range(start, end).await);
    pause()
}

async fn list_sales_in_range(service: &PortfolioService) -> anyhow::Result<()> {
    print_title("***VIEW PORTFOLIO SALES IN RANGE***");
    let (start, end) = read_date_range()?;
    print_report(&service.list_sales_in_range(start, end).await);
    pause()
}

fn read_date_range() -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start: NaiveDate = prompt::read_parsed("Enter start date in format 'yyyy-MM-dd':")?;
    let end: NaiveDate = prompt::read_parsed("Enter end date in format 'yyyy-MM-dd':")?;

    // The ledger excludes events on the boundary dates themselves, so
    // widen by a day on each side to make the entered dates inclusive.
    let start = start - Duration::days(1);
    let end = end + Duration::days(1);
    Ok((date_instant(start)?, date_instant(end)?))
}

fn date_instant(date: NaiveDate) -> anyhow::Result<DateTime<Utc>> {
    instant_for_date(date.year(), date.month(), date.day())
        .context("date is outside the supported range")
}
