use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use payment_fraud_analytics::{Analytics, CsvLoader, Snapshot};

fn main() -> Result<()> {
    //NOTE: If I was making a much more sophisticated CLI application, I would have used the clap crate
    //      to handle the CLI parsing and execution.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: payment-fraud-analytics [input].csv [log_level:optional] > [report].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let snapshot = Arc::new(Snapshot::from_source(&CsvLoader::new(path))?);
    let duration = timer.elapsed();

    info!("Loaded {} transactions in: {duration:?}", snapshot.len());

    let analytics = Analytics::new(snapshot);

    write_report_to_stdout(&analytics)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(analytics: &Analytics) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "total transactions: {}", analytics.snapshot().len())?;
    writeln!(output, "fraudulent: {}", analytics.count_by_fraud_flag(true))?;
    writeln!(output, "legitimate: {}", analytics.count_by_fraud_flag(false))?;
    writeln!(output, "unique merchants: {}", analytics.unique_merchant_ids().len())?;
    writeln!(output, "fraud share, gender M: {:.4}", analytics.fraud_percentage_for_gender('M'))?;

    writeln!(output)?;
    writeln!(output, "merchant,total_fraud_amount")?;

    let mut merchants: Vec<_> = analytics.merchant_id_to_total_fraud_amount().into_iter().collect();
    merchants.sort_by(|left, right| right.1.total_cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

    for (merchant_id, amount) in merchants {
        writeln!(output, "{merchant_id},{amount:.2}")?;
    }

    writeln!(output)?;
    writeln!(output, "customer,fraud_count")?;

    let mut customers: Vec<_> = analytics.customer_id_to_fraud_count().into_iter().collect();
    customers.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

    for (customer_id, count) in customers.into_iter().take(10) {
        writeln!(output, "{customer_id},{count}")?;
    }

    output.flush()?;

    Ok(())
}
