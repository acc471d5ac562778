use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use pagos::application::batch::BatchRunner;
use pagos::application::factory::ProcessorFactory;
use pagos::application::service::PaymentService;
use pagos::config::Settings;
use pagos::domain::ports::PaymentStoreBox;
use pagos::infrastructure::in_memory::InMemoryPaymentStore;
use pagos::interfaces::csv::instruction_reader::InstructionReader;
use pagos::interfaces::csv::payment_writer::PaymentWriter;
use pagos::logging::init_logging;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input instructions CSV file (action, id, amount, method)
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Payment processor to use: MOCK or REAL. Unrecognized values fall back to MOCK.
    #[arg(long, env = "PAYMENT_PROCESSOR_TYPE")]
    processor: Option<String>,

    /// Output format for the final payment report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn open_store(db_path: Option<PathBuf>) -> Result<PaymentStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = pagos::infrastructure::rocksdb::RocksDbPaymentStore::open(path)
                .into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            eprintln!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryPaymentStore::new()))
        }
        None => Ok(Box::new(InMemoryPaymentStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = Settings::from_value(cli.processor.as_deref());
    let factory = ProcessorFactory::from_settings(&settings);
    let service = PaymentService::new(None, &factory);
    let store = open_store(cli.db_path)?;
    let mut runner = BatchRunner::new(service, store);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = InstructionReader::new(file);
    for instruction in reader.instructions() {
        match instruction {
            Ok(instruction) => {
                if let Err(e) = runner.apply(instruction).await {
                    eprintln!("Error applying instruction: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading instruction: {}", e);
            }
        }
    }

    let payments = runner.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = PaymentWriter::new(stdout.lock());
            writer.write_payments(&payments).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &payments).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}
