use clap::Parser;
use miette::{IntoDiagnostic, Result};
use stallpay::application::engine::StallLedger;
use stallpay::domain::ports::{PaymentStoreBox, StallStoreBox};
use stallpay::domain::stall::Address;
use stallpay::infrastructure::in_memory::{InMemoryPaymentStore, InMemoryStallStore};
use stallpay::interfaces::csv::command_reader::CommandReader;
use stallpay::interfaces::csv::state_writer::{EventWriter, StallWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file
    input: PathBuf,

    /// Caller address treated as the ledger administrator
    #[arg(long, default_value = "admin")]
    admin: String,

    /// Write emitted ledger events as CSV to this path (optional)
    #[arg(long)]
    events: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let stall_store: StallStoreBox = Box::new(InMemoryStallStore::new());
    let payment_store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let ledger = StallLedger::new(Address::new(cli.admin), stall_store, payment_store);

    // Process commands sequentially; a bad row is reported and skipped.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => {
                if let Err(e) = ledger.execute(cmd).await {
                    eprintln!("Error executing command: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    if let Some(path) = cli.events {
        let file = File::create(path).into_diagnostic()?;
        let mut writer = EventWriter::new(file);
        writer
            .write_events(ledger.drain_events().await)
            .into_diagnostic()?;
    }

    // Collect final state from the ledger
    let stalls = ledger.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = StallWriter::new(stdout.lock());
    writer.write_stalls(stalls).into_diagnostic()?;

    Ok(())
}
