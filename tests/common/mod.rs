use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Generates a command CSV with `stalls` registrations followed by `payments`
/// random payments spread over those stalls.
pub fn generate_commands(path: &Path, stalls: u64, payments: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["op", "caller", "stall", "category", "buyer", "amount"])?;

    for i in 1..=stalls {
        let vendor = format!("vendor-{i}");
        wtr.write_record(["register", vendor.as_str(), "", "0", "", ""])?;
    }

    let mut rng = rand::thread_rng();
    for i in 0..payments {
        let stall = rng.gen_range(1..=stalls).to_string();
        let buyer = format!("buyer-{}", i % 7);
        wtr.write_record(["pay", buyer.as_str(), stall.as_str(), "", "", "1.0"])?;
    }

    wtr.flush()?;
    Ok(())
}
