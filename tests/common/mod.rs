use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `payments` create/process/confirm triples to `path`.
pub fn generate_lifecycle_csv(path: &Path, payments: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "id", "amount", "method"])?;

    for id in 1..=payments {
        let label = id.to_string();
        wtr.write_record(["create", &label, "1.00", "card"])?;
        wtr.write_record(["process", &label, "", ""])?;
        wtr.write_record(["confirm", &label, "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
