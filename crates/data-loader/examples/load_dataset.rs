use data_loader::{AwardIndex, DEFAULT_DELIMITER};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movielist.csv");

    println!("Loading awards dataset...\n");

    let start = Instant::now();
    let index = AwardIndex::load_from_file(path, DEFAULT_DELIMITER)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (records, winners, producers) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", records);
    println!("Winners: {}", winners);
    println!("Winning producers: {}", producers);
    println!("Skipped rows: {}", index.skipped_rows());
}
