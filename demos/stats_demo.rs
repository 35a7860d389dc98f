use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use shift_hash::HashTable;

#[derive(Parser, Debug)]
struct Args {
    /// Number of keys to insert.
    #[arg(short = 'n', long = "count", default_value_t = 1000)]
    count: usize,

    /// Fraction of the inserted keys to remove again.
    #[arg(short = 'r', long = "remove", default_value_t = 0.25)]
    remove_fraction: f64,

    /// Insert sequential ids instead of random keys.
    #[arg(long)]
    sequential: bool,

    /// Seed for key generation.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let keys: Vec<u64> = if args.sequential {
        (0..args.count as u64).collect()
    } else {
        (0..args.count).map(|_| rng.random()).collect()
    };

    let mut table: HashTable<u64, u64> = HashTable::new();
    println!("Initial capacity: {}", table.capacity());
    println!(
        "Filling table with {} {} keys...",
        keys.len(),
        if args.sequential {
            "sequential"
        } else {
            "random"
        }
    );

    let mut resizes = 0;
    for &key in &keys {
        let before = table.capacity();
        table.insert(key, !key);
        if table.capacity() != before {
            resizes += 1;
        }
    }

    println!(
        "Inserted {} keys, {} resizes, final capacity {}",
        table.len(),
        resizes,
        table.capacity()
    );
    println!(
        "Load factor after inserts: {:.2}%",
        (table.len() as f64 / table.capacity() as f64) * 100.0
    );

    let mut removed = 0;
    for &key in &keys {
        if rng.random_bool(args.remove_fraction.clamp(0.0, 1.0)) && table.remove(key).is_some() {
            removed += 1;
        }
    }
    println!("Removed {} keys", removed);

    let mismatched = keys
        .iter()
        .filter(|&&key| table.get(key).is_some_and(|&value| value != !key))
        .count();
    assert_eq!(mismatched, 0, "lookups returned wrong values after removal");

    table.print_probe_histogram();
    table.debug_stats().print();
}
