use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use robin_hash::HashTable;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Number of keys to insert; defaults to the initial number of home slots.
    #[arg(short = 'n', long = "num_keys")]
    num_keys: Option<usize>,

    /// Fraction of inserted keys to delete afterwards.
    #[arg(short = 'd', long = "delete_fraction", default_value_t = 0.0)]
    delete_fraction: f64,

    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity: {}",
        args.target_capacity
    );

    let mut table: HashTable<u64> = HashTable::with_capacity(args.target_capacity);
    let initial_capacity = table.capacity();

    println!(
        "Home slots: {} (max distance {}, {} slots total)",
        initial_capacity,
        table.max_dist(),
        table.slot_count()
    );

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let num_keys = args.num_keys.unwrap_or(initial_capacity);
    let mut keys = Vec::with_capacity(num_keys);
    let mut growths = 0;
    for value in 0..num_keys as u64 {
        let key: u64 = rng.random();
        let capacity = table.capacity();
        table.put(key, value);
        if table.capacity() != capacity {
            growths += 1;
        }
        keys.push(key);
    }

    println!("Inserted {} keys into table", table.len());
    println!(
        "Grew {} times, {} -> {} home slots",
        growths,
        initial_capacity,
        table.capacity()
    );

    let deletes = (num_keys as f64 * args.delete_fraction.clamp(0.0, 1.0)) as usize;
    for &key in keys.iter().take(deletes) {
        table.delete(key);
    }
    if deletes > 0 {
        println!("Deleted {} keys, {} remain", deletes, table.len());
    }

    println!(
        "Final load factor: {:.2}%",
        (table.len() as f64 / table.capacity() as f64) * 100.0
    );

    table.probe_histogram().print();
    table.debug_stats().print();
}
