use gnp::cli;
use gnp::graph::write_edge_list;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{BufWriter, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        usage_and_exit(0);
    }

    let opts = match cli::parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            usage_and_exit(2);
        }
    };

    let mut rng = match opts.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_edge_list(&mut out, opts.n, opts.p, &mut rng).and_then(|_| out.flush());
    if let Err(e) = result {
        eprintln!("error: failed to write edge list: {e}");
        std::process::exit(1);
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  gnp N [--p P] [--seed SEED]\n\nPrints the edge list of a random graph on N vertices, one tab-separated\npair \"i\\tj\" per line with 0 <= i < j < N.\n\nOptions:\n  --p P         Probability that any given pair becomes an edge (default: 0.5)\n  --seed SEED   Deterministic seed; omitted means a fresh draw per run\n  --help, -h    Show this message\n"
    );
    std::process::exit(code)
}
