//! CLI: compute a fitness-landscape fingerprint from a recorded optimizer
//! trace CSV, as produced by `autoeq_de::OptimizationRecorder::save_to_csv`.

use std::path::PathBuf;

use autoeq_fla::{characterize, Point, Trace};
use clap::Parser;
use csv::ReaderBuilder;

#[derive(Parser)]
#[command(name = "fla_trace")]
#[command(about = "Compute a fitness-landscape fingerprint from a recorded optimizer trace")]
struct Args {
    /// CSV file with an `iteration,x0,x1,...,best_result,convergence,is_improvement`
    /// header, as produced by `OptimizationRecorder::save_to_csv`.
    csv_path: PathBuf,

    /// RNG seed driving Pairwise's NBC subsample draws.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Print the named `Characteristics` record as JSON instead of the flat
    /// packed vector.
    #[arg(long)]
    named: bool,
}

fn load_trace(path: &PathBuf) -> Result<Trace, Box<dyn std::error::Error>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let header_len = rdr.headers()?.len();
    // iteration, x0..x{d-1}, best_result, convergence, is_improvement
    let dims = header_len.checked_sub(4).ok_or("CSV header too short")?;

    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut coords = Vec::with_capacity(dims);
        for i in 0..dims {
            coords.push(record[1 + i].parse::<f64>()?);
        }
        let best_result: f64 = record[1 + dims].parse()?;
        points.push(Point::evaluated(coords, best_result));
    }

    let n = points.len();
    Ok(Trace::new(points, vec![None; n]))
}

fn main() {
    let args = Args::parse();

    let trace = match load_trace(&args.csv_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to read trace from {}: {e}", args.csv_path.display());
            std::process::exit(1);
        }
    };

    match characterize(&trace, args.seed) {
        Ok(characteristics) => {
            if args.named {
                println!("{}", serde_json::to_string_pretty(&characteristics).unwrap());
            } else {
                let packed = characteristics.packed();
                let joined: Vec<String> = packed.iter().map(|v| v.to_string()).collect();
                println!("{}", joined.join(","));
            }
        }
        Err(e) => {
            eprintln!("characterization failed: {e}");
            std::process::exit(1);
        }
    }
}
