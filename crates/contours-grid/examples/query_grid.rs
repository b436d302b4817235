//! Example: fetch a small elevation grid and print it.
//!
//! Usage: cargo run -p contours-grid --example query_grid -- <lat> <lon> [resolution] [span_km]

use contours_grid::{Coordinate, GridFetcher, OpenTopoData};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <lat> <lon> [resolution] [span_km]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} 54.5973 -5.9301 5 2", args[0]);
        std::process::exit(1);
    }

    let lat: f64 = args[1].parse()?;
    let lon: f64 = args[2].parse()?;
    let resolution: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(5);
    let span_km: f64 = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(2.0);

    let fetcher = GridFetcher::new(OpenTopoData::new()?);
    let grid = fetcher.fetch(Coordinate::new(lat, lon)?, resolution, span_km)?;

    // Print north at the top.
    for (i, row_lat) in grid.rows().iter().enumerate().rev() {
        let cells: Vec<String> = (0..grid.dimension())
            .map(|j| match grid.get(i, j) {
                Some(e) => format!("{:7.1}", e),
                None => "      -".to_string(),
            })
            .collect();
        println!("{:9.4} | {}", row_lat, cells.join(" "));
    }

    if let (Some(min), Some(max)) = (grid.min_elevation(), grid.max_elevation()) {
        println!();
        println!("Range: {:.1} m to {:.1} m ({} cells missing)", min, max, grid.missing_count());
    }

    Ok(())
}
