use lapmatch::{build_report, CostMatrix, SolveConfig};
use std::fs;

fn usage() -> ! {
    eprintln!("Usage: basic_solve <MATRIX.json> [N]");
    eprintln!("  MATRIX.json: array of rows of numbers; null marks a forbidden pairing");
    eprintln!("  N: optionally print only the first N pairs");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| usage());
    let show_n: Option<usize> = args.next().map(|s| s.parse()).transpose()?;

    let text = fs::read_to_string(&path)?;
    let rows: Vec<Vec<Option<f64>>> = serde_json::from_str(&text)?;
    let matrix = CostMatrix::from_rows(&rows)?;

    let assignment = matrix.solve(&SolveConfig::default())?;
    let report = build_report(&matrix, &assignment);

    println!("complete: {}", report.complete);
    println!("assigned: {} of {}", report.assigned, report.rows.min(report.cols));
    println!("total cost: {}", report.total_cost);

    let limit = show_n.unwrap_or(report.pairs.len());
    for (i, pair) in report.pairs.iter().take(limit).enumerate() {
        println!("{:>4}: row {} -> col {}  cost {}", i, pair.row, pair.col, pair.cost);
    }

    Ok(())
}
