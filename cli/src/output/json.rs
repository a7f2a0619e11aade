use anyhow::Result;
use lapmatch::{serialize_report, SolveReport};
use std::io::Write;

pub fn write_report<W: Write>(w: &mut W, report: &SolveReport) -> Result<()> {
    let json = serialize_report(report)?;
    writeln!(w, "{}", json)?;
    Ok(())
}
