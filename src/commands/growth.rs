use super::{write_json, write_title};
use anyhow::Result;
use memory_bench::growth_profile;
use std::io::Write;
use tracing::info;

pub fn run(appends: usize, out: &mut impl Write) -> Result<()> {
    write_title(out, "Capacity Growth")?;

    let profile = growth_profile(appends);
    info!(appends, reallocations = profile.reallocations, "profiled growth");

    let steps: Vec<String> = profile.capacities.iter().map(|c| c.to_string()).collect();
    writeln!(out, "Appends: {}", profile.appends)?;
    if steps.is_empty() {
        writeln!(out, "Capacities: none")?;
    } else {
        writeln!(out, "Capacities: 0 -> {}", steps.join(" -> "))?;
    }
    writeln!(out, "Reallocations: {}", profile.reallocations)?;
    writeln!(
        out,
        "Final size: {}, capacity: {}\n",
        profile.final_len, profile.final_capacity
    )?;

    write_json(out, &profile)
}
