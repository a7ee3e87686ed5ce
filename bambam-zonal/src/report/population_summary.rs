use crate::{algorithm::bucketing::PopulationTotals, config::ReferenceYears};

/// renders the per-bucket population totals as text, one line per bucket boundary and
/// a total line, year A first.
pub fn summary_lines(totals: &PopulationTotals, years: &ReferenceYears) -> Vec<String> {
    let mut lines = vec![];
    for (year, by_boundary, total) in [
        (years.year_a, totals.year_a(), totals.total_a()),
        (years.year_b, totals.year_b(), totals.total_b()),
    ] {
        for (boundary, population) in by_boundary.iter() {
            lines.push(format!(
                "{year}: in {boundary} minutes or under, {population} can make the journey"
            ));
        }
        lines.push(format!("{year}: total population {total}"));
    }
    lines
}

pub fn log_summary(totals: &PopulationTotals, years: &ReferenceYears) {
    for line in summary_lines(totals, years) {
        log::info!("{line}");
    }
}
