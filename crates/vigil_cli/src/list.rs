//! `vigil list` — print the available benches.

use vigil_tb::BenchKind;

use crate::GlobalArgs;

/// Runs the `vigil list` command. Always succeeds.
pub fn run(_global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    for kind in BenchKind::ALL {
        println!("{}", format_entry(kind));
    }
    Ok(0)
}

fn format_entry(kind: BenchKind) -> String {
    format!(
        "{:<12} {:<18} {}",
        kind.name(),
        kind.default_policy().to_string(),
        kind.description()
    )
}
