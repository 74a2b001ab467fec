//! End-of-run statistics reporting.

use console::style;

use crate::download::RunState;

/// Print statistics for a completed run.
///
/// A run that ends short of the limit (discovery exhausted or stopped
/// early) is reported, not treated as an error.
pub fn print_run_stats(state: &RunState) {
    println!();
    println!("{}", style("Run statistics:").bold());
    println!("  Requested:  {}", state.limit);
    println!("  Attempted:  {}", state.attempted);
    println!(
        "  Downloaded: {}",
        if state.is_complete() {
            style(state.accepted).green()
        } else {
            style(state.accepted).yellow()
        }
    );

    if !state.is_complete() {
        println!(
            "  {}",
            style(format!(
                "Ran out of results {} short of the requested limit",
                state.limit - state.accepted
            ))
            .dim()
        );
    }
}
