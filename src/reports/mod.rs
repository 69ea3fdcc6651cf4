mod grid;
mod tables;

pub use self::grid::print_mapping as print_mapping_grid;
pub use self::tables::{breakdown as print_score_breakdown, restarts as print_restart_report};
