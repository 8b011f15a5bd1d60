//! Observational checks over the working table.
//!
//! Checks never mutate rows; every finding is appended to the
//! [`IssueLedger`](bom_model::IssueLedger) passed in by the caller.

mod columns;
mod consistency;
mod util;

pub use columns::check_required_columns;
pub use consistency::{
    check_descriptions, check_missing_categories, normalize_for_match, run_consistency_checks,
    value_in_description,
};
pub use util::row_issue;
