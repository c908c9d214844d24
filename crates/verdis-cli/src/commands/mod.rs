pub mod batch;
pub mod classify;
pub mod factors;
pub mod process;

use std::path::PathBuf;
use verdis_core::error::VerdisError;
use verdis_core::factors::{builtin, FactorTable};

/// Load the user's factor table, or the builtin preset when none is given.
pub fn load_factor_table(path: Option<PathBuf>) -> Result<FactorTable, VerdisError> {
    match path {
        Some(p) => verdis_core::factors::load_table(&p),
        None => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}
