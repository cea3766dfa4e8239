//! Reading and writing of pegRNA candidate design tables.

mod read;
mod schema;
mod write;

pub use {
    read::{DesignReader, RowError},
    schema::{DESIGN_COL_NAMES, DESIGN_FIELD_COUNT, LINKER_COL_NAME},
    write::DesignWriter,
};
