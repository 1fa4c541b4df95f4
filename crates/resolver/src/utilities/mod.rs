//! The built-in utility families and the merged default table.
//!
//! Tables are merged in this order, later tables winning on name clashes:
//!
//! ```text
//! defaults → sizing → filters → spacing → background → typography
//!          → borders → effects → transitions → transforms
//! ```
//!
//! One override is intentional: `size` from `sizing` is replaced by the
//! `spacing` entry that also knows the named container sizes.

use crate::{NamedTable, PropertyTable};

pub mod background;
pub mod borders;
pub mod effects;
pub mod filters;
pub mod layout;
pub mod sizing;
pub mod transforms;
pub mod transitions;
pub mod typography;

/// Every built-in table, in merge order.
pub fn tables() -> Vec<NamedTable> {
    vec![
        layout::table(),
        sizing::sizing_table(),
        filters::table(),
        sizing::spacing_table(),
        background::table(),
        typography::table(),
        borders::table(),
        effects::table(),
        transitions::table(),
        transforms::table(),
    ]
}

/// The merged table of every built-in utility.
pub fn default_table() -> PropertyTable {
    PropertyTable::merge(tables())
}
