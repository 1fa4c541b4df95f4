//! A ready-made utility preset: configuration, value aliases, static classes
//! and the `:root` block around the resolver table and palette generator.
//!
//! ```text
//! Config ──create_config──▶ Preset
//!                            ├─ PropertyTable   (every utility family)
//!                            ├─ ValueTable      (colors + fixed aliases)
//!                            ├─ ClassTable      (truncate, hidden, …)
//!                            └─ root_css()      (:root defaults)
//! ```

#![forbid(unsafe_code)]

mod aliases;
mod assembly;
mod classes;
mod config;
mod error;
mod root;
mod values;

pub use aliases::{ALIASES, alias};
pub use assembly::{Preset, create_config};
pub use classes::ClassTable;
pub use config::Config;
pub use error::PresetError;
pub use root::{ROOT_VARIABLES, root_css, root_variables};
pub use values::ValueTable;
