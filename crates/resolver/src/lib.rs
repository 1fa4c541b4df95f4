//! Utility-token → CSS resolution.
//!
//! A [`PropertyTable`] maps utility names (`bg`, `p`, `shadow`, …) to an
//! [`Entry`]. Each entry decides, from a parsed [`Token`], which CSS
//! property (or properties) to emit and with which value, or renders the
//! whole declaration text itself. Entries are plain data and `fn` pointers,
//! built once and shared read-only.
//!
//! ```text
//! Token { key, value, unit, second_value, second_unit }
//!   ↓ PropertyTable::resolve(name, token, context)
//! Resolved::Properties { names, value } | Resolved::Declarations(text)
//!   ↓ Resolved::declarations()
//! [Declaration { property, value }, …]
//! ```

#![forbid(unsafe_code)]

mod context;
mod declaration;
mod entry;
mod rule;
mod table;
mod token;
pub mod utilities;
mod values;

pub use context::ResolveContext;
pub use declaration::{Declaration, parse_declarations, to_kebab_case};
pub use entry::{
    Aliases, DeclarationFn, Entry, FilterFunction, Properties, PropertyFn, PropertySpec, Resolved,
    ValueFn, ValueSpec,
};
pub use rule::{Rule, first_match};
pub use table::{NamedTable, PropertyTable};
pub use token::Token;
pub use utilities::default_table;
