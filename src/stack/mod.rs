//! Technology identifiers, the per-bundle tag set and the detection rule tables.
//!
//! Identifiers are closed enumerations generated by [`define_id_enum!`]: each
//! variant carries a canonical serialized name, a display name and optional
//! aliases. Unrecognised names deserialize to a fallback variant instead of
//! failing, so reports produced by newer builds remain readable.

#[macro_use]
pub mod id_enum_macro;

pub mod category;
pub mod rules;
pub mod tech_stack;
pub mod technology;

pub use category::Category;
pub use tech_stack::TechStack;
pub use technology::Technology;
