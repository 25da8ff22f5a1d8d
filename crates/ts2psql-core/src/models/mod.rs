//! Schema models
//!
//! The in-memory representation of annotated declarations: one `Declaration`
//! per block, one `Property` per annotated property, and the `Schema` holding
//! every declaration parsed in a run.

mod declaration;
mod foreign_key;
mod property;
mod schema;

pub use declaration::Declaration;
pub use foreign_key::ForeignKey;
pub use property::Property;
pub use schema::Schema;
