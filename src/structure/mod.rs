// Tue Jan 13 2026 - Alex

pub mod builder;
pub mod cache;
pub mod error;
pub mod field;
pub mod instance;
pub mod layout;
pub mod serializer;
pub mod traversal;

pub use builder::StructBuilder;
pub use cache::TemplateCache;
pub use error::StructureError;
pub use field::Field;
pub use instance::StructInstance;
pub use layout::StructLayout;
pub use serializer::{SerializableField, SerializableLayout};
pub use traversal::{EachField, FieldEntry};
