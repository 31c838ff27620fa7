//! Collection export loader: parse a Postman-style JSON export into a typed tree.
//!
//! Folder/request classification happens once, while deserializing. Nodes of
//! neither shape survive as `Unclassified` so traversal can skip them.

mod de;
mod error;
mod load;
mod model;

pub use error::CollectionError;
pub use load::{load_collection, parse_collection};
pub use model::{
    Collection, CollectionNode, Folder, RequestDetails, RequestItem, RequestSpec, RequestUrl,
    StructuredUrl,
};
