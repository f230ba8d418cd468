mod node;
mod value;
mod wrapper;

pub(crate) use node::collect_leaf_keys;
pub use node::{PhraseNode, Phrases};
pub use value::{Context, Stringable, Value};
pub use wrapper::ContextWrapper;
