pub mod engine;
pub mod host;
pub mod memory;
pub mod resolver;
pub mod value;

pub use engine::Engine;
pub use host::{BufferHost, Host, StdHost};
pub use memory::{SymbolTable, Variable};
pub use resolver::Resolver;
pub use value::{Value, ValueType};
