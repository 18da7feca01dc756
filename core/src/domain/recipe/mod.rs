pub mod catalog;
pub mod entities;
pub mod ingredients;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use catalog::Catalog;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
