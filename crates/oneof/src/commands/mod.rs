pub mod decode;
pub mod schema;
pub mod validate;

pub use decode::*;
pub use schema::*;
pub use validate::*;
