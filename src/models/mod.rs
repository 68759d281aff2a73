pub mod auth;
pub mod cart;
pub mod product;

pub use auth::*;
pub use cart::*;
pub use product::*;
