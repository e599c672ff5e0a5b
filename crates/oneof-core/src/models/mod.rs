//! Request models of the petstore fruit endpoint.
//!
//! `FruitReq` is a oneOf of `AppleReq` and `BananaReq`; neither allows
//! properties beyond its own, so a body matches at most one of them.

pub mod apple_req;
pub mod banana_req;
pub mod fruit_req;

pub use apple_req::AppleReq;
pub use banana_req::BananaReq;
pub use fruit_req::{FruitReq, FruitReqVariant};
