pub mod client;
pub mod firmware;
pub mod module;
pub mod network;
pub mod product;
pub mod proto;
pub mod storage;
pub mod util;

mod res;
pub use res::*;
