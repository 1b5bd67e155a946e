pub mod virb;

pub use virb::Virb;
