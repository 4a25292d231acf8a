pub mod fragment;
pub mod rison;

pub use fragment::encode_fragment;
pub use rison::{RisonValue, encode, is_bare_safe};
