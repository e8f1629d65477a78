pub mod cascade;
pub mod context;
pub mod sos;

pub use crate::runtime::{cascade::*, context::*, sos::*};
