//! Testing utilities and fixtures for FrameMe

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fixtures::*;
}
