// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

mod agent;
mod block;
mod colour;
mod goal;
mod moves;
mod pos;
mod quad;
mod ops {
    mod display;
    mod flatten;
    mod get;
    mod recolour;
    mod rotate;
    mod smash;
    mod test_format;

    pub use flatten::*;
    pub use get::*;
    pub use rotate::*;
    pub use smash::*;
}

pub use agent::*;
pub use block::*;
pub use colour::*;
pub use goal::*;
pub use moves::*;
pub use ops::*;
pub use pos::*;
pub use quad::*;
