pub mod content;
pub mod rng;
pub mod roomgen;
pub mod run;
pub mod seed;
pub mod tuning;
pub mod types;
pub mod weighted;

pub use rng::{Mulberry32, RngError, RngStream};
pub use roomgen::{RoomGenerator, RoomLayout, generate_room_layout};
pub use run::{PortalJump, RunContext, RunError, ShrineOutcome};
pub use seed::{derive_room_seed, derive_stream_seed, hash32};
pub use tuning::TUNING;
pub use types::*;
