pub mod color;
pub mod constants;
pub mod error;
pub mod messages;
pub mod page;
pub mod particles;
pub mod player;
pub mod scene;

pub use color::*;
pub use error::*;
pub use messages::*;
pub use page::*;
pub use particles::*;
pub use player::*;

pub static HEARTS_WGSL: &str = include_str!("../shaders/hearts.wgsl");
