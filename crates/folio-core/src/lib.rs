pub mod activation;
pub mod camera;
pub mod chapters;
pub mod constants;
pub mod error;
pub mod network;
pub mod reminder;
pub mod resolve;
pub mod sections;
pub mod session;

pub use activation::*;
pub use camera::*;
pub use chapters::*;
pub use error::ConfigError;
pub use network::*;
pub use reminder::IdleReminder;
pub use resolve::*;
pub use sections::*;
pub use session::*;

pub static NETWORK_WGSL: &str = include_str!("../shaders/network.wgsl");
