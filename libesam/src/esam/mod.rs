// libesam-rs/libesam/src/esam/mod.rs

mod info;
mod session;
pub use info::EsamInfo;
pub use session::SessionKey;

pub mod builder;
pub mod handle;

pub use builder::EsamBuilder;
pub use handle::Esam;
