pub mod active;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod contact;
pub mod countup;
pub mod error;
pub mod particles;
pub mod scroll;
pub mod typewriter;

pub use active::*;
pub use carousel::*;
pub use config::*;
pub use contact::*;
pub use countup::*;
pub use error::*;
pub use particles::*;
pub use scroll::*;
pub use typewriter::*;
