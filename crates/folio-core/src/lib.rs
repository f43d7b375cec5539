pub mod constants;
pub mod contact;
pub mod error;
pub mod router;
pub mod section;
pub mod skills;
pub mod typing;

pub use constants::*;
pub use contact::*;
pub use error::*;
pub use router::*;
pub use section::*;
pub use skills::*;
pub use typing::*;
