pub mod keyboard;
pub mod location;

pub use keyboard::wire_escape_closes;
pub use location::wire_hashchange;
