mod grip;
mod intent;

pub use grip::*;
pub use intent::*;
