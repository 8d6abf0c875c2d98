pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, GripError};
pub use id::{new_correlation_id, ActorId};
pub use types::{
    Grip, GripKind, HelperType, MessageType, ObjectGrip, Primitive, RenderIntent, RenderMode,
};

pub type Result<T> = std::result::Result<T, GripError>;
