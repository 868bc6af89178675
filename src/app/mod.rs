//! Application logic
//!
//! This module holds the routing table and the collaborators it consults:
//! the user repository and the static resource provider.

pub mod resources;
pub mod router;
pub mod users;

pub use resources::{FsResources, MemoryResources, ResourceError, ResourceProvider};
pub use router::Router;
pub use users::{InMemoryUserRepository, User, UserRepository};
