// Infrastructure kernel
//
// Trait-abstracted external services (object storage, notification delivery)
// plus the dependency container injected into actions and route handlers.

pub mod deps;
pub mod notifications;
pub mod object_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use notifications::PushNotificationClient;
pub use object_store::HttpObjectStore;
pub use traits::{BaseNotificationService, BaseObjectStore, DeleteOutcome};
