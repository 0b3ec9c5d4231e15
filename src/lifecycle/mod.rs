//! Target-host deployment lifecycle.
//!
//! The deployment agent unpacks the bundle itself; these hooks run on either
//! side of that step:
//!
//! ```text
//! [pre-install]  --(agent unpacks bundle)-->  [post-install]
//! ```
//!
//! - `pre-install`: stop the service if running, ensure the target directory
//! - `post-install`: reload definitions, start, wait, verify running

mod hook;
mod orchestrator;
mod service;
mod systemctl;

pub use hook::LifecycleHook;
pub use orchestrator::LifecycleOrchestrator;
pub use service::{ServiceManager, ServiceState};
pub use systemctl::Systemctl;
