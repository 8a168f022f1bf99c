pub mod init;
pub mod inspect;
pub mod sync;

pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use sync::{sync, SyncArgs};
