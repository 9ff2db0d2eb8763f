//! Application services: the shared slip handle, the authenticated
//! session, and the submission coordinator that ties them together.

mod coordinator;
mod handle;
mod session;
mod traits;

pub use coordinator::{CoordinatorState, SubmissionCoordinator, SubmissionReceipt};
pub use handle::SlipHandle;
pub use session::Session;
pub use traits::{AccountProvider, AccountSnapshot, BetPlacer};
