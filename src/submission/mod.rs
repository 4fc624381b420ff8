//! Contact form submission: field snapshot, the button state machine, the
//! POST itself and how its outcome is classified.

pub mod error;
pub mod request;
pub mod state;
pub mod transport;

pub use error::SubmissionError;
pub use request::SubmissionRequest;
pub use state::{Effect, RevertTicket, SubmitMachine, Transition};
