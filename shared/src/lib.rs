//! Browser-independent core of the availability calendar: wire types, the
//! per-owner color table, form validation, reply interpretation and the
//! session object the Yew frontend drives.

pub mod api;
pub mod color;
pub mod event;
pub mod form;
pub mod generation;
pub mod outcome;
pub mod session;
pub mod validation;
pub mod variant;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{AddAvailabilityRequest, ApiResponse, DeleteReply, Endpoints};
pub use color::{ChannelSource, ColorAssigner, Rgb};
pub use event::{events_on, parse_event_instant, AvailabilityEvent, ColoredEvent, EventTimeError};
pub use form::{AvailabilityForm, FormDraft, FormPhase};
pub use generation::{Generation, GenerationCounter};
pub use outcome::{interpret_add, interpret_delete, AddOutcome, DeleteOutcome};
pub use session::{CalendarSession, LoadState, PendingAdd, PendingDelete};
pub use validation::{validate_slot, ValidationError};
pub use variant::{ClientVariant, DeleteStatusPolicy, AUTHORIZATION_ERROR};
pub use view::{cell_date_str, CalendarView, SlotBounds, ViewState};
