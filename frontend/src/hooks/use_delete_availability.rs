use shared::{AvailabilityEvent, DeleteOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_calendar::CalendarContext;
use crate::services::logging::Logger;

/// Event-click handler: confirm, DELETE, then re-fetch and report through an alert
#[hook]
pub fn use_delete_availability(
    context: &CalendarContext,
    refetch_events: Callback<()>,
) -> Callback<AvailabilityEvent> {
    let context = context.clone();

    use_callback((), move |event: AvailabilityEvent, _| {
        let pending = context
            .session
            .borrow_mut()
            .request_delete(&event, |prompt| gloo::dialogs::confirm(prompt));

        let Some(pending) = pending else {
            return;
        };

        let context = context.clone();
        let refetch_events = refetch_events.clone();
        spawn_local(async move {
            let reply = context
                .api_client
                .delete_availability(pending.event_id)
                .await;
            if let Err(e) = &reply {
                Logger::error_with_component(
                    "delete-availability",
                    &format!("Error deleting availability: {}", e),
                );
            }

            let outcome = context
                .session
                .borrow_mut()
                .finish_delete(pending, reply);

            match outcome {
                Some(DeleteOutcome::Deleted(message)) => {
                    refetch_events.emit(());
                    gloo::dialogs::alert(&message);
                }
                Some(DeleteOutcome::Failed(message)) => gloo::dialogs::alert(&message),
                None => {
                    Logger::debug_with_component("delete-availability", "Discarded stale delete response");
                }
            }
        });
    })
}
