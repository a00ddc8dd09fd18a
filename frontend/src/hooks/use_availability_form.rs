use shared::AddOutcome;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_calendar::CalendarContext;
use crate::services::date_utils::local_now;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct UseAvailabilityFormActions {
    pub on_date_change: Callback<String>,
    pub on_start_change: Callback<String>,
    pub on_end_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Add-availability flow: field edits, validation, POST and reply handling
#[hook]
pub fn use_availability_form(
    context: &CalendarContext,
    refetch_events: Callback<()>,
) -> UseAvailabilityFormActions {
    let on_date_change = {
        let context = context.clone();
        use_callback((), move |date: String, _| {
            context.session.borrow_mut().form_mut().set_date(date);
            context.redraw.force_update();
        })
    };

    let on_start_change = {
        let context = context.clone();
        use_callback((), move |start_time: String, _| {
            context.session.borrow_mut().form_mut().set_start_time(start_time);
            context.redraw.force_update();
        })
    };

    let on_end_change = {
        let context = context.clone();
        use_callback((), move |end_time: String, _| {
            context.session.borrow_mut().form_mut().set_end_time(end_time);
            context.redraw.force_update();
        })
    };

    let on_close = {
        let context = context.clone();
        use_callback((), move |_: (), _| {
            context.session.borrow_mut().form_mut().close();
            context.redraw.force_update();
        })
    };

    let on_submit = {
        let context = context.clone();
        use_callback((), move |_: (), _| {
            let pending = context.session.borrow_mut().submit_form(local_now());
            context.redraw.force_update();

            let pending = match pending {
                Ok(pending) => pending,
                Err(e) => {
                    Logger::debug_with_component("availability-form", &format!("Rejected locally: {}", e));
                    return;
                }
            };

            let context = context.clone();
            let refetch_events = refetch_events.clone();
            spawn_local(async move {
                let reply = context.api_client.add_availability(&pending.request).await;
                if let Err(e) = &reply {
                    Logger::error_with_component("availability-form", &format!("Error: {}", e));
                }

                let outcome = context
                    .session
                    .borrow_mut()
                    .finish_add(pending.generation, reply);
                context.redraw.force_update();

                match outcome {
                    Some(AddOutcome::Saved) => refetch_events.emit(()),
                    Some(AddOutcome::Alert(message)) => gloo::dialogs::alert(&message),
                    Some(AddOutcome::InlineError(message)) => {
                        Logger::warn_with_component("availability-form", &message);
                    }
                    None => {
                        Logger::debug_with_component("availability-form", "Discarded stale add response");
                    }
                }
            });
        })
    };

    UseAvailabilityFormActions {
        on_date_change,
        on_start_change,
        on_end_change,
        on_submit,
        on_close,
    }
}
