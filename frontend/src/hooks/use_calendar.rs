use std::cell::RefCell;
use std::rc::Rc;

use shared::{
    AvailabilityEvent, CalendarSession, CalendarView, ClientVariant, ColoredEvent, FormDraft,
    FormPhase, LoadState, ViewState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_availability_form::{use_availability_form, UseAvailabilityFormActions};
use crate::hooks::use_delete_availability::use_delete_availability;
use crate::services::api::ApiClient;
use crate::services::config::CalendarConfig;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::random::BrowserRandom;

pub type SharedSession = Rc<RefCell<CalendarSession<BrowserRandom>>>;

/// Handles every calendar hook needs: the session, the API client and a way to redraw
#[derive(Clone)]
pub struct CalendarContext {
    pub session: SharedSession,
    pub api_client: Rc<ApiClient>,
    pub redraw: UseForceUpdateHandle,
}

/// Render-time copy of the session
#[derive(Clone, PartialEq)]
pub struct CalendarSnapshot {
    pub variant: ClientVariant,
    pub view: ViewState,
    pub events: Vec<ColoredEvent>,
    pub load_state: LoadState,
    pub form_phase: FormPhase,
    pub draft: FormDraft,
}

pub struct UseCalendarResult {
    pub snapshot: CalendarSnapshot,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub refetch_events: Callback<()>,
    pub previous: Callback<()>,
    pub next: Callback<()>,
    pub today: Callback<()>,
    pub switch_view: Callback<CalendarView>,
    pub on_date_click: Callback<String>,
    pub on_event_click: Callback<AvailabilityEvent>,
    pub form: UseAvailabilityFormActions,
}

#[hook]
pub fn use_calendar(config: &CalendarConfig) -> UseCalendarResult {
    let session = {
        let variant = config.variant.clone();
        use_mut_ref(move || CalendarSession::new(variant, BrowserRandom, today()))
    };
    let api_client = use_memo(config.clone(), ApiClient::from_config);
    let redraw = use_force_update();

    let context = CalendarContext {
        session: session.clone(),
        api_client,
        redraw,
    };

    // Event source: fetch, color, hand to the grid
    let refetch_events = {
        let context = context.clone();
        use_callback((), move |_: (), _| {
            let generation = context.session.borrow_mut().begin_fetch();
            context.redraw.force_update();

            let context = context.clone();
            spawn_local(async move {
                let applied = match context.api_client.fetch_events().await {
                    Ok(events) => context
                        .session
                        .borrow_mut()
                        .complete_fetch(generation, events),
                    Err(e) => {
                        Logger::error_with_component(
                            "calendar",
                            &format!("Error fetching events: {}", e),
                        );
                        context
                            .session
                            .borrow_mut()
                            .fail_fetch(generation, e.to_string())
                    }
                };

                if applied {
                    context.redraw.force_update();
                } else {
                    Logger::debug_with_component("calendar", "Discarded stale event response");
                }
            });
        })
    };

    let navigate = |step: fn(&mut ViewState)| {
        let context = context.clone();
        let refetch_events = refetch_events.clone();
        Callback::from(move |_: ()| {
            step(context.session.borrow_mut().view_mut());
            refetch_events.emit(());
        })
    };
    let previous = navigate(ViewState::previous);
    let next = navigate(ViewState::next);
    let today_cb = navigate(|view| view.go_to(today()));

    let switch_view = {
        let context = context.clone();
        Callback::from(move |view: CalendarView| {
            context.session.borrow_mut().view_mut().switch_to(view);
            context.redraw.force_update();
        })
    };

    let on_date_click = {
        let context = context.clone();
        Callback::from(move |date_str: String| {
            context.session.borrow_mut().click_date(&date_str);
            context.redraw.force_update();
        })
    };

    let form = use_availability_form(&context, refetch_events.clone());
    let on_event_click = use_delete_availability(&context, refetch_events.clone());

    // Initial load
    use_effect_with((), {
        let refetch_events = refetch_events.clone();
        move |_| {
            refetch_events.emit(());
            || ()
        }
    });

    let snapshot = {
        let session = session.borrow();
        CalendarSnapshot {
            variant: session.variant().clone(),
            view: session.view().clone(),
            events: session.events().to_vec(),
            load_state: session.load_state().clone(),
            form_phase: session.form().phase(),
            draft: session.form().draft().clone(),
        }
    };

    let actions = UseCalendarActions {
        refetch_events,
        previous,
        next,
        today: today_cb,
        switch_view,
        on_date_click,
        on_event_click,
        form,
    };

    UseCalendarResult { snapshot, actions }
}
