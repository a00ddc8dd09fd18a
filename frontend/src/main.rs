mod components;
mod hooks;
mod services;

use anyhow::{anyhow, Result};
use shared::FormPhase;
use yew::prelude::*;

use components::availability_modal::AvailabilityModal;
use components::calendar::Calendar;
use components::calendar_toolbar::CalendarToolbar;
use hooks::use_calendar::{use_calendar, UseCalendarResult};
use services::config::{CalendarConfig, CONTAINER_ID};
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: CalendarConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let UseCalendarResult { snapshot, actions } = use_calendar(&props.config);
    let form = actions.form.clone();

    html! {
        <div class="availability-calendar">
            <CalendarToolbar
                title={snapshot.view.title()}
                view={snapshot.view.view}
                views={snapshot.variant.available_views().to_vec()}
                on_previous={actions.previous.clone()}
                on_next={actions.next.clone()}
                on_today={actions.today.clone()}
                on_switch_view={actions.switch_view.clone()}
            />

            <Calendar
                view={snapshot.view.clone()}
                slot_bounds={snapshot.variant.slot_bounds()}
                events={snapshot.events.clone()}
                load_state={snapshot.load_state.clone()}
                on_date_click={actions.on_date_click.clone()}
                on_event_click={actions.on_event_click.clone()}
            />

            <AvailabilityModal
                is_open={snapshot.form_phase != FormPhase::Idle}
                is_submitting={snapshot.form_phase == FormPhase::Submitting}
                draft={snapshot.draft.clone()}
                on_date_change={form.on_date_change}
                on_start_change={form.on_start_change}
                on_end_change={form.on_end_change}
                on_submit={form.on_submit}
                on_close={form.on_close}
            />
        </div>
    }
}

/// Mount the calendar into its container, configured from the container's data attributes
fn mount() -> Result<()> {
    let container = gloo::utils::document()
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow!("no #{} element on the page", CONTAINER_ID))?;

    let config = CalendarConfig::from_element(&container);
    Logger::info_with_component(
        "bootstrap",
        &format!("Mounting availability calendar ({:?})", config.variant),
    );

    yew::Renderer::<App>::with_root_and_props(container, AppProps { config }).render();
    Ok(())
}

fn main() {
    if let Err(e) = mount() {
        Logger::error_with_component("bootstrap", &format!("{:#}", e));
    }
}
