use chrono::{Datelike, NaiveDate, Timelike};
use shared::{
    cell_date_str, events_on, AvailabilityEvent, CalendarView, ColoredEvent, LoadState, SlotBounds,
    ViewState,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub view: ViewState,
    pub slot_bounds: SlotBounds,
    pub events: Vec<ColoredEvent>,
    pub load_state: LoadState,
    /// Receives "YYYY-MM-DD" from the month grid, "YYYY-MM-DDTHH:00:00" from the week grid
    pub on_date_click: Callback<String>,
    pub on_event_click: Callback<AvailabilityEvent>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let body = match props.view.view {
        CalendarView::WeekTimeGrid => week_grid(props),
        CalendarView::MonthGrid => month_grid(props),
    };

    html! {
        <div class="calendar">
            {match &props.load_state {
                LoadState::Loading if props.events.is_empty() => html! {
                    <div class="loading">{"Loading calendar..."}</div>
                },
                LoadState::Failed(_) => html! {
                    <div class="calendar-error">{"Could not load availability. Showing the last known events."}</div>
                },
                _ => html! {},
            }}
            {body}
        </div>
    }
}

fn week_grid(props: &CalendarProps) -> Html {
    let days = props.view.visible_days();
    let hours = props.slot_bounds.hours();

    html! {
        <div class="calendar-time-grid">
            <div class="time-grid-header">
                <div class="time-gutter"></div>
                {for days.iter().map(|day| html! {
                    <div class="time-grid-day">{day.format("%a %-m/%-d").to_string()}</div>
                })}
            </div>
            {for hours.iter().map(|hour| {
                let hour = *hour;
                html! {
                    <div class="time-grid-row">
                        <div class="time-label">{format!("{:02}:00", hour)}</div>
                        {for days.iter().map(|day| {
                            let chips: Vec<Html> = events_in_slot(&props.events, *day, hour, &hours)
                                .into_iter()
                                .map(|event| event_chip(event, &props.on_event_click))
                                .collect();
                            let on_click = date_click(&props.on_date_click, *day, Some(hour));
                            html! {
                                <div class="time-slot" onclick={on_click}>{for chips}</div>
                            }
                        })}
                    </div>
                }
            })}
        </div>
    }
}

fn month_grid(props: &CalendarProps) -> Html {
    html! {
        <>
            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            <div class="calendar-grid">
                {for props.view.visible_days().into_iter().map(|day| {
                    let day_class = if props.view.in_focus_month(day) {
                        "calendar-day"
                    } else {
                        "calendar-day other-month"
                    };
                    let on_click = date_click(&props.on_date_click, day, None);

                    html! {
                        <div class={day_class} onclick={on_click}>
                            <div class="day-header">
                                <div class="day-number">{day.day()}</div>
                            </div>
                            <div class="day-events">
                                {for events_on(&props.events, day)
                                    .into_iter()
                                    .map(|event| event_chip(event, &props.on_event_click))}
                            </div>
                        </div>
                    }
                })}
            </div>
        </>
    }
}

fn event_chip(event: &ColoredEvent, on_event_click: &Callback<AvailabilityEvent>) -> Html {
    let on_click = {
        let on_event_click = on_event_click.clone();
        let clicked = event.event.clone();
        Callback::from(move |e: MouseEvent| {
            // the cell underneath would open the add form otherwise
            e.stop_propagation();
            on_event_click.emit(clicked.clone());
        })
    };
    let style = format!("background-color: {0}; border-color: {0};", event.color);
    let tooltip = format!("{}\n{}", event.event.title, event.time_range_label());

    html! {
        <div class="event-chip" style={style} title={tooltip} onclick={on_click}>
            <span class="event-time">{event.time_range_label()}</span>
            <span class="event-title">{&event.event.title}</span>
        </div>
    }
}

fn date_click(on_date_click: &Callback<String>, day: NaiveDate, hour: Option<u32>) -> Callback<MouseEvent> {
    let date_str = cell_date_str(day, hour);
    on_date_click.reform(move |_: MouseEvent| date_str.clone())
}

/// Row an event is drawn in: its start hour, pulled into the visible range
fn slot_hour(event: &ColoredEvent, hours: &[u32]) -> Option<u32> {
    let start = event.start_at().ok()?.hour();
    let (first, last) = (*hours.first()?, *hours.last()?);
    Some(start.clamp(first, last))
}

/// Events drawn in one week-grid cell, in start order
fn events_in_slot<'a>(
    events: &'a [ColoredEvent],
    day: NaiveDate,
    hour: u32,
    hours: &[u32],
) -> Vec<&'a ColoredEvent> {
    events_on(events, day)
        .into_iter()
        .filter(|event| slot_hour(event, hours) == Some(hour))
        .collect()
}
