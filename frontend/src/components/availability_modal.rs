use shared::FormDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct AvailabilityModalProps {
    pub is_open: bool,
    pub is_submitting: bool,
    pub draft: FormDraft,
    pub on_date_change: Callback<String>,
    pub on_start_change: Callback<String>,
    pub on_end_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component(AvailabilityModal)]
pub fn availability_modal(props: &AvailabilityModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let draft = &props.draft;

    html! {
        <div class="availability-modal-backdrop" onclick={on_backdrop_click}>
            <div class="availability-modal" role="dialog" onclick={on_modal_click}>
                <div class="availability-modal-content">
                    <h3 class="availability-modal-title">{"Add Availability"}</h3>
                    <p class="availability-modal-subtitle">{format_date_for_display(&draft.date)}</p>

                    <form class="availability-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="availability-date">{"Date"}</label>
                            <input
                                id="availability-date"
                                type="date"
                                value={draft.date.clone()}
                                oninput={props.on_date_change.reform(input_value)}
                                disabled={props.is_submitting}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="start-time">{"Start time"}</label>
                            <input
                                id="start-time"
                                type="time"
                                value={draft.start_time.clone()}
                                oninput={props.on_start_change.reform(input_value)}
                                disabled={props.is_submitting}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="end-time">{"End time"}</label>
                            <input
                                id="end-time"
                                type="time"
                                value={draft.end_time.clone()}
                                oninput={props.on_end_change.reform(input_value)}
                                disabled={props.is_submitting}
                                required=true
                            />
                        </div>

                        <div id="form-errors" class="form-errors">
                            {draft.error.clone().unwrap_or_default()}
                        </div>

                        <div class="availability-modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                                {if props.is_submitting { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={props.is_submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
