use shared::CalendarView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarToolbarProps {
    pub title: String,
    pub view: CalendarView,
    /// Views offered by the switch; the switch is hidden with fewer than two
    pub views: Vec<CalendarView>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_today: Callback<()>,
    pub on_switch_view: Callback<CalendarView>,
}

#[function_component(CalendarToolbar)]
pub fn calendar_toolbar(props: &CalendarToolbarProps) -> Html {
    let on_previous = props.on_previous.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());
    let on_today = props.on_today.reform(|_: MouseEvent| ());

    html! {
        <div class="calendar-toolbar">
            <div class="toolbar-chunk">
                <button class="calendar-nav-btn" onclick={on_previous} title="Previous">{"‹"}</button>
                <button class="calendar-nav-btn" onclick={on_next} title="Next">{"›"}</button>
                <button class="calendar-nav-btn today" onclick={on_today}>{"today"}</button>
            </div>

            <h2 class="calendar-title">{&props.title}</h2>

            <div class="toolbar-chunk">
                {if props.views.len() > 1 {
                    html! {
                        <>{for props.views.iter().map(|view| {
                            let view = *view;
                            let class = if view == props.view {
                                "calendar-view-btn active"
                            } else {
                                "calendar-view-btn"
                            };
                            let on_click = props.on_switch_view.reform(move |_: MouseEvent| view);
                            html! {
                                <button class={class} onclick={on_click}>{view.label()}</button>
                            }
                        })}</>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
