use yew::prelude::*;
use chrono::NaiveDate;
use backend::{CalendarMonthRef, CalendarService, WEEKDAY_LABELS};

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub month: CalendarMonthRef,
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub on_select: Callback<NaiveDate>,
    pub on_previous_month: Callback<()>,
    pub on_next_month: Callback<()>,
}

#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    // Grid and availability come from the backend; this only renders
    let grid = CalendarService::new().month_grid(props.month, props.today);

    let on_prev = {
        let on_previous_month = props.on_previous_month.clone();
        Callback::from(move |_: MouseEvent| on_previous_month.emit(()))
    };
    let on_next = {
        let on_next_month = props.on_next_month.clone();
        Callback::from(move |_: MouseEvent| on_next_month.emit(()))
    };

    html! {
        <div class="booking-calendar">
            <div class="calendar-heading">
                <h3>{props.month.label()}</h3>
                <div class="calendar-nav">
                    <button class="calendar-nav-button" onclick={on_prev}>{"←"}</button>
                    <button class="calendar-nav-button" onclick={on_next}>{"→"}</button>
                </div>
            </div>
            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! { <div class="weekday">{*label}</div> })}
            </div>
            <div class="calendar-grid">
                {for grid.days.iter().map(|day| {
                    let selectable = day.available && day.in_current_month;
                    let is_selected = props.selected == Some(day.date);
                    let class = if is_selected {
                        "calendar-day selected"
                    } else if day.is_today {
                        "calendar-day today"
                    } else if selectable {
                        "calendar-day available"
                    } else {
                        "calendar-day unavailable"
                    };
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let date = day.date;
                        Callback::from(move |_: MouseEvent| {
                            if selectable {
                                on_select.emit(date);
                            }
                        })
                    };

                    html! {
                        <button class={class} disabled={!selectable} {onclick}>
                            {day.day}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
