//! Weekly routine table: seven rows, Saturday first.

use dioxus::prelude::*;

use crate::routine::{DayRow, DaySlot, PeriodCard, WeekTable, NO_CLASSES_LABEL};

#[component]
pub fn RoutineTable(table: WeekTable) -> Element {
    rsx! {
        figure {
            table { class: "routine-table",
                thead {
                    tr {
                        th { scope: "col", "Day" }
                        th { scope: "col", "Periods" }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        {day_row(row)}
                    }
                }
            }
        }
    }
}

fn day_row(row: &DayRow) -> Element {
    let day = row.day.as_str();
    rsx! {
        tr { key: "{day}", "data-day": "{day}",
            th { scope: "row", "{day}" }
            {day_cell(&row.slot)}
        }
    }
}

fn day_cell(slot: &DaySlot) -> Element {
    match slot {
        DaySlot::NoClasses => rsx! {
            td { class: "no-classes", "{NO_CLASSES_LABEL}" }
        },
        DaySlot::Periods(cards) => rsx! {
            td {
                div { class: "routine-periods",
                    for card in cards.iter() {
                        {period_card(card)}
                    }
                }
            }
        },
    }
}

fn period_card(card: &PeriodCard) -> Element {
    let class = if card.highlighted {
        "period-card highlight"
    } else {
        "period-card"
    };
    let number = card.period_number;
    let time = card.time_range.as_str();
    let subject = card.subject.as_str();
    let teacher = card.teacher.as_str();

    rsx! {
        div { class: "{class}",
            small { "Period {number} · {time}" }
            br {}
            strong { "{subject}" }
            br {}
            span { "{teacher}" }
            if let Some(room) = card.room.as_deref() {
                br {}
                small { class: "room", "Room {room}" }
            }
        }
    }
}
