use crate::models::nutrition::{default_targets, find_target, HistoryWindow, DEFAULT_GRAPHED_NUTRIENT};
use crate::models::user::Session;
use chrono::{NaiveDate, Utc};
use leptos::*;

/// Daily nutrition cards against daily-value targets, plus the history
/// range picker. Only shown to logged-in users.
#[component]
pub fn NutritionReport() -> impl IntoView {
    let session = use_context::<RwSignal<Session>>()
        .unwrap_or_else(|| create_rw_signal(Session::default()));
    let targets = store_value(default_targets());
    let (graphed, set_graphed) = create_signal(DEFAULT_GRAPHED_NUTRIENT.to_string());
    let history = create_rw_signal(HistoryWindow::ending_today(Utc::now().date_naive()));

    let cards = move || {
        targets.with_value(|targets| {
            targets
                .iter()
                .cloned()
                .map(|target| {
                    let name = target.name.clone();
                    let percent = target
                        .percent_of_daily_value()
                        .map(|p| format!("{:.0}% DV", p))
                        .unwrap_or_default();
                    let class = if target.exceeds_daily_value() { "nutrition-card over" } else { "nutrition-card" };
                    view! {
                        <div class=class on:click=move |_| set_graphed.set(name.clone())>
                            <h4>{target.name}</h4>
                            <p>{format!("{} / {} {}", target.intake, target.daily_value, target.unit)}</p>
                            <p>{percent}</p>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let graphed_caption = move || {
        let name = graphed.get();
        targets.with_value(|targets| {
            find_target(targets, &name)
                .map(|t| format!("{}: daily value {} {}", t.name, t.daily_value, t.unit))
                .unwrap_or_default()
        })
    };

    view! {
        <Show
            when=move || session.with(Session::logged_in)
            fallback=|| view! { <p class="lock">"Log in to view your nutrition report"</p> }
        >
            <div class="title">"Daily Nutrition Report"</div>
            <div class="nutrition-cards">{cards}</div>
            <div class="title">"Nutrition History"</div>
            <label>
                "Start Date "
                <input
                    type="date"
                    prop:value=move || history.with(|w| w.start.to_string())
                    on:input=move |ev| {
                        if let Some(day) = parse_day(&event_target_value(&ev)) {
                            history.update(|w| *w = w.set_start(day));
                        }
                    }
                />
            </label>
            <label>
                "End Date "
                <input
                    type="date"
                    prop:value=move || history.with(|w| w.end.to_string())
                    on:input=move |ev| {
                        if let Some(day) = parse_day(&event_target_value(&ev)) {
                            history.update(|w| *w = w.set_end(day));
                        }
                    }
                />
            </label>
            <p class="graph-caption">{graphed_caption}</p>
        </Show>
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
