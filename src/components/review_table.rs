/// Restaurant review table: search box, sortable headers, paged rows and an
/// upvote button per row. Reviews load once when the table mounts; every
/// later interaction only touches the in-memory [`ReviewTableState`].
use crate::api::{reviews::upvote_review, ApiClient, ApiError};
use crate::models::review::{ReviewColumn, ReviewRow};
use crate::models::user::Session;
use crate::review_table::{load_reviews, ReviewTableState, UpvoteRequest};
use crate::utils::leptos_owner::with_owner_safe;
use crate::utils::paginate::ROWS_PER_PAGE_OPTIONS;
use crate::utils::sort::Order;
use leptos::logging::{log, warn};
use leptos::*;
use std::mem::take;

#[component]
pub fn ReviewTable(
    restaurant_id: String,
    /// Receives the average rating once the reviews have loaded.
    #[prop(into)]
    on_average_rating: Callback<Option<f64>>,
) -> impl IntoView {
    let session = use_context::<RwSignal<Session>>()
        .unwrap_or_else(|| create_rw_signal(Session::default()));
    let state = create_rw_signal(ReviewTableState::default());
    let load_error = create_rw_signal(None::<String>);

    // Effects only run in the browser, so the load never happens during SSR.
    create_effect(move |_| {
        let controller = web_sys::AbortController::new().ok();
        let client = ApiClient::from_build_env()
            .with_abort_signal(controller.as_ref().map(|c| c.signal()));
        let restaurant_id = restaurant_id.clone();
        let token = session.with_untracked(|s| s.token().map(str::to_string));
        let owner = Owner::current();

        spawn_local(async move {
            let outcome = load_reviews(&client, &restaurant_id, token.as_deref()).await;
            with_owner_safe(owner, "review table load", move || match outcome {
                Ok(loaded) => {
                    on_average_rating.call(loaded.summary.reported());
                    state.update(|s| *s = take(s).with_rows(loaded.rows));
                }
                Err(ApiError::Cancelled) => {
                    log!("[REVIEWS] Load for {} cancelled", restaurant_id);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            });
        });

        on_cleanup(move || {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    let upvote = move |key: String| {
        let mut request = None;
        state.update(|s| {
            let (next, upvote) = take(s).apply_upvote(&key);
            *s = next;
            request = upvote;
        });
        let Some(UpvoteRequest { review_id }) = request else {
            return;
        };
        let token = session.with_untracked(|s| s.token().map(str::to_string));
        spawn_local(async move {
            let client = ApiClient::from_build_env();
            match upvote_review(&client, &review_id, token.as_deref()).await {
                Ok(_) => log!("[UPVOTE] Sent upvote for {}", review_id),
                Err(err) => warn!("[UPVOTE] Upvote for {} failed: {}", review_id, err),
            }
        });
    };

    let header = ReviewColumn::ALL
        .into_iter()
        .map(|column| {
            let align = if column.align_right() { "align-right" } else { "" };
            let label = column.sortable().then(|| {
                view! {
                    <button
                        class="sort-label"
                        on:click=move |_| state.update(|s| *s = take(s).apply_sort(column))
                    >
                        {column.label()}
                        {move || state.with(|s| sort_marker(s, column))}
                        {move || {
                            state
                                .with(|s| sort_announcement(s, column))
                                .map(|label| view! { <span class="visually-hidden">{label}</span> })
                        }}
                    </button>
                }
            });
            view! { <th class=align>{label}</th> }
        })
        .collect_view();

    let rows = move || {
        let visible: Vec<ReviewRow> =
            state.with(|s| s.visible_rows().into_iter().cloned().collect());
        let can_upvote = session.with(Session::logged_in);
        visible
            .into_iter()
            .map(|row| {
                let key = row.key.clone();
                let class = if row.has_upvoted { "upvote confirmed" } else { "upvote" };
                view! {
                    <tr class="review-row">
                        <td>{row.review_text}</td>
                        <td>{row.rating}</td>
                        <td>{row.helpful_count}</td>
                        <td class="align-right">{row.display_name}</td>
                        <td class="align-right">{row.display_date}</td>
                        <td class="align-right">
                            <button
                                class=class
                                disabled={!can_upvote}
                                on:click=move |_| upvote(key.clone())
                            >
                                "👍"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="review-table">
            <div class="review-search">
                <input
                    type="text"
                    name="search"
                    placeholder="Search for Keyword"
                    prop:value=move || state.with(|s| s.searched.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        state.update(|s| *s = take(s).apply_search(&term));
                    }
                />
            </div>
            {move || {
                load_error
                    .get()
                    .map(|err| view! { <p class="error">{format!("Unable to load reviews: {}", err)}</p> })
            }}
            <table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="pagination">
                <label>
                    "Rows per page: "
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            state.update(|s| *s = take(s).apply_rows_per_page(size));
                        }
                    }>
                        {ROWS_PER_PAGE_OPTIONS
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || state.with(|s| s.rows_per_page == size)
                                    >
                                        {size}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <span class="page-range">{move || state.with(ReviewTableState::range_label)}</span>
                <button
                    disabled=move || state.with(|s| s.page == 0)
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.page.saturating_sub(1);
                            *s = take(s).apply_page(page);
                        })
                    }
                >
                    "Previous"
                </button>
                <button
                    disabled=move || state.with(|s| s.page + 1 >= s.page_count())
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.page + 1;
                            *s = take(s).apply_page(page);
                        })
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

fn sort_marker(state: &ReviewTableState, column: ReviewColumn) -> &'static str {
    if !state.is_sorted_by(column) {
        return "";
    }
    match state.order {
        Order::Asc => " ▲",
        Order::Desc => " ▼",
    }
}

/// Screen-reader text for the column the table is sorted by.
fn sort_announcement(state: &ReviewTableState, column: ReviewColumn) -> Option<&'static str> {
    state.is_sorted_by(column).then(|| state.order.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sorted_column_is_marked() {
        let state = ReviewTableState::default();
        assert_eq!(sort_marker(&state, ReviewColumn::Rating), " ▼");
        assert_eq!(sort_marker(&state, ReviewColumn::Date), "");
        assert_eq!(sort_announcement(&state, ReviewColumn::Rating), Some("sorted descending"));
        assert_eq!(sort_announcement(&state, ReviewColumn::Date), None);

        let state = state.apply_sort(ReviewColumn::Date);
        assert_eq!(sort_marker(&state, ReviewColumn::Date), " ▲");
        assert_eq!(sort_announcement(&state, ReviewColumn::Date), Some("sorted ascending"));
        assert_eq!(sort_announcement(&state, ReviewColumn::Rating), None);
    }
}
