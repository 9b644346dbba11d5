/// Application shell for Food Devil: routes, page metadata and the session
/// signal shared by every view.
use crate::components::{
    login_form::LoginForm, nutrition_report::NutritionReport, review_table::ReviewTable,
};
use crate::models::user::Session;
use crate::review_table::rating_headline;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts logged out; replaced by `LoginForm` on a successful login or signup.
    let session = create_rw_signal(Session::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/food-devil.css"/>
        <Title text="Food Devil"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/restaurants/:name/:id" view=RestaurantPage/>
                    <Route path="/login" view=LoginForm/>
                    <Route path="/nutrition" view=NutritionReport/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Restaurant detail page: rating headline above the review table.
#[component]
fn RestaurantPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.with(|p| p.get("name").cloned().unwrap_or_default());
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let average_rating = create_rw_signal(None::<f64>);

    view! {
        <div class="restaurant-info">
            <div class="title">{move || rating_headline(&name(), average_rating.get())}</div>
            <A href="/restaurants">"Go Back"</A>
            <h2>"Previous Reviews"</h2>
            // Remount the table when the route points at another restaurant.
            {move || review_section(id(), average_rating)}
        </div>
    }
}

/// Fresh review table for `restaurant_id`. The previous restaurant's average
/// is cleared so the headline never shows it while the new reviews load.
fn review_section(restaurant_id: String, average_rating: RwSignal<Option<f64>>) -> impl IntoView {
    average_rating.set(None);
    view! {
        <ReviewTable
            restaurant_id=restaurant_id
            on_average_rating={move |average: Option<f64>| average_rating.set(average)}
        />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <h1>"Page not found"</h1> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_switching_restaurant_clears_average() {
        let runtime = create_runtime();
        let average_rating = create_rw_signal(Some(4.5));
        let _ = review_section("616ad5d0d252dea11b9043c5".to_string(), average_rating);
        assert_eq!(average_rating.get_untracked(), None);
        runtime.dispose();
    }
}
