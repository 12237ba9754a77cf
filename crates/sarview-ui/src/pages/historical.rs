//! Historical data page.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const CONTAINER_STYLE: &str = "padding: 2rem;";

const BACK_BUTTON_STYLE: &str = "margin-top: 1rem; padding: 10px 20px; \
    background-color: #007bff; color: white; border: none; \
    border-radius: 5px; cursor: pointer;";

/// Static historical data page with a single link back to the home route.
#[function_component(HistoricalPage)]
pub fn historical_page() -> Html {
    html! {
        <div style={CONTAINER_STYLE}>
            <h1>{ "Historical Data" }</h1>
            <p>{ "This is the Historical Data page." }</p>

            <Link<Route> to={Route::Home}>
                <button style={BACK_BUTTON_STYLE}>
                    { "Back to Home" }
                </button>
            </Link<Route>>
        </div>
    }
}
