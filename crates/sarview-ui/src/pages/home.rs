//! Home page.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Landing page linking to the historical view.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page home-page">
            <h1>{ "SARView" }</h1>
            <p>{ "Sentinel-1 radar imagery and incident monitoring." }</p>
            <Link<Route> to={Route::Historical}>{ "Historical Data" }</Link<Route>>
        </main>
    }
}
