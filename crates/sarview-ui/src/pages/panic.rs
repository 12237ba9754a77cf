//! Panic page displayed when a WASM panic occurs.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const PANIC_INFO_KEY: &str = "sarview_panic_info";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Retrieves panic info from localStorage.
fn get_panic_info() -> Option<String> {
    local_storage()?.get_item(PANIC_INFO_KEY).ok()?
}

fn clear_panic_info() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(PANIC_INFO_KEY);
    }
}

/// Formats a panic as `message\n\nLocation: file:line:column`.
fn format_panic(message: &str, location: Option<&std::panic::Location<'_>>) -> String {
    let location = location.map_or_else(
        || "unknown location".to_string(),
        |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
    );
    format!("{message}\n\nLocation: {location}")
}

/// Installs a panic hook that logs to the browser console, saves the panic
/// to localStorage and redirects to the panic page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let panic_info = format_panic(&info.to_string(), info.location());

        if let Some(storage) = local_storage() {
            let _ = storage.set_item(PANIC_INFO_KEY, &panic_info);
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_pathname(&Route::Panic.to_path());
        }
    }));
}

/// Panic page component.
#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let panic_info = use_state(get_panic_info);

    let on_clear = {
        let panic_info = panic_info.clone();
        Callback::from(move |_: MouseEvent| {
            clear_panic_info();
            panic_info.set(None);
        })
    };

    let on_copy = {
        let info = (*panic_info).clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(text), Some(window)) = (info.as_ref(), web_sys::window()) {
                let _ = window.navigator().clipboard().write_text(text);
                tracing::debug!("Copied panic info to clipboard");
            }
        })
    };

    html! {
        <main class="page panic-page">
            <h1>{ "Something went wrong" }</h1>
            <p class="panic-description">
                { "The application hit an unexpected error." }
            </p>

            if let Some(info) = &*panic_info {
                <div class="panic-info-box">
                    <pre class="panic-details">{ info }</pre>
                    <div class="panic-actions">
                        <button onclick={on_copy} class="btn-secondary">{ "Copy" }</button>
                        <button onclick={on_clear} class="btn-secondary">{ "Clear" }</button>
                    </div>
                </div>
            } else {
                <p class="panic-cleared">{ "No error details were recorded." }</p>
            }

            <Link<Route> to={Route::Home} classes="btn-primary">
                { "Back to Home" }
            </Link<Route>>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_panic() {
        let location = std::panic::Location::caller();
        let text = format_panic("boom", Some(location));
        assert!(text.starts_with("boom\n\nLocation: "));
        assert!(text.contains(location.file()));

        assert_eq!(
            format_panic("boom", None),
            "boom\n\nLocation: unknown location"
        );
    }
}
