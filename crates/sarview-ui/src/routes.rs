//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Historical data view.
    #[at("/historical")]
    Historical,
    /// Shown after a WASM panic.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Historical.to_path(), "/historical");
        assert_eq!(Route::Panic.to_path(), "/panic");
    }

    #[test]
    fn test_recognize() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/historical"), Some(Route::Historical));
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }
}
