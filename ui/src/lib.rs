use payloads::APIClient;
use payloads::api_client::DEFAULT_BACKEND_URL;
use std::time::Duration;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
pub mod logs;
mod pages;
mod state;

use pages::{NotFoundPage, RoomsPage};

/// How long a simulated booking submission takes.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Rooms service client. The address is set at build time through
/// `BACKEND_URL`.
pub fn get_api_client() -> APIClient {
    APIClient::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

/// Whether booking submissions reach the booking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Wait for [`SIMULATED_SUBMIT_DELAY`] and report success.
    Simulated,
    /// POST the booking and report the endpoint's answer.
    Live,
}

impl SubmitMode {
    /// The mode selected at build time through `BOOKING_MODE`.
    pub fn current() -> Self {
        Self::from_setting(option_env!("BOOKING_MODE"))
    }

    fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some(value) if value.trim().eq_ignore_ascii_case("live") => {
                Self::Live
            }
            _ => Self::Simulated,
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/rooms")]
    Rooms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Rooms => html! { <RoomsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_mode_defaults_to_simulated() {
        assert_eq!(SubmitMode::from_setting(None), SubmitMode::Simulated);
        assert_eq!(
            SubmitMode::from_setting(Some("simulated")),
            SubmitMode::Simulated
        );
        assert_eq!(SubmitMode::from_setting(Some("")), SubmitMode::Simulated);
    }

    #[test]
    fn submit_mode_live() {
        assert_eq!(SubmitMode::from_setting(Some("live")), SubmitMode::Live);
        assert_eq!(SubmitMode::from_setting(Some(" LIVE ")), SubmitMode::Live);
    }

    #[test]
    fn routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/rooms"), Some(Route::Rooms));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
