use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <main class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-800">{"404"}</h1>
                <p class="text-gray-600 mb-6">{"Page not found"}</p>
                <Link<Route> to={Route::Rooms} classes="text-blue-600 hover:underline">
                    {"Browse rooms"}
                </Link<Route>>
            </div>
        </main>
    }
}
