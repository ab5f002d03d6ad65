use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_close: Callback<()>,
}

/// Confirmation shown after a booking request goes through.
#[function_component]
pub fn SuccessModal(props: &Props) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <div class="bg-gradient-to-r from-green-500 to-green-600 p-8 text-center text-white">
                <div class="flex justify-center mb-4 text-5xl">{"✓"}</div>
                <h2 class="text-2xl font-bold">{"Booking Successful!"}</h2>
                <p class="mt-2 text-green-100">{"Your room has been reserved"}</p>
            </div>
            <div class="p-6 text-center">
                <p class="text-gray-600 mb-6">
                    {"We've received your booking request. Our team will contact \
                      you within 24 hours to confirm your reservation and discuss \
                      next steps."}
                </p>
                <button
                    onclick={on_close_click}
                    class="px-6 py-3 bg-gradient-to-r from-blue-600 to-blue-700 text-white
                           rounded-lg hover:from-blue-700 hover:to-blue-800 transition-all
                           shadow-md w-full"
                >
                    {"Close"}
                </button>
            </div>
        </Modal>
    }
}
