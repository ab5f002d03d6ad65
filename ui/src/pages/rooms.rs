use payloads::requests::{CreateBooking, earliest_join_date};
use payloads::{BookingField, BookingFormData, RoomId};
use yew::prelude::*;

use crate::components::{BookingForm, Modal, RoomCard, SuccessModal};
use crate::hooks::use_rooms_page;
use crate::state::{RoomsAction, RoomsView, SubmissionLatch};
use crate::{SIMULATED_SUBMIT_DELAY, SubmitMode, get_api_client};

/// Number of placeholder cards shown while rooms load.
const SKELETON_CARDS: usize = 6;

pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to submit booking. Please try again.";

#[function_component]
pub fn RoomsPage() -> Html {
    let state = use_rooms_page();
    let latch = use_mut_ref(SubmissionLatch::default);

    let on_field_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            state.dispatch(RoomsAction::FieldChanged(field, value));
        })
    };

    let on_close_booking = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(RoomsAction::CloseBooking))
    };

    let on_close_success = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(RoomsAction::CloseSuccess))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |()| {
            let Some(session) = state.booking.as_ref() else {
                return;
            };
            // the handle is a render-time snapshot, the latch is not
            if !state.can_submit() || !latch.borrow_mut().try_begin() {
                return;
            }
            let room_id = session.room.id.clone();
            let form = state.form.clone();

            state.dispatch(RoomsAction::SubmitStarted);
            let state = state.clone();
            let latch = latch.clone();
            yew::platform::spawn_local(async move {
                let outcome =
                    submit_booking(room_id, form, SubmitMode::current()).await;
                latch.borrow_mut().finish();
                match outcome {
                    Ok(()) => state.dispatch(RoomsAction::SubmitSucceeded),
                    Err(message) => {
                        state.dispatch(RoomsAction::SubmitFailed(message))
                    }
                }
            });
        })
    };

    let on_book = {
        let state = state.clone();
        Callback::from(move |room_id: RoomId| {
            state.dispatch(RoomsAction::BookRequested(room_id))
        })
    };

    html! {
        <>
            <RoomsContent view={state.view.clone()} {on_book} />

            if let Some(session) = &state.booking {
                <Modal
                    on_close={on_close_booking.clone()}
                    max_width="lg:max-w-4xl"
                    close_on_backdrop={false}
                >
                    <BookingForm
                        room={session.room.clone()}
                        form={state.form.clone()}
                        on_change={on_field_change}
                        {on_submit}
                        on_close={on_close_booking}
                        submitting={session.submitting}
                        error={session.error.clone().map(AttrValue::from)}
                    />
                </Modal>
            }

            if state.success_open {
                <SuccessModal on_close={on_close_success} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomsContentProps {
    pub view: RoomsView,
    /// Emitted with the id of the room whose Book button was clicked.
    pub on_book: Callback<RoomId>,
}

/// The page body for the current fetch outcome.
#[function_component]
pub fn RoomsContent(props: &RoomsContentProps) -> Html {
    let body = match &props.view {
        RoomsView::Loading => return loading_view(),
        RoomsView::Error(message) => return error_view(message),
        RoomsView::Empty => empty_view(),
        RoomsView::Populated(rooms) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                {for rooms.iter().map(|room| {
                    let on_book = {
                        let on_book = props.on_book.clone();
                        let room_id = room.id.clone();
                        Callback::from(move |()| on_book.emit(room_id.clone()))
                    };
                    html! {
                        <RoomCard key={room.id.0.clone()} room={room.clone()} {on_book} />
                    }
                })}
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-3xl font-bold text-gray-800 mb-3">{"Our Hostel Rooms"}</h1>
                    <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                        {"Comfortable living spaces with modern amenities for students"}
                    </p>
                </div>
                {body}
            </div>
        </div>
    }
}

/// Run a booking submission for the selected room.
///
/// Simulated submissions always succeed after a fixed delay. Live ones
/// validate the form and call the booking endpoint.
async fn submit_booking(
    room_id: RoomId,
    form: BookingFormData,
    mode: SubmitMode,
) -> Result<(), String> {
    match mode {
        SubmitMode::Simulated => {
            gloo_timers::future::sleep(SIMULATED_SUBMIT_DELAY).await;
            tracing::info!(%room_id, "simulated booking submitted");
            Ok(())
        }
        SubmitMode::Live => {
            let request =
                CreateBooking::from_form(room_id, &form, earliest_join_date())
                    .map_err(|e| e.to_string())?;
            match get_api_client().create_booking(&request).await {
                Ok(confirmation) => {
                    tracing::info!(
                        booking_id = %confirmation.booking_id,
                        room_id = %confirmation.room_id,
                        "booking submitted"
                    );
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("failed to submit booking: {e}");
                    Err(format!("{SUBMIT_FAILED_MESSAGE} ({})", e.details()))
                }
            }
        }
    }
}

fn loading_view() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-3xl font-bold text-gray-800 mb-3">{"Our Hostel Rooms"}</h1>
                    <div class="flex justify-center">
                        <div class="animate-pulse h-4 bg-gray-200 rounded w-1/3"></div>
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {for (0..SKELETON_CARDS).map(|i| html! {
                        <div key={i} class="bg-white rounded-xl shadow-md overflow-hidden h-full animate-pulse">
                            <div class="h-56 bg-gray-200"></div>
                            <div class="p-5 space-y-3">
                                <div class="h-6 bg-gray-200 rounded w-3/4"></div>
                                <div class="h-4 bg-gray-200 rounded w-full"></div>
                                <div class="h-4 bg-gray-200 rounded w-5/6"></div>
                                <div class="flex gap-2">
                                    <div class="h-6 bg-gray-200 rounded-full w-16"></div>
                                    <div class="h-6 bg-gray-200 rounded-full w-16"></div>
                                </div>
                                <div class="h-10 bg-gray-200 rounded-lg mt-4"></div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

fn error_view(message: &str) -> Html {
    let on_try_again = Callback::from(|_: MouseEvent| {
        tracing::info!("reloading after rooms fetch failure");
        if let Some(window) = web_sys::window()
            && let Err(e) = window.location().reload()
        {
            tracing::error!("failed to reload page: {e:?}");
        }
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="bg-white p-8 rounded-xl shadow-lg max-w-md w-full text-center">
                <div class="text-red-500 mb-4 text-5xl">{"!"}</div>
                <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Error Loading Rooms"}</h2>
                <p class="text-gray-600 mb-6">{message.to_string()}</p>
                <button
                    onclick={on_try_again}
                    class="px-6 py-3 bg-gradient-to-r from-blue-600 to-blue-700 text-white
                           rounded-lg hover:from-blue-700 hover:to-blue-800 transition-all
                           shadow-md w-full"
                >
                    {"Try Again"}
                </button>
            </div>
        </div>
    }
}

fn empty_view() -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-md p-8 text-center">
            <h2 class="text-2xl font-semibold text-gray-700 mb-2">{"No Rooms Available"}</h2>
            <p class="text-gray-500">
                {"All rooms are currently occupied. Please check back later."}
            </p>
        </div>
    }
}
