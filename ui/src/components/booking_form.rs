use payloads::requests::earliest_join_date;
use payloads::{BookingField, BookingFormData, Course, Room, StayDuration};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub room: Room,
    /// Field values, owned by the caller.
    pub form: BookingFormData,
    /// Emits each edited field with its new value.
    pub on_change: Callback<(BookingField, String)>,
    pub on_submit: Callback<()>,
    /// Cancel without submitting. Field values are left to the caller.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-500 focus:border-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";
const SECTION_CLASS: &str = "font-semibold text-lg text-gray-800 border-b pb-2";

#[function_component]
pub fn BookingForm(props: &Props) -> Html {
    let input_handler = |field: BookingField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    let select_handler = |field: BookingField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((field, select.value()));
        })
    };

    let on_special_requests = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            on_change.emit((BookingField::SpecialRequests, textarea.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let form = &props.form;
    let min_join_date = earliest_join_date().to_string();

    let text_input = |label: &str, field: BookingField, input_type: &str| {
        html! {
            <div>
                <label class={LABEL_CLASS}>{format!("{label} *")}</label>
                <input
                    type={input_type.to_string()}
                    name={field.input_name()}
                    value={form.get(field).to_string()}
                    oninput={input_handler(field)}
                    class={INPUT_CLASS}
                    required={true}
                />
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-none lg:rounded-xl w-full h-full lg:h-auto
                    lg:max-h-[90vh] overflow-y-auto">
            <div class="bg-gradient-to-r from-blue-600 to-blue-700 p-6 text-white sticky top-0 z-10">
                <div class="flex justify-between items-center">
                    <div>
                        <h2 class="text-2xl font-bold">{format!("Book {}", props.room.name)}</h2>
                        <p class="text-blue-100">
                            {format!("{} Room • {}", props.room.room_type, props.room.gender)}
                        </p>
                    </div>
                    <button
                        type="button"
                        onclick={on_close_click.clone()}
                        disabled={props.submitting}
                        class="p-1 rounded-full hover:bg-blue-800 transition-colors text-2xl leading-none"
                        aria-label="Close"
                    >
                        {"×"}
                    </button>
                </div>
            </div>

            <div class="p-6">
                <form onsubmit={on_submit} class="space-y-6">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="space-y-4">
                            <h3 class={SECTION_CLASS}>{"Personal Information"}</h3>
                            {text_input("Full Name", BookingField::FullName, "text")}
                            {text_input("Email", BookingField::Email, "email")}
                            {text_input("Phone", BookingField::Phone, "tel")}
                        </div>

                        <div class="space-y-4">
                            <h3 class={SECTION_CLASS}>{"Academic Information"}</h3>
                            {text_input("College/University", BookingField::College, "text")}

                            <div>
                                <label class={LABEL_CLASS}>{"Course *"}</label>
                                <select
                                    name={BookingField::Course.input_name()}
                                    onchange={select_handler(BookingField::Course)}
                                    class={INPUT_CLASS}
                                    required={true}
                                >
                                    <option value="" selected={form.course.is_none()}>
                                        {"Select Course"}
                                    </option>
                                    {for Course::ALL.iter().map(|course| html! {
                                        <option
                                            value={course.as_str()}
                                            selected={form.course == Some(*course)}
                                        >
                                            {course.as_str()}
                                        </option>
                                    })}
                                </select>
                            </div>

                            <div>
                                <label class={LABEL_CLASS}>{"Join Date *"}</label>
                                <input
                                    type="date"
                                    name={BookingField::JoinDate.input_name()}
                                    value={form.join_date.clone()}
                                    oninput={input_handler(BookingField::JoinDate)}
                                    min={min_join_date}
                                    class={INPUT_CLASS}
                                    required={true}
                                />
                            </div>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h3 class={SECTION_CLASS}>{"Booking Details"}</h3>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class={LABEL_CLASS}>{"Duration *"}</label>
                                <select
                                    name={BookingField::Duration.input_name()}
                                    onchange={select_handler(BookingField::Duration)}
                                    class={INPUT_CLASS}
                                    required={true}
                                >
                                    {for StayDuration::ALL.iter().map(|duration| html! {
                                        <option
                                            value={duration.as_str()}
                                            selected={form.duration == *duration}
                                        >
                                            {duration.label()}
                                        </option>
                                    })}
                                </select>
                            </div>
                        </div>

                        <div>
                            <label class={LABEL_CLASS}>{"Special Requests"}</label>
                            <textarea
                                name={BookingField::SpecialRequests.input_name()}
                                value={form.special_requests.clone()}
                                oninput={on_special_requests}
                                rows="4"
                                class={INPUT_CLASS}
                                placeholder="Any special requirements or notes..."
                            />
                        </div>
                    </div>

                    if let Some(error) = &props.error {
                        <div class="p-3 rounded-lg bg-red-50 border border-red-200 text-sm text-red-700">
                            {error}
                        </div>
                    }

                    <div class="pt-4 flex flex-col sm:flex-row justify-end gap-3 sticky bottom-0 bg-white py-4 border-t">
                        <button
                            type="button"
                            onclick={on_close_click}
                            disabled={props.submitting}
                            class="px-6 py-3 border border-gray-300 rounded-lg text-gray-700
                                   hover:bg-gray-50 transition-colors
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={props.submitting}
                            class="px-6 py-3 bg-gradient-to-r from-blue-600 to-blue-700 text-white
                                   rounded-lg hover:from-blue-700 hover:to-blue-800 transition-all
                                   shadow-md hover:shadow-lg
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {if props.submitting { "Submitting..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
