use payloads::{Room, RoomStatus};
use yew::prelude::*;

/// Number of amenities shown on a card before collapsing the rest.
pub const AMENITY_PREVIEW_LEN: usize = 3;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub room: Room,
    /// Only emitted while the room is available.
    pub on_book: Callback<()>,
}

#[function_component]
pub fn RoomCard(props: &Props) -> Html {
    let room = &props.room;
    let is_available = room.is_available();

    let on_book_click = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            if is_available {
                on_book.emit(());
            }
        })
    };

    let amenities = room.amenities.as_deref().unwrap_or_default();
    let preview = AmenityPreview::new(amenities);

    let book_button_class = if is_available {
        "bg-gradient-to-r from-orange-500 to-orange-600 \
         hover:from-orange-600 hover:to-orange-700 text-white shadow-md \
         hover:shadow-lg"
    } else {
        "bg-gray-200 text-gray-500 cursor-not-allowed"
    };

    html! {
        <div class="bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-xl
                    transition-all duration-300 transform hover:-translate-y-1
                    border border-gray-100 h-full flex flex-col">
            <div class="relative h-56 w-full">
                <img
                    src={room.image_src().to_string()}
                    alt={room.name.clone()}
                    class="w-full h-full object-cover"
                    loading="lazy"
                />
                <div class="absolute top-3 right-3 flex flex-col gap-2">
                    <span class="bg-blue-600 text-white text-xs font-bold px-3 py-1 rounded-full shadow-md">
                        {&room.room_type}
                    </span>
                    <span class={classes!(
                        "text-xs", "font-bold", "px-3", "py-1", "rounded-full",
                        "shadow-md", "text-white", gender_badge_class(&room.gender)
                    )}>
                        {&room.gender}
                    </span>
                </div>
            </div>

            <div class="p-5 flex flex-col flex-grow">
                <div class="flex justify-between items-start mb-2">
                    <h3 class="text-xl font-bold text-gray-800">{&room.name}</h3>
                    <p class="text-lg font-bold text-orange-600">
                        {format!("₹{}", room.price)}
                        <span class="text-sm font-normal text-gray-500">{"/month"}</span>
                    </p>
                </div>

                <p class="text-gray-600 text-sm mb-4 line-clamp-2">{&room.description}</p>

                if !preview.shown.is_empty() {
                    <div class="mb-4">
                        <div class="flex flex-wrap gap-2">
                            {for preview.shown.iter().map(|amenity| html! {
                                <span class="bg-blue-50 text-blue-700 text-xs px-3 py-1 rounded-full flex items-center">
                                    <span class="mr-1">{"★"}</span>
                                    {amenity}
                                </span>
                            })}
                            if let Some(overflow) = preview.overflow_label() {
                                <span class="bg-gray-100 text-gray-700 text-xs px-3 py-1 rounded-full">
                                    {overflow}
                                </span>
                            }
                        </div>
                    </div>
                }

                <div class="mt-auto">
                    <div class={classes!(
                        "text-xs", "font-medium", "px-3", "py-1", "rounded-full",
                        "mb-3", "w-fit", status_badge_class(&room.status)
                    )}>
                        {status_label(&room.status)}
                    </div>

                    <button
                        onclick={on_book_click}
                        disabled={!is_available}
                        class={format!(
                            "w-full py-3 rounded-lg font-bold flex items-center \
                             justify-center gap-2 transition-all {book_button_class}"
                        )}
                    >
                        {"Book Now"}
                    </button>
                    if let Some(caption) = unavailable_caption(&room.status) {
                        <p class="text-xs text-gray-500 mt-1 text-center">
                            {caption}
                        </p>
                    }
                </div>
            </div>
        </div>
    }
}

/// The amenities shown on a card, plus how many were left out.
#[derive(Debug, PartialEq)]
pub struct AmenityPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> AmenityPreview<'a> {
    pub fn new(amenities: &'a [String]) -> Self {
        let shown_len = amenities.len().min(AMENITY_PREVIEW_LEN);
        Self {
            shown: &amenities[..shown_len],
            hidden: amenities.len() - shown_len,
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

pub fn status_label(status: &RoomStatus) -> &str {
    match status {
        RoomStatus::Available => "Available",
        RoomStatus::Booked => "Booked",
        RoomStatus::Maintenance => "Under Maintenance",
        RoomStatus::Reserved => "Reserved",
        RoomStatus::Other(raw) => raw,
    }
}

pub fn status_badge_class(status: &RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "bg-green-100 text-green-800",
        RoomStatus::Booked => "bg-red-100 text-red-800",
        RoomStatus::Maintenance => "bg-yellow-100 text-yellow-800",
        RoomStatus::Reserved => "bg-blue-100 text-blue-800",
        RoomStatus::Other(_) => "bg-gray-100 text-gray-800",
    }
}

pub fn gender_badge_class(gender: &str) -> &'static str {
    match gender {
        "Male" => "bg-blue-500",
        "Female" => "bg-pink-500",
        _ => "bg-purple-500",
    }
}

/// Why the Book button is disabled, or `None` when it isn't.
pub fn unavailable_caption(status: &RoomStatus) -> Option<&'static str> {
    match status {
        RoomStatus::Available => None,
        RoomStatus::Booked => Some("This room is already booked"),
        RoomStatus::Reserved => Some("This room is reserved"),
        _ => Some("Currently not available for booking"),
    }
}
