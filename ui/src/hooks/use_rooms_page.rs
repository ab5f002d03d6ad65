use yew::prelude::*;

use crate::get_api_client;
use crate::state::{RoomsAction, RoomsPageState};

/// Page state for the rooms catalog, with the room list fetched once on
/// mount.
///
/// The fetch is not retried or cancelled. If the page unmounts first, the
/// result is dispatched to a reducer nobody renders.
#[hook]
pub fn use_rooms_page() -> UseReducerHandle<RoomsPageState> {
    let state = use_reducer(RoomsPageState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                tracing::info!(address = %api_client.address, "fetching rooms");

                let result = match api_client.list_rooms().await {
                    Ok(rooms) => {
                        tracing::info!(count = rooms.len(), "rooms loaded");
                        Ok(rooms)
                    }
                    Err(e) => {
                        tracing::error!("failed to fetch rooms: {e}");
                        Err(e.to_string())
                    }
                };
                state.dispatch(RoomsAction::RoomsLoaded(result));
            });
        });
    }

    state
}
