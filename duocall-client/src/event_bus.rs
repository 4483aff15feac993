/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Global event bus for framework-agnostic session events.
//!
//! A MPMC broadcast channel: any component can subscribe, the client emits.
//!
//! ```ignore
//! let mut rx = subscribe_session_events();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(event) = rx.recv().await {
//!         if let SessionEvent::RemoteUnpublished(id) = event {
//!             // remote side went away
//!         }
//!     }
//! });
//! ```

use crate::events::SessionEvent;
use async_broadcast::{broadcast, Receiver, Sender};
use once_cell::sync::Lazy;
use std::ops::Deref;

const EVENT_BUS_CAPACITY: usize = 256;

static SENDER: Lazy<Sender<SessionEvent>> = Lazy::new(|| {
    let (s, r) = broadcast(EVENT_BUS_CAPACITY);

    // Keep one receiver alive in the background so the channel never closes
    // while there are no UI subscribers.
    #[cfg(target_arch = "wasm32")]
    {
        let mut receiver = r;
        wasm_bindgen_futures::spawn_local(async move {
            while (receiver.recv().await).is_ok() {}
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    std::mem::drop(r);

    s
});

/// Get the global sender for emitting session events.
pub fn global_session_sender() -> Sender<SessionEvent> {
    SENDER.deref().clone()
}

/// Subscribe to session events.  Each subscriber receives all future events
/// independently.
pub fn subscribe_session_events() -> Receiver<SessionEvent> {
    SENDER.deref().new_receiver()
}

/// Emit a session event to all subscribers.  Non-blocking; if the channel is
/// full the event is dropped.
pub fn emit_session_event(event: SessionEvent) {
    let _ = global_session_sender().try_broadcast(event);
}
