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
 */

//! Integration tests for the SessionEvent enum.

#![cfg(target_arch = "wasm32")]

use duocall_client::SessionEvent;
use duocall_types::{BackgroundEffect, JoinError, MediaKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_session_event_clone_joined() {
    let event = SessionEvent::Joined("42".to_string());
    let cloned = event.clone();
    match cloned {
        SessionEvent::Joined(uid) => assert_eq!(uid, "42"),
        _ => panic!("Expected Joined variant"),
    }
}

#[wasm_bindgen_test]
fn test_session_event_clone_join_failed() {
    let event = SessionEvent::JoinFailed(JoinError::Session("rejected".to_string()));
    let cloned = event.clone();
    match cloned {
        SessionEvent::JoinFailed(JoinError::Session(reason)) => assert_eq!(reason, "rejected"),
        _ => panic!("Expected JoinFailed variant"),
    }
}

#[wasm_bindgen_test]
fn test_session_event_clone_remote_published() {
    let event = SessionEvent::RemotePublished {
        participant: "peer".to_string(),
        kind: MediaKind::Video,
    };
    let cloned = event.clone();
    match cloned {
        SessionEvent::RemotePublished { participant, kind } => {
            assert_eq!(participant, "peer");
            assert_eq!(kind, MediaKind::Video);
        }
        _ => panic!("Expected RemotePublished variant"),
    }
}

#[wasm_bindgen_test]
fn test_session_event_clone_remote_unpublished() {
    let event = SessionEvent::RemoteUnpublished("peer".to_string());
    let cloned = event.clone();
    match cloned {
        SessionEvent::RemoteUnpublished(uid) => assert_eq!(uid, "peer"),
        _ => panic!("Expected RemoteUnpublished variant"),
    }
}

#[wasm_bindgen_test]
fn test_session_event_clone_background_applied() {
    let event = SessionEvent::BackgroundApplied(BackgroundEffect::Blur);
    let cloned = event.clone();
    match cloned {
        SessionEvent::BackgroundApplied(effect) => assert_eq!(effect, BackgroundEffect::Blur),
        _ => panic!("Expected BackgroundApplied variant"),
    }
}

#[wasm_bindgen_test]
fn test_session_event_debug_join_failed() {
    let event = SessionEvent::JoinFailed(JoinError::DeviceAcquisition("denied".to_string()));
    let debug_str = format!("{:?}", event);
    assert!(debug_str.contains("JoinFailed"));
    assert!(debug_str.contains("denied"));
}

#[wasm_bindgen_test]
fn test_session_event_debug_permission_granted() {
    let event = SessionEvent::PermissionGranted;
    let debug_str = format!("{:?}", event);
    assert_eq!(debug_str, "PermissionGranted");
}

#[wasm_bindgen_test]
fn test_session_event_debug_background_failed() {
    let event = SessionEvent::BackgroundFailed("init rejected".to_string());
    let debug_str = format!("{:?}", event);
    assert!(debug_str.contains("BackgroundFailed"));
    assert!(debug_str.contains("init rejected"));
}
