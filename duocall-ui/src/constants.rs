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

/// DOM id of the element the local camera renders into.
pub const LOCAL_VIDEO_CONTAINER_ID: &str = "local-video";

/// DOM id of the element the remote participant's video renders into.
pub const REMOTE_VIDEO_CONTAINER_ID: &str = "remote-video";

/// The fixed background palette offered by the color selector, as
/// `(label, css value)` pairs.
pub const BACKGROUND_COLORS: [(&str, &str); 4] = [
    ("White", "#fff"),
    ("Black", "#000"),
    ("Red", "#ff0000"),
    ("Blue", "#0000ff"),
];
