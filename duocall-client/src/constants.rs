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

// These are read at compile time, please rebuild if you change them.
//
// The defaults are placeholders.  A real deployment supplies its own
// application id and mints a session token from its auth service instead of
// joining tokenless.

pub const APP_ID: &str = match option_env!("DUOCALL_APP_ID") {
    Some(app_id) => app_id,
    None => "00000000000000000000000000000000",
};

pub const CHANNEL: &str = match option_env!("DUOCALL_CHANNEL") {
    Some(channel) => channel,
    None => "test",
};

/// No authentication token by default; see the note above.
pub const AUTH_TOKEN: Option<&str> = None;

/// Fixed blur intensity handed to the virtual-background processor.
pub const BLUR_DEGREE: u32 = 2;
