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

use serde::{Deserialize, Serialize};

/// The user's requested virtual background.
///
/// This is intent, not the applied state: the effect pipeline reacts to
/// changes of this request and attaches/replaces/detaches the processor
/// accordingly.  The three selections are mutually exclusive; every mutation
/// goes through one of the entry points below, which keep at most one of
/// color/image/blur active.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRequest {
    color: Option<String>,
    image: Option<String>,
    blurred: bool,
}

impl BackgroundRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a solid background color (a CSS hex string such as `#ff0000`),
    /// clearing any image or blur selection.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
        self.image = None;
        self.blurred = false;
    }

    /// Select an uploaded background image (a data URL produced by the file
    /// reader), clearing any color or blur selection.
    pub fn select_image(&mut self, data_url: impl Into<String>) {
        self.image = Some(data_url.into());
        self.color = None;
        self.blurred = false;
    }

    /// Flip the blur flag.  Turning blur on clears any color or image
    /// selection; turning it off leaves nothing selected.  Returns the new
    /// flag value.
    pub fn toggle_blur(&mut self) -> bool {
        self.blurred = !self.blurred;
        if self.blurred {
            self.color = None;
            self.image = None;
        }
        self.blurred
    }

    /// Clear all three selections.
    pub fn clear(&mut self) {
        self.color = None;
        self.image = None;
        self.blurred = false;
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    /// Resolve the request into the effect the pipeline should apply.
    pub fn effect(&self) -> BackgroundEffect {
        if let Some(color) = &self.color {
            BackgroundEffect::Color(color.clone())
        } else if let Some(image) = &self.image {
            BackgroundEffect::Image(image.clone())
        } else if self.blurred {
            BackgroundEffect::Blur
        } else {
            BackgroundEffect::None
        }
    }
}

/// A resolved background effect, as handed to the effect pipeline.
///
/// `None` means the pipeline should detach any attached processor and show
/// raw video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundEffect {
    None,
    Color(String),
    Image(String),
    Blur,
}

impl BackgroundEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, BackgroundEffect::None)
    }
}

impl std::fmt::Display for BackgroundEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BackgroundEffect::None => write!(f, "none"),
            BackgroundEffect::Color(color) => write!(f, "color {color}"),
            BackgroundEffect::Image(_) => write!(f, "image"),
            BackgroundEffect::Blur => write!(f, "blur"),
        }
    }
}
