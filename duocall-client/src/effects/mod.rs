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

//! Lifecycle of the virtual-background processor on the outgoing video track.
//!
//! The processor is a replaceable stage spliced between raw capture and the
//! outgoing encode.  At any time it is either absent or attached; replacing
//! it is a multi-step async procedure (tear down the old stage, create,
//! initialize, configure, splice and enable the new one) that must run to
//! completion before the next replacement starts.  [`BackgroundEffectManager`]
//! owns that procedure; [`run_effect_worker`] serializes requests through a
//! single worker task so re-applies never interleave, coalescing rapid-fire
//! requests newest-wins.
//!
//! The platform's extension is reached through the [`EffectBackend`] /
//! [`EffectProcessor`] traits, so the lifecycle is testable without a
//! browser.

mod manager;

#[cfg(target_arch = "wasm32")]
pub mod virtual_background;

pub use manager::{run_effect_worker, BackgroundEffectManager, EffectHandle};

use duocall_types::BackgroundEffect;

/// Factory for background processors, implemented by the platform's
/// virtual-background extension.
#[allow(async_fn_in_trait)]
pub trait EffectBackend {
    type Processor: EffectProcessor;

    async fn create_processor(&self) -> anyhow::Result<Self::Processor>;
}

/// One pluggable stage in the local video track's outgoing pipeline.
///
/// `attach`/`detach` splice the stage into and out of the chain between raw
/// capture and the encode destination; the async operations reach into the
/// platform extension.
#[allow(async_fn_in_trait)]
pub trait EffectProcessor {
    async fn init(&mut self) -> anyhow::Result<()>;
    async fn configure(&mut self, effect: &BackgroundEffect) -> anyhow::Result<()>;
    async fn enable(&mut self) -> anyhow::Result<()>;
    async fn disable(&mut self) -> anyhow::Result<()>;
    fn attach(&mut self) -> anyhow::Result<()>;
    fn detach(&mut self) -> anyhow::Result<()>;
}
