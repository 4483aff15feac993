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

use super::{EffectBackend, EffectProcessor};
use crate::event_bus::emit_session_event;
use crate::events::SessionEvent;
use duocall_types::BackgroundEffect;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use log::{error, warn};

/// Owns the attached processor (if any) and the replacement procedure.
///
/// Invariant: at most one processor is attached, and a previous processor is
/// disabled and detached before its replacement is spliced in.  The manager
/// itself does not serialize concurrent calls; callers go through
/// [`run_effect_worker`], which owns the manager on a single task.
pub struct BackgroundEffectManager<B: EffectBackend> {
    backend: B,
    attached: Option<B::Processor>,
}

impl<B: EffectBackend> BackgroundEffectManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            attached: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Replace the attached processor (if any) with one configured for
    /// `effect`.
    ///
    /// A cleanup failure on the outgoing processor is logged and does not
    /// block the replacement.  A failure while building the new processor
    /// drops it and leaves the pipeline with no processor attached; the
    /// previous one is not restored.  A request of `BackgroundEffect::None`
    /// tears down and attaches nothing, leaving raw video.
    pub async fn reapply(&mut self, effect: &BackgroundEffect) -> anyhow::Result<()> {
        if let Some(mut previous) = self.attached.take() {
            if let Err(e) = Self::teardown(&mut previous).await {
                warn!("cleaning up previous background processor failed: {e}");
            }
        }

        if effect.is_none() {
            return Ok(());
        }

        let mut processor = self.backend.create_processor().await?;
        processor.init().await?;
        processor.configure(effect).await?;
        processor.attach()?;
        processor.enable().await?;
        self.attached = Some(processor);
        Ok(())
    }

    async fn teardown(processor: &mut B::Processor) -> anyhow::Result<()> {
        processor.disable().await?;
        processor.detach()?;
        Ok(())
    }
}

/// Sending half of the single-slot effect queue.  Cheap to clone; owned by
/// the session client and handed to the UI.
#[derive(Clone)]
pub struct EffectHandle {
    tx: UnboundedSender<BackgroundEffect>,
}

impl EffectHandle {
    pub fn channel() -> (Self, UnboundedReceiver<BackgroundEffect>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    /// Request a re-apply.  Requests made while one is in flight are
    /// coalesced by the worker, newest wins.
    pub fn request(&self, effect: BackgroundEffect) {
        if self.tx.unbounded_send(effect).is_err() {
            warn!("background effect worker is gone; dropping request");
        }
    }
}

/// Worker loop that owns the manager and applies requests one at a time.
///
/// Runs until the sending half is dropped.  Before each apply the queue is
/// drained so only the most recent request is acted on; intermediate
/// requests that arrived while a re-apply was in flight are skipped.
pub async fn run_effect_worker<B: EffectBackend>(
    backend: B,
    mut rx: UnboundedReceiver<BackgroundEffect>,
) {
    let mut manager = BackgroundEffectManager::new(backend);
    while let Some(first) = rx.next().await {
        let effect = drain_to_latest(&mut rx, first);
        match manager.reapply(&effect).await {
            Ok(()) => emit_session_event(SessionEvent::BackgroundApplied(effect)),
            Err(e) => {
                error!("failed to apply virtual background: {e}");
                emit_session_event(SessionEvent::BackgroundFailed(e.to_string()));
            }
        }
    }
}

fn drain_to_latest(
    rx: &mut UnboundedReceiver<BackgroundEffect>,
    mut latest: BackgroundEffect,
) -> BackgroundEffect {
    while let Ok(Some(newer)) = rx.try_next() {
        latest = newer;
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call the manager makes, tagged with the processor's
    /// sequence number.
    #[derive(Clone, Default)]
    struct CallLog(Rc<RefCell<Vec<String>>>);

    impl CallLog {
        fn push(&self, entry: impl Into<String>) {
            self.0.borrow_mut().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    struct MockBackend {
        log: CallLog,
        created: Rc<RefCell<usize>>,
        /// Processor number whose `configure` should fail, if any.
        fail_configure_on: Option<usize>,
    }

    impl MockBackend {
        fn new(log: CallLog) -> Self {
            Self {
                log,
                created: Rc::new(RefCell::new(0)),
                fail_configure_on: None,
            }
        }
    }

    struct MockProcessor {
        log: CallLog,
        number: usize,
        fail_configure: bool,
    }

    impl EffectBackend for MockBackend {
        type Processor = MockProcessor;

        async fn create_processor(&self) -> anyhow::Result<MockProcessor> {
            let number = {
                let mut created = self.created.borrow_mut();
                *created += 1;
                *created
            };
            self.log.push(format!("create #{number}"));
            Ok(MockProcessor {
                log: self.log.clone(),
                number,
                fail_configure: self.fail_configure_on == Some(number),
            })
        }
    }

    impl EffectProcessor for MockProcessor {
        async fn init(&mut self) -> anyhow::Result<()> {
            self.log.push(format!("init #{}", self.number));
            Ok(())
        }

        async fn configure(&mut self, effect: &BackgroundEffect) -> anyhow::Result<()> {
            if self.fail_configure {
                anyhow::bail!("configure rejected");
            }
            self.log.push(format!("configure #{} {effect}", self.number));
            Ok(())
        }

        async fn enable(&mut self) -> anyhow::Result<()> {
            self.log.push(format!("enable #{}", self.number));
            Ok(())
        }

        async fn disable(&mut self) -> anyhow::Result<()> {
            self.log.push(format!("disable #{}", self.number));
            Ok(())
        }

        fn attach(&mut self) -> anyhow::Result<()> {
            self.log.push(format!("attach #{}", self.number));
            Ok(())
        }

        fn detach(&mut self) -> anyhow::Result<()> {
            self.log.push(format!("detach #{}", self.number));
            Ok(())
        }
    }

    #[test]
    fn first_apply_attaches_a_configured_processor() {
        let log = CallLog::default();
        let mut manager = BackgroundEffectManager::new(MockBackend::new(log.clone()));

        block_on(manager.reapply(&BackgroundEffect::Blur)).unwrap();

        assert!(manager.is_attached());
        assert_eq!(
            log.entries(),
            vec![
                "create #1",
                "init #1",
                "configure #1 blur",
                "attach #1",
                "enable #1",
            ]
        );
    }

    #[test]
    fn replacement_tears_down_the_previous_processor_first() {
        let log = CallLog::default();
        let mut manager = BackgroundEffectManager::new(MockBackend::new(log.clone()));

        block_on(manager.reapply(&BackgroundEffect::Color("#ff0000".into()))).unwrap();
        block_on(manager.reapply(&BackgroundEffect::Blur)).unwrap();

        assert!(manager.is_attached());
        let entries = log.entries();
        // The old processor is disabled and detached before any work on the
        // replacement begins.
        assert_eq!(
            &entries[5..7],
            &["disable #1".to_string(), "detach #1".to_string()]
        );
        assert_eq!(entries[7], "create #2");
        assert_eq!(entries.last().unwrap(), "enable #2");
    }

    #[test]
    fn reapplying_the_same_effect_does_not_leak_a_processor() {
        let log = CallLog::default();
        let mut manager = BackgroundEffectManager::new(MockBackend::new(log.clone()));

        block_on(manager.reapply(&BackgroundEffect::Blur)).unwrap();
        block_on(manager.reapply(&BackgroundEffect::Blur)).unwrap();

        assert!(manager.is_attached());
        let entries = log.entries();
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.starts_with("disable") || e.starts_with("detach"))
                .count(),
            2,
            "previous processor must be disabled and detached exactly once"
        );
        assert_eq!(entries.iter().filter(|e| e.starts_with("enable")).count(), 2);
    }

    #[test]
    fn none_request_detaches_and_attaches_nothing() {
        let log = CallLog::default();
        let mut manager = BackgroundEffectManager::new(MockBackend::new(log.clone()));

        block_on(manager.reapply(&BackgroundEffect::Color("#fff".into()))).unwrap();
        block_on(manager.reapply(&BackgroundEffect::None)).unwrap();

        assert!(!manager.is_attached());
        let entries = log.entries();
        assert_eq!(
            &entries[5..],
            &["disable #1".to_string(), "detach #1".to_string()]
        );
    }

    #[test]
    fn failure_mid_apply_reverts_to_absent_without_restoring_the_previous() {
        let log = CallLog::default();
        let mut backend = MockBackend::new(log.clone());
        backend.fail_configure_on = Some(2);
        let mut manager = BackgroundEffectManager::new(backend);

        block_on(manager.reapply(&BackgroundEffect::Blur)).unwrap();
        let result = block_on(manager.reapply(&BackgroundEffect::Color("#000".into())));

        assert!(result.is_err());
        assert!(!manager.is_attached());
        let entries = log.entries();
        // Processor #1 was torn down, #2 never got past create/init.
        assert!(entries.contains(&"detach #1".to_string()));
        assert!(!entries.iter().any(|e| e.starts_with("attach #2")));
    }

    #[test]
    fn queued_requests_coalesce_newest_wins() {
        let (handle, mut rx) = EffectHandle::channel();
        handle.request(BackgroundEffect::Color("#fff".into()));
        handle.request(BackgroundEffect::Color("#000".into()));
        handle.request(BackgroundEffect::Blur);

        let first = block_on(rx.next()).unwrap();
        let latest = drain_to_latest(&mut rx, first);
        assert_eq!(latest, BackgroundEffect::Blur);
        // Nothing left in the queue.
        assert!(rx.try_next().is_err());
    }

    #[test]
    fn worker_applies_only_the_latest_queued_request() {
        let log = CallLog::default();
        let (handle, rx) = EffectHandle::channel();
        handle.request(BackgroundEffect::Color("#fff".into()));
        handle.request(BackgroundEffect::Blur);
        drop(handle); // close the queue so the worker loop terminates

        block_on(run_effect_worker(MockBackend::new(log.clone()), rx));

        assert_eq!(
            log.entries(),
            vec![
                "create #1",
                "init #1",
                "configure #1 blur",
                "attach #1",
                "enable #1",
            ]
        );
    }
}
