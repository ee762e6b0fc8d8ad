//! Tween module - time-based interpolation of a numeric property
//!
//! The scheduler knows nothing about reels or symbols: it drives any indexed
//! set of `f64` values through the [`TweenTarget`] trait. Each tick it samples
//! every active tween at `now_ms`, writes the eased value, and on the tick a
//! tween reaches phase 1 snaps the value to the exact target and reports the
//! tween's [`Completion`] once.
//!
//! Finished tweens stay in the list (marked finished) until [`TweenScheduler::sweep`]
//! runs at the end of the tick.

/// Easing curve mapping phase `[0, 1]` to progress (may overshoot 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic "backout": overshoots slightly, then settles on 1.
    Backout { amount: f64 },
}

impl Easing {
    pub fn backout(amount: f64) -> Self {
        Easing::Backout { amount }
    }

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Backout { amount } => {
                let t = t - 1.0;
                t * t * ((amount + 1.0) * t + amount) + 1.0
            }
        }
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// What happens when a tween finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    NoOp,
    /// The spin is over once every reel has settled.
    CompleteSpin,
}

/// Values a tween can drive.
pub trait TweenTarget {
    fn value(&self, index: usize) -> f64;
    fn set_value(&mut self, index: usize, value: f64);
}

/// Opaque id of a scheduled tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    handle: TweenHandle,
    index: usize,
    start_value: f64,
    target_value: f64,
    duration_ms: f64,
    start_ms: u64,
    easing: Easing,
    on_complete: Completion,
    finished: bool,
}

impl Tween {
    pub fn handle(&self) -> TweenHandle {
        self.handle
    }

    /// Index of the driven value.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn on_complete(&self) -> Completion {
        self.on_complete
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Progress through the tween, clamped to `[0, 1]`.
    ///
    /// Zero or negative durations are complete immediately. A clock that reads
    /// earlier than the start holds the phase at 0.
    pub fn phase(&self, now_ms: u64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased value at `now_ms` (exact target once the phase is 1).
    pub fn sample(&self, now_ms: u64) -> f64 {
        let phase = self.phase(now_ms);
        if phase >= 1.0 {
            return self.target_value;
        }
        lerp(self.start_value, self.target_value, self.easing.apply(phase))
    }
}

/// Active set of tweens.
#[derive(Debug, Clone, Default)]
pub struct TweenScheduler {
    active: Vec<Tween>,
    next_id: u64,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `target[index]` from its current value to `to`.
    ///
    /// Callers must not schedule a second tween for an index that is still animating.
    pub fn schedule<T: TweenTarget + ?Sized>(
        &mut self,
        target: &T,
        index: usize,
        to: f64,
        duration_ms: f64,
        easing: Easing,
        on_complete: Completion,
        now_ms: u64,
    ) -> TweenHandle {
        debug_assert!(
            !self.is_animating(index),
            "index {} already has an active tween",
            index
        );

        let handle = TweenHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active.push(Tween {
            handle,
            index,
            start_value: target.value(index),
            target_value: to,
            duration_ms,
            start_ms: now_ms,
            easing,
            on_complete,
            finished: false,
        });
        handle
    }

    /// Write every unfinished tween's value for `now_ms`.
    ///
    /// `on_complete` is called exactly once per tween, on the tick its phase
    /// reaches 1, after the value has been snapped to the target.
    pub fn advance<T: TweenTarget + ?Sized>(
        &mut self,
        now_ms: u64,
        target: &mut T,
        mut on_complete: impl FnMut(Completion),
    ) {
        for tween in self.active.iter_mut().filter(|t| !t.finished) {
            let phase = tween.phase(now_ms);
            target.set_value(tween.index, tween.sample(now_ms));
            if phase >= 1.0 {
                tween.finished = true;
                on_complete(tween.on_complete);
            }
        }
    }

    /// Drop finished tweens.
    pub fn sweep(&mut self) {
        self.active.retain(|t| !t.finished);
    }

    /// True while an unfinished tween drives `index`.
    pub fn is_animating(&self, index: usize) -> bool {
        self.active.iter().any(|t| t.index == index && !t.finished)
    }

    /// True while any tween is unfinished.
    pub fn is_busy(&self) -> bool {
        self.active.iter().any(|t| !t.finished)
    }

    pub fn get(&self, handle: TweenHandle) -> Option<&Tween> {
        self.active.iter().find(|t| t.handle == handle)
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
