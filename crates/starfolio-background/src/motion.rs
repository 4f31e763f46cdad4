//! Property interpolation over time.
//!
//! A [`Tween`] describes how one numeric visual property (opacity, offset,
//! rotation) evolves: a keyframe list plus a [`Transition`] carrying duration,
//! repeat count, easing and start delay. Sampling is a pure function of the
//! elapsed time, so every animation is driven by the frame loop without
//! holding any per-frame state.

use starfolio_core::{Easing, Repeat};

/// Timing parameters for a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds per iteration.
    pub duration: f64,
    /// Number of iterations.
    pub repeat: Repeat,
    /// Easing applied between adjacent keyframes.
    pub easing: Easing,
    /// Seconds before the first iteration starts.
    pub delay: f64,
}

impl Transition {
    /// A single linear iteration with no delay.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            repeat: Repeat::Count(0),
            easing: Easing::Linear,
            delay: 0.0,
        }
    }

    /// Play `repeat` extra iterations, or loop forever.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Ease each segment between adjacent keyframes.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Hold the first keyframe for `delay` seconds before starting.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// A keyframe animation of a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    keyframes: Vec<f64>,
    transition: Transition,
}

impl Tween {
    /// Animate through `keyframes`, evenly spaced across each iteration.
    pub fn keyframes(keyframes: impl Into<Vec<f64>>, transition: Transition) -> Self {
        Self {
            keyframes: keyframes.into(),
            transition,
        }
    }

    /// Animate from `from` to `to`.
    pub fn between(from: f64, to: f64, transition: Transition) -> Self {
        Self::keyframes(vec![from, to], transition)
    }

    /// Whether a finite tween has reached its final keyframe.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        match self.transition.repeat {
            Repeat::Infinite => false,
            Repeat::Count(n) => {
                elapsed - self.transition.delay >= self.transition.duration * (n as f64 + 1.0)
            }
        }
    }

    /// Value of the property `elapsed` seconds after the tween was started.
    pub fn sample(&self, elapsed: f64) -> f64 {
        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0.0,
        };

        let t = elapsed - self.transition.delay;
        if t < 0.0 || self.keyframes.len() == 1 {
            return first;
        }

        let duration = self.transition.duration;
        if duration <= 0.0 || self.is_finished(elapsed) {
            return last;
        }

        let progress = (t % duration) / duration;
        let segments = self.keyframes.len() - 1;
        let scaled = progress * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = self.transition.easing.apply(scaled - index as f64);

        let from = self.keyframes[index];
        let to = self.keyframes[index + 1];
        from + (to - from) * local
    }
}
