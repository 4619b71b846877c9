use super::easing::Easing;

/// Time-based transition of one coordinate axis (all x values or all y values).
///
/// Values are interpolated element-wise, so index `i` of the output always
/// corresponds to index `i` of both the start and target arrays.
#[derive(Debug, Clone)]
pub struct AxisTransition {
    from: Vec<f32>,
    to: Vec<f32>,
    /// Elapsed app time (seconds) of the last retarget
    started_at: f32,
    /// Transition length in seconds
    duration: f32,
    easing: Easing,
}

impl AxisTransition {
    /// A transition already resting at `values`
    pub fn settled(values: Vec<f32>, duration: f32, easing: Easing) -> Self {
        Self {
            from: values.clone(),
            to: values,
            started_at: f32::NEG_INFINITY,
            duration,
            easing,
        }
    }

    /// Replace the destination, starting from whatever is displayed at `now`.
    ///
    /// An in-flight transition is not queued behind: the new one picks up
    /// from the current interpolated values.
    pub fn retarget(&mut self, target: Vec<f32>, now: f32) {
        self.from = self.sample(now);
        self.to = target;
        self.started_at = now;
    }

    /// Raw (uneased) progress in `[0, 1]`
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_settled(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated value for one index at `now`; `index` must be in range
    fn value_at(&self, index: usize, now: f32) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to[index];
        }

        let from = self.from.get(index).copied().unwrap_or(self.to[index]);
        let eased = self.easing.apply(progress);
        from + (self.to[index] - from) * eased
    }

    /// Every interpolated value at `now`, in index order
    pub fn sample(&self, now: f32) -> Vec<f32> {
        if self.is_settled(now) {
            return self.to.clone();
        }
        (0..self.to.len())
            .map(|index| self.value_at(index, now))
            .collect()
    }
}
