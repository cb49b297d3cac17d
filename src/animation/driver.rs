//! Folding progress state machine.
//!
//! `Idle → Playing` on play, `Playing → Completed` when progress reaches
//! `max_frames` (clamped, playback stops), `any → Idle` on reset. The driver
//! advances at most once per call to [`FoldingAnimator::tick`], which the
//! engine calls once per rendered frame; the speed multiplier scales the
//! increment, never the tick rate.

use crate::options::{AnimationOptions, RestartPolicy};

/// Observable phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Not playing and not at the end.
    Idle,
    /// Playing with progress below the end.
    Playing,
    /// Progress is at the end.
    Completed,
}

/// Progress, speed, and the playing flag.
#[derive(Debug, Clone)]
pub struct FoldingAnimator {
    progress: f32,
    speed: f32,
    playing: bool,
    max_frames: f32,
    tick_increment: f32,
    min_speed: f32,
    max_speed: f32,
    restart_policy: RestartPolicy,
}

impl FoldingAnimator {
    /// Idle animator at progress 0.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        let mut animator = Self {
            progress: 0.0,
            speed: 1.0,
            playing: false,
            max_frames: options.max_frames,
            tick_increment: options.tick_increment,
            min_speed: options.min_speed,
            max_speed: options.max_speed,
            restart_policy: options.restart_policy,
        };
        let _ = animator.set_speed(options.speed);
        animator
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        if self.progress >= self.max_frames {
            AnimationPhase::Completed
        } else if self.playing {
            AnimationPhase::Playing
        } else {
            AnimationPhase::Idle
        }
    }

    /// Flip the playing flag. Progress is kept; with
    /// [`RestartPolicy::Rewind`] a completed fold restarts from zero.
    ///
    /// Returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        if !self.playing
            && self.phase() == AnimationPhase::Completed
            && self.restart_policy == RestartPolicy::Rewind
        {
            self.progress = 0.0;
        }
        self.playing = !self.playing;
        log::info!(
            "{} at {:.0}%",
            if self.playing { "playing" } else { "paused" },
            self.fraction() * 100.0
        );
        self.playing
    }

    /// Advance one frame. Returns the new fraction when playing, `None`
    /// otherwise.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.playing {
            return None;
        }
        self.progress += self.tick_increment * self.speed;
        if self.progress >= self.max_frames {
            self.progress = self.max_frames;
            self.playing = false;
            log::info!("fold complete");
        }
        Some(self.fraction())
    }

    /// Rewind to zero and stop. Idempotent.
    pub fn reset(&mut self) {
        if self.progress != 0.0 || self.playing {
            log::info!("reset");
        }
        self.progress = 0.0;
        self.playing = false;
    }

    /// Set the speed multiplier, clamped to the configured range.
    /// Non-finite values are ignored.
    ///
    /// Returns the speed now in effect.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        if speed.is_finite() {
            self.speed = speed.clamp(self.min_speed, self.max_speed);
        } else {
            log::warn!("ignoring non-finite speed {speed}");
        }
        self.speed
    }

    /// Change the speed multiplier by `delta`, clamped.
    ///
    /// Steps that are whole tenths land exactly on the slider's one-decimal
    /// grid; finer steps are applied as given.
    pub fn adjust_speed(&mut self, delta: f32) -> f32 {
        let target = self.speed + delta;
        let tenths = delta * 10.0;
        if (tenths - tenths.round()).abs() < 1e-4 {
            return self.set_speed((target * 10.0).round() / 10.0);
        }
        self.set_speed(target)
    }

    /// Raw progress in `[0, max_frames]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Normalized progress in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        (self.progress / self.max_frames).clamp(0.0, 1.0)
    }

    /// Speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether the playing flag is set.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Stage display value: `round(fraction * 100)`.
    #[must_use]
    pub fn stage_percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    /// Stage display text, e.g. `"45%"`.
    #[must_use]
    pub fn stage_label(&self) -> String {
        format!("{}%", self.stage_percent())
    }

    /// Speed display text with one decimal, e.g. `"1.5x"`.
    #[must_use]
    pub fn speed_label(&self) -> String {
        format!("{:.1}x", self.speed)
    }

    /// Label for the play/pause control.
    #[must_use]
    pub fn play_label(&self) -> &'static str {
        if self.playing {
            "Pause"
        } else if self.progress > 0.0 && self.progress < self.max_frames {
            "Resume"
        } else {
            "Start folding"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> FoldingAnimator {
        FoldingAnimator::new(&AnimationOptions::default())
    }

    /// Fast options: 10 ticks to complete at speed 1.
    fn quick() -> AnimationOptions {
        AnimationOptions {
            max_frames: 1.0,
            tick_increment: 0.1,
            ..AnimationOptions::default()
        }
    }

    #[test]
    fn test_idle_animator_does_not_tick() {
        let mut anim = animator();
        assert_eq!(anim.phase(), AnimationPhase::Idle);
        assert_eq!(anim.tick(), None);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn test_tick_advances_by_increment_times_speed() {
        let mut anim = animator();
        let _ = anim.set_speed(2.5);
        assert!(anim.toggle_play());
        let fraction = anim.tick().unwrap();
        assert!((anim.progress() - 0.05).abs() < 1e-6);
        assert!((fraction - 0.0005).abs() < 1e-7);
        assert_eq!(anim.phase(), AnimationPhase::Playing);
    }

    #[test]
    fn test_progress_is_monotonic_and_stops_at_max() {
        let mut anim = FoldingAnimator::new(&quick());
        let _ = anim.set_speed(0.7);
        let _ = anim.toggle_play();

        let mut last = 0.0;
        let mut ticks = 0;
        while anim.is_playing() {
            let fraction = anim.tick().unwrap();
            assert!(fraction >= last && fraction <= 1.0);
            assert!(anim.progress() <= 1.0);
            last = fraction;
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(last, 1.0);
        assert_eq!(anim.phase(), AnimationPhase::Completed);
        assert_eq!(anim.tick(), None);
    }

    #[test]
    fn test_default_timing_takes_five_thousand_frames() {
        let mut anim = animator();
        let _ = anim.toggle_play();
        let mut frames = 0;
        while anim.tick().is_some() {
            frames += 1;
        }
        assert!((4_995..=5_005).contains(&frames));
        assert_eq!(anim.stage_percent(), 100);
    }

    #[test]
    fn test_hold_policy_replay_after_completion_is_a_no_op() {
        let mut anim = FoldingAnimator::new(&quick());
        let _ = anim.toggle_play();
        while anim.tick().is_some() {}

        assert!(anim.toggle_play());
        assert_eq!(anim.tick(), Some(1.0));
        assert!(!anim.is_playing());
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_rewind_policy_restarts_from_zero() {
        let mut anim = FoldingAnimator::new(&AnimationOptions {
            restart_policy: RestartPolicy::Rewind,
            ..quick()
        });
        let _ = anim.toggle_play();
        while anim.tick().is_some() {}

        assert!(anim.toggle_play());
        assert_eq!(anim.progress(), 0.0);
        let fraction = anim.tick().unwrap();
        assert!(fraction > 0.0 && fraction < 1.0);
    }

    #[test]
    fn test_pause_keeps_progress() {
        let mut anim = FoldingAnimator::new(&quick());
        let _ = anim.toggle_play();
        let _ = anim.tick();
        let _ = anim.tick();
        assert!(!anim.toggle_play());
        assert_eq!(anim.play_label(), "Resume");
        assert_eq!(anim.tick(), None);
        assert!((anim.fraction() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut playing = FoldingAnimator::new(&quick());
        let _ = playing.toggle_play();
        let _ = playing.tick();
        playing.reset();

        let mut idle = FoldingAnimator::new(&quick());
        idle.reset();
        idle.reset();

        for anim in [&playing, &idle] {
            assert_eq!(anim.progress(), 0.0);
            assert!(!anim.is_playing());
            assert_eq!(anim.phase(), AnimationPhase::Idle);
            assert_eq!(anim.play_label(), "Start folding");
        }
    }

    #[test]
    fn test_speed_is_clamped_and_non_finite_ignored() {
        let mut anim = animator();
        assert_eq!(anim.set_speed(0.0), 0.1);
        assert_eq!(anim.set_speed(-3.0), 0.1);
        assert_eq!(anim.set_speed(42.0), 5.0);
        assert_eq!(anim.set_speed(f32::NAN), 5.0);
        assert_eq!(anim.set_speed(1.25), 1.25);
    }

    #[test]
    fn test_adjust_speed_lands_on_tenths() {
        let mut anim = animator();
        for _ in 0..3 {
            let _ = anim.adjust_speed(0.1);
        }
        assert_eq!(anim.speed_label(), "1.3x");
        for _ in 0..30 {
            let _ = anim.adjust_speed(-0.1);
        }
        assert_eq!(anim.speed(), 0.1);
    }

    #[test]
    fn test_fine_speed_steps_accumulate() {
        let mut anim = animator();
        for _ in 0..10 {
            let _ = anim.adjust_speed(0.04);
        }
        assert!((anim.speed() - 1.4).abs() < 1e-4);
        let _ = anim.adjust_speed(-0.04);
        assert!((anim.speed() - 1.36).abs() < 1e-4);
    }

    #[test]
    fn test_labels() {
        let mut anim = animator();
        assert_eq!(anim.speed_label(), "1.0x");
        assert_eq!(anim.stage_label(), "0%");
        let _ = anim.toggle_play();
        assert_eq!(anim.play_label(), "Pause");
        for _ in 0..2250 {
            let _ = anim.tick();
        }
        assert_eq!(anim.stage_label(), "45%");
    }
}
