use crate::core::{FLASH_FADE_DELAY, FLASH_HIDE_DELAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    Fade,
    Hide,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    due: f64,
    kind: TimerKind,
    token: u64,
}

/// Transient status banner.
///
/// Each `show` schedules its own fade and hide timers and nothing cancels
/// them, so an older hide can cut a newer message short. With
/// `latest_wins` only the timers of the most recent message take effect.
#[derive(Debug)]
pub struct FlashMessage {
    text: String,
    visible: bool,
    fading_since: Option<f64>,
    timers: Vec<Timer>,
    token: u64,
    latest_wins: bool,
}

impl FlashMessage {
    pub fn new(latest_wins: bool) -> Self {
        FlashMessage {
            text: String::new(),
            visible: false,
            fading_since: None,
            timers: Vec::new(),
            token: 0,
            latest_wins,
        }
    }

    pub fn show(&mut self, message: &str, now: f64) {
        self.token += 1;
        self.text = message.to_string();
        self.visible = true;
        self.fading_since = None;
        self.timers.push(Timer {
            due: now + FLASH_FADE_DELAY,
            kind: TimerKind::Fade,
            token: self.token,
        });
        self.timers.push(Timer {
            due: now + FLASH_HIDE_DELAY,
            kind: TimerKind::Hide,
            token: self.token,
        });
    }

    /// Fire every timer due at `now`, oldest deadline first
    pub fn tick(&mut self, now: f64) {
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.due <= now);
        self.timers = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due));

        for timer in due {
            if self.latest_wins && timer.token != self.token {
                continue;
            }
            match timer.kind {
                TimerKind::Fade => self.fading_since = Some(timer.due),
                TimerKind::Hide => {
                    self.visible = false;
                    self.fading_since = None;
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_fading(&self) -> bool {
        self.fading_since.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1.0 while shown, ramping to 0.0 across the fade window
    pub fn opacity(&self, now: f64) -> f32 {
        if !self.visible {
            return 0.0;
        }
        match self.fading_since {
            Some(start) => {
                let window = FLASH_HIDE_DELAY - FLASH_FADE_DELAY;
                (1.0 - (now - start) / window).clamp(0.0, 1.0) as f32
            }
            None => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_fades_then_hides() {
        let mut flash = FlashMessage::new(false);
        flash.show("saved", 10.0);

        flash.tick(12.0);
        assert!(flash.is_visible());
        assert!(!flash.is_fading());
        assert_eq!(flash.opacity(12.0), 1.0);

        flash.tick(12.85);
        assert!(flash.is_fading());
        assert!(flash.opacity(12.9) < 1.0);

        flash.tick(13.0);
        assert!(!flash.is_visible());
        assert!(!flash.is_fading());
    }

    #[test]
    fn back_to_back_calls_show_the_last_message() {
        for latest_wins in [false, true] {
            let mut flash = FlashMessage::new(latest_wins);
            flash.show("A", 0.0);
            flash.show("B", 0.0);
            flash.tick(0.0);

            assert!(flash.is_visible());
            assert_eq!(flash.text(), "B");

            flash.tick(3.0);
            assert!(!flash.is_visible());
        }
    }

    #[test]
    fn stale_hide_timer_cuts_a_later_message_short() {
        let mut flash = FlashMessage::new(false);
        flash.show("A", 0.0);
        flash.show("B", 1.0);

        flash.tick(3.0);
        assert!(!flash.is_visible());
        assert_eq!(flash.text(), "B");

        flash.tick(4.0);
        assert!(!flash.is_visible());
    }

    #[test]
    fn latest_wins_ignores_stale_timers() {
        let mut flash = FlashMessage::new(true);
        flash.show("A", 0.0);
        flash.show("B", 1.0);

        flash.tick(3.0);
        assert!(flash.is_visible());
        assert!(!flash.is_fading());

        flash.tick(3.85);
        assert!(flash.is_fading());

        flash.tick(4.0);
        assert!(!flash.is_visible());
    }

    #[test]
    fn a_new_message_clears_an_ongoing_fade() {
        let mut flash = FlashMessage::new(false);
        flash.show("A", 0.0);
        flash.tick(2.9);
        assert!(flash.is_fading());

        flash.show("B", 2.9);
        assert!(!flash.is_fading());
        assert_eq!(flash.opacity(2.9), 1.0);
    }
}
