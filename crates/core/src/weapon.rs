//! Weapon animator: tick-coupled firing sequence for the HUD.

/// `None` while idle, `Some(frame)` while the firing animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeaponAnimator {
    frame: Option<usize>,
}

impl WeaponAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_firing(&self) -> bool {
        self.frame.is_some()
    }

    pub fn active_frame(&self) -> Option<usize> {
        self.frame
    }

    /// Start the sequence at frame 0. Returns `false` if already firing.
    pub fn trigger(&mut self) -> bool {
        if self.frame.is_some() {
            return false;
        }
        self.frame = Some(0);
        true
    }

    /// Advance one frame; clears once the index passes the last of
    /// `frame_count` frames.
    pub fn advance(&mut self, frame_count: usize) {
        if let Some(frame) = self.frame {
            let next = frame + 1;
            self.frame = if next >= frame_count { None } else { Some(next) };
        }
    }
}
