//! Page state for NinerNav.
//! Each stateful widget gets a `Reducible` model so the components stay thin
//! and the transitions can be tested on the host.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::error::{ClientError, Result};
use crate::util::format_clock;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------- Menu panels -----------------

/// Visibility of a collapsible sub-button panel, mirrored into `display:`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Hidden => PanelVisibility::Shown,
            PanelVisibility::Shown => PanelVisibility::Hidden,
        }
    }

    pub fn css_display(self) -> &'static str {
        match self {
            PanelVisibility::Hidden => "none",
            PanelVisibility::Shown => "block",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyState {
    /// Option labels in render order.
    pub options: Vec<String>,
    /// Currently active label. May name no rendered option.
    pub selected: String,
    pub panel: PanelVisibility,
}

#[derive(Clone, Debug)]
pub enum DifficultyAction {
    Select(String),
    TogglePanel,
}

impl DifficultyState {
    pub fn new(options: Vec<String>, selected: String) -> Self {
        Self { options, selected, panel: PanelVisibility::Hidden }
    }

    /// Exact, case-sensitive label match.
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected == label
    }

    pub fn option_class(&self, label: &str) -> &'static str {
        if self.is_selected(label) { "difficulty-option selected" } else { "difficulty-option" }
    }

    #[cfg(test)]
    pub fn marked_options(&self) -> Vec<&str> {
        self.options.iter().map(String::as_str).filter(|o| self.is_selected(o)).collect()
    }
}

impl Reducible for DifficultyState {
    type Action = DifficultyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            DifficultyAction::Select(label) => {
                if new.selected == label {
                    return self;
                }
                new.selected = label;
            }
            DifficultyAction::TogglePanel => new.panel = new.panel.toggled(),
        }
        Rc::new(new)
    }
}

// ---------------- Countdown -----------------

pub const SECONDS_PER_MINUTE: u32 = 60;

/// Countdown clock. Each minute is seeded at 60 seconds and the display shows
/// one minute less than `minutes` (so a 2 minute countdown starts at "1:59").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Running { minutes: u32, seconds: u32 },
    Exhausted,
}

impl CountdownState {
    pub fn start(initial_minutes: u32) -> Result<Self> {
        if initial_minutes == 0 {
            return Err(ClientError::InvalidCountdown);
        }
        Ok(CountdownState::Running { minutes: initial_minutes, seconds: SECONDS_PER_MINUTE })
    }

    /// Advance one second. Returns the text to display, `None` once exhausted.
    pub fn tick(&mut self) -> Option<String> {
        let CountdownState::Running { minutes, seconds } = *self else {
            return None;
        };
        let seconds = seconds.saturating_sub(1);
        let text = format_clock(minutes.saturating_sub(1), seconds);
        *self = if seconds > 0 {
            CountdownState::Running { minutes, seconds }
        } else if minutes > 1 {
            CountdownState::Running { minutes: minutes - 1, seconds: SECONDS_PER_MINUTE }
        } else {
            CountdownState::Exhausted
        };
        Some(text)
    }

    /// True right after a minute rolled over (or at start): the next tick
    /// belongs to a fresh minute and runs without waiting.
    pub fn at_minute_start(&self) -> bool {
        matches!(self, CountdownState::Running { seconds: SECONDS_PER_MINUTE, .. })
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, CountdownState::Exhausted)
    }
}

// ---------------- Game page -----------------

#[derive(Clone, Debug, PartialEq)]
pub struct PanoramaState {
    /// Gallery in display order (already shuffled).
    pub gallery: Vec<String>,
    pub index: usize,
    /// Sky yaw in degrees.
    pub yaw: f64,
    pub paused: bool,
    pub volume: f64,
}

#[derive(Clone, Debug)]
pub enum PanoramaAction {
    NextImage,
    Rotate(f64),
    Pause,
    Resume,
    SetVolume(f64),
}

impl PanoramaState {
    pub fn new(gallery: Vec<String>) -> Self {
        Self { gallery, index: 0, yaw: 0.0, paused: false, volume: 1.0 }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.gallery.get(self.index).map(String::as_str)
    }

    /// A-Frame rotation attribute for the sky.
    pub fn rotation_attr(&self) -> String {
        format!("0 {} 0", self.yaw)
    }
}

impl Reducible for PanoramaState {
    type Action = PanoramaAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PanoramaAction::*;
        let mut new = (*self).clone();
        match action {
            NextImage => {
                if new.gallery.is_empty() {
                    return self;
                }
                new.index = (new.index + 1) % new.gallery.len();
            }
            Rotate(yaw) => new.yaw = yaw,
            Pause => new.paused = true,
            Resume => new.paused = false,
            SetVolume(v) => new.volume = v.clamp(0.0, 1.0),
        }
        Rc::new(new)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuessState {
    /// The single user-placed marker.
    pub marker: Option<LatLng>,
    pub status: SubmitStatus,
}

#[derive(Clone, Debug)]
pub enum GuessAction {
    Place(LatLng),
    Sending,
    Failed(String),
}

impl GuessState {
    pub fn submission_target(&self) -> Result<LatLng> {
        self.marker.ok_or(ClientError::NoMarker)
    }
}

impl Reducible for GuessState {
    type Action = GuessAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GuessAction::Place(pos) => {
                new.marker = Some(pos);
                new.status = SubmitStatus::Idle;
            }
            GuessAction::Sending => new.status = SubmitStatus::Sending,
            GuessAction::Failed(msg) => new.status = SubmitStatus::Failed(msg),
        }
        Rc::new(new)
    }
}

// ---------------- Image slider -----------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderState {
    pub len: usize,
    pub index: usize,
}

pub enum SliderAction {
    Advance,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn display_for(&self, i: usize) -> &'static str {
        if i == self.index { "block" } else { "none" }
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SliderAction::Advance => {
                if self.len == 0 {
                    return self;
                }
                Rc::new(SliderState { len: self.len, index: (self.index + 1) % self.len })
            }
        }
    }
}
