//! Notification ledger - short-lived popups with expiry
//!
//! Popups render in insertion order. The caller drives expiry by polling
//! [`PopupLedger::expire`] once per frame with the current time.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// RGBA color packed as `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffffff);

    /// Parse `0xRRGGBBAA`, `#RRGGBBAA`, or `#RRGGBB` (opaque)
    pub fn from_hex(s: &str) -> Option<Color> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);
        match digits.len() {
            8 => u32::from_str_radix(digits, 16).ok().map(Color),
            6 => u32::from_str_radix(digits, 16)
                .ok()
                .map(|rgb| Color((rgb << 8) | 0xff)),
            _ => None,
        }
    }

    /// Components as floats in `[0, 1]`
    pub fn to_rgba_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.0.to_be_bytes();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color: {}", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

pub type PopupId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub id: PopupId,
    pub message: String,
    pub color: Color,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Popup {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.created_at + self.duration
    }

    /// Fade-in progress in `[0, 1]` given the configured fade-in time
    pub fn fade_in(&self, now: Instant, fade_in: Duration) -> f32 {
        if fade_in.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        (elapsed.as_secs_f32() / fade_in.as_secs_f32()).min(1.0)
    }
}

/// Ordered set of live popups plus the id counter
#[derive(Debug, Clone, Default)]
pub struct PopupLedger {
    popups: Vec<Popup>,
    next_id: PopupId,
}

impl PopupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a popup, returning its id
    pub fn add(
        &mut self,
        message: impl Into<String>,
        color: Color,
        duration: Duration,
        now: Instant,
    ) -> PopupId {
        let id = self.next_id;
        self.next_id += 1;
        self.popups.push(Popup {
            id,
            message: message.into(),
            color,
            created_at: now,
            duration,
        });
        id
    }

    /// Remove the popup with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: PopupId) -> bool {
        let before = self.popups.len();
        self.popups.retain(|p| p.id != id);
        self.popups.len() != before
    }

    /// Drop every popup whose lifetime has elapsed at `now`
    pub fn expire(&mut self, now: Instant) {
        self.popups.retain(|p| !p.is_expired(now));
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn get(&self, id: PopupId) -> Option<&Popup> {
        self.popups.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}
