// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider configuration.

use kurbo::Rect;
use thiserror::Error;
use understory_anchor_layout::{LayoutParams, Placement};

/// Default enter/exit animation duration in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Default slide distance for enter/exit animations, in logical pixels.
pub const DEFAULT_SLIDE_DISTANCE: f64 = 16.0;

/// Where rendered toasts are mounted.
///
/// Toasts always render into a detached layer so their stacking and overflow
/// do not depend on the anchor's ancestry. The portal only decides which
/// coordinate space rendered positions are reported in.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Portal {
    /// The root layer; positions are in viewport space.
    #[default]
    Root,
    /// A caller-supplied container; positions are relative to its top-left
    /// corner, given here in viewport space.
    Container(Rect),
}

/// Invalid [`ToastConfig`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Enter/exit animations need a positive duration so a toast can be
    /// measured before it is painted in place.
    #[error("animation duration must be positive")]
    ZeroAnimationDuration,
    /// Margin or gap is negative or not finite.
    #[error("layout spacing must be finite and non-negative (margin {margin}, gap {gap})")]
    InvalidLayout {
        /// Configured margin.
        margin: f64,
        /// Configured gap.
        gap: f64,
    },
    /// Slide distance is negative or not finite.
    #[error("slide distance must be finite and non-negative, got {0}")]
    InvalidSlideDistance(f64),
}

/// Configuration shared by a viewport and its toasters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToastConfig {
    /// Enter and exit animation duration in milliseconds.
    pub animation_duration_ms: u64,
    /// Placement used when a toast does not ask for one.
    pub default_placement: Placement,
    /// Stacking margin and anchor gap.
    pub layout: LayoutParams,
    /// How far toasts slide while entering and exiting.
    pub slide_distance: f64,
    /// Coordinate space of rendered positions.
    pub portal: Portal,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_MS,
            default_placement: Placement::Top,
            layout: LayoutParams::default(),
            slide_distance: DEFAULT_SLIDE_DISTANCE,
            portal: Portal::Root,
        }
    }
}

impl ToastConfig {
    /// Sets the animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, ms: u64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Sets the default placement.
    #[must_use]
    pub fn with_default_placement(mut self, placement: Placement) -> Self {
        self.default_placement = placement;
        self
    }

    /// Sets the stacking margin and anchor gap.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the slide distance.
    #[must_use]
    pub fn with_slide_distance(mut self, distance: f64) -> Self {
        self.slide_distance = distance;
        self
    }

    /// Renders into `portal` instead of the root layer.
    #[must_use]
    pub fn with_portal(mut self, portal: Portal) -> Self {
        self.portal = portal;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        if !self.layout.is_valid() {
            return Err(ConfigError::InvalidLayout {
                margin: self.layout.margin,
                gap: self.layout.gap,
            });
        }
        if !(self.slide_distance.is_finite() && self.slide_distance >= 0.0) {
            return Err(ConfigError::InvalidSlideDistance(self.slide_distance));
        }
        Ok(())
    }
}
