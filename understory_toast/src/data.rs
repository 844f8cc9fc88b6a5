// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast payloads and partial updates.

use alloc::string::String;
use core::fmt::Debug;

/// Payload carried by a toast.
///
/// The runtime never inspects the payload; it only stores it and merges
/// partial updates into it. [`ToastData::Patch`] describes such an update:
/// fields left out of a patch keep their current value.
pub trait ToastData: Debug {
    /// Partial update applied by `update` actions.
    type Patch: Debug;

    /// Shallow-merges `patch` into `self`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

impl ToastData for () {
    type Patch = ();

    fn apply_patch(&mut self, _patch: Self::Patch) {}
}

/// Severity of a [`DefaultToastData`] toast.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// An operation completed.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// Text toast with a severity, the payload used by [`Toaster::show_toast`](crate::Toaster::show_toast).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultToastData {
    /// Message shown in the toast.
    pub text: String,
    /// Severity, typically mapped to an icon or color.
    pub kind: ToastKind,
}

impl DefaultToastData {
    /// Creates a payload from text and kind.
    pub fn new(text: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Partial update for [`DefaultToastData`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultToastPatch {
    /// Replacement text, if any.
    pub text: Option<String>,
    /// Replacement kind, if any.
    pub kind: Option<ToastKind>,
}

impl DefaultToastPatch {
    /// A patch that only replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            kind: None,
        }
    }

    /// A patch that only replaces the kind.
    #[must_use]
    pub fn kind(kind: ToastKind) -> Self {
        Self {
            text: None,
            kind: Some(kind),
        }
    }
}

impl ToastData for DefaultToastData {
    type Patch = DefaultToastPatch;

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}
