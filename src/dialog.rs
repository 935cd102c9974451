// ── Modal dialogs ─────────────────────────────────────────────────────────────
//
// Portable vocabulary for blocking message boxes.  Backends translate a
// `DialogRequest` into a native call and report which button was pressed.

/// Shape of the dialog the caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Info,
    Warning,
    Error,
    YesNo,
    OkCancel,
}

/// Button the user dismissed the dialog with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Cancel,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Information,
    Warning,
    Error,
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButtons {
    Ok,
    OkCancel,
    YesNo,
}

impl DialogButtons {
    /// Results this button set can produce.
    pub fn results(self) -> &'static [DialogResult] {
        match self {
            Self::Ok => &[DialogResult::Ok],
            Self::OkCancel => &[DialogResult::Ok, DialogResult::Cancel],
            Self::YesNo => &[DialogResult::Yes, DialogResult::No],
        }
    }

    /// Result of the affirmative button.
    pub fn affirmative(self) -> DialogResult {
        match self {
            Self::Ok | Self::OkCancel => DialogResult::Ok,
            Self::YesNo => DialogResult::Yes,
        }
    }

    /// Result of the negative button.  A lone OK button has none and reports
    /// `Ok`, which is also what dismissing it means.
    pub fn negative(self) -> DialogResult {
        match self {
            Self::Ok => DialogResult::Ok,
            Self::OkCancel => DialogResult::Cancel,
            Self::YesNo => DialogResult::No,
        }
    }

    /// Result reported when the backend gives no usable answer.
    ///
    /// `Ok` wherever an OK button exists; a yes/no question has no OK button
    /// and is treated as declined.
    pub fn fallback(self) -> DialogResult {
        match self {
            Self::Ok | Self::OkCancel => DialogResult::Ok,
            Self::YesNo => DialogResult::No,
        }
    }

    /// Restrict a backend answer to this button set.
    pub fn resolve(self, answer: Option<DialogResult>) -> DialogResult {
        match answer {
            Some(result) if self.results().contains(&result) => result,
            _ => self.fallback(),
        }
    }
}

impl DialogType {
    pub fn icon(self) -> DialogIcon {
        match self {
            Self::Info => DialogIcon::Information,
            Self::Warning | Self::OkCancel => DialogIcon::Warning,
            Self::Error => DialogIcon::Error,
            Self::YesNo => DialogIcon::Question,
        }
    }

    pub fn buttons(self) -> DialogButtons {
        match self {
            Self::Info | Self::Warning | Self::Error => DialogButtons::Ok,
            Self::YesNo => DialogButtons::YesNo,
            Self::OkCancel => DialogButtons::OkCancel,
        }
    }

    pub const ALL: [DialogType; 5] = [
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::YesNo,
        Self::OkCancel,
    ];
}

/// Everything a backend needs to put a dialog on screen.
#[derive(Debug, Clone, Copy)]
pub struct DialogRequest<'a> {
    pub kind: DialogType,
    pub title: &'a str,
    pub message: &'a str,
}

/// A native modal dialog implementation.
pub trait DialogPresenter: Send + Sync {
    /// Show the dialog and block until it is dismissed.
    ///
    /// Returns `None` when the native answer is not one of the four portable
    /// results (or the dialog could not be shown at all).
    fn present(&self, request: &DialogRequest<'_>) -> Option<DialogResult>;
}

/// Show a dialog through `presenter` and clamp the answer to the dialog's
/// button set.  Needs no adapter, so it works before (or without) a clock.
pub fn show_dialog(
    presenter: &dyn DialogPresenter,
    kind: DialogType,
    title: &str,
    message: &str,
) -> DialogResult {
    let request = DialogRequest {
        kind,
        title,
        message,
    };
    kind.buttons().resolve(presenter.present(&request))
}
