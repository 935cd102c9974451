// ── Message boxes ─────────────────────────────────────────────────────────────
//
// `MessageBoxW` with no owner window.  The caller's thread blocks until the
// user dismisses the box.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{
            MessageBoxW, IDCANCEL, IDNO, IDOK, IDYES, MB_ICONERROR, MB_ICONINFORMATION,
            MB_ICONQUESTION, MB_ICONWARNING, MB_OK, MB_OKCANCEL, MB_YESNO, MESSAGEBOX_RESULT,
            MESSAGEBOX_STYLE,
        },
    },
};

use crate::dialog::{
    DialogButtons, DialogIcon, DialogPresenter, DialogRequest, DialogResult, DialogType,
};
use crate::encoding::utf8_to_wide_nul;
use crate::shell::ShellLauncher;

/// Presents dialogs through `MessageBoxW`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxPresenter;

impl DialogPresenter for MessageBoxPresenter {
    fn present(&self, request: &DialogRequest<'_>) -> Option<DialogResult> {
        let message = utf8_to_wide_nul(request.message);
        let title = utf8_to_wide_nul(request.title);

        // SAFETY: `message` and `title` are valid null-terminated UTF-16
        // strings that remain allocated for the duration of the call.
        // HWND::default() (null) means the dialog has no owner window.
        let pressed = unsafe {
            MessageBoxW(
                HWND::default(),
                PCWSTR(message.as_ptr()),
                PCWSTR(title.as_ptr()),
                style_for(request.kind),
            )
        };

        // 0 means the box could not be created at all.
        if pressed.0 == 0 {
            log::warn!("{}", super::last_error("MessageBoxW"));
        }
        result_from(pressed)
    }
}

/// The launcher is unused here; message boxes need no helper process.
pub fn dialog_presenter(_launcher: std::sync::Arc<dyn ShellLauncher>) -> Box<dyn DialogPresenter> {
    Box::new(MessageBoxPresenter)
}

fn style_for(kind: DialogType) -> MESSAGEBOX_STYLE {
    let icon = match kind.icon() {
        DialogIcon::Information => MB_ICONINFORMATION,
        DialogIcon::Warning => MB_ICONWARNING,
        DialogIcon::Error => MB_ICONERROR,
        DialogIcon::Question => MB_ICONQUESTION,
    };
    let buttons = match kind.buttons() {
        DialogButtons::Ok => MB_OK,
        DialogButtons::OkCancel => MB_OKCANCEL,
        DialogButtons::YesNo => MB_YESNO,
    };
    icon | buttons
}

fn result_from(pressed: MESSAGEBOX_RESULT) -> Option<DialogResult> {
    match pressed {
        IDOK => Some(DialogResult::Ok),
        IDCANCEL => Some(DialogResult::Cancel),
        IDYES => Some(DialogResult::Yes),
        IDNO => Some(DialogResult::No),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use windows::Win32::UI::WindowsAndMessaging::{IDABORT, IDRETRY};

    #[test]
    fn styles_per_type() {
        assert_eq!(style_for(DialogType::Info), MB_ICONINFORMATION | MB_OK);
        assert_eq!(style_for(DialogType::Warning), MB_ICONWARNING | MB_OK);
        assert_eq!(style_for(DialogType::Error), MB_ICONERROR | MB_OK);
        assert_eq!(style_for(DialogType::YesNo), MB_ICONQUESTION | MB_YESNO);
        assert_eq!(style_for(DialogType::OkCancel), MB_ICONWARNING | MB_OKCANCEL);
    }

    #[test]
    fn native_codes_map_to_results() {
        assert_eq!(result_from(IDOK), Some(DialogResult::Ok));
        assert_eq!(result_from(IDCANCEL), Some(DialogResult::Cancel));
        assert_eq!(result_from(IDYES), Some(DialogResult::Yes));
        assert_eq!(result_from(IDNO), Some(DialogResult::No));
        assert_eq!(result_from(IDABORT), None);
        assert_eq!(result_from(IDRETRY), None);
        assert_eq!(result_from(MESSAGEBOX_RESULT(0)), None);
    }
}
