// SPDX-License-Identifier: MPL-2.0
//! Native dialogs used by the download flow.
//!
//! The payment prompt and the blocking notices are modal. The toasts in
//! `ui::notifications` cover everything that must not interrupt the visitor.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Shows the simulated payment prompt and resolves to the visitor's answer.
///
/// `title` and `body` arrive already localized.
pub async fn confirm_payment(title: String, body: String) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(&title)
        .set_description(&body)
        .set_buttons(MessageButtons::OkCancel)
        .show()
        .await;

    let accepted = matches!(result, MessageDialogResult::Ok | MessageDialogResult::Yes);
    tracing::debug!(accepted, "payment prompt answered");
    accepted
}

/// Shows a blocking notice with a single OK button.
pub async fn show_notice(title: String, body: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(&title)
        .set_description(&body)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
