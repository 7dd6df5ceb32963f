// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient user feedback.
//!
//! Toasts report outcomes the user did not wait on: an image decoded, text
//! saved, a file rejected. They sit in the bottom-right corner and never
//! block input.
//!
//! # Usage
//!
//! ```ignore
//! let mut toasts = Manager::new();
//! toasts.push(Notification::error("error-decode-corrupted").with_arg("detail", "bad header"));
//! let overlay = Toast::view_overlay(&toasts, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts expire after 3s, warnings after 5s. Errors stay
//! until dismissed. At most three are shown; the rest wait in line.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
