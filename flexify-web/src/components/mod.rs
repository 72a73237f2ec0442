pub(crate) mod chat_composer;
pub(crate) mod google_button;
pub(crate) mod labeled_input;
pub(crate) mod loading;
pub(crate) mod message_bubble;
pub(crate) mod notification;
pub(crate) mod password_input;
pub(crate) mod quick_action_chips;
pub(crate) mod typewriter;
pub(crate) mod typing_indicator;

// Re-export components for convenience
pub use chat_composer::ChatComposer;
pub use google_button::GoogleButton;
pub use labeled_input::LabeledInput;
pub use loading::Loading;
pub use message_bubble::MessageBubble;
pub use notification::{Notification, NotificationMessage, Severity};
pub use password_input::PasswordInput;
pub use quick_action_chips::QuickActionChips;
pub use typewriter::Typewriter;
pub use typing_indicator::TypingIndicator;
