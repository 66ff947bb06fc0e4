//! Replies to the owner-only allow-list commands

use teloxide::utils::html;

pub fn usage(command: &str) -> String {
    format!("❌ <b>Usage:</b>\n<code>/{} USER_ID</code>", command)
}

pub fn invalid_format(command: &str) -> String {
    format!(
        "❌ <b>Invalid format</b>\nUsage: <code>/{cmd} USER_ID</code>\nExample: <code>/{cmd} 123456789</code>",
        cmd = command
    )
}

pub fn user_added(user_id: u64) -> String {
    format!(
        "✅ <b>User added!</b>\nUser ID: <code>{}</code> can now generate predictions.",
        user_id
    )
}

pub fn already_allowed(user_id: u64) -> String {
    format!("ℹ️ User <code>{}</code> is already in the allowed list.", user_id)
}

pub fn user_removed(user_id: u64) -> String {
    format!(
        "✅ <b>User removed!</b>\nUser ID: <code>{}</code> can no longer generate predictions.",
        user_id
    )
}

pub fn not_allowed(user_id: u64) -> String {
    format!("ℹ️ User <code>{}</code> was not in the allowed list.", user_id)
}

pub fn subscription_ended() -> &'static str {
    "⚠️ <b>Subscription Ended</b>\n\n\
     Your access to premium predictions has been removed.\n\
     Contact @Emon001100 if this was a mistake."
}

pub fn error(detail: &str) -> String {
    format!("⚠️ <b>Error:</b> {}", html::escape(detail))
}
