use teloxide::utils::command::BotCommands;

use super::keyboard::{
    GENERATE_BUTTON, HELP_BUTTON, MAIN_MENU_BUTTON, PLANS_BUTTON, PLANS_MENU_BUTTON,
    SUBSCRIPTION_BUTTON,
};
use crate::templates::plans::{PlanSteps, PlanTier};

/// Slash commands understood by the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "welcome message and your UID")]
    Start,
    #[command(description = "how predictions work")]
    Help,
    #[command(description = "how to get a premium subscription")]
    Buy,
    #[command(description = "prediction for the next round")]
    Generate,
    #[command(description = "grant premium access (owner only)", hide)]
    AddUser(String),
    #[command(description = "revoke premium access (owner only)", hide)]
    RemoveUser(String),
}

/// What an inbound message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    Help,
    Buy,
    Generate,
    AddUser(String),
    RemoveUser(String),
    Plans,
    MainMenu,
    PlansMenu,
    PlanMenu(PlanTier),
    PlanOption(PlanTier, PlanSteps),
}

impl From<Command> for Intent {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Intent::Start,
            Command::Help => Intent::Help,
            Command::Buy => Intent::Buy,
            Command::Generate => Intent::Generate,
            Command::AddUser(arg) => Intent::AddUser(arg),
            Command::RemoveUser(arg) => Intent::RemoveUser(arg),
        }
    }
}

impl Intent {
    /// Parse a slash command or a keyboard button label.
    ///
    /// Button labels match case-insensitively. Unknown text yields `None`.
    pub fn parse(text: &str, bot_username: &str) -> Option<Intent> {
        let text = text.trim();
        if text.starts_with('/') {
            return parse_command(text, bot_username);
        }

        let folded = text.to_lowercase();
        button_table()
            .into_iter()
            .find(|(label, _)| label.to_lowercase() == folded)
            .map(|(_, intent)| intent)
    }

    /// Short name used for metrics and logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Help => "help",
            Intent::Buy => "buy",
            Intent::Generate => "generate",
            Intent::AddUser(_) => "adduser",
            Intent::RemoveUser(_) => "removeuser",
            Intent::Plans => "plans",
            Intent::MainMenu => "main_menu",
            Intent::PlansMenu => "plans_menu",
            Intent::PlanMenu(_) => "plan_menu",
            Intent::PlanOption(_, _) => "plan_option",
        }
    }
}

fn parse_command(text: &str, bot_username: &str) -> Option<Intent> {
    if let Ok(command) = Command::parse(text, bot_username) {
        return Some(command.into());
    }

    // Payload after a no-argument command (a `/start` deep link) or a
    // missing argument after an owner command
    let (head, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    };
    let name = head.strip_prefix('/')?;
    let name = match name.split_once('@') {
        Some((name, addressee)) if addressee.eq_ignore_ascii_case(bot_username) => name,
        Some(_) => return None,
        None => name,
    };

    match name {
        "start" => Some(Intent::Start),
        "help" => Some(Intent::Help),
        "buy" => Some(Intent::Buy),
        "generate" => Some(Intent::Generate),
        "adduser" => Some(Intent::AddUser(rest.to_string())),
        "removeuser" => Some(Intent::RemoveUser(rest.to_string())),
        _ => None,
    }
}

/// Every keyboard label paired with its intent
pub fn button_table() -> Vec<(String, Intent)> {
    let mut table = vec![
        (GENERATE_BUTTON.to_string(), Intent::Generate),
        (SUBSCRIPTION_BUTTON.to_string(), Intent::Buy),
        (HELP_BUTTON.to_string(), Intent::Help),
        (PLANS_BUTTON.to_string(), Intent::Plans),
        (MAIN_MENU_BUTTON.to_string(), Intent::MainMenu),
        (PLANS_MENU_BUTTON.to_string(), Intent::PlansMenu),
    ];
    for tier in PlanTier::ALL {
        table.push((tier.button_label(), Intent::PlanMenu(tier)));
        for steps in PlanSteps::ALL {
            table.push((tier.option_label(steps), Intent::PlanOption(tier, steps)));
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "wingo_bot";

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!(Intent::parse("/start", BOT), Some(Intent::Start));
        assert_eq!(Intent::parse("/help", BOT), Some(Intent::Help));
        assert_eq!(Intent::parse("/buy", BOT), Some(Intent::Buy));
        assert_eq!(Intent::parse("/generate", BOT), Some(Intent::Generate));
    }

    #[test]
    fn test_parse_command_addressed_to_bot() {
        assert_eq!(Intent::parse("/help@wingo_bot", BOT), Some(Intent::Help));
        assert_eq!(Intent::parse("/help@other_bot", BOT), None);
    }

    #[test]
    fn test_parse_start_with_payload() {
        assert_eq!(Intent::parse("/start ref-123", BOT), Some(Intent::Start));
    }

    #[test]
    fn test_parse_owner_commands_keep_argument() {
        assert_eq!(
            Intent::parse("/adduser 123456", BOT),
            Some(Intent::AddUser("123456".to_string()))
        );
        match Intent::parse("/removeuser", BOT) {
            Some(Intent::RemoveUser(arg)) => assert!(arg.trim().is_empty()),
            other => panic!("unexpected intent {:?}", other),
        }
    }

    #[test]
    fn test_parse_buttons_case_insensitive() {
        assert_eq!(
            Intent::parse("✨ GENERATE prediction", BOT),
            Some(Intent::Generate)
        );
        assert_eq!(Intent::parse("💎 get subscription", BOT), Some(Intent::Buy));
        assert_eq!(Intent::parse("❓ Help", BOT), Some(Intent::Help));
        assert_eq!(Intent::parse("💸 PLANS 💸", BOT), Some(Intent::Plans));
        assert_eq!(Intent::parse("🔙 main menu", BOT), Some(Intent::MainMenu));
        assert_eq!(Intent::parse("🔙 Plans Menu", BOT), Some(Intent::PlansMenu));
    }

    #[test]
    fn test_parse_plan_buttons() {
        assert_eq!(
            Intent::parse("💸১০০০tk plan💸", BOT),
            Some(Intent::PlanMenu(PlanTier::Tk1000))
        );
        assert_eq!(
            Intent::parse("🤑 ৫০০ TK ৬ স্টেপ প্যান 🤑", BOT),
            Some(Intent::PlanOption(PlanTier::Tk500, PlanSteps::Six))
        );
    }

    #[test]
    fn test_unknown_text_ignored() {
        assert_eq!(Intent::parse("hello there", BOT), None);
        assert_eq!(Intent::parse("/unknown", BOT), None);
    }

    #[test]
    fn test_button_labels_unique() {
        let table = button_table();
        let mut labels: Vec<String> = table.iter().map(|(l, _)| l.to_lowercase()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), table.len());
        assert_eq!(table.len(), 6 + 3 + 6);
    }
}
