use crate::templates::plans::{PlanSteps, PlanTier};

pub const GENERATE_BUTTON: &str = "✨ Generate Prediction";
pub const SUBSCRIPTION_BUTTON: &str = "💎 Get Subscription";
pub const HELP_BUTTON: &str = "❓ Help";
pub const PLANS_BUTTON: &str = "💸 Plans 💸";
pub const MAIN_MENU_BUTTON: &str = "🔙 Main Menu";
pub const PLANS_MENU_BUTTON: &str = "🔙 Plans Menu";

pub const TRANSLATE_BUTTON: &str = "বাংলায় অনুবাদ করুন";
pub const TRANSLATE_CALLBACK_PREFIX: &str = "setlang_bn_";

/// Commands that can be re-sent in Bangla from the translate button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translatable {
    Start,
    Help,
    Buy,
    Generate,
}

impl Translatable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Translatable::Start => "start",
            Translatable::Help => "help",
            Translatable::Buy => "buy",
            Translatable::Generate => "generate",
        }
    }

    pub fn callback_data(&self) -> String {
        format!("{}{}", TRANSLATE_CALLBACK_PREFIX, self.as_str())
    }

    /// Inverse of [`Translatable::callback_data`]
    pub fn from_callback_data(data: &str) -> Option<Self> {
        match data.strip_prefix(TRANSLATE_CALLBACK_PREFIX)? {
            "start" => Some(Translatable::Start),
            "help" => Some(Translatable::Help),
            "buy" => Some(Translatable::Buy),
            "generate" => Some(Translatable::Generate),
            _ => None,
        }
    }
}

/// Markup attached to an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    None,
    Main,
    Plans,
    PlanTier(PlanTier),
    Translate(Translatable),
}

impl Keyboard {
    /// Rows of a reply keyboard, `None` for inline or no markup
    pub fn reply_rows(&self) -> Option<Vec<Vec<String>>> {
        let rows = match self {
            Keyboard::Main => vec![
                vec![GENERATE_BUTTON.to_string(), SUBSCRIPTION_BUTTON.to_string()],
                vec![HELP_BUTTON.to_string(), PLANS_BUTTON.to_string()],
            ],
            Keyboard::Plans => vec![
                vec![
                    PlanTier::Tk500.button_label(),
                    PlanTier::Tk1000.button_label(),
                ],
                vec![
                    PlanTier::Tk2000.button_label(),
                    MAIN_MENU_BUTTON.to_string(),
                ],
            ],
            Keyboard::PlanTier(tier) => vec![
                PlanSteps::ALL
                    .iter()
                    .map(|steps| tier.option_label(*steps))
                    .collect(),
                vec![PLANS_MENU_BUTTON.to_string()],
            ],
            Keyboard::None | Keyboard::Translate(_) => return None,
        };
        Some(rows)
    }
}
