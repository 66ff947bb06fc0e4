//! Static betting-plan menus. These are Bangla-only.

const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Render a number with Bengali digits
pub fn bangla_number(n: u64) -> String {
    n.to_string()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| BANGLA_DIGITS[d as usize])
                .unwrap_or(c)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanTier {
    Tk500,
    Tk1000,
    Tk2000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanSteps {
    Seven,
    Six,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Tk500, PlanTier::Tk1000, PlanTier::Tk2000];

    pub fn amount(&self) -> u64 {
        match self {
            PlanTier::Tk500 => 500,
            PlanTier::Tk1000 => 1000,
            PlanTier::Tk2000 => 2000,
        }
    }

    pub fn button_label(&self) -> String {
        format!("💸{}TK Plan💸", bangla_number(self.amount()))
    }

    pub fn option_label(&self, steps: PlanSteps) -> String {
        format!(
            "🤑 {} TK {} স্টেপ প্যান 🤑",
            bangla_number(self.amount()),
            bangla_number(steps.count())
        )
    }

    /// First stake of the ladder
    fn opening_stake(&self, steps: PlanSteps) -> u64 {
        match (self, steps) {
            (PlanTier::Tk500, PlanSteps::Seven) => 3,
            (PlanTier::Tk500, PlanSteps::Six) => 5,
            (PlanTier::Tk1000, PlanSteps::Seven) => 5,
            (PlanTier::Tk1000, PlanSteps::Six) => 10,
            (PlanTier::Tk2000, PlanSteps::Seven) => 10,
            (PlanTier::Tk2000, PlanSteps::Six) => 20,
        }
    }

    /// Stakes doubling after each loss
    pub fn ladder(&self, steps: PlanSteps) -> Vec<u64> {
        let opening = self.opening_stake(steps);
        (0..steps.count() as u32).map(|i| opening << i).collect()
    }
}

impl PlanSteps {
    pub const ALL: [PlanSteps; 2] = [PlanSteps::Seven, PlanSteps::Six];

    pub fn count(&self) -> u64 {
        match self {
            PlanSteps::Seven => 7,
            PlanSteps::Six => 6,
        }
    }

    pub fn win_rate(&self) -> u64 {
        match self {
            PlanSteps::Seven => 90,
            PlanSteps::Six => 80,
        }
    }
}

pub fn plans_menu() -> &'static str {
    "💰 <b>বেটিং প্ল্যান সিলেক্ট করুন</b> 💰\n\n\
     নিচ থেকে আপনার পছন্দের প্ল্যানটি সিলেক্ট করুন:"
}

pub fn back_to_main() -> &'static str {
    "🏠 <b>মেইন মেনুতে ফিরে আসা হয়েছে</b>"
}

pub fn back_to_plans() -> &'static str {
    "🔙 <b>প্ল্যান মেনুতে ফিরে আসা হয়েছে</b>"
}

pub fn tier_menu(tier: PlanTier) -> String {
    format!(
        "💵 <b>{} টাকা প্ল্যান</b> 💵\n\n\
         নিচ থেকে আপনার পছন্দের স্টেপ প্যান সিলেক্ট করুন:",
        bangla_number(tier.amount())
    )
}

pub fn plan_card(tier: PlanTier, steps: PlanSteps) -> String {
    let ladder = tier.ladder(steps);
    let rate = bangla_number(steps.win_rate());
    let mut card = format!(
        "🤑 <b>{} টাকা {} স্টেপ প্যান</b> 🤑\n\n💸 Win rate {}% 💸\n",
        bangla_number(tier.amount()),
        bangla_number(steps.count()),
        rate
    );

    if let Some(first) = ladder.first() {
        card.push_str(&format!("✅ ১ম {}৳ মারবেন\n", bangla_number(*first)));
    }
    for pair in ladder.windows(2) {
        card.push_str(&format!(
            "✅ {}৳ হারলে {}৳\n",
            bangla_number(pair[0]),
            bangla_number(pair[1])
        ));
    }
    if let Some(last) = ladder.last() {
        let last = bangla_number(*last);
        card.push_str(&format!("🏆{}৳ Win🏆  ({}% chance)\n", last, rate));
        card.push_str(&format!("⚠️{}৳ হারলে ১ম স্টেপ থেকে শুরু করবেন⚠️", last));
    }
    card
}
