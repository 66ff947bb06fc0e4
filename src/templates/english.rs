use super::Phrasebook;
use crate::prediction::Prediction;

pub struct English;

impl Phrasebook for English {
    fn uid_line(&self, user_id: u64) -> String {
        format!("🔑 <b>Your UID:</b> <code>{}</code>\n\n", user_id)
    }

    fn welcome_free(&self) -> &'static str {
        "🌟 <b>Welcome to WinGo 30s Prediction Bot!</b> 🌟\n\n\
         I provide AI-powered predictions for WinGo 30s game. \
         Currently, you're using the <b>free version</b> with limited access.\n\n\
         🔓 <b>Premium Features:</b>\n\
         ✅ Next round predictions by Analysing 500 historical data\n\
         👉 <b>Get full access</b> with our premium subscription!"
    }

    fn welcome_premium(&self) -> &'static str {
        "🎉 <b>Welcome to WinGo 30s Prediction Bot!</b> 🎉\n\n\
         I'm your personal AI assistant for predicting WinGo 30s game results with \
         <b>advanced algorithms</b> and <b>real-time data analysis</b>!\n\n\
         💎 <b>Premium Account Activated!</b>\n\
         You have full access to all features:\n\
         ✅ Generate Advance predictions\n\n\
         <b>Available Commands:</b>\n\
         ✨ /generate - Get next prediction\n\
         💎 /buy - Buy your subscription and get access\n\
         ❓ /help - Detailed instructions\n\n\
         Tap <b>✨ Generate Prediction</b> to get started!"
    }

    fn help(&self) -> &'static str {
        "📚 <b>WinGo Prediction Bot Guide</b>\n\n\
         I help you predict WinGo 30s game results using advanced algorithms. \
         Here's how to use me:\n\n\
         ✨ <b>/generate</b>\n\
         Get the prediction for the next game round. Each prediction includes:\n\
         - 🎯 Size (Big/Small)\n\
         - 🎨 Color (Red/Green/Violet)\n\n\
         💎 <b>/buy</b>\n\
         Unlock premium features to generate predictions. Follow the instructions \
         to get your subscription.\n\n\
         ❓ <b>/help</b>\n\
         Show this help message\n\n\
         🔁 <b>How predictions work:</b>\n\
         1. I analyze historical patterns using AI\n\
         2. Generate prediction for the NEXT round\n\
         Need help? Contact @Emon001100"
    }

    fn buy(&self, user_id: u64) -> String {
        format!(
            "💎 <b>Premium Subscription - Unlock Full Access</b>\n\n\
             {uid}\
             📝 <b>How to subscribe:</b>\n\
             1. Contact the OWNER @Emon001100 on Telegram\n\
             2. Send your telegram ID shown above\n\
             3. Send money on Bkash or Nagad account\n\n   \
             Bkash+Nagat: 01756519749\n\n\
             4. Complete payment\n\n\
             🔄 <b>After payment:</b>\n\
             • Send payment proof to OWNER @Emon001100\n\
             • Your account will be activated within 5 minutes\n\
             • You'll receive confirmation message\n\n\
             🌟 <b>Premium Benefits:</b>\n\
             • Unlimited predictions\n\
             • Priority support\n\
             • Special bonus features\n\n\
             Need help? Contact with OWNER @Emon001100 directly!",
            uid = self.uid_line(user_id)
        )
    }

    fn subscription_required(&self) -> &'static str {
        "🔒 <b>Premium Subscription Required</b>\n\n\
         You need a premium subscription to generate predictions.\n\n\
         👉 <b>Benefits of upgrading:</b>\n\
         • Unlimited predictions\n\
         • Real-time prediction\n\
         Tap <b>💎 Get Subscription</b> to unlock full access!"
    }

    fn loading(&self) -> &'static str {
        "🔮 <i>Analyzing game patterns...</i>"
    }

    fn calculating(&self) -> &'static str {
        "🧠 <i>Calculating probabilities...</i>"
    }

    fn prediction(&self, prediction: &Prediction, seconds_left: u32) -> String {
        format!(
            "🎯 <b>WinGo 30s Prediction</b>\n\n\
             🔮 <b>Prediction for next Period</b>\n\n\
             📏 <b>Size:</b> {}\n\n\
             🎨 <b>Color:</b> {} {}\n\n\
             ⏳ <b>Next draw in: {} seconds</b>\n",
            prediction.size,
            prediction.color.emoji(),
            prediction.color,
            seconds_left
        )
    }
}
