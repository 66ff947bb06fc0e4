use super::Phrasebook;
use crate::prediction::{Color, Prediction, Size};

pub struct Bangla;

fn size_label(size: Size) -> &'static str {
    match size {
        Size::Big => "বড়",
        Size::Small => "ছোট",
    }
}

fn color_label(color: Color) -> &'static str {
    match color {
        Color::Red => "লাল",
        Color::Green => "সবুজ",
        Color::Violet => "বেগুনি",
    }
}

impl Phrasebook for Bangla {
    fn uid_line(&self, user_id: u64) -> String {
        format!("🔑 <b>আপনার UID:</b> <code>{}</code>\n\n", user_id)
    }

    fn welcome_free(&self) -> &'static str {
        "🌟 <b>WinGo 30s প্রেডিকশন বটে স্বাগতম!</b> 🌟\n\n\
         আমি WinGo 30s গেমের জন্য AI-চালিত ভবিষ্যদ্বাণী প্রদান করি। \
         বর্তমানে, আপনি সীমিত অ্যাক্সেস সহ <b>ফ্রি সংস্করণ</b> ব্যবহার করছেন।\n\n\
         🔓 <b>প্রিমিয়াম বৈশিষ্ট্য:</b>\n\
         ✅ ৫০০টি ঐতিহাসিক ডেটা বিশ্লেষণ করে পরবর্তী রাউন্ডের ভবিষ্যদ্বাণী\n\
         👉 প্রিমিয়াম সাবস্ক্রিপশনের মাধ্যমে <b>সম্পূর্ণ অ্যাক্সেস পান</b>!"
    }

    fn welcome_premium(&self) -> &'static str {
        "🎉 <b>WinGo 30s প্রেডিকশন বটে স্বাগতম!</b> 🎉\n\n\
         আমি আপনার ব্যক্তিগত AI সহকারী, WinGo 30s গেমের ফলাফল ভবিষ্যদ্বাণীর জন্য \
         <b>উন্নত অ্যালগরিদম</b> এবং <b>রিয়েল-টাইম ডেটা বিশ্লেষণ</b> সহ!\n\n\
         💎 <b>প্রিমিয়াম অ্যাকাউন্ট সক্রিয়!</b>\n\
         আপনার সমস্ত বৈশিষ্ট্যে সম্পূর্ণ অ্যাক্সেস রয়েছে:\n\
         ✅ উন্নত ভবিষ্যদ্বাণী তৈরি করুন\n\n\
         <b>উপলব্ধ কমান্ড:</b>\n\
         ✨ /generate - পরবর্তী ভবিষ্যদ্বাণী পান\n\
         💎 /buy - আপনার সাবস্ক্রিপশন কিনুন এবং অ্যাক্সেস পান\n\
         ❓ /help - বিস্তারিত নির্দেশাবলী\n\n\
         শুরু করতে <b>✨ Generate Prediction</b> ট্যাপ করুন!"
    }

    fn help(&self) -> &'static str {
        "📚 <b>WinGo প্রেডিকশন বট গাইড</b>\n\n\
         আমি উন্নত অ্যালগরিদম ব্যবহার করে WinGo 30s গেমের ফলাফল ভবিষ্যদ্বাণী করতে সাহায্য করি।\n\n\
         ✨ <b>/generate</b>\n\
         পরবর্তী গেম রাউন্ডের জন্য ভবিষ্যদ্বাণী পান। প্রতিটি ভবিষ্যদ্বাণী অন্তর্ভুক্ত করে:\n\
         - 🎯 সাইজ (বড়/ছোট)\n\
         - 🎨 রঙ (লাল/সবুজ/বেগুনি)\n\n\
         💎 <b>/buy</b>\n\
         ভবিষ্যদ্বাণী তৈরি করতে প্রিমিয়াম বৈশিষ্ট্য আনলক করুন। নির্দেশাবলী অনুসরণ করুন \
         আপনার সাবস্ক্রিপশন পেতে।\n\n\
         ❓ <b>/help</b>\n\
         এই সহায়তা বার্তাটি দেখান\n\n\
         🔁 <b>কিভাবে ভবিষ্যদ্বাণী কাজ করে:</b>\n\
         1. আমি AI ব্যবহার করে ঐতিহাসিক প্যাটার্ন বিশ্লেষণ করি\n\
         2. পরবর্তী রাউন্ডের জন্য ভবিষ্যদ্বাণী তৈরি করি\n\
         সাহায্যের প্রয়োজন? @Emon001100-এ যোগাযোগ করুন"
    }

    fn buy(&self, user_id: u64) -> String {
        format!(
            "💎 <b>প্রিমিয়াম সাবস্ক্রিপশন - সম্পূর্ণ অ্যাক্সেস আনলক করুন</b>\n\n\
             {uid}\
             📝 <b>কিভাবে সাবস্ক্রাইব করবেন:</b>\n\
             1. মালিক @Emon001100-কে টেলিগ্রামে যোগাযোগ করুন\n\
             2. উপরে দেখানো আপনার টেলিগ্রাম আইডি পাঠান\n\
             3. বিকাশ বা নগদ অ্যাকাউন্টে টাকা পাঠান\n\n   \
             বিকাশ+নগদ: 01756519749\n\n\
             4. পেমেন্ট সম্পূর্ণ করুন\n\n\
             🔄 <b>পেমেন্টের পর:</b>\n\
             • পেমেন্ট প্রমাণ মালিক @Emon001100-কে পাঠান\n\
             • ৫ মিনিটের মধ্যে আপনার অ্যাকাউন্ট সক্রিয় করা হবে\n\
             • আপনি নিশ্চিতকরণ বার্তা পাবেন\n\n\
             🌟 <b>প্রিমিয়াম সুবিধা:</b>\n\
             • সীমাহীন ভবিষ্যদ্বাণী\n\
             • প্রাথমিক সমর্থন\n\
             • বিশেষ বোনাস বৈশিষ্ট্য\n\n\
             সাহায্যের প্রয়োজন? সরাসরি মালিক @Emon001100-এর সাথে যোগাযোগ করুন!",
            uid = self.uid_line(user_id)
        )
    }

    fn subscription_required(&self) -> &'static str {
        "🔒 <b>প্রিমিয়াম সাবস্ক্রিপশন প্রয়োজন</b>\n\n\
         ভবিষ্যদ্বাণী তৈরি করতে আপনার একটি প্রিমিয়াম সাবস্ক্রিপশন প্রয়োজন।\n\n\
         👉 <b>আপগ্রেড করার সুবিধা:</b>\n\
         • সীমাহীন ভবিষ্যদ্বাণী\n\
         • রিয়েল-টাইম ভবিষ্যদ্বাণী\n\
         সম্পূর্ণ অ্যাক্সেস আনলক করতে <b>💎 Get Subscription</b> ট্যাপ করুন!"
    }

    fn loading(&self) -> &'static str {
        "🔮 <i>গেম প্যাটার্ন বিশ্লেষণ করা হচ্ছে...</i>"
    }

    fn calculating(&self) -> &'static str {
        "🧠 <i>সম্ভাবনা গণনা করা হচ্ছে...</i>"
    }

    fn prediction(&self, prediction: &Prediction, seconds_left: u32) -> String {
        format!(
            "🎯 <b>WinGo 30s ভবিষ্যদ্বাণী</b>\n\n\
             🔮 <b>পরবর্তী সময়ের জন্য ভবিষ্যদ্বাণী</b>\n\n\
             📏 <b>সাইজ:</b> {}\n\n\
             🎨 <b>রঙ:</b> {} {}\n\n\
             ⏳ <b>পরবর্তী ড্র: {} সেকেন্ডে</b>\n",
            size_label(prediction.size),
            prediction.color.emoji(),
            color_label(prediction.color),
            seconds_left
        )
    }
}
