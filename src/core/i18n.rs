//! Static UI translation tables (English, Greek, Chinese).
//!
//! Only the fixed label set is translated. Section headings and info text
//! are English in every language.

use serde::{Deserialize, Serialize};

/// Dashboard display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Greek, Language::Chinese];

    /// Label of the language selector itself, shown in all three languages.
    pub const SELECTOR_LABEL: &'static str = "Language / Γλώσσα / 语言";

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Greek => "el",
            Language::Chinese => "zh",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Greek => "Ελληνικά",
            Language::Chinese => "中文",
        }
    }

    pub fn next(self) -> Language {
        let idx = Language::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }

    pub fn strings(self) -> &'static Translations {
        match self {
            Language::English => &EN,
            Language::Greek => &EL,
            Language::Chinese => &ZH,
        }
    }
}

/// The translated label set for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub title: &'static str,
    pub guest_exp: &'static str,
    pub revenue_mgmt: &'static str,
    pub sentiment_analysis: &'static str,
    pub staff_performance: &'static str,
    pub language: &'static str,
    pub guest_id: &'static str,
    pub generate: &'static str,
    pub optimize: &'static str,
    pub analyze_feedback: &'static str,
    pub analyze_staff: &'static str,
}

static EN: Translations = Translations {
    title: "AI in Hospitality: Guest Experience Optimization and Revenue Management",
    guest_exp: "Guest Experience Personalization",
    revenue_mgmt: "Revenue Management Optimization",
    sentiment_analysis: "Sentiment Analysis of Guest Feedback",
    staff_performance: "Staff Performance Optimization",
    language: "Language",
    guest_id: "Enter Guest ID:",
    generate: "Generate Personalized Recommendations",
    optimize: "Optimize Pricing Strategy",
    analyze_feedback: "Analyze Feedback",
    analyze_staff: "Analyze Staff Performance",
};

static EL: Translations = Translations {
    title: "AI στη Φιλοξενία: Βελτιστοποίηση Εμπειρίας Επισκεπτών και Διαχείριση Εσόδων",
    guest_exp: "Εξατομίκευση Εμπειρίας Επισκεπτών",
    revenue_mgmt: "Βελτιστοποίηση Διαχείρισης Εσόδων",
    sentiment_analysis: "Ανάλυση Συναισθημάτων από Σχόλια Επισκεπτών",
    staff_performance: "Βελτιστοποίηση Απόδοσης Προσωπικού",
    language: "Γλώσσα",
    guest_id: "Εισάγετε ID Επισκέπτη:",
    generate: "Δημιουργία Εξατομικευμένων Προτάσεων",
    optimize: "Βελτιστοποίηση Στρατηγικής Τιμολόγησης",
    analyze_feedback: "Ανάλυση Σχολίων",
    analyze_staff: "Ανάλυση Απόδοσης Προσωπικού",
};

static ZH: Translations = Translations {
    title: "酒店业AI：客户体验优化和收入管理",
    guest_exp: "客户体验个性化",
    revenue_mgmt: "收入管理优化",
    sentiment_analysis: "客户反馈情感分析",
    staff_performance: "员工绩效优化",
    language: "语言",
    guest_id: "输入客人ID：",
    generate: "生成个性化推荐",
    optimize: "优化定价策略",
    analyze_feedback: "分析反馈",
    analyze_staff: "分析员工表现",
};
