//! Keyword-family classification for free-text request descriptions.
//!
//! Pure text-to-labels logic, decoupled from the authoring view so other
//! contexts (search, moderation) could reuse it.

struct Family {
    keywords: &'static [char],
    labels: [&'static str; 2],
}

/// Checked in order; the first family with any keyword present wins, so the
/// families are mutually exclusive by priority.
const FAMILIES: &[Family] = &[
    Family {
        keywords: &['修', '坏', '漏', '水', '电'],
        labels: ["家庭维修", "水电急修"],
    },
    Family {
        keywords: &['狗', '猫', '宠', '遛'],
        labels: ["宠物服务", "家庭寄养"],
    },
    Family {
        keywords: &['送', '取', '拿', '跑'],
        labels: ["跑腿代办", "同城急送"],
    },
    Family {
        keywords: &['搬', '货', '运'],
        labels: ["搬家拉货", "协助搬运"],
    },
];

/// Applies when no family matches.
const DEFAULT_LABELS: [&str; 2] = ["家政保洁", "收纳整理"];

/// Classify a description into an ordered list of suggested category labels.
pub fn suggest(text: &str) -> Vec<String> {
    for family in FAMILIES {
        if family.keywords.iter().any(|&keyword| text.contains(keyword)) {
            return family.labels.iter().map(|s| s.to_string()).collect();
        }
    }
    DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
}
