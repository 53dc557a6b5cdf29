//! Display metadata and advice for each risk level

use serde::Serialize;

use crate::RiskLevel;

/// Badge metadata for a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskMeta {
    /// Style tag: `good`, `warn` or `bad`
    pub style: &'static str,
    pub label_en: &'static str,
    pub label_zh: &'static str,
}

pub fn risk_meta(level: RiskLevel) -> RiskMeta {
    match level {
        RiskLevel::High => RiskMeta {
            style: "bad",
            label_en: "High Risk",
            label_zh: "高度疑似诈骗",
        },
        RiskLevel::Medium => RiskMeta {
            style: "warn",
            label_en: "Suspicious",
            label_zh: "存在诈骗特征",
        },
        RiskLevel::Low => RiskMeta {
            style: "good",
            label_en: "Low Risk",
            label_zh: "低风险（仍建议核实）",
        },
    }
}

const HIGH_ACTIONS: &[&str] = &[
    "立刻停止：不要转账、不要提供验证码、不要安装远程控制软件",
    "用你自己找到的官方电话核实（不要用对方给的号码）",
    "一键联系家人确认",
];

const MEDIUM_ACTIONS: &[&str] = &[
    "先不要点链接，先核实来源",
    "看对方是否制造紧迫感或要求敏感信息",
    "需要时联系家人确认",
];

const LOW_ACTIONS: &[&str] = &[
    "看起来风险较低，但仍建议：不点陌生链接、不透露验证码",
    "如果内容涉及钱或账号，优先官方渠道核实",
];

/// Ordered next steps for the user, most important first
pub fn recommended_actions(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => HIGH_ACTIONS,
        RiskLevel::Medium => MEDIUM_ACTIONS,
        RiskLevel::Low => LOW_ACTIONS,
    }
}
