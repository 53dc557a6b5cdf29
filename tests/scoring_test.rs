//! Behavioral tests for the public scoring API

use safeguard::scoring::{RedFlagTable, TextScorer, UrlScorer, Whitelist};
use safeguard::{
    RedFlag, RiskLevel, TextScore, UrlReason, check_url, recommended_actions, risk_meta,
    score_text,
};

#[test]
fn test_score_text_empty_and_absent() {
    let expected = TextScore {
        score: 0,
        level: RiskLevel::Low,
        hits: vec![],
    };
    assert_eq!(score_text(""), expected);
    assert_eq!(score_text(None), expected);
}

#[test]
fn test_score_text_account_suspended_message() {
    let result = score_text("Your account is suspended, verify now: http://bit.ly/x");
    assert!(result.hits.iter().any(|h| h == "suspended"));
    assert!(result.hits.iter().any(|h| h == "http"));
    assert!(result.score <= 100);
    assert_eq!(result.level, RiskLevel::from_score(result.score));
}

#[test]
fn test_score_text_high_risk_remote_access() {
    let result = score_text("URGENT: your refund is ready. Install AnyDesk so our remote team can wire it");
    // urgent 15 + wire 30 + refund 15 + remote 25 + AnyDesk 30 = 115, capped
    assert_eq!(result.score, 100);
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(
        result.hits,
        vec!["wire", "urgent", "refund", "remote", "AnyDesk"]
    );
}

#[test]
fn test_score_text_stays_in_range_for_arbitrary_input() {
    let inputs = [
        "",
        "hello",
        "🙂🙂🙂",
        "ΣΊΣΥΦΟΣ link",
        "验证码验证码验证码",
        "gift card gift card gift card wire wire",
    ];
    for input in inputs {
        let result = score_text(input);
        assert!(result.score <= 100, "{} scored {}", input, result.score);
        assert_eq!(result.level, RiskLevel::from_score(result.score));
    }
}

#[test]
fn test_repeated_keyword_counts_once() {
    assert_eq!(score_text("验证码").score, score_text("验证码验证码验证码").score);
}

#[test]
fn test_check_url_examples() {
    let wl = Whitelist::default();

    let empty = check_url("", &wl);
    assert_eq!(empty.score, 35);
    assert_eq!(empty.level, RiskLevel::Medium);
    assert_eq!(empty.reason_messages(), vec!["请输入链接"]);

    let ip = check_url("http://1.2.3.4/login", &wl);
    assert_eq!(ip.score, 45);
    assert_eq!(ip.level, RiskLevel::Medium);
    assert!(!ip.reasons.contains(&UrlReason::Shortener));

    let short = check_url("https://bit.ly/abc", &wl);
    assert_eq!(short.score, 25);
    assert_eq!(short.level, RiskLevel::Low);

    let trusted = check_url("https://www.amazon.com/help", &wl);
    assert_eq!(trusted.score, 0);
    assert_eq!(trusted.reasons, vec![UrlReason::Whitelisted]);
}

#[test]
fn test_check_url_never_fails_on_garbage() {
    let wl = Whitelist::default();
    for input in ["::::", "javascript:alert(1)", "http://", "https://999.999.999.999", "💥"] {
        let result = check_url(input, &wl);
        assert!(result.score <= 100);
        assert!(!result.reasons.is_empty() || result.score == 0);
    }
}

#[test]
fn test_url_reasons_have_both_languages() {
    let result = check_url("http://8.8.8.8", &Whitelist::new(Vec::<String>::new()));
    for reason in &result.reasons {
        assert!(!reason.message_en().is_empty());
        assert!(!reason.message_zh().is_empty());
    }
    assert_eq!(result.reasons[1].message_en(), "uses an IP-address host");
}

#[test]
fn test_custom_tables() {
    let text = TextScorer::new(RedFlagTable::new([
        RedFlag::new("crypto", 40),
        RedFlag::new("加密货币", 40),
    ]));
    let result = text.score("Invest in CRYPTO (加密货币) today");
    assert_eq!(result.score, 80);
    assert_eq!(result.level, RiskLevel::High);

    let url = UrlScorer::new(["rb.gy"]);
    let result = url.check("https://rb.gy/x", &Whitelist::default());
    assert_eq!(result.reasons, vec![UrlReason::Shortener]);
}

#[test]
fn test_presentation_is_total() {
    let mut labels = Vec::new();
    for level in RiskLevel::ALL {
        let meta = risk_meta(level);
        assert!(!meta.label_en.is_empty());
        assert!(!recommended_actions(level).is_empty());
        labels.push(meta.label_en);
    }
    labels.dedup();
    assert_eq!(labels.len(), 3);
}
