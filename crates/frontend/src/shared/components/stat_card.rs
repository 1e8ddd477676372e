use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// 1234567 -> "1 234 567" (non-breaking spaces)
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// 45.67 -> "45.7%"
pub fn format_rate(percent: f64) -> String {
    format!("{:.1}%", percent)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Bad,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    icon_kind: Icon,
    /// Counter value (None = loading)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Rate shown under the value, percent
    #[prop(into, optional)]
    rate: Signal<Option<f64>>,
    #[prop(optional, into)]
    rate_label: Option<String>,
    #[prop(optional, into)]
    tone: MaybeProp<StatTone>,
) -> impl IntoView {
    let status_class = move || match tone.get().unwrap_or(StatTone::Neutral) {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "—".to_string(),
    };

    let rate_label = rate_label.unwrap_or_else(|| "rate".to_string());
    let subtitle_view = move || {
        rate.get().map(|r| {
            view! {
                <div class="stat-card__subtitle">{format!("{} {}", format_rate(r), rate_label)}</div>
            }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(icon_kind)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_234_567), "1\u{00a0}234\u{00a0}567");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(45.67), "45.7%");
        assert_eq!(format_rate(0.0), "0.0%");
    }
}
