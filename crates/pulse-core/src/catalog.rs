//! Static survey catalog: the three questions and the five-step weather scale.
//!
//! Both tables are fixed at compile time and never mutated; the rendering
//! layer reads them directly.

use serde::Serialize;

/// Key identifying one of the three survey questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Work,
    Relationship,
    Health,
}

impl QuestionKey {
    /// All keys in presentation order.
    pub fn all() -> &'static [QuestionKey; 3] {
        &[QuestionKey::Work, QuestionKey::Relationship, QuestionKey::Health]
    }

    /// Zero-based position within the survey.
    pub fn index(&self) -> usize {
        match self {
            QuestionKey::Work => 0,
            QuestionKey::Relationship => 1,
            QuestionKey::Health => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::Work => "work",
            QuestionKey::Relationship => "relationship",
            QuestionKey::Health => "health",
        }
    }
}

/// Number of questions in the survey.
pub const QUESTION_COUNT: usize = 3;

/// One survey question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionDefinition {
    pub key: QuestionKey,
    /// 1-based number shown on the tab and card.
    pub num: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The three questions, in the order they are asked.
pub const QUESTIONS: [QuestionDefinition; QUESTION_COUNT] = [
    QuestionDefinition {
        key: QuestionKey::Work,
        num: 1,
        title: "仕事満足度",
        description: "現在の仕事内容や業務量に対する満足度はいかがですか？",
        icon: "💼",
    },
    QuestionDefinition {
        key: QuestionKey::Relationship,
        num: 2,
        title: "人間関係",
        description: "上司・同僚との関係性やチームの雰囲気はいかがですか？",
        icon: "🤝",
    },
    QuestionDefinition {
        key: QuestionKey::Health,
        num: 3,
        title: "健康",
        description: "心身の健康状態はいかがですか？（体調・睡眠・ストレスなど）",
        icon: "💪",
    },
];

/// Question at a zero-based index, if in range.
pub fn question_at(index: usize) -> Option<&'static QuestionDefinition> {
    QUESTIONS.get(index)
}

/// One point on the weather answer scale, with its display colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherOption {
    /// Scale value, 1-5 (5 = best).
    pub value: u8,
    pub icon: &'static str,
    pub label: &'static str,
    /// Idle card background.
    pub bg: &'static str,
    /// Idle card border.
    pub border: &'static str,
    /// Background once selected.
    pub active_bg: &'static str,
    /// Label color once selected.
    pub active_text: &'static str,
}

/// The five scale options, ordered best (5) to worst (1) for presentation.
pub const WEATHER_OPTIONS: [WeatherOption; 5] = [
    WeatherOption {
        value: 5,
        icon: "☀️",
        label: "とても良い",
        bg: "#ecfdf5",
        border: "#6ee7b7",
        active_bg: "#059669",
        active_text: "#fff",
    },
    WeatherOption {
        value: 4,
        icon: "🌤️",
        label: "やや良い",
        bg: "#f0fdf4",
        border: "#86efac",
        active_bg: "#16a34a",
        active_text: "#fff",
    },
    WeatherOption {
        value: 3,
        icon: "⛅",
        label: "普通",
        bg: "#fefce8",
        border: "#fde047",
        active_bg: "#ca8a04",
        active_text: "#fff",
    },
    WeatherOption {
        value: 2,
        icon: "🌧️",
        label: "やや悪い",
        bg: "#fff7ed",
        border: "#fdba74",
        active_bg: "#ea580c",
        active_text: "#fff",
    },
    WeatherOption {
        value: 1,
        icon: "⛈️",
        label: "とても悪い",
        bg: "#fef2f2",
        border: "#fca5a5",
        active_bg: "#dc2626",
        active_text: "#fff",
    },
];

/// Look up a scale option by stored value. Returns `None` for anything
/// outside 1-5 so summary rendering can degrade to an empty slot.
pub fn weather_by_value(value: u8) -> Option<&'static WeatherOption> {
    WEATHER_OPTIONS.iter().find(|o| o.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_ordered_by_key_index() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.key.index(), i);
            assert_eq!(q.num as usize, i + 1);
        }
    }

    #[test]
    fn test_weather_options_best_to_worst() {
        let values: Vec<u8> = WEATHER_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_weather_by_value() {
        assert_eq!(weather_by_value(5).map(|o| o.label), Some("とても良い"));
        assert_eq!(weather_by_value(1).map(|o| o.label), Some("とても悪い"));
        assert!(weather_by_value(0).is_none());
        assert!(weather_by_value(6).is_none());
    }

    #[test]
    fn test_question_at_bounds() {
        assert_eq!(question_at(0).map(|q| q.key), Some(QuestionKey::Work));
        assert_eq!(question_at(2).map(|q| q.key), Some(QuestionKey::Health));
        assert!(question_at(3).is_none());
    }
}
