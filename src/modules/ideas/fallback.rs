use super::model::Mode;

/// Templated ideas used when the provider gives nothing usable.
///
/// Always returns `IDEA_COUNT` strings and is deterministic in `(topic, mode)`.
pub fn fallback_ideas(topic: &str, mode: Mode) -> Vec<String> {
    let topic = topic.trim();
    let label = mode.label();

    vec![
        format!("10x Your {topic} Growth: 8 Irresistible {label} You Must Try 🚀"),
        format!("The Ultimate {topic} Playbook: High-Conversion {label} That Hook Instantly"),
        format!("Stop Scrolling! Killer {label} for {topic} That Demand Attention ⚡"),
        format!("{topic} in 2025: Trends, Myths, and Proven {label} That Win"),
        format!("From Zero to Pro: Beginner-Friendly {label} for {topic} That Work"),
        format!("Steal These {label}: Viral {topic} Angles Backed by Psychology 🧠"),
        format!("No-Fluff {label}: Clear, Clickable {topic} Ideas People Love ✅"),
        format!("7-Second Hooks: Short, Punchy {label} for {topic} That Convert"),
    ]
}
