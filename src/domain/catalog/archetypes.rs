//! Built-in archetype catalog.

use crate::domain::models::{Archetype, ArchetypeCatalog, Value};

/// The six built-in archetypes, in matching priority order.
pub fn builtin_archetypes() -> ArchetypeCatalog {
    ArchetypeCatalog::new(vec![
        archetype(
            "guardian",
            "The Guardian",
            "Protector of what matters most",
            "You prioritize those closest to you above abstract principles. Your loyalty runs \
             deep, and you believe that taking care of your own is the foundation of a \
             meaningful life.",
            [Value::Loyalty, Value::Security],
            &[
                "Unwavering support for loved ones",
                "Reliable in crisis",
                "Strong sense of duty",
            ],
            &[
                "May overlook broader injustices",
                "Can enable harmful behavior in loved ones",
            ],
            "#2563eb",
            "crusader",
            "sage",
        ),
        archetype(
            "crusader",
            "The Crusader",
            "Champion of what's right",
            "You believe in principles that transcend personal relationships. Justice and \
             honesty guide your decisions, even when they come at personal cost.",
            [Value::Justice, Value::Honesty],
            &["Moral clarity", "Courage to stand alone", "Consistent principles"],
            &[
                "May damage relationships for principles",
                "Can seem cold or inflexible",
            ],
            "#dc2626",
            "guardian",
            "maverick",
        ),
        archetype(
            "empath",
            "The Empath",
            "Heart-first decision maker",
            "Compassion drives your choices. You feel deeply for others and prioritize \
             reducing suffering, even for strangers. Harmony matters more than being right.",
            [Value::Compassion, Value::Harmony],
            &[
                "Deep emotional intelligence",
                "Natural peacemaker",
                "Inclusive mindset",
            ],
            &["May avoid necessary conflict", "Can be taken advantage of"],
            "#059669",
            "architect",
            "sage",
        ),
        archetype(
            "architect",
            "The Architect",
            "Builder of tomorrow",
            "You're driven to achieve and create. Ambition isn't a dirty word to you; it's how \
             progress happens. You believe in earning your place.",
            [Value::Ambition, Value::Freedom],
            &["Goal-oriented", "Self-motivated", "Visionary thinking"],
            &[
                "May prioritize success over relationships",
                "Can justify questionable means",
            ],
            "#7c3aed",
            "empath",
            "maverick",
        ),
        archetype(
            "sage",
            "The Sage",
            "Seeker of balance",
            "You value stability and thoughtful consideration. Security isn't about fear; it's \
             about building a foundation that lets you and others thrive.",
            [Value::Security, Value::Harmony],
            &[
                "Thoughtful decision-making",
                "Long-term thinking",
                "Calming presence",
            ],
            &["May resist necessary change", "Can be overly cautious"],
            "#0891b2",
            "maverick",
            "guardian",
        ),
        archetype(
            "maverick",
            "The Maverick",
            "Breaker of chains",
            "Freedom is your north star. You resist constraints and believe everyone should \
             forge their own path. Convention is just a suggestion.",
            [Value::Freedom, Value::Honesty],
            &[
                "Independent thinking",
                "Authentic self-expression",
                "Challenges status quo",
            ],
            &["May reject helpful structure", "Can seem unreliable to others"],
            "#ea580c",
            "sage",
            "architect",
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn archetype(
    id: &str,
    name: &str,
    tagline: &str,
    description: &str,
    primary_values: [Value; 2],
    strengths: &[&str],
    blind_spots: &[&str],
    color: &str,
    clash_with: &str,
    vibe_with: &str,
) -> Archetype {
    Archetype {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        primary_values,
        strengths: strengths.iter().map(|s| (*s).to_string()).collect(),
        blind_spots: blind_spots.iter().map(|s| (*s).to_string()).collect(),
        color: color.to_string(),
        clash_with: clash_with.to_string(),
        vibe_with: vibe_with.to_string(),
    }
}
