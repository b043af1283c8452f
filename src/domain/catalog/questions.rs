//! Built-in question bank.
//!
//! Question ids follow a fixed convention the track resolver depends on: the
//! first character names the category (`c`, `r`, `h`, `a`) and the second the
//! phase (`i`, `t`, `d`).

use std::collections::BTreeMap;

use crate::domain::models::{
    Phase, Question, QuestionBank, QuestionGraph, QuestionOption, QuestionTrack, Value,
};

use Value::{Ambition, Compassion, Freedom, Harmony, Honesty, Justice, Loyalty, Security};

/// The built-in question bank.
pub fn builtin_question_bank() -> QuestionBank {
    QuestionBank {
        career: QuestionTrack {
            instinct: career_instinct(),
            tradeoff: career_tradeoff(),
            deep: career_deep(),
        },
        relationships: QuestionTrack {
            instinct: relationships_instinct(),
            tradeoff: relationships_tradeoff(),
            deep: relationships_deep(),
        },
        health: QuestionTrack {
            instinct: health_instinct(),
            tradeoff: health_tradeoff(),
            deep: health_deep(),
        },
        adventure: QuestionTrack {
            instinct: adventure_instinct(),
            tradeoff: adventure_tradeoff(),
            deep: adventure_deep(),
        },
    }
}

fn graph(root_id: &str, length: usize, questions: Vec<Question>) -> QuestionGraph {
    QuestionGraph {
        root_id: root_id.to_string(),
        length,
        questions: questions
            .into_iter()
            .map(|question| (question.id.clone(), question))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn question(
    id: &str,
    phase: Phase,
    text: &str,
    time_limit: Option<u32>,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        phase,
        options,
        time_limit,
    }
}

fn choice(text: &str, values: &[(Value, u32)], next_id: Option<&str>) -> QuestionOption {
    QuestionOption {
        text: text.to_string(),
        values: values.iter().copied().collect(),
        next_id: next_id.map(str::to_string),
    }
}

fn career_instinct() -> QuestionGraph {
    graph(
        "ci1",
        5,
        vec![
            question(
                "ci1",
                Phase::Instinct,
                "In a project review, a teammate takes credit for your idea. Do you speak up?",
                Some(5),
                vec![
                    choice("Speak up now", &[(Honesty, 3), (Justice, 2)], Some("ci2a")),
                    choice("Talk after", &[(Harmony, 3), (Loyalty, 1)], Some("ci2b")),
                ],
            ),
            question(
                "ci2a",
                Phase::Instinct,
                "Afterward they ask you to smooth it over to keep peace. Do you?",
                Some(5),
                vec![
                    choice("Smooth it", &[(Compassion, 2), (Harmony, 2)], Some("ci3")),
                    choice("Hold the line", &[(Justice, 2), (Honesty, 2)], Some("ci3")),
                ],
            ),
            question(
                "ci2b",
                Phase::Instinct,
                "They ask you to cover again next time to avoid tension. Agree?",
                Some(5),
                vec![
                    choice("Agree once", &[(Loyalty, 2), (Compassion, 1)], Some("ci3")),
                    choice("Say no", &[(Honesty, 3), (Security, 1)], Some("ci3")),
                ],
            ),
            question(
                "ci3",
                Phase::Instinct,
                "A rival team offers a bigger role and fast track. Do you leave?",
                Some(5),
                vec![
                    choice("Take the leap", &[(Ambition, 3), (Freedom, 2)], Some("ci4a")),
                    choice("Stay put", &[(Loyalty, 2), (Security, 2)], Some("ci4b")),
                ],
            ),
            question(
                "ci4a",
                Phase::Instinct,
                "The new role means long hours and constant travel. Accept it?",
                Some(5),
                vec![
                    choice("Accept and push", &[(Ambition, 3), (Security, 1)], Some("ci5")),
                    choice("Set boundaries", &[(Harmony, 2), (Freedom, 2)], Some("ci5")),
                ],
            ),
            question(
                "ci4b",
                Phase::Instinct,
                "Your team is stalled and leadership avoids change. Push a reset?",
                Some(5),
                vec![
                    choice("Push change", &[(Ambition, 2), (Justice, 2)], Some("ci5")),
                    choice("Keep stability", &[(Security, 3), (Harmony, 1)], Some("ci5")),
                ],
            ),
            question(
                "ci5",
                Phase::Instinct,
                "A peer is slipping and the team feels it. Are you direct?",
                Some(5),
                vec![
                    choice("Be direct", &[(Honesty, 3), (Justice, 1)], None),
                    choice("Coach gently", &[(Compassion, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn career_tradeoff() -> QuestionGraph {
    graph(
        "ct1",
        5,
        vec![
            question(
                "ct1",
                Phase::Tradeoff,
                "You can take a stable role or join a risky startup. Which do you choose?",
                None,
                vec![
                    choice("Stable role", &[(Security, 3), (Harmony, 1)], Some("ct2a")),
                    choice("Risky startup", &[(Ambition, 3), (Freedom, 2)], Some("ct2b")),
                ],
            ),
            question(
                "ct2a",
                Phase::Tradeoff,
                "A policy hurts a small group on your team. Challenge it openly?",
                None,
                vec![
                    choice("Challenge it", &[(Justice, 3), (Honesty, 1)], Some("ct3")),
                    choice("Work within", &[(Loyalty, 2), (Harmony, 2)], Some("ct3")),
                ],
            ),
            question(
                "ct2b",
                Phase::Tradeoff,
                "A partner cuts corners to ship on time. Do you stop them?",
                None,
                vec![
                    choice("Stop them", &[(Honesty, 3), (Justice, 1)], Some("ct3")),
                    choice("Let it slide", &[(Ambition, 3), (Freedom, 1)], Some("ct3")),
                ],
            ),
            question(
                "ct3",
                Phase::Tradeoff,
                "You can pick a strict mentor or a supportive one. Which do you choose?",
                None,
                vec![
                    choice("Strict mentor", &[(Ambition, 2), (Security, 2)], Some("ct4a")),
                    choice("Supportive mentor", &[(Compassion, 2), (Harmony, 2)], Some("ct4b")),
                ],
            ),
            question(
                "ct4a",
                Phase::Tradeoff,
                "Your mentor asks you to relocate for opportunity. Do you go?",
                None,
                vec![
                    choice("Relocate", &[(Freedom, 2), (Ambition, 2)], Some("ct5")),
                    choice("Decline", &[(Loyalty, 2), (Security, 2)], Some("ct5")),
                ],
            ),
            question(
                "ct4b",
                Phase::Tradeoff,
                "Your coach urges you to slow down to avoid burnout. Do you?",
                None,
                vec![
                    choice("Slow down", &[(Harmony, 2), (Security, 2)], Some("ct5")),
                    choice("Keep pace", &[(Ambition, 3), (Freedom, 1)], Some("ct5")),
                ],
            ),
            question(
                "ct5",
                Phase::Tradeoff,
                "For the next decade, do you trade balance for influence?",
                None,
                vec![
                    choice("Influence", &[(Ambition, 3), (Justice, 1)], None),
                    choice("Balance", &[(Harmony, 3), (Compassion, 1)], None),
                ],
            ),
        ],
    )
}

fn career_deep() -> QuestionGraph {
    graph(
        "cd1",
        5,
        vec![
            question(
                "cd1",
                Phase::Deep,
                "You discover your product harms users in edge cases. Pause the launch?",
                None,
                vec![
                    choice("Pause now", &[(Compassion, 3), (Justice, 2)], Some("cd2a")),
                    choice("Ship and fix", &[(Ambition, 3), (Security, 1)], Some("cd2b")),
                ],
            ),
            question(
                "cd2a",
                Phase::Deep,
                "Leadership blames you for the delay. Do you take the hit?",
                None,
                vec![
                    choice("Take blame", &[(Honesty, 3), (Justice, 1)], Some("cd3")),
                    choice("Share blame", &[(Loyalty, 2), (Harmony, 2)], Some("cd3")),
                ],
            ),
            question(
                "cd2b",
                Phase::Deep,
                "A whistleblower plans to leak details. Do you join them?",
                None,
                vec![
                    choice("Join the leak", &[(Honesty, 3), (Freedom, 1)], Some("cd3")),
                    choice("Ask for time", &[(Loyalty, 2), (Security, 2)], Some("cd3")),
                ],
            ),
            question(
                "cd3",
                Phase::Deep,
                "A rival offers to buy and shelve your work. Accept?",
                None,
                vec![
                    choice("Accept", &[(Security, 3), (Loyalty, 1)], Some("cd4a")),
                    choice("Refuse", &[(Honesty, 3), (Freedom, 1)], Some("cd4b")),
                ],
            ),
            question(
                "cd4a",
                Phase::Deep,
                "Selling saves jobs but ends the mission. Do you do it?",
                None,
                vec![
                    choice("Save jobs", &[(Compassion, 3), (Security, 1)], Some("cd5")),
                    choice("Protect mission", &[(Ambition, 2), (Freedom, 2)], Some("cd5")),
                ],
            ),
            question(
                "cd4b",
                Phase::Deep,
                "Refusing risks closure. Do you ask staff to take cuts?",
                None,
                vec![
                    choice("Ask for cuts", &[(Loyalty, 2), (Justice, 1)], Some("cd5")),
                    choice("Close down", &[(Honesty, 2), (Security, 2)], Some("cd5")),
                ],
            ),
            question(
                "cd5",
                Phase::Deep,
                "You are offered a powerful role that limits autonomy. Take it?",
                None,
                vec![
                    choice("Take role", &[(Ambition, 2), (Justice, 1)], None),
                    choice("Decline", &[(Freedom, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn relationships_instinct() -> QuestionGraph {
    graph(
        "ri1",
        5,
        vec![
            question(
                "ri1",
                Phase::Instinct,
                "A friend lies to your partner about you. Do you tell them?",
                Some(5),
                vec![
                    choice("Tell partner", &[(Honesty, 3), (Justice, 1)], Some("ri2a")),
                    choice("Confront friend", &[(Loyalty, 2), (Harmony, 2)], Some("ri2b")),
                ],
            ),
            question(
                "ri2a",
                Phase::Instinct,
                "Your friend asks you to stay quiet for now. Do you?",
                Some(5),
                vec![
                    choice("Stay quiet", &[(Loyalty, 2), (Compassion, 1)], Some("ri3")),
                    choice("Still tell", &[(Honesty, 3), (Justice, 1)], Some("ri3")),
                ],
            ),
            question(
                "ri2b",
                Phase::Instinct,
                "Your friend admits it and wants time to fix it. Give it?",
                Some(5),
                vec![
                    choice("Give time", &[(Compassion, 3), (Harmony, 1)], Some("ri3")),
                    choice("Tell now", &[(Honesty, 3), (Justice, 1)], Some("ri3")),
                ],
            ),
            question(
                "ri3",
                Phase::Instinct,
                "Same night: family dinner or a key work event. Which do you choose?",
                Some(5),
                vec![
                    choice("Family dinner", &[(Loyalty, 3), (Harmony, 1)], Some("ri4a")),
                    choice("Work event", &[(Ambition, 2), (Freedom, 2)], Some("ri4b")),
                ],
            ),
            question(
                "ri4a",
                Phase::Instinct,
                "Your family asks for long-term help. Do you commit?",
                Some(5),
                vec![
                    choice("Commit", &[(Loyalty, 3), (Security, 1)], Some("ri5")),
                    choice("Set limits", &[(Freedom, 2), (Honesty, 2)], Some("ri5")),
                ],
            ),
            question(
                "ri4b",
                Phase::Instinct,
                "Your partner is upset about the event. Do you still go?",
                Some(5),
                vec![
                    choice("Go anyway", &[(Ambition, 3), (Freedom, 1)], Some("ri5")),
                    choice("Stay with them", &[(Compassion, 2), (Harmony, 2)], Some("ri5")),
                ],
            ),
            question(
                "ri5",
                Phase::Instinct,
                "A friend asks for blunt feedback about them. Do you give it?",
                Some(5),
                vec![
                    choice("Be blunt", &[(Honesty, 3), (Justice, 1)], None),
                    choice("Be gentle", &[(Compassion, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn relationships_tradeoff() -> QuestionGraph {
    graph(
        "rt1",
        5,
        vec![
            question(
                "rt1",
                Phase::Tradeoff,
                "Your partner gets a dream job elsewhere. Move or keep your job?",
                None,
                vec![
                    choice("Move", &[(Loyalty, 3), (Compassion, 1)], Some("rt2a")),
                    choice("Keep job", &[(Ambition, 2), (Freedom, 2)], Some("rt2b")),
                ],
            ),
            question(
                "rt2a",
                Phase::Tradeoff,
                "The new city feels isolating. Build a new circle fast?",
                None,
                vec![
                    choice("Build fast", &[(Harmony, 2), (Freedom, 1)], Some("rt3")),
                    choice("Stick to old ties", &[(Loyalty, 2), (Security, 2)], Some("rt3")),
                ],
            ),
            question(
                "rt2b",
                Phase::Tradeoff,
                "Your partner feels unsupported lately. Do you cut back work?",
                None,
                vec![
                    choice("Cut back", &[(Compassion, 3), (Harmony, 1)], Some("rt3")),
                    choice("Hold pace", &[(Ambition, 3), (Security, 1)], Some("rt3")),
                ],
            ),
            question(
                "rt3",
                Phase::Tradeoff,
                "You move in together. Keep money joint or separate?",
                None,
                vec![
                    choice("Joint", &[(Security, 3), (Loyalty, 1)], Some("rt4a")),
                    choice("Separate", &[(Freedom, 3), (Honesty, 1)], Some("rt4b")),
                ],
            ),
            question(
                "rt4a",
                Phase::Tradeoff,
                "Your partner buys something big without asking. Confront them?",
                None,
                vec![
                    choice("Confront", &[(Justice, 2), (Honesty, 2)], Some("rt5")),
                    choice("Let it go", &[(Harmony, 3), (Compassion, 1)], Some("rt5")),
                ],
            ),
            question(
                "rt4b",
                Phase::Tradeoff,
                "Your partner wants full transparency about spending. Agree?",
                None,
                vec![
                    choice("Agree", &[(Honesty, 3), (Harmony, 1)], Some("rt5")),
                    choice("Keep privacy", &[(Freedom, 3), (Security, 1)], Some("rt5")),
                ],
            ),
            question(
                "rt5",
                Phase::Tradeoff,
                "In love, do you want stability or spontaneity?",
                None,
                vec![
                    choice("Stability", &[(Security, 3), (Loyalty, 1)], None),
                    choice("Spontaneity", &[(Freedom, 3), (Ambition, 1)], None),
                ],
            ),
        ],
    )
}

fn relationships_deep() -> QuestionGraph {
    graph(
        "rd1",
        5,
        vec![
            question(
                "rd1",
                Phase::Deep,
                "You learn a friend hurt someone long ago. Do you confront them?",
                None,
                vec![
                    choice("Confront", &[(Justice, 3), (Honesty, 1)], Some("rd2a")),
                    choice("Keep peace", &[(Loyalty, 2), (Harmony, 2)], Some("rd2b")),
                ],
            ),
            question(
                "rd2a",
                Phase::Deep,
                "They deny it and seem hurt. Do you drop it?",
                None,
                vec![
                    choice("Drop it", &[(Compassion, 3), (Harmony, 1)], Some("rd3")),
                    choice("Press for truth", &[(Honesty, 3), (Justice, 1)], Some("rd3")),
                ],
            ),
            question(
                "rd2b",
                Phase::Deep,
                "The victim asks you what you know. Do you tell them?",
                None,
                vec![
                    choice("Tell them", &[(Honesty, 3), (Justice, 1)], Some("rd3")),
                    choice("Protect friend", &[(Loyalty, 3), (Security, 1)], Some("rd3")),
                ],
            ),
            question(
                "rd3",
                Phase::Deep,
                "A loved one asks you to break a rule for them. Do you?",
                None,
                vec![
                    choice("Break it", &[(Loyalty, 2), (Compassion, 2)], Some("rd4a")),
                    choice("Refuse", &[(Honesty, 3), (Justice, 1)], Some("rd4b")),
                ],
            ),
            question(
                "rd4a",
                Phase::Deep,
                "Breaking it would harm a stranger. Do you continue?",
                None,
                vec![
                    choice("Continue", &[(Loyalty, 2), (Security, 1)], Some("rd5")),
                    choice("Stop", &[(Justice, 2), (Compassion, 2)], Some("rd5")),
                ],
            ),
            question(
                "rd4b",
                Phase::Deep,
                "Refusing strains the bond. Do you explain fully?",
                None,
                vec![
                    choice("Explain fully", &[(Honesty, 2), (Harmony, 2)], Some("rd5")),
                    choice("Keep it brief", &[(Security, 2), (Freedom, 1)], Some("rd5")),
                ],
            ),
            question(
                "rd5",
                Phase::Deep,
                "If forced to choose, do you pick truth or kindness?",
                None,
                vec![
                    choice("Truth", &[(Honesty, 3), (Justice, 1)], None),
                    choice("Kindness", &[(Compassion, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn health_instinct() -> QuestionGraph {
    graph(
        "hi1",
        5,
        vec![
            question(
                "hi1",
                Phase::Instinct,
                "You are short on sleep but work needs you. Keep pushing?",
                Some(5),
                vec![
                    choice("Keep pushing", &[(Ambition, 3), (Security, 1)], Some("hi2a")),
                    choice("Protect sleep", &[(Security, 3), (Harmony, 1)], Some("hi2b")),
                ],
            ),
            question(
                "hi2a",
                Phase::Instinct,
                "You feel burned out but deadlines loom. Tell your boss?",
                Some(5),
                vec![
                    choice("Tell them", &[(Honesty, 3), (Harmony, 1)], Some("hi3")),
                    choice("Power through", &[(Ambition, 3), (Freedom, 1)], Some("hi3")),
                ],
            ),
            question(
                "hi2b",
                Phase::Instinct,
                "Friends want you out late before a big day. Go?",
                Some(5),
                vec![
                    choice("Go anyway", &[(Freedom, 2), (Harmony, 1)], Some("hi3")),
                    choice("Decline to rest", &[(Security, 3), (Loyalty, 1)], Some("hi3")),
                ],
            ),
            question(
                "hi3",
                Phase::Instinct,
                "A risky treatment offers big upside. Do you try it?",
                Some(5),
                vec![
                    choice("Take the risk", &[(Freedom, 3), (Ambition, 1)], Some("hi4a")),
                    choice("Choose safe plan", &[(Security, 3), (Harmony, 1)], Some("hi4b")),
                ],
            ),
            question(
                "hi4a",
                Phase::Instinct,
                "The risky plan disrupts family plans. Continue anyway?",
                Some(5),
                vec![
                    choice("Continue", &[(Ambition, 2), (Freedom, 2)], Some("hi5")),
                    choice("Pause for family", &[(Loyalty, 2), (Harmony, 2)], Some("hi5")),
                ],
            ),
            question(
                "hi4b",
                Phase::Instinct,
                "The safe plan is slow. Add a strict routine?",
                Some(5),
                vec![
                    choice("Add routine", &[(Security, 2), (Justice, 1)], Some("hi5")),
                    choice("Keep it flexible", &[(Freedom, 2), (Compassion, 1)], Some("hi5")),
                ],
            ),
            question(
                "hi5",
                Phase::Instinct,
                "A coach says to push past pain. Do you?",
                Some(5),
                vec![
                    choice("Push", &[(Ambition, 2), (Security, 1)], None),
                    choice("Stop", &[(Compassion, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn health_tradeoff() -> QuestionGraph {
    graph(
        "ht1",
        5,
        vec![
            question(
                "ht1",
                Phase::Tradeoff,
                "Do you choose a strict diet or balanced treats?",
                None,
                vec![
                    choice("Strict diet", &[(Security, 3), (Ambition, 1)], Some("ht2a")),
                    choice("Balanced treats", &[(Harmony, 3), (Freedom, 1)], Some("ht2b")),
                ],
            ),
            question(
                "ht2a",
                Phase::Tradeoff,
                "The strict plan hurts social life. Keep it?",
                None,
                vec![
                    choice("Keep it", &[(Security, 3), (Loyalty, 1)], Some("ht3")),
                    choice("Loosen it", &[(Freedom, 2), (Harmony, 2)], Some("ht3")),
                ],
            ),
            question(
                "ht2b",
                Phase::Tradeoff,
                "The balanced plan slows progress. Intensify it?",
                None,
                vec![
                    choice("Intensify", &[(Ambition, 3), (Justice, 1)], Some("ht3")),
                    choice("Stay balanced", &[(Harmony, 3), (Compassion, 1)], Some("ht3")),
                ],
            ),
            question(
                "ht3",
                Phase::Tradeoff,
                "Do you prefer solo training or a group class?",
                None,
                vec![
                    choice("Solo", &[(Freedom, 3), (Ambition, 1)], Some("ht4a")),
                    choice("Group", &[(Harmony, 3), (Loyalty, 1)], Some("ht4b")),
                ],
            ),
            question(
                "ht4a",
                Phase::Tradeoff,
                "Solo training feels isolating. Join a team?",
                None,
                vec![
                    choice("Join team", &[(Loyalty, 2), (Harmony, 2)], Some("ht5")),
                    choice("Stay solo", &[(Freedom, 3), (Security, 1)], Some("ht5")),
                ],
            ),
            question(
                "ht4b",
                Phase::Tradeoff,
                "The group pushes past limits. Set boundaries?",
                None,
                vec![
                    choice("Set boundaries", &[(Honesty, 2), (Security, 2)], Some("ht5")),
                    choice("Go with group", &[(Harmony, 2), (Loyalty, 2)], Some("ht5")),
                ],
            ),
            question(
                "ht5",
                Phase::Tradeoff,
                "Would you trade comfort for peak health?",
                None,
                vec![
                    choice("Trade comfort", &[(Ambition, 2), (Freedom, 1)], None),
                    choice("Keep comfort", &[(Security, 3), (Compassion, 1)], None),
                ],
            ),
        ],
    )
}

fn health_deep() -> QuestionGraph {
    graph(
        "hd1",
        5,
        vec![
            question(
                "hd1",
                Phase::Deep,
                "A doctor offers a risky trial with unknown outcomes. Join?",
                None,
                vec![
                    choice("Join", &[(Freedom, 3), (Ambition, 1)], Some("hd2a")),
                    choice("Decline", &[(Security, 3), (Harmony, 1)], Some("hd2b")),
                ],
            ),
            question(
                "hd2a",
                Phase::Deep,
                "The trial could help future patients. Share your data?",
                None,
                vec![
                    choice("Share data", &[(Justice, 2), (Compassion, 2)], Some("hd3")),
                    choice("Keep private", &[(Freedom, 2), (Security, 2)], Some("hd3")),
                ],
            ),
            question(
                "hd2b",
                Phase::Deep,
                "Care is costly for your family. Downsize plans?",
                None,
                vec![
                    choice("Downsize", &[(Loyalty, 2), (Compassion, 2)], Some("hd3")),
                    choice("Protect plans", &[(Ambition, 2), (Freedom, 1)], Some("hd3")),
                ],
            ),
            question(
                "hd3",
                Phase::Deep,
                "Do you push through pain to hit a goal?",
                None,
                vec![
                    choice("Push through", &[(Ambition, 3), (Security, 1)], Some("hd4a")),
                    choice("Stop and recover", &[(Compassion, 3), (Harmony, 1)], Some("hd4b")),
                ],
            ),
            question(
                "hd4a",
                Phase::Deep,
                "Pushing risks long-term harm. Do it anyway?",
                None,
                vec![
                    choice("Still push", &[(Ambition, 2), (Freedom, 2)], Some("hd5")),
                    choice("Back off", &[(Security, 2), (Honesty, 1)], Some("hd5")),
                ],
            ),
            question(
                "hd4b",
                Phase::Deep,
                "Resting means missing a chance. Accept it?",
                None,
                vec![
                    choice("Accept it", &[(Harmony, 2), (Security, 2)], Some("hd5")),
                    choice("Reschedule anyway", &[(Ambition, 2), (Honesty, 1)], Some("hd5")),
                ],
            ),
            question(
                "hd5",
                Phase::Deep,
                "In a crisis, do you choose health or duty?",
                None,
                vec![
                    choice("Health first", &[(Security, 3), (Compassion, 1)], None),
                    choice("Duty first", &[(Loyalty, 2), (Justice, 1)], None),
                ],
            ),
        ],
    )
}

fn adventure_instinct() -> QuestionGraph {
    graph(
        "ai1",
        5,
        vec![
            question(
                "ai1",
                Phase::Instinct,
                "A friend offers a last-minute trip with no plan. Go?",
                Some(5),
                vec![
                    choice("Go now", &[(Freedom, 3), (Ambition, 1)], Some("ai2a")),
                    choice("Decline", &[(Security, 3), (Harmony, 1)], Some("ai2b")),
                ],
            ),
            question(
                "ai2a",
                Phase::Instinct,
                "The trip clashes with a family event. Still go?",
                Some(5),
                vec![
                    choice("Go anyway", &[(Freedom, 3), (Ambition, 1)], Some("ai3")),
                    choice("Stay for family", &[(Loyalty, 3), (Harmony, 1)], Some("ai3")),
                ],
            ),
            question(
                "ai2b",
                Phase::Instinct,
                "You say no but feel stuck. Plan a big trip?",
                Some(5),
                vec![
                    choice("Plan a big trip", &[(Ambition, 2), (Freedom, 2)], Some("ai3")),
                    choice("Keep routines", &[(Security, 3), (Harmony, 1)], Some("ai3")),
                ],
            ),
            question(
                "ai3",
                Phase::Instinct,
                "Do you explore solo or with a group?",
                Some(5),
                vec![
                    choice("Solo", &[(Freedom, 3), (Honesty, 1)], Some("ai4a")),
                    choice("Group", &[(Harmony, 3), (Loyalty, 1)], Some("ai4b")),
                ],
            ),
            question(
                "ai4a",
                Phase::Instinct,
                "The solo route is risky but rewarding. Take it?",
                Some(5),
                vec![
                    choice("Take the risk", &[(Freedom, 3), (Ambition, 1)], Some("ai5")),
                    choice("Choose safer path", &[(Security, 3), (Compassion, 1)], Some("ai5")),
                ],
            ),
            question(
                "ai4b",
                Phase::Instinct,
                "The group wants to ignore a local rule. Push back?",
                Some(5),
                vec![
                    choice("Push back", &[(Justice, 2), (Honesty, 2)], Some("ai5")),
                    choice("Go along", &[(Loyalty, 2), (Harmony, 2)], Some("ai5")),
                ],
            ),
            question(
                "ai5",
                Phase::Instinct,
                "While traveling, do you share your location with family?",
                Some(5),
                vec![
                    choice("Share it", &[(Security, 2), (Compassion, 2)], None),
                    choice("Keep it private", &[(Freedom, 3), (Honesty, 1)], None),
                ],
            ),
        ],
    )
}

fn adventure_tradeoff() -> QuestionGraph {
    graph(
        "at1",
        5,
        vec![
            question(
                "at1",
                Phase::Tradeoff,
                "Do you prefer a planned itinerary or open-ended travel?",
                None,
                vec![
                    choice("Planned", &[(Security, 3), (Harmony, 1)], Some("at2a")),
                    choice("Open-ended", &[(Freedom, 3), (Ambition, 1)], Some("at2b")),
                ],
            ),
            question(
                "at2a",
                Phase::Tradeoff,
                "A plan blocks a chance encounter. Break the plan?",
                None,
                vec![
                    choice("Break plan", &[(Freedom, 2), (Compassion, 2)], Some("at3")),
                    choice("Stick to plan", &[(Security, 3), (Loyalty, 1)], Some("at3")),
                ],
            ),
            question(
                "at2b",
                Phase::Tradeoff,
                "Open-ended travel busts your budget. Cut the trip short?",
                None,
                vec![
                    choice("Cut short", &[(Security, 3), (Honesty, 1)], Some("at3")),
                    choice("Extend anyway", &[(Ambition, 2), (Freedom, 2)], Some("at3")),
                ],
            ),
            question(
                "at3",
                Phase::Tradeoff,
                "On a trip, do you lead the group or follow?",
                None,
                vec![
                    choice("Lead", &[(Ambition, 2), (Justice, 1)], Some("at4a")),
                    choice("Follow", &[(Harmony, 2), (Loyalty, 2)], Some("at4b")),
                ],
            ),
            question(
                "at4a",
                Phase::Tradeoff,
                "Leading raises risk for others. Accept it?",
                None,
                vec![
                    choice("Accept risk", &[(Justice, 2), (Security, 2)], Some("at5")),
                    choice("Step back", &[(Harmony, 2), (Compassion, 2)], Some("at5")),
                ],
            ),
            question(
                "at4b",
                Phase::Tradeoff,
                "The leader ignores safety advice. Speak up?",
                None,
                vec![
                    choice("Speak up", &[(Honesty, 3), (Justice, 1)], Some("at5")),
                    choice("Go with it", &[(Loyalty, 2), (Security, 1)], Some("at5")),
                ],
            ),
            question(
                "at5",
                Phase::Tradeoff,
                "Do you trade comfort for discovery?",
                None,
                vec![
                    choice("Discovery", &[(Freedom, 3), (Ambition, 1)], None),
                    choice("Comfort", &[(Security, 3), (Harmony, 1)], None),
                ],
            ),
        ],
    )
}

fn adventure_deep() -> QuestionGraph {
    graph(
        "ad1",
        5,
        vec![
            question(
                "ad1",
                Phase::Deep,
                "You find an untouched place. Share its location with others?",
                None,
                vec![
                    choice("Share it", &[(Ambition, 2), (Freedom, 2)], Some("ad2a")),
                    choice("Keep it secret", &[(Security, 2), (Compassion, 2)], Some("ad2b")),
                ],
            ),
            question(
                "ad2a",
                Phase::Deep,
                "Sharing damages the place. Apologize publicly?",
                None,
                vec![
                    choice("Apologize", &[(Honesty, 3), (Justice, 1)], Some("ad3")),
                    choice("Leave it up", &[(Ambition, 2), (Freedom, 1)], Some("ad3")),
                ],
            ),
            question(
                "ad2b",
                Phase::Deep,
                "You could profit by guiding tours there. Do it?",
                None,
                vec![
                    choice("Run tours", &[(Ambition, 3), (Security, 1)], Some("ad3")),
                    choice("Refuse", &[(Loyalty, 2), (Harmony, 2)], Some("ad3")),
                ],
            ),
            question(
                "ad3",
                Phase::Deep,
                "A risky rescue needs volunteers. Do you go?",
                None,
                vec![
                    choice("Go", &[(Compassion, 3), (Justice, 1)], Some("ad4a")),
                    choice("Stay back", &[(Security, 3), (Honesty, 1)], Some("ad4b")),
                ],
            ),
            question(
                "ad4a",
                Phase::Deep,
                "The rescue ends your trip. Continue anyway?",
                None,
                vec![
                    choice("Continue rescue", &[(Compassion, 2), (Loyalty, 2)], Some("ad5")),
                    choice("Return to plan", &[(Ambition, 2), (Freedom, 2)], Some("ad5")),
                ],
            ),
            question(
                "ad4b",
                Phase::Deep,
                "Staying back brings guilt. Donate resources?",
                None,
                vec![
                    choice("Donate", &[(Compassion, 2), (Justice, 1)], Some("ad5")),
                    choice("Keep resources", &[(Security, 2), (Freedom, 1)], Some("ad5")),
                ],
            ),
            question(
                "ad5",
                Phase::Deep,
                "Long term, do you choose freedom or responsibility?",
                None,
                vec![
                    choice("Freedom", &[(Freedom, 3), (Ambition, 1)], None),
                    choice("Responsibility", &[(Loyalty, 2), (Security, 2)], None),
                ],
            ),
        ],
    )
}
