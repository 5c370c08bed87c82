use super::super::scoring::Recommendation;
use super::views::{Insights, ScoreBreakdown};

const STRENGTH_THRESHOLD: u8 = 80;
const IMPROVEMENT_THRESHOLD: u8 = 70;
const PERSONALITY_THRESHOLD: u8 = 85;

const DEFAULT_PERSONALITY: &str = "Balanced professional";

pub(crate) fn generate_insights(scores: &ScoreBreakdown) -> Insights {
    let mut strengths = Vec::new();
    if scores.wiscar.will >= STRENGTH_THRESHOLD {
        strengths.push("Strong motivation and drive".to_string());
    }
    if scores.wiscar.interest >= STRENGTH_THRESHOLD {
        strengths.push("Genuine interest in support operations".to_string());
    }
    if scores.technical_readiness >= STRENGTH_THRESHOLD {
        strengths.push("Solid technical foundation".to_string());
    }
    if scores.wiscar.cognitive >= STRENGTH_THRESHOLD {
        strengths.push("Excellent analytical thinking".to_string());
    }

    let mut improvements = Vec::new();
    if scores.technical_readiness < IMPROVEMENT_THRESHOLD {
        improvements.push("Technical skills and tool familiarity".to_string());
    }
    if scores.wiscar.skill < IMPROVEMENT_THRESHOLD {
        improvements.push("Hands-on experience with support tools".to_string());
    }
    if scores.psychological_fit < IMPROVEMENT_THRESHOLD {
        improvements.push("Organizational and detail-oriented skills".to_string());
    }

    Insights {
        strengths,
        improvements,
        personality: personality_label(scores).to_string(),
    }
}

/// Checks run in order and a later match overwrites an earlier one, so interest wins ties.
pub(crate) fn personality_label(scores: &ScoreBreakdown) -> &'static str {
    let mut personality = DEFAULT_PERSONALITY;
    if scores.psychological_fit >= PERSONALITY_THRESHOLD {
        personality = "Highly organized and detail-oriented";
    }
    if scores.wiscar.interest >= PERSONALITY_THRESHOLD {
        personality = "Passionate about operational excellence";
    }
    personality
}

pub(crate) fn skill_gaps(scores: &ScoreBreakdown) -> Vec<String> {
    let mut gaps = Vec::new();
    if scores.technical_readiness < IMPROVEMENT_THRESHOLD {
        gaps.push("CRM and ticketing system proficiency".to_string());
        gaps.push("Data analysis and reporting skills".to_string());
    }
    if scores.wiscar.skill < IMPROVEMENT_THRESHOLD {
        gaps.push("Process optimization techniques".to_string());
    }
    if scores.psychological_fit < IMPROVEMENT_THRESHOLD {
        gaps.push("Project coordination and time management".to_string());
    }
    gaps
}

pub(crate) fn next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps: [&str; 3] = match recommendation {
        Recommendation::Yes => [
            "Apply for Support Operations Coordinator positions",
            "Highlight your analytical and organizational strengths",
            "Consider obtaining ITIL certification",
        ],
        Recommendation::Maybe => [
            "Complete CRM training course (Salesforce/Zendesk)",
            "Practice with support metrics and KPI analysis",
            "Gain experience through internships or volunteer projects",
        ],
        Recommendation::No => [
            "Focus on developing organizational and analytical skills",
            "Consider entry-level customer support roles first",
            "Build familiarity with basic support tools",
        ],
    };
    steps.iter().map(|step| step.to_string()).collect()
}

pub(crate) fn career_matches(recommendation: Recommendation) -> Vec<String> {
    let roles: [&str; 4] = match recommendation {
        Recommendation::Yes => [
            "Support Operations Coordinator",
            "Customer Success Operations Specialist",
            "Service Delivery Manager",
            "CRM Administrator",
        ],
        Recommendation::Maybe => [
            "Junior Support Operations Coordinator",
            "Customer Support Specialist",
            "Data Entry Specialist",
            "Process Improvement Assistant",
        ],
        Recommendation::No => [
            "Customer Support Representative",
            "Administrative Assistant",
            "Data Entry Clerk",
            "Junior Business Analyst",
        ],
    };
    roles.iter().map(|role| role.to_string()).collect()
}

/// Only a NO verdict comes with alternative paths.
pub(crate) fn alternative_paths(recommendation: Recommendation) -> Vec<String> {
    match recommendation {
        Recommendation::No => [
            "Customer Support Representative",
            "Office Administrator",
            "Data Entry Specialist",
            "Junior Project Coordinator",
        ]
        .iter()
        .map(|path| path.to_string())
        .collect(),
        Recommendation::Yes | Recommendation::Maybe => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::report::views::WiscarScores;

    fn breakdown(psychological_fit: u8, technical_readiness: u8, wiscar: u8) -> ScoreBreakdown {
        ScoreBreakdown {
            psychological_fit,
            technical_readiness,
            wiscar: WiscarScores {
                will: wiscar,
                interest: wiscar,
                skill: wiscar,
                cognitive: wiscar,
                ability_to_learn: wiscar,
                real_world_alignment: wiscar,
            },
            confidence_score: 75,
        }
    }

    #[test]
    fn strengths_start_at_eighty() {
        let insights = generate_insights(&breakdown(75, 80, 80));
        assert_eq!(
            insights.strengths,
            vec![
                "Strong motivation and drive",
                "Genuine interest in support operations",
                "Solid technical foundation",
                "Excellent analytical thinking",
            ]
        );

        let insights = generate_insights(&breakdown(75, 79, 79));
        assert!(insights.strengths.is_empty());
    }

    #[test]
    fn improvements_and_gaps_start_below_seventy() {
        let scores = breakdown(70, 70, 70);
        assert!(generate_insights(&scores).improvements.is_empty());
        assert!(skill_gaps(&scores).is_empty());

        let scores = breakdown(69, 69, 69);
        assert_eq!(
            generate_insights(&scores).improvements,
            vec![
                "Technical skills and tool familiarity",
                "Hands-on experience with support tools",
                "Organizational and detail-oriented skills",
            ]
        );
        assert_eq!(
            skill_gaps(&scores),
            vec![
                "CRM and ticketing system proficiency",
                "Data analysis and reporting skills",
                "Process optimization techniques",
                "Project coordination and time management",
            ]
        );
    }

    #[test]
    fn personality_thresholds_are_inclusive_at_eighty_five() {
        assert_eq!(personality_label(&breakdown(84, 75, 84)), DEFAULT_PERSONALITY);
        assert_eq!(
            personality_label(&breakdown(85, 75, 84)),
            "Highly organized and detail-oriented"
        );

        let mut scores = breakdown(84, 75, 75);
        scores.wiscar.interest = 85;
        assert_eq!(
            personality_label(&scores),
            "Passionate about operational excellence"
        );
    }

    #[test]
    fn maybe_tier_lists() {
        assert_eq!(
            next_steps(Recommendation::Maybe),
            vec![
                "Complete CRM training course (Salesforce/Zendesk)",
                "Practice with support metrics and KPI analysis",
                "Gain experience through internships or volunteer projects",
            ]
        );
        assert_eq!(
            career_matches(Recommendation::Maybe),
            vec![
                "Junior Support Operations Coordinator",
                "Customer Support Specialist",
                "Data Entry Specialist",
                "Process Improvement Assistant",
            ]
        );
        assert!(alternative_paths(Recommendation::Maybe).is_empty());
    }
}
