#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    pub description: &'static str,
    /// Token stored in the answers map and sent with the lead.
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

pub static QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        id: "primary_goal",
        prompt: "What matters most to you right now?",
        options: &[
            QuizOption {
                label: "Protect my family",
                description: "Make sure the people I love are covered if something happens to me.",
                value: "protect_family",
            },
            QuizOption {
                label: "Build wealth",
                description: "Grow savings with tax-advantaged strategies.",
                value: "build_wealth",
            },
            QuizOption {
                label: "Plan for retirement",
                description: "Create income I can't outlive.",
                value: "retirement_income",
            },
            QuizOption {
                label: "Leave a legacy",
                description: "Pass something meaningful on to the next generation.",
                value: "legacy",
            },
        ],
    },
    QuizQuestion {
        id: "current_coverage",
        prompt: "Do you have life insurance today?",
        options: &[
            QuizOption {
                label: "Yes, through work",
                description: "Group coverage from my employer only.",
                value: "employer_only",
            },
            QuizOption {
                label: "Yes, my own policy",
                description: "A personal term or permanent policy.",
                value: "personal_policy",
            },
            QuizOption {
                label: "No coverage",
                description: "I don't have any life insurance yet.",
                value: "none",
            },
            QuizOption {
                label: "Not sure",
                description: "I'd need to check what I have.",
                value: "unsure",
            },
        ],
    },
    QuizQuestion {
        id: "dependents",
        prompt: "Who depends on your income?",
        options: &[
            QuizOption {
                label: "Just me",
                description: "No one relies on my income.",
                value: "none",
            },
            QuizOption {
                label: "Spouse or partner",
                description: "Someone shares household expenses with me.",
                value: "partner",
            },
            QuizOption {
                label: "Children",
                description: "I have kids at home or in school.",
                value: "children",
            },
            QuizOption {
                label: "Parents or relatives",
                description: "I help support family members.",
                value: "extended_family",
            },
        ],
    },
    QuizQuestion {
        id: "timeline",
        prompt: "When would you like to have a plan in place?",
        options: &[
            QuizOption {
                label: "As soon as possible",
                description: "I'm ready to talk this week.",
                value: "immediately",
            },
            QuizOption {
                label: "Within 3 months",
                description: "It's on my list for this quarter.",
                value: "three_months",
            },
            QuizOption {
                label: "This year",
                description: "I'm planning ahead.",
                value: "this_year",
            },
            QuizOption {
                label: "Just exploring",
                description: "I want to learn my options first.",
                value: "exploring",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn question_ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn every_question_offers_distinct_values() {
        for question in QUESTIONS.iter() {
            assert!(!question.options.is_empty(), "{} has no options", question.id);
            let values: HashSet<_> = question.options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), question.options.len(), "{}", question.id);
        }
    }
}
