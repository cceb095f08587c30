//! The static step graph and the standard car-preference catalog.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::answer::Answers;
use super::errors::QuestionnaireError;
use super::step::{BranchRule, Condition, InputKind, NextStep, QuestionStep, StepId};

/// An immutable, validated graph of question steps.
///
/// The first step in the list is the entry point. Successors are computed
/// by [`StepGraph::next_step`], a pure function over the collected answers,
/// so branching behavior is testable without an engine instance.
#[derive(Debug)]
pub struct StepGraph {
    steps: Vec<QuestionStep>,
    index: HashMap<StepId, usize>,
}

impl StepGraph {
    /// Builds a graph from an ordered step list.
    ///
    /// # Errors
    ///
    /// Rejects duplicate step ids and successor references to unknown steps.
    pub fn new(steps: Vec<QuestionStep>) -> Result<Self, QuestionnaireError> {
        if steps.is_empty() {
            return Err(QuestionnaireError::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            if index.insert(step.id.clone(), i).is_some() {
                return Err(QuestionnaireError::DuplicateStep(step.id.clone()));
            }
        }

        for step in &steps {
            let targets: Vec<&StepId> = match &step.next {
                NextStep::Goto { step } => vec![step],
                NextStep::Branch { rules, otherwise } => rules
                    .iter()
                    .map(|r| &r.goto)
                    .chain(std::iter::once(otherwise))
                    .collect(),
                NextStep::End => vec![],
            };
            for target in targets {
                if !index.contains_key(target) {
                    return Err(QuestionnaireError::UnknownStep(target.clone()));
                }
            }
        }

        Ok(Self { steps, index })
    }

    /// The shared standard catalog.
    pub fn standard() -> Arc<StepGraph> {
        STANDARD.clone()
    }

    /// The entry step.
    pub fn first(&self) -> &QuestionStep {
        &self.steps[0]
    }

    /// Looks up a step by id.
    pub fn get(&self, id: &StepId) -> Option<&QuestionStep> {
        self.index.get(id).map(|i| &self.steps[*i])
    }

    /// Number of steps in the catalog.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the graph has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Computes the successor of `current` given the collected answers.
    ///
    /// Returns `None` when `current` is the last step of its path. Branch
    /// rules are evaluated in declaration order; the first match wins.
    pub fn next_step(&self, current: &StepId, answers: &Answers) -> Option<StepId> {
        let step = self.get(current)?;
        match &step.next {
            NextStep::Goto { step } => Some(step.clone()),
            NextStep::Branch { rules, otherwise } => Some(
                rules
                    .iter()
                    .find(|rule| rule.when.is_met(answers))
                    .map(|rule| rule.goto.clone())
                    .unwrap_or_else(|| otherwise.clone()),
            ),
            NextStep::End => None,
        }
    }

    /// Walks the path the given answers take through the graph and returns
    /// the first required step without a recorded answer, if any.
    ///
    /// `None` means every required step on the path is answered, which is
    /// the precondition for the Complete state.
    pub fn first_unanswered_required(&self, answers: &Answers) -> Option<StepId> {
        let mut current = Some(self.first().id.clone());
        let mut visited = 0usize;
        while let Some(id) = current {
            // Cycles cannot form in a well-formed catalog; the counter
            // bounds the walk regardless.
            visited += 1;
            if visited > self.steps.len() {
                return Some(id);
            }
            let step = self.get(&id)?;
            let answered = answers
                .get(&id)
                .map(|a| !a.is_empty())
                .unwrap_or(false);
            if step.required && !answered {
                return Some(id);
            }
            if !answers.contains(&id) {
                // Path beyond an unanswered optional step is unknowable yet.
                return None;
            }
            current = self.next_step(&id, answers);
        }
        None
    }
}

static STANDARD: Lazy<Arc<StepGraph>> = Lazy::new(|| {
    Arc::new(StepGraph::new(standard_steps()).expect("standard step catalog is well-formed"))
});

fn single(options: &[&str]) -> InputKind {
    InputKind::SingleSelect {
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

fn multi(options: &[&str]) -> InputKind {
    InputKind::MultiSelect {
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

/// The standard car-preference catalog.
///
/// A budget gate opens the questionnaire: buyers who say budget is not a
/// concern skip the range step entirely and land directly on primary use.
fn standard_steps() -> Vec<QuestionStep> {
    vec![
        QuestionStep {
            id: StepId::from("budget_gate"),
            title: "Do you have a budget in mind?".to_string(),
            description: "We tailor suggestions to your comfortable spending range".to_string(),
            help_text: Some("You can always revisit this later".to_string()),
            input: single(&["I have a budget in mind", "Budget is not a concern"]),
            required: true,
            next: NextStep::Branch {
                rules: vec![BranchRule {
                    when: Condition::AnswerEquals {
                        step: StepId::from("budget_gate"),
                        value: "Budget is not a concern".to_string(),
                    },
                    goto: StepId::from("primary_use"),
                }],
                otherwise: StepId::from("budget"),
            },
        },
        QuestionStep {
            id: StepId::from("budget"),
            title: "What's your budget range?".to_string(),
            description: "Select your comfortable price range for the car".to_string(),
            help_text: Some(
                "Consider total cost including insurance and registration".to_string(),
            ),
            input: InputKind::BudgetRange {
                floor: 300_000,
                ceiling: 5_000_000,
                increment: 50_000,
            },
            required: true,
            next: NextStep::Goto {
                step: StepId::from("primary_use"),
            },
        },
        QuestionStep {
            id: StepId::from("primary_use"),
            title: "What will be the primary use of your car?".to_string(),
            description: "This helps us understand your main driving needs".to_string(),
            help_text: None,
            input: single(&[
                "Daily commuting",
                "Weekend drives",
                "Long distance travel",
                "Family outings",
                "Occasional use",
                "Multiple purposes",
            ]),
            required: true,
            next: NextStep::Goto {
                step: StepId::from("family_size"),
            },
        },
        QuestionStep {
            id: StepId::from("family_size"),
            title: "How many people will regularly travel in the car?".to_string(),
            description: "Including yourself and regular passengers".to_string(),
            help_text: Some("This determines seating capacity requirements".to_string()),
            input: single(&["1 person", "2 people", "3-4 people", "5-7 people", "Varies"]),
            required: true,
            next: NextStep::Goto {
                step: StepId::from("driving_experience"),
            },
        },
        QuestionStep {
            id: StepId::from("driving_experience"),
            title: "How would you describe your driving experience?".to_string(),
            description: "This helps us recommend cars that match your comfort level".to_string(),
            help_text: None,
            input: single(&[
                "New driver",
                "Experienced city driver",
                "Experienced highway driver",
                "Very experienced",
                "Prefer easy-to-drive cars",
                "Comfortable with any car",
            ]),
            required: true,
            next: NextStep::Goto {
                step: StepId::from("fuel_preference"),
            },
        },
        QuestionStep {
            id: StepId::from("fuel_preference"),
            title: "What fuel type do you prefer?".to_string(),
            description: "Consider fuel costs, availability, and environmental impact".to_string(),
            help_text: None,
            input: single(&["Petrol", "Diesel", "CNG", "Electric", "Hybrid", "No preference"]),
            required: true,
            next: NextStep::Goto {
                step: StepId::from("important_features"),
            },
        },
        QuestionStep {
            id: StepId::from("important_features"),
            title: "Which features are most important to you?".to_string(),
            description: "Select all features that matter to you".to_string(),
            help_text: None,
            input: multi(&[
                "Advanced safety features",
                "Air conditioning",
                "Good music system",
                "Comfortable seating",
                "Easy parking (sensors, camera)",
                "Fuel efficiency",
                "Low maintenance cost",
                "Modern technology",
                "Large storage space",
                "Good ground clearance",
            ]),
            required: true,
            next: NextStep::Goto {
                step: StepId::from("physical_considerations"),
            },
        },
        QuestionStep {
            id: StepId::from("physical_considerations"),
            title: "Do you have any physical considerations for driving?".to_string(),
            description: "We can prioritize accessibility features".to_string(),
            help_text: None,
            input: multi(&[
                "Easy entry/exit",
                "Light steering",
                "Good visibility",
                "Adjustable seat",
                "Automatic transmission",
                "Simple controls",
                "None",
            ]),
            required: false,
            next: NextStep::Goto {
                step: StepId::from("brand_preference"),
            },
        },
        QuestionStep {
            id: StepId::from("brand_preference"),
            title: "Do you have any brand preferences?".to_string(),
            description: "Based on your experience or service network preferences".to_string(),
            help_text: None,
            input: multi(&[
                "Maruti Suzuki",
                "Hyundai",
                "Tata",
                "Honda",
                "Toyota",
                "Mahindra",
                "Kia",
                "MG",
                "Volkswagen/Skoda",
                "Premium brands",
                "No preference",
            ]),
            required: false,
            next: NextStep::Goto {
                step: StepId::from("additional_requirements"),
            },
        },
        QuestionStep {
            id: StepId::from("additional_requirements"),
            title: "Any additional requirements or preferences?".to_string(),
            description: "Tell us anything else that's important for your car choice".to_string(),
            help_text: None,
            input: InputKind::FreeText { max_len: 1000 },
            required: false,
            next: NextStep::End,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::AnswerValue;

    #[test]
    fn standard_catalog_is_well_formed() {
        let graph = StepGraph::standard();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.first().id, StepId::from("budget_gate"));
    }

    #[test]
    fn budget_gate_branches_on_answer() {
        let graph = StepGraph::standard();
        let gate = StepId::from("budget_gate");

        let mut answers = Answers::new();
        answers.insert(gate.clone(), AnswerValue::choice("I have a budget in mind"));
        assert_eq!(
            graph.next_step(&gate, &answers),
            Some(StepId::from("budget"))
        );

        answers.insert(gate.clone(), AnswerValue::choice("Budget is not a concern"));
        assert_eq!(
            graph.next_step(&gate, &answers),
            Some(StepId::from("primary_use"))
        );
    }

    #[test]
    fn last_step_has_no_successor() {
        let graph = StepGraph::standard();
        let last = StepId::from("additional_requirements");
        assert_eq!(graph.next_step(&last, &Answers::new()), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut steps = standard_steps();
        let dup = steps[0].clone();
        steps.push(dup);
        assert!(matches!(
            StepGraph::new(steps),
            Err(QuestionnaireError::DuplicateStep(_))
        ));
    }

    #[test]
    fn dangling_successor_is_rejected() {
        let mut steps = standard_steps();
        steps.last_mut().unwrap().next = NextStep::Goto {
            step: StepId::from("no_such_step"),
        };
        assert!(matches!(
            StepGraph::new(steps),
            Err(QuestionnaireError::UnknownStep(_))
        ));
    }

    #[test]
    fn unanswered_required_step_is_reported() {
        let graph = StepGraph::standard();
        let mut answers = Answers::new();
        assert_eq!(
            graph.first_unanswered_required(&answers),
            Some(StepId::from("budget_gate"))
        );

        answers.insert(
            StepId::from("budget_gate"),
            AnswerValue::choice("I have a budget in mind"),
        );
        assert_eq!(
            graph.first_unanswered_required(&answers),
            Some(StepId::from("budget"))
        );
    }
}
