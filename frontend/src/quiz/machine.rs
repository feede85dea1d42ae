use log::info;

use crate::error::LeadError;
use crate::quiz::lead::{ContactForm, LeadSubmission, QuizAnswers};
use crate::quiz::questions::QuizQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Index into the question list, always `< questions.len()`.
    Question(usize),
    Capture,
}

/// State of the lead quiz, kept free of DOM and timer handles so the
/// component only has to schedule `advance` and relay the request outcome.
#[derive(Debug, Clone)]
pub struct QuizMachine {
    questions: &'static [QuizQuestion],
    step: QuizStep,
    answers: QuizAnswers,
    form: ContactForm,
    // Option picked on the current step while its advance is pending.
    selected: Option<usize>,
    submitting: bool,
}

impl QuizMachine {
    /// `questions` must not be empty.
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            step: QuizStep::Question(0),
            answers: QuizAnswers::new(),
            form: ContactForm::default(),
            selected: None,
            submitting: false,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.step {
            QuizStep::Question(index) => self.questions.get(index),
            QuizStep::Capture => None,
        }
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn progress_percent(&self) -> u32 {
        match self.step {
            QuizStep::Question(index) => (100 * (index as u32 + 1)) / self.questions.len() as u32,
            QuizStep::Capture => 100,
        }
    }

    /// Records the option at `option_index` for the current question.
    /// Returns true when the caller should schedule `advance`.
    pub fn select(&mut self, option_index: usize) -> bool {
        if self.selected.is_some() {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        let Some(option) = question.options.get(option_index) else {
            return false;
        };
        self.answers.insert(question.id.to_string(), option.value.to_string());
        self.selected = Some(option_index);
        true
    }

    /// Moves past the current question once it has an answer.
    pub fn advance(&mut self) {
        let QuizStep::Question(index) = self.step else {
            return;
        };
        if !self.answers.contains_key(self.questions[index].id) {
            return;
        }
        self.selected = None;
        self.step = if index + 1 < self.questions.len() {
            QuizStep::Question(index + 1)
        } else {
            info!("Quiz complete, asking for contact details");
            QuizStep::Capture
        };
    }

    pub fn set_name(&mut self, name: String) {
        self.form.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.form.email = email;
    }

    pub fn set_phone(&mut self, phone: String) {
        self.form.phone = phone;
    }

    /// Builds the lead and marks the submission as pending.
    pub fn begin_submission(&mut self) -> Result<LeadSubmission, LeadError> {
        if self.step != QuizStep::Capture {
            return Err(LeadError::NotCapturing);
        }
        if self.submitting {
            return Err(LeadError::AlreadySubmitting);
        }
        let lead = LeadSubmission::from_capture(&self.form, &self.answers)?;
        self.submitting = true;
        Ok(lead)
    }

    /// Success starts a fresh quiz; failure keeps everything for a retry.
    pub fn finish_submission<E>(&mut self, outcome: &Result<(), E>) {
        match outcome {
            Ok(()) => self.reset(),
            Err(_) => self.submitting = false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.questions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::questions::QUESTIONS;
    use pretty_assertions::assert_eq;

    fn answer_all(machine: &mut QuizMachine) {
        for _ in 0..QUESTIONS.len() {
            assert!(machine.select(0));
            machine.advance();
        }
    }

    fn completed() -> QuizMachine {
        let mut machine = QuizMachine::new(&QUESTIONS);
        answer_all(&mut machine);
        machine.set_name("Jane Doe".to_string());
        machine.set_email("jane@example.com".to_string());
        machine.set_phone(String::new());
        machine
    }

    #[test]
    fn walks_every_question_then_captures_once() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        let mut visited = Vec::new();
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(machine.step(), QuizStep::Question(index));
            visited.push(machine.step());
            assert!(machine.select(1));
            assert_eq!(machine.answers().get(question.id).map(String::as_str), Some(question.options[1].value));
            assert_eq!(machine.answers().len(), index + 1);
            machine.advance();
        }
        assert_eq!(visited.len(), QUESTIONS.len());
        assert_eq!(machine.step(), QuizStep::Capture);
        assert_eq!(machine.answers().len(), QUESTIONS.len());
        for question in QUESTIONS.iter() {
            assert!(machine.answers().contains_key(question.id));
        }

        // Capture is terminal until submission.
        machine.advance();
        assert_eq!(machine.step(), QuizStep::Capture);
        assert!(!machine.select(0));
    }

    #[test]
    fn advance_without_an_answer_stays_put() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        machine.advance();
        assert_eq!(machine.step(), QuizStep::Question(0));
        assert!(machine.answers().is_empty());
    }

    #[test]
    fn second_pick_before_advance_is_ignored() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        assert!(machine.select(2));
        assert!(!machine.select(3));
        assert_eq!(machine.selected(), Some(2));
        assert_eq!(machine.answers()["primary_goal"], QUESTIONS[0].options[2].value);
        machine.advance();
        assert_eq!(machine.selected(), None);
        assert_eq!(machine.step(), QuizStep::Question(1));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        assert!(!machine.select(99));
        assert!(machine.answers().is_empty());
        assert_eq!(machine.selected(), None);
    }

    #[test]
    fn progress_tracks_the_step() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        let n = QUESTIONS.len() as u32;
        for index in 0..QUESTIONS.len() {
            assert_eq!(machine.progress_percent(), 100 * (index as u32 + 1) / n);
            machine.select(0);
            machine.advance();
        }
        assert_eq!(machine.progress_percent(), 100);
    }

    #[test]
    fn jane_doe_submission_is_tagged_as_quiz_lead() {
        let mut machine = completed();
        let lead = machine.begin_submission().unwrap();
        assert_eq!(lead.source, "quiz");
        assert_eq!(lead.interests, vec!["coverage_fit".to_string()]);
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.phone, None);
        assert_eq!(&lead.quiz_answers, machine.answers());
        assert!(machine.is_submitting());
    }

    #[test]
    fn success_resets_everything() {
        let mut machine = completed();
        machine.begin_submission().unwrap();
        machine.finish_submission::<LeadError>(&Ok(()));

        assert_eq!(machine.step(), QuizStep::Question(0));
        assert!(machine.answers().is_empty());
        assert!(machine.form().is_empty());
        assert!(!machine.is_submitting());
    }

    #[test]
    fn failure_keeps_answers_and_form_for_retry() {
        let mut machine = completed();
        let answers = machine.answers().clone();
        let form = machine.form().clone();

        machine.begin_submission().unwrap();
        machine.finish_submission(&Err(LeadError::Status(500)));

        assert_eq!(machine.step(), QuizStep::Capture);
        assert_eq!(machine.answers(), &answers);
        assert_eq!(machine.form(), &form);
        assert!(!machine.is_submitting());
        assert!(machine.begin_submission().is_ok());
    }

    #[test]
    fn duplicate_submission_is_refused_while_pending() {
        let mut machine = completed();
        machine.begin_submission().unwrap();
        assert!(matches!(machine.begin_submission(), Err(LeadError::AlreadySubmitting)));
    }

    #[test]
    fn submission_before_capture_is_refused() {
        let mut machine = QuizMachine::new(&QUESTIONS);
        machine.set_name("Jane Doe".to_string());
        machine.set_email("jane@example.com".to_string());
        assert!(matches!(machine.begin_submission(), Err(LeadError::NotCapturing)));
        assert!(!machine.is_submitting());
    }

    #[test]
    fn missing_name_does_not_mark_pending() {
        let mut machine = completed();
        machine.set_name(String::new());
        assert!(matches!(machine.begin_submission(), Err(LeadError::MissingField("name"))));
        assert!(!machine.is_submitting());
    }
}
