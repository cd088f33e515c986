//! Question bank use cases
//!
//! Every operation loads the full collection, works on it in memory and,
//! for mutations, saves the full collection back.

use crate::application::list_areas::collect_areas;
use crate::application::random_pick::pick_random;
use crate::domain::{Question, QuestionFilter};
use crate::error::{QuestionsError, Result};
use crate::infrastructure::{JsonFileRepository, QuestionRepository};
use rand::Rng;
use uuid::Uuid;

/// Service for reading and changing the question bank
#[derive(Debug, Clone)]
pub struct QuestionService<R = JsonFileRepository> {
    repository: R,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Create a new question service
    pub fn new(repository: R) -> Self {
        QuestionService { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All questions in storage order
    pub fn get_all(&self) -> Result<Vec<Question>> {
        self.repository.load_all()
    }

    /// The first question with the given id, if any
    pub fn get_by_id(&self, id: Uuid) -> Result<Option<Question>> {
        Ok(self
            .repository
            .load_all()?
            .into_iter()
            .find(|q| q.id == id))
    }

    /// Append a question, assigning an id when it has none.
    /// A caller-supplied id is stored as given.
    pub fn add(&self, mut question: Question) -> Result<Question> {
        let mut questions = self.repository.load_all()?;

        question.ensure_id();
        questions.push(question.clone());
        self.repository.save_all(&questions)?;

        tracing::info!(id = %question.id, area = %question.area, "question added");
        Ok(question)
    }

    /// Replace every field but the id of an existing question.
    /// Returns false when no question has that id.
    pub fn update(&self, id: Uuid, new_data: Question) -> Result<bool> {
        let mut questions = self.repository.load_all()?;

        let Some(existing) = questions.iter_mut().find(|q| q.id == id) else {
            return Ok(false);
        };
        existing.replace_content(new_data);

        self.repository.save_all(&questions)?;
        tracing::info!(id = %id, "question updated");
        Ok(true)
    }

    /// Remove every question with the given id.
    /// Returns false (and leaves the document untouched) when none matched.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let mut questions = self.repository.load_all()?;
        let before = questions.len();
        questions.retain(|q| q.id != id);

        if questions.len() == before {
            return Ok(false);
        }

        self.repository.save_all(&questions)?;
        tracing::info!(id = %id, removed = before - questions.len(), "question deleted");
        Ok(true)
    }

    /// Questions matching every supplied criterion, in storage order
    pub fn filter(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        Ok(filter.apply(self.repository.load_all()?))
    }

    /// Questions in the given area; at least one must exist
    pub fn by_area(&self, area: &str) -> Result<Vec<Question>> {
        let filter = area_filter(area)?;
        let questions = self.filter(&filter)?;
        if questions.is_empty() {
            return Err(no_questions_in_area(area));
        }
        Ok(questions)
    }

    /// One question picked at random among those matching the filter
    pub fn random(&self, filter: &QuestionFilter) -> Result<Question> {
        self.random_with(filter, &mut rand::thread_rng())
    }

    /// Like [`random`](Self::random) with a caller-provided generator
    pub fn random_with<G: Rng + ?Sized>(
        &self,
        filter: &QuestionFilter,
        rng: &mut G,
    ) -> Result<Question> {
        let questions = self.filter(filter)?;
        pick_random(&questions, rng).cloned().ok_or_else(|| {
            QuestionsError::NoMatch("no question matches the given filters".to_string())
        })
    }

    /// One question picked at random within an area
    pub fn random_in_area(&self, area: &str) -> Result<Question> {
        let filter = area_filter(area)?;
        self.random(&filter)
            .map_err(|e| if e.is_not_found() { no_questions_in_area(area) } else { e })
    }

    /// Distinct areas in the bank, sorted
    pub fn list_areas(&self) -> Result<Vec<String>> {
        Ok(collect_areas(&self.repository.load_all()?))
    }
}

fn area_filter(area: &str) -> Result<QuestionFilter> {
    if area.trim().is_empty() {
        return Err(QuestionsError::Validation("Area is required".to_string()));
    }
    Ok(QuestionFilter::new().area(area))
}

fn no_questions_in_area(area: &str) -> QuestionsError {
    QuestionsError::NoMatch(format!("no questions in area '{}'", area))
}
