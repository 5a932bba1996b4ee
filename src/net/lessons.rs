//! Lesson repository: listing, enrollment, and scheduling calls.
//!
//! Each method makes exactly one request and reports failure as the display
//! string produced by [`resolve_message`].

#[cfg(test)]
#[path = "lessons_test.rs"]
mod lessons_test;

use reqwest::Method;

use super::client::ApiClient;
use super::error::resolve_message;
use super::types::{Client, Instructor, LessonTile, NewLesson};

pub const FETCH_LESSONS_FAILED: &str = "An error occurred while fetching lessons";
pub const ENROLL_FAILED: &str = "An error occurred while enrolling in the lesson";
pub const REMOVE_FAILED: &str = "An error occurred while cancelling the enrollment";
pub const FETCH_CLIENTS_FAILED: &str = "An error occurred while fetching lesson clients";
pub const CREATE_LESSON_FAILED: &str = "An error occurred while creating the lesson";
pub const FETCH_INSTRUCTORS_FAILED: &str = "An error occurred while fetching instructors";

fn lesson_clients_endpoint(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}/clients")
}

fn create_lesson_query(lesson: &NewLesson) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("time", lesson.time.clone()),
        ("duration", lesson.duration.clone()),
        ("instructorId", lesson.instructor_id.to_string()),
    ];
    if let Some(capacity) = lesson.capacity {
        query.push(("capacity", capacity.to_string()));
    }
    query
}

#[derive(Clone, Debug)]
pub struct LessonRepository {
    api: ApiClient,
}

impl LessonRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Planned lessons the client is enrolled in (`POST /lessons`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn get_lessons_for_client(&self, client_id: &str) -> Result<Vec<LessonTile>, String> {
        self.fetch_tiles("/lessons", client_id).await
    }

    /// Upcoming lessons the client is not yet enrolled in (`POST /lessons/planned`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn get_planned_lessons(&self, client_id: &str) -> Result<Vec<LessonTile>, String> {
        self.fetch_tiles("/lessons/planned", client_id).await
    }

    /// Lessons the client has completed (`POST /lessons/finished`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn get_finished_lessons(&self, client_id: &str) -> Result<Vec<LessonTile>, String> {
        self.fetch_tiles("/lessons/finished", client_id).await
    }

    /// Enroll a client in a lesson (`POST /lessons/enroll`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message; a full lesson surfaces as
    /// `"Conflict"` unless the backend sends its own text.
    pub async fn enroll_lesson(&self, lesson_id: &str, client_id: &str) -> Result<(), String> {
        let request = self
            .api
            .request(Method::POST, "/lessons/enroll")
            .query(&[("lessonId", lesson_id), ("clientId", client_id)]);
        self.api
            .send(request)
            .await
            .map(|_| ())
            .map_err(|e| resolve_message(&e, ENROLL_FAILED))
    }

    /// Cancel a client's enrollment (`POST /lessons/remove`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn remove_lesson(&self, lesson_id: &str, client_id: &str) -> Result<(), String> {
        let request = self
            .api
            .request(Method::POST, "/lessons/remove")
            .query(&[("lessonId", lesson_id), ("clientId", client_id)]);
        self.api
            .send(request)
            .await
            .map(|_| ())
            .map_err(|e| resolve_message(&e, REMOVE_FAILED))
    }

    /// Clients enrolled in a lesson (`GET /lessons/{lessonId}/clients`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn get_lesson_clients(&self, lesson_id: &str) -> Result<Vec<Client>, String> {
        let request = self.api.request(Method::GET, &lesson_clients_endpoint(lesson_id));
        self.api
            .send_json(request)
            .await
            .map_err(|e| resolve_message(&e, FETCH_CLIENTS_FAILED))
    }

    /// Schedule a new lesson (`POST /lessons/create`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn create_lesson(&self, lesson: &NewLesson) -> Result<(), String> {
        let request = self
            .api
            .request(Method::POST, "/lessons/create")
            .query(&create_lesson_query(lesson));
        self.api
            .send(request)
            .await
            .map(|_| ())
            .map_err(|e| resolve_message(&e, CREATE_LESSON_FAILED))
    }

    /// All instructors (`GET /instructors`).
    ///
    /// # Errors
    ///
    /// Returns the resolved display message on any failure.
    pub async fn get_instructors(&self) -> Result<Vec<Instructor>, String> {
        let request = self.api.request(Method::GET, "/instructors");
        self.api
            .send_json(request)
            .await
            .map_err(|e| resolve_message(&e, FETCH_INSTRUCTORS_FAILED))
    }

    async fn fetch_tiles(&self, path: &str, client_id: &str) -> Result<Vec<LessonTile>, String> {
        let request = self
            .api
            .request(Method::POST, path)
            .query(&[("clientId", client_id)]);
        self.api
            .send_json(request)
            .await
            .map_err(|e| resolve_message(&e, FETCH_LESSONS_FAILED))
    }
}
