//! Learning-management records and the typed API calls that load them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api_client::{ApiClient, RequestOptions};
use super::directory::College;
use super::error::ApiError;
use super::http::{FormField, HttpMethod, HttpTransport};
use super::route::{encode_component, with_query};
use super::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub enrollment_count: Option<u32>,
}

/// A student's enrollment; progress is computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub progress_percent: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "courseTitle")]
    pub course_title: Option<String>,
    #[serde(default, alias = "courseCategory")]
    pub course_category: Option<String>,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

impl Enrollment {
    /// Progress in `0..=100`; unparsable values read as zero
    pub fn progress(&self) -> f64 {
        let raw = match &self.progress_percent {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().trim_end_matches('%').parse().ok(),
            _ => None,
        };
        raw.filter(|p| p.is_finite()).unwrap_or(0.0).clamp(0.0, 100.0)
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed") || self.progress() >= 100.0
    }

    /// Title to show when the API did not join the course
    pub fn title_or(&self, index: usize) -> String {
        self.course_title
            .clone()
            .unwrap_or_else(|| format!("Enrolled Course #{}", index + 1))
    }
}

/// Totals shown above a student's course list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LearningSummary {
    pub enrolled: usize,
    pub completed: usize,
    /// Mean progress, rounded to a whole percent
    pub average_progress: u32,
}

impl LearningSummary {
    pub fn from_enrollments(enrollments: &[Enrollment]) -> Self {
        if enrollments.is_empty() {
            return Self::default();
        }
        let total: f64 = enrollments.iter().map(Enrollment::progress).sum();
        Self {
            enrolled: enrollments.len(),
            completed: enrollments.iter().filter(|e| e.is_completed()).count(),
            average_progress: (total / enrollments.len() as f64).round() as u32,
        }
    }
}

/// Kind of uploaded course material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Pdf,
    Video,
    Link,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Pdf, MaterialKind::Video, MaterialKind::Link];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Pdf => "pdf",
            MaterialKind::Video => "video",
            MaterialKind::Link => "link",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<MaterialKind>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// File picked in the browser, read into memory for upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Account row shown on the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserSummary {
    pub fn joined_label(&self) -> String {
        self.created_at
            .map(|at| at.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

/// Headline numbers for the landing page
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeStats {
    #[serde(default)]
    pub colleges: u64,
    #[serde(default)]
    pub students: u64,
    #[serde(default, alias = "placement_rate")]
    pub placement_rate: Option<String>,
    #[serde(default)]
    pub support: Option<String>,
}

impl CollegeStats {
    pub fn colleges_label(&self) -> String {
        format!("{}+", self.colleges)
    }

    /// Student count in thousands, e.g. "12k+"
    pub fn students_label(&self) -> String {
        format!("{:.0}k+", self.students as f64 / 1000.0)
    }

    pub fn placement_label(&self) -> String {
        self.placement_rate.clone().unwrap_or_else(|| "N/A".to_string())
    }

    pub fn support_label(&self) -> String {
        self.support.clone().unwrap_or_else(|| "24/7".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
}

impl NewCourse {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            level: "Beginner".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    target_url: &'a str,
}

fn limited(path: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => format!("{}?limit={}", path, limit),
        None => path.to_string(),
    }
}

impl<S: SessionStore, T: HttpTransport> ApiClient<S, T> {
    pub async fn colleges(&self, limit: Option<usize>) -> Result<Vec<College>, ApiError> {
        self.call_list(&limited("/colleges", limit), RequestOptions::get())
            .await
    }

    pub async fn college_stats(&self) -> Result<Option<CollegeStats>, ApiError> {
        self.call_data("/colleges/stats", RequestOptions::get()).await
    }

    /// Look a college up in the directory listing
    pub async fn college(&self, id: &str) -> Result<College, ApiError> {
        self.colleges(None)
            .await?
            .into_iter()
            .find(|college| college.id == id)
            .ok_or_else(|| ApiError::Decode("College not found in registry.".to_string()))
    }

    pub async fn my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.call_list("/enrollments/my", RequestOptions::get()).await
    }

    pub async fn course_enrollments(&self, course_id: &str) -> Result<Vec<Enrollment>, ApiError> {
        let path = format!("/enrollments/course/{}", encode_component(course_id));
        self.call_list(&path, RequestOptions::get()).await
    }

    pub async fn teacher_courses(&self, teacher_id: &str) -> Result<Vec<Course>, ApiError> {
        let path = with_query("/courses", "teacher_id", teacher_id);
        self.call_list(&path, RequestOptions::get()).await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Option<Course>, ApiError> {
        self.call_data("/courses", RequestOptions::post_json(course)?)
            .await
    }

    /// Multipart upload of a course material file
    pub async fn upload_material(
        &self,
        course_id: &str,
        title: &str,
        kind: MaterialKind,
        file: UploadFile,
    ) -> Result<Option<Material>, ApiError> {
        let options = RequestOptions::method(HttpMethod::Post).multipart(vec![
            FormField::text("course_id", course_id),
            FormField::text("title", title),
            FormField::text("type", kind.as_str()),
            FormField::file("file", file.name, file.content_type, file.bytes),
        ]);
        self.call_data("/materials", options).await
    }

    pub async fn recent_users(&self, limit: usize) -> Result<Vec<UserSummary>, ApiError> {
        self.call_list(&limited("/auth/users", Some(limit)), RequestOptions::get())
            .await
    }

    /// Ask the backend to scrape `target_url` and create a college from it
    pub async fn scrape_and_create(&self, target_url: &str) -> Result<Option<College>, ApiError> {
        let options = RequestOptions::post_json(&ScrapeRequest { target_url })?;
        self.call_data("/admin/scrape-and-create", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::RequestBody;
    use crate::core::http::mock::MockTransport;
    use crate::core::session::MemorySessionStore;
    use crate::core::session::fixtures::session_with_role;

    fn api() -> (ApiClient<MemorySessionStore, MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let store = MemorySessionStore::with_session(session_with_role(Some("teacher")));
        (
            ApiClient::new("http://api.test/v1", store, transport.clone()),
            transport,
        )
    }

    fn enrollment(progress: serde_json::Value) -> Enrollment {
        serde_json::from_value(serde_json::json!({
            "id": "e1", "course_id": "c1", "progress_percent": progress
        }))
        .unwrap()
    }

    #[test]
    fn test_enrollment_progress_parsing() {
        assert_eq!(enrollment("42.5".into()).progress(), 42.5);
        assert_eq!(enrollment("80%".into()).progress(), 80.0);
        assert_eq!(enrollment(130.into()).progress(), 100.0);
        assert_eq!(enrollment("n/a".into()).progress(), 0.0);
        assert_eq!(enrollment(serde_json::Value::Null).progress(), 0.0);
        assert!(enrollment("100".into()).is_completed());
    }

    #[test]
    fn test_enrollment_accepts_camel_case_join_fields() {
        let e: Enrollment = serde_json::from_str(
            r#"{"id":"e","course_id":"c","courseTitle":"Data Structures"}"#,
        )
        .unwrap();
        assert_eq!(e.title_or(0), "Data Structures");
        let bare = enrollment(serde_json::Value::Null);
        assert_eq!(bare.title_or(1), "Enrolled Course #2");
    }

    #[test]
    fn test_learning_summary() {
        let list = vec![
            enrollment(serde_json::json!(100)),
            enrollment(serde_json::json!("50")),
            enrollment(serde_json::json!(null)),
        ];
        let summary = LearningSummary::from_enrollments(&list);
        assert_eq!(summary.enrolled, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.average_progress, 50);
        assert_eq!(LearningSummary::from_enrollments(&[]), LearningSummary::default());
    }

    #[test]
    fn test_user_summary_joined_label() {
        let user: UserSummary = serde_json::from_str(
            r#"{"id":"u","email":"a@b.c","created_at":"2025-03-04T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.joined_label(), "Mar 04, 2025");
    }

    #[tokio::test]
    async fn test_colleges_with_limit() {
        let (api, transport) = api();
        transport.respond(200, r#"{"data":[{"id":"1","name":"IIT Bombay"}]}"#);

        let colleges = api.colleges(Some(3)).await.unwrap();
        assert_eq!(colleges.len(), 1);
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/v1/colleges?limit=3"
        );
    }

    #[tokio::test]
    async fn test_college_stats_labels() {
        let (api, transport) = api();
        transport.respond(
            200,
            r#"{"success":true,"data":{"colleges":120,"students":48600,"placementRate":"92%"}}"#,
        );

        let stats = api.college_stats().await.unwrap().unwrap();
        assert_eq!(stats.colleges_label(), "120+");
        assert_eq!(stats.students_label(), "49k+");
        assert_eq!(stats.placement_label(), "92%");
        assert_eq!(stats.support_label(), "24/7");
    }

    #[test]
    fn test_college_stats_defaults() {
        let stats = CollegeStats::default();
        assert_eq!(stats.colleges_label(), "0+");
        assert_eq!(stats.students_label(), "0k+");
        assert_eq!(stats.placement_label(), "N/A");
    }

    #[tokio::test]
    async fn test_college_lookup_not_found() {
        let (api, transport) = api();
        transport.respond(200, r#"{"data":[{"id":"1","name":"IIT Bombay"}]}"#);

        let err = api.college("2").await.unwrap_err();
        assert_eq!(err.to_string(), "Unexpected response: College not found in registry.");
    }

    #[tokio::test]
    async fn test_create_course_posts_beginner_level() {
        let (api, transport) = api();
        transport.respond(201, r#"{"data":{"id":"c9","title":"Rust 101"}}"#);

        let created = api
            .create_course(&NewCourse::new("Rust 101", "Ownership", "Programming"))
            .await
            .unwrap();
        assert_eq!(created.map(|c| c.id), Some("c9".to_string()));

        let request = transport.last_request().unwrap();
        let Some(RequestBody::Json(body)) = request.body else {
            panic!("expected JSON body");
        };
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["level"], "Beginner");
        assert_eq!(body["category"], "Programming");
    }

    #[tokio::test]
    async fn test_upload_material_builds_form() {
        let (api, transport) = api();
        let file = UploadFile {
            name: "week1.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: vec![37, 80, 68, 70],
        };

        api.upload_material("c1", "Week 1", MaterialKind::Pdf, file)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/v1/materials");
        let Some(RequestBody::Multipart(fields)) = request.body else {
            panic!("expected multipart body");
        };
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["course_id", "title", "type", "file"]);
        assert_eq!(fields[2], FormField::text("type", "pdf"));
    }

    #[tokio::test]
    async fn test_teacher_courses_query_is_encoded() {
        let (api, transport) = api();
        api.teacher_courses("id with space").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/v1/courses?teacher_id=id+with+space"
        );
    }

    #[tokio::test]
    async fn test_scrape_failure_surfaces_server_message() {
        let (api, transport) = api();
        transport.respond(422, r#"{"message":"Could not parse page"}"#);

        let err = api.scrape_and_create("https://x.edu").await.unwrap_err();
        assert_eq!(err.to_string(), "Could not parse page");
    }
}
