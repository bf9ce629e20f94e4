use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{CourseId, UserId};

pub const COURSES_PATH: &str = "/api/courses";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub email: String,
}

/// A course record as returned by `GET /api/courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub teacher: Option<TeacherRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub img_url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_course_with_extra_fields() {
        let raw = r#"{
            "id": 4,
            "title": "Algebra",
            "description": "Intro math",
            "category": "Math",
            "createdAt": "2024-03-01T10:15:30",
            "teacher": {"id": 9, "email": "a@x.com", "role": "TEACHER"},
            "lessons": []
        }"#;
        let course: Course = serde_json::from_str(raw).expect("decode");
        assert_eq!(course.id, CourseId(4));
        assert_eq!(
            course.teacher,
            Some(TeacherRef {
                email: "a@x.com".to_string()
            })
        );
        assert!(course.created_at.is_some());
    }

    #[test]
    fn null_or_missing_teacher_is_absent() {
        let with_null: Course = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","category":"c","teacher":null}"#,
        )
        .expect("decode");
        let missing: Course =
            serde_json::from_str(r#"{"id":1,"title":"t","description":"d","category":"c"}"#)
                .expect("decode");
        assert_eq!(with_null.teacher, None);
        assert_eq!(missing.teacher, None);
    }

    #[test]
    fn missing_title_is_rejected() {
        let result = serde_json::from_str::<Course>(r#"{"id":1,"description":"d","category":"c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn register_request_uses_camel_case_image_field() {
        let value = serde_json::to_value(RegisterRequest {
            img_url: "http://img".to_string(),
            ..RegisterRequest::default()
        })
        .expect("encode");
        assert_eq!(value["imgUrl"], "http://img");
    }
}
