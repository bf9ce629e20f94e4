use axum::Router;
use shared::{
    domain::CourseId,
    protocol::{Course, TeacherRef},
};
use tokio::net::TcpListener;

pub async fn spawn_server(app: Router) -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

pub fn algebra() -> Course {
    Course {
        id: CourseId(1),
        title: "Algebra".to_string(),
        description: "Intro math".to_string(),
        category: "Math".to_string(),
        teacher: Some(TeacherRef {
            email: "a@x.com".to_string(),
        }),
        created_at: None,
    }
}

pub fn history() -> Course {
    Course {
        id: CourseId(2),
        title: "History".to_string(),
        description: "World wars".to_string(),
        category: "History".to_string(),
        teacher: None,
        created_at: None,
    }
}
