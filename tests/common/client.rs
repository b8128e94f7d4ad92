use actix_web::{web, App};
use std::sync::Arc;
use tavern::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::token::encrypt,
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(tavern::routes::configure_routes)
    }

    /// Creates a user straight through the db layer and hands back
    /// (user id, usable bearer token).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> (Uuid, String) {
        let password_hash = encrypt(password).expect("Failed to hash password");
        let random_id = Uuid::new_v4();

        let user_id = self
            .db
            .create_user(DBUserCreate {
                username: username.to_string(),
                email: format!("{}-{}@test.com", username, random_id),
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let token = self
            .db
            .issue_token(user_id, "test")
            .await
            .expect("Failed to issue token");

        (user_id, token)
    }

    #[allow(dead_code)]
    pub async fn create_session_for(
        &self,
        game_master_id: Uuid,
        title: &str,
    ) -> entity::session::Model {
        self.db
            .create_session(game_master_id, title.to_string(), None)
            .await
            .expect("Failed to create session")
    }

    #[allow(dead_code)]
    pub async fn create_invitation_for(&self, session_id: Uuid) -> String {
        self.db
            .create_invitation(session_id)
            .await
            .expect("Failed to create invitation")
    }
}
