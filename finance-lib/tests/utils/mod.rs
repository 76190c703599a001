#![allow(dead_code)]

use std::sync::Arc;

use finance_lib::auth::credentials;
use finance_lib::user::UserId;
use finance_repo::transaction_repo::TransactionRepo;
use finance_repo::user_repo::UserRepo;
use rstest::*;
use tracing::info;
use tracing::Level;
use uuid::Uuid;

macro_rules! build_app {
    ($transaction_repo:ident, $user_id:expr) => {{
        let user_id: UserId = $user_id;
        let app = App::new()
            .app_data(Data::new($transaction_repo.clone()))
            .app_data(finance_lib::json_config())
            .wrap(finance_lib::tracing::create_middleware())
            .service(finance_lib::transaction::transaction_service().wrap_fn(
                move |req, srv| {
                    // stands in for the bearer middleware
                    req.extensions_mut().insert::<UserId>(user_id);
                    srv.call(req)
                },
            ));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_transaction {
    (&$service:ident, $request:ident) => {{
        let request = TestRequest::post()
            .uri("/transactions")
            .set_json(&$request)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating transaction",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

pub struct TestUser {
    pub user_id: UserId,
    pub username: String,
}

impl TestUser {
    pub async fn new(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        let username = "test-user-".to_owned() + &Uuid::new_v4().to_string();
        let user_id = credentials::register(&**user_repo, username.clone(), "pass".to_string())
            .await
            .unwrap();
        info!(%username, user_id, "Created user");
        TestUser { user_id, username }
    }
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> (Arc<dyn UserRepo>, Arc<dyn TransactionRepo>) {
    finance_repo::mem_repo::create_repos()
}
