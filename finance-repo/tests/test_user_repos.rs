mod utils;

use finance_repo::user_repo::{NewUser, UserRepoError};
use rstest::rstest;
use utils::{unique_username, RepoType};

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_create_and_get_user(#[case] repo_type: RepoType) {
    let (user_repo, _transaction_repo) = utils::build_repos(repo_type).await;

    let new_user = NewUser::new(unique_username(), "not a real hash".to_owned());
    let user = user_repo.create_user(new_user.clone()).await.unwrap();
    assert_eq!(user.username, new_user.username);
    assert_eq!(user.password_hash, new_user.password_hash);

    let by_id = user_repo.get_user(user.id).await.unwrap();
    assert_eq!(user, by_id);

    let by_username = user_repo.get_user_by_username(&user.username).await.unwrap();
    assert_eq!(user, by_username);
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_create_existing_user(#[case] repo_type: RepoType) {
    let (user_repo, _transaction_repo) = utils::build_repos(repo_type).await;

    let username = unique_username();
    let first = user_repo
        .create_user(NewUser::new(username.clone(), "first hash".to_owned()))
        .await
        .unwrap();

    let create_result = user_repo
        .create_user(NewUser::new(username.clone(), "second hash".to_owned()))
        .await;
    assert!(
        matches!(create_result, Err(UserRepoError::UserAlreadyExists(ref u)) if u == &username),
        "expected UserAlreadyExists, got {:?}",
        create_result
    );

    // the original row is untouched
    let stored = user_repo.get_user_by_username(&username).await.unwrap();
    assert_eq!(stored, first);
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_get_invalid_user(#[case] repo_type: RepoType) {
    let (user_repo, _transaction_repo) = utils::build_repos(repo_type).await;

    let by_id = user_repo.get_user(1234).await;
    assert!(matches!(by_id, Err(UserRepoError::UserNotFound(_))));

    let by_username = user_repo.get_user_by_username("nobody").await;
    assert!(matches!(by_username, Err(UserRepoError::UserNotFound(_))));
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_user_ids_unique(#[case] repo_type: RepoType) {
    let (user_repo, _transaction_repo) = utils::build_repos(repo_type).await;

    let user1 = utils::TestUser::new(&user_repo).await;
    let user2 = utils::TestUser::new(&user_repo).await;
    assert_ne!(user1.id, user2.id);
}
