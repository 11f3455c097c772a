// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_question, seed_user};
use askrs::domain::models::answer::{Answer, NewAnswer};
use askrs::domain::repositories::answer_repository::AnswerRepository;
use askrs::domain::repositories::profile_repository::ProfileRepository;
use askrs::domain::repositories::question_repository::{QuestionRepository, RepositoryError};
use askrs::domain::repositories::user_repository::UserRepository;
use askrs::infrastructure::repositories::answer_repo_impl::AnswerRepositoryImpl;
use askrs::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use askrs::infrastructure::repositories::question_repo_impl::QuestionRepositoryImpl;
use askrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use uuid::Uuid;

/// 测试用户创建和查找
#[tokio::test]
async fn test_create_and_find_user() {
    let app = create_test_app().await;
    let repo = UserRepositoryImpl::new(app.db.clone());

    let user = seed_user(&app, "alice").await;
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "alice");

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

/// 测试问题作者删除保护
///
/// 验证仍有创作问题的用户不可删除。
#[tokio::test]
async fn test_delete_question_author_is_protected() {
    let app = create_test_app().await;
    let repo = UserRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    seed_question(&app, &author, "Protected question", &[]).await;

    let result = repo.delete(author.id).await;
    assert!(matches!(result, Err(RepositoryError::Protected)));

    // The author is untouched
    assert!(repo.find_by_id(author.id).await.unwrap().is_some());
}

/// 测试回答作者删除保护
///
/// 验证仍有创作回答的用户不可删除。
#[tokio::test]
async fn test_delete_answer_author_is_protected() {
    let app = create_test_app().await;
    let user_repo = UserRepositoryImpl::new(app.db.clone());
    let answer_repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let question = seed_question(&app, &author, "Some question", &[]).await;

    let answer = Answer::new(
        responder.id,
        NewAnswer {
            content: "an answer".to_string(),
        },
    )
    .unwrap();
    answer_repo.create(&answer, question.id).await.unwrap();

    let result = user_repo.delete(responder.id).await;
    assert!(matches!(result, Err(RepositoryError::Protected)));
}

/// 测试仅点赞用户的删除清理
///
/// 验证删除只点赞过的用户时，关联行被移除、
/// 计数器回退、资料一并删除，计数不变式保持成立。
#[tokio::test]
async fn test_delete_liker_cleans_up_and_keeps_counters_consistent() {
    let app = create_test_app().await;
    let user_repo = UserRepositoryImpl::new(app.db.clone());
    let question_repo = QuestionRepositoryImpl::new(app.db.clone());
    let profile_repo = ProfileRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let liker = seed_user(&app, "bob").await;
    let question = seed_question(&app, &author, "Liked question", &[]).await;

    profile_repo.create_for_user(liker.id).await.unwrap();
    let liked = question_repo
        .toggle_like(liker.id, question.id)
        .await
        .unwrap();
    assert_eq!(liked.like, 1);

    user_repo.delete(liker.id).await.unwrap();

    assert!(user_repo.find_by_id(liker.id).await.unwrap().is_none());
    assert!(profile_repo
        .find_by_user(liker.id)
        .await
        .unwrap()
        .is_none());

    let after = question_repo
        .find_by_id(question.id)
        .await
        .unwrap()
        .unwrap();
    let liked_by = question_repo.liked_by(question.id).await.unwrap();
    assert_eq!(after.like, 0);
    assert_eq!(after.like as usize, liked_by.len());
}

/// 测试删除不存在的用户
#[tokio::test]
async fn test_delete_missing_user() {
    let app = create_test_app().await;
    let repo = UserRepositoryImpl::new(app.db.clone());

    let result = repo.delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
