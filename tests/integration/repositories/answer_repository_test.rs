// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_question, seed_user};
use askrs::domain::models::answer::{Answer, NewAnswer};
use askrs::domain::repositories::answer_repository::AnswerRepository;
use askrs::domain::repositories::question_repository::RepositoryError;
use askrs::infrastructure::repositories::answer_repo_impl::AnswerRepositoryImpl;
use chrono::Utc;
use uuid::Uuid;

fn answer_at(author_id: Uuid, content: &str, hours_ago: i64) -> Answer {
    Answer {
        id: Uuid::new_v4(),
        correct: false,
        content: content.to_string(),
        like: 0,
        author_id,
        created_at: (Utc::now() - chrono::Duration::hours(hours_ago)).into(),
    }
}

/// 测试回答创建和按问题检索
///
/// 验证回答与问题的关联行在创建时写入，
/// for_question按创建时间升序返回回答。
#[tokio::test]
async fn test_create_and_for_question() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let question = seed_question(&app, &author, "What is a trait object?", &[]).await;
    let other = seed_question(&app, &author, "Unrelated question", &[]).await;

    repo.create(&answer_at(responder.id, "second", 1), question.id)
        .await
        .unwrap();
    repo.create(&answer_at(responder.id, "first", 2), question.id)
        .await
        .unwrap();
    repo.create(&answer_at(responder.id, "elsewhere", 1), other.id)
        .await
        .unwrap();

    let answers = repo.for_question(question.id).await.unwrap();
    let contents: Vec<&str> = answers.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}

/// 测试关联到不存在问题的回答创建
///
/// 验证无效问题ID得到 NotFound 错误。
#[tokio::test]
async fn test_create_for_missing_question() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let responder = seed_user(&app, "bob").await;
    let result = repo
        .create(&answer_at(responder.id, "orphan", 0), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

/// 测试按日期排序
///
/// 验证sort_by_date按创建时间升序返回全部回答。
#[tokio::test]
async fn test_sort_by_date() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let question = seed_question(&app, &author, "Ordering question", &[]).await;

    repo.create(&answer_at(responder.id, "newest", 1), question.id)
        .await
        .unwrap();
    repo.create(&answer_at(responder.id, "oldest", 5), question.id)
        .await
        .unwrap();
    repo.create(&answer_at(responder.id, "middle", 3), question.id)
        .await
        .unwrap();

    let sorted = repo.sort_by_date().await.unwrap();
    let contents: Vec<&str> = sorted.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, vec!["oldest", "middle", "newest"]);
}

/// 测试回答评分切换的幂等往返
///
/// 验证切换两次后回答回到初始评分状态，
/// 计数器始终等于评分集合的基数。
#[tokio::test]
async fn test_toggle_like_roundtrip() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let rater = seed_user(&app, "carol").await;
    let question = seed_question(&app, &author, "Rated question", &[]).await;

    let answer = Answer::new(
        responder.id,
        NewAnswer {
            content: "use Arc<Mutex<T>>".to_string(),
        },
    )
    .unwrap();
    repo.create(&answer, question.id).await.unwrap();

    let liked = repo.toggle_like(rater.id, answer.id).await.unwrap();
    assert_eq!(liked.like, 1);

    let raters = repo.rated_by(answer.id).await.unwrap();
    assert_eq!(raters, vec![rater.id]);

    let unliked = repo.toggle_like(rater.id, answer.id).await.unwrap();
    assert_eq!(unliked.like, 0);
    assert!(repo.rated_by(answer.id).await.unwrap().is_empty());
}

/// 测试问题作者标记正确答案
///
/// 验证问题作者可以往返翻转correct标记。
#[tokio::test]
async fn test_toggle_correct_by_author() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let question = seed_question(&app, &author, "Which answer is right?", &[]).await;

    let answer = Answer::new(
        responder.id,
        NewAnswer {
            content: "this one".to_string(),
        },
    )
    .unwrap();
    repo.create(&answer, question.id).await.unwrap();

    let marked = repo
        .toggle_correct(author.id, answer.id, question.id)
        .await
        .unwrap();
    assert!(marked.correct);

    let unmarked = repo
        .toggle_correct(author.id, answer.id, question.id)
        .await
        .unwrap();
    assert!(!unmarked.correct);
}

/// 测试非作者标记正确答案被拒绝
///
/// 验证非问题作者得到显式的 Forbidden 错误且状态不变。
#[tokio::test]
async fn test_toggle_correct_by_stranger_is_forbidden() {
    let app = create_test_app().await;
    let repo = AnswerRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let responder = seed_user(&app, "bob").await;
    let stranger = seed_user(&app, "mallory").await;
    let question = seed_question(&app, &author, "Protected question", &[]).await;

    let answer = Answer::new(
        responder.id,
        NewAnswer {
            content: "untouchable".to_string(),
        },
    )
    .unwrap();
    repo.create(&answer, question.id).await.unwrap();

    let result = repo
        .toggle_correct(stranger.id, answer.id, question.id)
        .await;
    assert!(matches!(result, Err(RepositoryError::Forbidden)));

    let unchanged = repo.find_by_id(answer.id).await.unwrap().unwrap();
    assert!(!unchanged.correct);
}
