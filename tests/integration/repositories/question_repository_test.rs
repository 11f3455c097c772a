// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_question, seed_tag, seed_user};
use askrs::domain::models::question::Question;
use askrs::domain::repositories::question_repository::{QuestionRepository, RepositoryError};
use askrs::infrastructure::repositories::question_repo_impl::QuestionRepositoryImpl;
use chrono::Utc;
use uuid::Uuid;

/// 测试点赞切换的幂等往返
///
/// 验证同一用户切换两次后，问题回到初始的点赞状态和计数，
/// 且计数器始终等于点赞集合的基数。
#[tokio::test]
async fn test_toggle_like_twice_roundtrip() {
    let app = create_test_app().await;
    let repo = QuestionRepositoryImpl::new(app.db.clone());

    let u1 = seed_user(&app, "alice").await;
    let u2 = seed_user(&app, "bob").await;
    let u3 = seed_user(&app, "carol").await;
    let author = seed_user(&app, "dave").await;
    let question = seed_question(&app, &author, "How do lifetimes work?", &[]).await;

    // Build up like=3, liked_by={u1,u2,u3}
    repo.toggle_like(u1.id, question.id).await.unwrap();
    repo.toggle_like(u2.id, question.id).await.unwrap();
    let toggled = repo.toggle_like(u3.id, question.id).await.unwrap();
    assert_eq!(toggled.like, 3);

    let liked = repo.liked_by(question.id).await.unwrap();
    assert_eq!(liked.len(), 3);
    assert!(liked.contains(&u1.id));

    // First toggle removes u1
    let after_first = repo.toggle_like(u1.id, question.id).await.unwrap();
    assert_eq!(after_first.like, 2);

    let liked = repo.liked_by(question.id).await.unwrap();
    assert_eq!(liked.len(), 2);
    assert!(!liked.contains(&u1.id));
    assert!(liked.contains(&u2.id));
    assert!(liked.contains(&u3.id));
    assert_eq!(after_first.like as usize, liked.len());

    // Second toggle restores the initial state
    let after_second = repo.toggle_like(u1.id, question.id).await.unwrap();
    assert_eq!(after_second.like, 3);

    let liked = repo.liked_by(question.id).await.unwrap();
    assert_eq!(liked.len(), 3);
    assert!(liked.contains(&u1.id));
    assert_eq!(after_second.like as usize, liked.len());
}

/// 测试对不存在问题的点赞切换
///
/// 验证无效主键得到 NotFound 错误。
#[tokio::test]
async fn test_toggle_like_missing_question() {
    let app = create_test_app().await;
    let repo = QuestionRepositoryImpl::new(app.db.clone());

    let user = seed_user(&app, "alice").await;
    let result = repo.toggle_like(user.id, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

/// 测试最新排序
///
/// 验证sort_new按创建时间降序返回问题。
#[tokio::test]
async fn test_sort_new() {
    let app = create_test_app().await;
    let repo = QuestionRepositoryImpl::new(app.db.clone());
    let author = seed_user(&app, "alice").await;

    for (title, hours_ago) in [("oldest", 3), ("middle", 2), ("newest", 1)] {
        let question = Question {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "content".to_string(),
            like: 0,
            author_id: author.id,
            created_at: (Utc::now() - chrono::Duration::hours(hours_ago)).into(),
        };
        repo.create(&question, &[]).await.unwrap();
    }

    let sorted = repo.sort_new().await.unwrap();
    let titles: Vec<&str> = sorted.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

/// 测试热门排序
///
/// 验证sort_hot按点赞数降序返回问题，点赞数相同时
/// 按创建时间降序排列。
#[tokio::test]
async fn test_sort_hot() {
    let app = create_test_app().await;
    let repo = QuestionRepositoryImpl::new(app.db.clone());
    let author = seed_user(&app, "alice").await;

    for (title, like, hours_ago) in [
        ("cold", 0, 1),
        ("warm-old", 2, 5),
        ("warm-new", 2, 2),
        ("hot", 7, 9),
    ] {
        let question = Question {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "content".to_string(),
            like,
            author_id: author.id,
            created_at: (Utc::now() - chrono::Duration::hours(hours_ago)).into(),
        };
        repo.create(&question, &[]).await.unwrap();
    }

    let sorted = repo.sort_hot().await.unwrap();
    let titles: Vec<&str> = sorted.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["hot", "warm-new", "warm-old", "cold"]);

    // Non-increasing in like, ties non-increasing in created_at
    for pair in sorted.windows(2) {
        assert!(pair[0].like >= pair[1].like);
        if pair[0].like == pair[1].like {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

/// 测试问题创建和查找
///
/// 验证创建时写入标签关联，find_by_id返回创建的数据，
/// 未知ID返回None。
#[tokio::test]
async fn test_create_and_find_by_id() {
    let app = create_test_app().await;
    let repo = QuestionRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let tag = seed_tag(&app, "rust").await;
    let question = seed_question(&app, &author, "Borrow checker question", &[tag.id]).await;

    let found = repo.find_by_id(question.id).await.unwrap().unwrap();
    assert_eq!(found.id, question.id);
    assert_eq!(found.title, "Borrow checker question");
    assert_eq!(found.author_id, author.id);
    assert_eq!(found.like, 0);

    assert!(repo.liked_by(question.id).await.unwrap().is_empty());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}
