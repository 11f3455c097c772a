// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_question, seed_tag, seed_user};
use askrs::domain::models::question::Question;
use askrs::domain::repositories::question_repository::{QuestionRepository, RepositoryError};
use askrs::domain::repositories::tag_repository::{TagRepository, MOST_POPULAR_LIMIT};
use askrs::infrastructure::repositories::question_repo_impl::QuestionRepositoryImpl;
use askrs::infrastructure::repositories::tag_repo_impl::TagRepositoryImpl;
use chrono::Utc;
use uuid::Uuid;

async fn seed_question_with_likes(
    app: &super::super::helpers::TestApp,
    author_id: Uuid,
    like: i32,
    tag_ids: &[Uuid],
) -> Question {
    let repo = QuestionRepositoryImpl::new(app.db.clone());
    let question = Question {
        id: Uuid::new_v4(),
        title: format!("question with {} likes", like),
        content: "content".to_string(),
        like,
        author_id,
        created_at: Utc::now().into(),
    };
    repo.create(&question, tag_ids).await.unwrap()
}

/// 测试热门标签聚合的排序和截断
///
/// 验证most_popular对每个标签求问题点赞总和，
/// 按总和降序最多返回9个标签。
#[tokio::test]
async fn test_most_popular_orders_and_limits() {
    let app = create_test_app().await;
    let repo = TagRepositoryImpl::new(app.db.clone());
    let author = seed_user(&app, "alice").await;

    // Eleven tags with strictly increasing like totals 1..=11
    for total in 1..=11 {
        let tag = seed_tag(&app, &format!("topic-{:02}", total)).await;
        seed_question_with_likes(&app, author.id, total, &[tag.id]).await;
    }

    let popular = repo.most_popular().await.unwrap();

    assert_eq!(popular.len(), MOST_POPULAR_LIMIT as usize);
    assert_eq!(popular[0].tag, "topic-11");
    assert_eq!(popular[0].total, 11);
    // The two least-liked tags fall off the board
    assert!(popular.iter().all(|t| t.total >= 3));

    for pair in popular.windows(2) {
        assert!(pair[0].total >= pair[1].total);
    }
}

/// 测试热门标签的跨问题求和
///
/// 验证同一标签下多个问题的点赞数被累加。
#[tokio::test]
async fn test_most_popular_sums_across_questions() {
    let app = create_test_app().await;
    let repo = TagRepositoryImpl::new(app.db.clone());
    let author = seed_user(&app, "alice").await;

    let shared = seed_tag(&app, "shared").await;
    let single = seed_tag(&app, "single").await;

    seed_question_with_likes(&app, author.id, 3, &[shared.id]).await;
    seed_question_with_likes(&app, author.id, 2, &[shared.id]).await;
    seed_question_with_likes(&app, author.id, 4, &[single.id]).await;

    let popular = repo.most_popular().await.unwrap();

    assert_eq!(popular.len(), 2);
    assert_eq!(popular[0].tag, "shared");
    assert_eq!(popular[0].total, 5);
    assert_eq!(popular[1].tag, "single");
    assert_eq!(popular[1].total, 4);
}

/// 测试无问题标签不进入榜单
///
/// 验证没有任何问题的标签不出现在热门榜单中。
#[tokio::test]
async fn test_most_popular_skips_unused_tags() {
    let app = create_test_app().await;
    let repo = TagRepositoryImpl::new(app.db.clone());
    let author = seed_user(&app, "alice").await;

    let used = seed_tag(&app, "used").await;
    seed_tag(&app, "unused").await;
    seed_question_with_likes(&app, author.id, 1, &[used.id]).await;

    let popular = repo.most_popular().await.unwrap();

    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].tag, "used");
}

/// 测试按标签检索问题
///
/// 验证questions_for只返回携带该标签的问题。
#[tokio::test]
async fn test_questions_for_tag() {
    let app = create_test_app().await;
    let repo = TagRepositoryImpl::new(app.db.clone());

    let author = seed_user(&app, "alice").await;
    let rust = seed_tag(&app, "rust").await;
    let python = seed_tag(&app, "python").await;

    let tagged = seed_question(&app, &author, "Tagged rust", &[rust.id]).await;
    let both = seed_question(&app, &author, "Tagged both", &[rust.id, python.id]).await;
    seed_question(&app, &author, "Tagged python", &[python.id]).await;
    seed_question(&app, &author, "Untagged", &[]).await;

    let questions = repo.questions_for("rust").await.unwrap();
    assert_eq!(questions.len(), 2);

    let ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
    assert!(ids.contains(&tagged.id));
    assert!(ids.contains(&both.id));
}

/// 测试未知标签的检索
///
/// 验证不存在的标签名得到 NotFound 错误，
/// find_by_name返回None。
#[tokio::test]
async fn test_questions_for_unknown_tag() {
    let app = create_test_app().await;
    let repo = TagRepositoryImpl::new(app.db.clone());

    let result = repo.questions_for("no-such-tag").await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    assert!(repo.find_by_name("no-such-tag").await.unwrap().is_none());
}
