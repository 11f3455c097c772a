// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use askrs::domain::models::answer::{Answer, NewAnswer};
use askrs::domain::models::profile::{UserProfile, DEFAULT_AVATAR};
use askrs::domain::models::question::{NewQuestion, Question};
use askrs::domain::models::tag::Tag;
use askrs::domain::models::user::User;
use uuid::Uuid;

/// 测试问题构造的默认值
#[test]
fn test_new_question_defaults() {
    let author_id = Uuid::new_v4();
    let question = Question::new(
        author_id,
        NewQuestion {
            title: "How do I read a file?".to_string(),
            content: "std::fs or tokio::fs?".to_string(),
        },
    )
    .unwrap();

    assert_eq!(question.like, 0);
    assert_eq!(question.author_id, author_id);
    assert_eq!(question.title, "How do I read a file?");
}

/// 测试问题标题长度校验
///
/// 标题最长150个字符，超长或空白载荷被拒绝。
#[test]
fn test_question_title_validation() {
    let author_id = Uuid::new_v4();

    let too_long = Question::new(
        author_id,
        NewQuestion {
            title: "x".repeat(151),
            content: "content".to_string(),
        },
    );
    assert!(too_long.is_err());

    let empty_title = Question::new(
        author_id,
        NewQuestion {
            title: String::new(),
            content: "content".to_string(),
        },
    );
    assert!(empty_title.is_err());

    let max_length = Question::new(
        author_id,
        NewQuestion {
            title: "x".repeat(150),
            content: "content".to_string(),
        },
    );
    assert!(max_length.is_ok());
}

/// 测试问题正文非空校验
#[test]
fn test_question_content_validation() {
    let result = Question::new(
        Uuid::new_v4(),
        NewQuestion {
            title: "title".to_string(),
            content: String::new(),
        },
    );
    assert!(result.is_err());
}

/// 测试回答构造的默认值
///
/// 新回答未被标记为正确，评分计数为零。
#[test]
fn test_new_answer_defaults() {
    let author_id = Uuid::new_v4();
    let answer = Answer::new(
        author_id,
        NewAnswer {
            content: "try the ? operator".to_string(),
        },
    )
    .unwrap();

    assert!(!answer.correct);
    assert_eq!(answer.like, 0);
    assert_eq!(answer.author_id, author_id);
}

/// 测试回答正文非空校验
#[test]
fn test_answer_content_validation() {
    let result = Answer::new(
        Uuid::new_v4(),
        NewAnswer {
            content: String::new(),
        },
    );
    assert!(result.is_err());
}

/// 测试资料构造使用默认头像
#[test]
fn test_new_profile_uses_default_avatar() {
    let user_id = Uuid::new_v4();
    let profile = UserProfile::new(user_id);

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.avatar, DEFAULT_AVATAR);
    assert_eq!(profile.created_at, profile.updated_at);
}

/// 测试标签和用户构造
#[test]
fn test_new_tag_and_user() {
    let tag = Tag::new("rust");
    assert_eq!(tag.tag, "rust");

    let user = User::new("alice");
    assert_eq!(user.username, "alice");
}

/// 测试领域模型的JSON序列化
///
/// 表示层直接以JSON输出这些模型，字段名保持稳定。
#[test]
fn test_question_serializes_to_json() {
    let question = Question::new(
        Uuid::new_v4(),
        NewQuestion {
            title: "Serialize me".to_string(),
            content: "body".to_string(),
        },
    )
    .unwrap();

    let value = serde_json::to_value(&question).unwrap();
    assert_eq!(value["title"], "Serialize me");
    assert_eq!(value["like"], 0);
    assert!(value["id"].is_string());
    assert!(value["created_at"].is_string());
}
