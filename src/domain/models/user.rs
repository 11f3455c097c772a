// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户身份镜像
///
/// 用户由外部认证子系统拥有，这里只镜像其不透明身份，
/// 供问题、回答、点赞等实体引用。本层不涉及凭证和会话。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户名
    pub username: String,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl User {
    /// 创建一个新的用户身份镜像
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            created_at: Utc::now().into(),
        }
    }
}
