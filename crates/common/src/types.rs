//! 通用类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 审计信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuditInfo {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    pub fn at(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// 刷新更新时间，保证不早于上一次更新时间
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// 分页参数
///
/// 页码从 1 开始；通过 [`Pagination::normalized`] 构造的值保证 `page >= 1`、`page_size >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// 从原始请求参数构造：非正页码归一为 1，非正条数归一为默认值，不设上限
    pub fn normalized(page: i32, page_size: i32) -> Self {
        let page = if page < 1 { 1 } else { page as u32 };
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u32
        };

        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// 对已排序的候选集取当前页，越界时返回空页
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= items.len() {
            return &[];
        }
        let end = start
            .saturating_add(self.page_size as usize)
            .min(items.len());
        &items[start..end]
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }
}
