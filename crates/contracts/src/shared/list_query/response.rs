use serde::{Deserialize, Serialize};

use super::request::PaginationState;

/// Страница списка, возвращаемая backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> ListResponse<T> {
    /// Количество страниц при заданном размере страницы
    pub fn page_count(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(page_size)
    }

    /// Является ли текущая страница последней
    pub fn is_last_page(&self, pagination: &PaginationState) -> bool {
        if pagination.page_size <= 0 || pagination.page_index < 0 {
            return true;
        }
        let pages = self.page_count(pagination.page_size as u64);
        pagination.page_index as u64 + 1 >= pages
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
