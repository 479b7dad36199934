use serde::Deserialize;

use crate::error::AppError;

/// 分页参数, 页码从 1 开始
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
}

impl PageParams {
    pub fn number(&self) -> Result<usize, AppError> {
        match self.page {
            None => Ok(1),
            Some(0) => Err(AppError::BadRequest("page numbers start at 1".to_string())),
            Some(page) => Ok(page),
        }
    }
}

/// 取第 page 页, 超出范围时为空
pub fn page_window<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_first() {
        assert_eq!(PageParams::default().number().unwrap(), 1);
        assert_eq!(PageParams { page: Some(3) }.number().unwrap(), 3);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(matches!(
            PageParams { page: Some(0) }.number(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn windows_are_fixed_size() {
        let items: Vec<u32> = (1..=19).collect();

        assert_eq!(page_window(&items, 1, 10), &items[0..10]);
        assert_eq!(page_window(&items, 2, 10), &items[10..19]);
        assert!(page_window(&items, 3, 10).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (1..=20).collect();

        assert_eq!(page_window(&items, 2, 10).len(), 10);
        assert!(page_window(&items, 3, 10).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items = [1, 2, 3];

        assert!(page_window(&items, usize::MAX, 10).is_empty());
        assert!(page_window::<u8>(&[], 1, 10).is_empty());
    }
}
