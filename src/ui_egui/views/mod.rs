pub mod month_view;
mod month_day_cell;
pub(crate) mod palette;

use crate::services::event::overflow_count;

/// Text of the overflow indicator for a day holding `bucket_len` events
pub fn overflow_label(bucket_len: usize, cap: usize) -> Option<String> {
    match overflow_count(bucket_len, cap) {
        0 => None,
        hidden => Some(format!("+{} more", hidden)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_label() {
        assert_eq!(overflow_label(3, 2), Some("+1 more".to_string()));
        assert_eq!(overflow_label(7, 2), Some("+5 more".to_string()));
        assert_eq!(overflow_label(2, 2), None);
        assert_eq!(overflow_label(0, 3), None);
    }
}
