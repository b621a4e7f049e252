use super::effect::CELEBRATION_VALUE;

const EIGHTEEN: i64 = 18;

/// Display style for the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Default,
    Eighteen,
    TwentyOne,
    Limit,
}

impl Category {
    /// Stable style-class name, used in logs and theme lookups.
    pub fn class_name(self) -> &'static str {
        match self {
            Category::Default => "default",
            Category::Eighteen => "eighteen",
            Category::TwentyOne => "twenty-one",
            Category::Limit => "limit",
        }
    }
}

/// Map a value to its display category.
///
/// Bounds take priority over the special values, so a counter capped at 21
/// shows `Limit` there, not `TwentyOne`.
pub fn display_category(value: i64, min: i64, max: i64) -> Category {
    if value == min || value == max {
        Category::Limit
    } else if value == CELEBRATION_VALUE {
        Category::TwentyOne
    } else if value == EIGHTEEN {
        Category::Eighteen
    } else {
        Category::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_are_limit() {
        assert_eq!(display_category(-5, -5, 5), Category::Limit);
        assert_eq!(display_category(5, -5, 5), Category::Limit);
    }

    #[test]
    fn special_values_inside_range() {
        assert_eq!(display_category(18, 15, 25), Category::Eighteen);
        assert_eq!(display_category(21, 15, 25), Category::TwentyOne);
        assert_eq!(display_category(20, 15, 25), Category::Default);
    }

    #[test]
    fn limit_wins_over_special_values() {
        assert_eq!(display_category(21, 0, 21), Category::Limit);
        assert_eq!(display_category(18, 18, 30), Category::Limit);
    }

    #[test]
    fn class_names() {
        assert_eq!(Category::TwentyOne.class_name(), "twenty-one");
        assert_eq!(Category::Limit.class_name(), "limit");
    }

    proptest! {
        #[test]
        fn repeated_calls_agree(min in -50i64..50, span in 0i64..50, offset in 0i64..50) {
            let max = min + span;
            let value = min + offset.min(span);
            let first = display_category(value, min, max);
            prop_assert_eq!(first, display_category(value, min, max));
        }
    }
}
