//! Character conditions: atomic predicates over a candidate character.

use std::str::FromStr;

use super::context::CharContext;

/// Comparison performed by a [`CharacterCondition`].
///
/// Variant order matches the ordinals used by configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionOperator {
    ValueEquals,
    ValueLessThan,
    ValueLessOrEqual,
    ValueGreaterThan,
    ValueGreaterOrEqual,
    ValueBetweenInclusive,
    ValueBetweenExclusive,
    ValueInString,
    IndexEquals,
    IndexLessThan,
    IndexLessOrEqual,
    IndexGreaterThan,
    IndexGreaterOrEqual,
    IndexBetweenInclusive,
    IndexBetweenExclusive,
    OccurrencesLessThan,
    OccurrencesLessOrEqual,
    OccurrencesGreaterThan,
    OccurrencesGreaterOrEqual,
    ValueSameAsPrevious,
}

impl ConditionOperator {
    /// All operators in ordinal order
    pub const ALL: [ConditionOperator; 20] = [
        ConditionOperator::ValueEquals,
        ConditionOperator::ValueLessThan,
        ConditionOperator::ValueLessOrEqual,
        ConditionOperator::ValueGreaterThan,
        ConditionOperator::ValueGreaterOrEqual,
        ConditionOperator::ValueBetweenInclusive,
        ConditionOperator::ValueBetweenExclusive,
        ConditionOperator::ValueInString,
        ConditionOperator::IndexEquals,
        ConditionOperator::IndexLessThan,
        ConditionOperator::IndexLessOrEqual,
        ConditionOperator::IndexGreaterThan,
        ConditionOperator::IndexGreaterOrEqual,
        ConditionOperator::IndexBetweenInclusive,
        ConditionOperator::IndexBetweenExclusive,
        ConditionOperator::OccurrencesLessThan,
        ConditionOperator::OccurrencesLessOrEqual,
        ConditionOperator::OccurrencesGreaterThan,
        ConditionOperator::OccurrencesGreaterOrEqual,
        ConditionOperator::ValueSameAsPrevious,
    ];

    /// Look up an operator by its document ordinal
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Canonical snake_case name used in YAML documents
    pub fn name(&self) -> &'static str {
        match self {
            ConditionOperator::ValueEquals => "value_equals",
            ConditionOperator::ValueLessThan => "value_less_than",
            ConditionOperator::ValueLessOrEqual => "value_less_or_equal",
            ConditionOperator::ValueGreaterThan => "value_greater_than",
            ConditionOperator::ValueGreaterOrEqual => "value_greater_or_equal",
            ConditionOperator::ValueBetweenInclusive => "value_between_inclusive",
            ConditionOperator::ValueBetweenExclusive => "value_between_exclusive",
            ConditionOperator::ValueInString => "value_in_string",
            ConditionOperator::IndexEquals => "index_equals",
            ConditionOperator::IndexLessThan => "index_less_than",
            ConditionOperator::IndexLessOrEqual => "index_less_or_equal",
            ConditionOperator::IndexGreaterThan => "index_greater_than",
            ConditionOperator::IndexGreaterOrEqual => "index_greater_or_equal",
            ConditionOperator::IndexBetweenInclusive => "index_between_inclusive",
            ConditionOperator::IndexBetweenExclusive => "index_between_exclusive",
            ConditionOperator::OccurrencesLessThan => "occurrences_less_than",
            ConditionOperator::OccurrencesLessOrEqual => "occurrences_less_or_equal",
            ConditionOperator::OccurrencesGreaterThan => "occurrences_greater_than",
            ConditionOperator::OccurrencesGreaterOrEqual => "occurrences_greater_or_equal",
            ConditionOperator::ValueSameAsPrevious => "value_same_as_previous",
        }
    }
}

impl FromStr for ConditionOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == lower)
            .ok_or(())
    }
}

/// Compare `value` against `low` (and `high` for the between comparisons)
fn compare(kind: Comparison, value: i64, low: i64, high: i64) -> bool {
    match kind {
        Comparison::Equals => value == low,
        Comparison::LessThan => value < low,
        Comparison::LessOrEqual => value <= low,
        Comparison::GreaterThan => value > low,
        Comparison::GreaterOrEqual => value >= low,
        Comparison::BetweenInclusive => value >= low && value <= high,
        Comparison::BetweenExclusive => value > low && value < high,
    }
}

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Equals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    BetweenInclusive,
    BetweenExclusive,
}

/// A single predicate over a candidate character and its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCondition {
    pub operator: ConditionOperator,
    pub int_value1: i32,
    pub int_value2: i32,
    pub string_value: String,
}

impl CharacterCondition {
    pub fn new(operator: ConditionOperator, int_value1: i32, int_value2: i32) -> Self {
        Self {
            operator,
            int_value1,
            int_value2,
            string_value: String::new(),
        }
    }

    /// Condition matching a single character value
    pub fn value_equals(ch: char) -> Self {
        Self::new(ConditionOperator::ValueEquals, ch as i32, 0)
    }

    /// Condition matching any character listed in `chars`
    pub fn value_in(chars: &str) -> Self {
        Self {
            string_value: chars.to_string(),
            ..Self::new(ConditionOperator::ValueInString, 0, 0)
        }
    }

    /// Check whether the condition holds for `ch` in `ctx`
    pub fn is_met(&self, ch: char, ctx: &CharContext<'_>) -> bool {
        use ConditionOperator as Op;

        let low = i64::from(self.int_value1);
        let high = i64::from(self.int_value2);
        let code = i64::from(u32::from(ch));
        let index = ctx.index_in_operation as i64;

        match self.operator {
            Op::ValueEquals => compare(Comparison::Equals, code, low, high),
            Op::ValueLessThan => compare(Comparison::LessThan, code, low, high),
            Op::ValueLessOrEqual => compare(Comparison::LessOrEqual, code, low, high),
            Op::ValueGreaterThan => compare(Comparison::GreaterThan, code, low, high),
            Op::ValueGreaterOrEqual => compare(Comparison::GreaterOrEqual, code, low, high),
            Op::ValueBetweenInclusive => compare(Comparison::BetweenInclusive, code, low, high),
            Op::ValueBetweenExclusive => compare(Comparison::BetweenExclusive, code, low, high),
            Op::ValueInString => self.string_value.contains(ch),
            Op::IndexEquals => compare(Comparison::Equals, index, low, high),
            Op::IndexLessThan => compare(Comparison::LessThan, index, low, high),
            Op::IndexLessOrEqual => compare(Comparison::LessOrEqual, index, low, high),
            Op::IndexGreaterThan => compare(Comparison::GreaterThan, index, low, high),
            Op::IndexGreaterOrEqual => compare(Comparison::GreaterOrEqual, index, low, high),
            Op::IndexBetweenInclusive => compare(Comparison::BetweenInclusive, index, low, high),
            Op::IndexBetweenExclusive => compare(Comparison::BetweenExclusive, index, low, high),
            Op::OccurrencesLessThan
            | Op::OccurrencesLessOrEqual
            | Op::OccurrencesGreaterThan
            | Op::OccurrencesGreaterOrEqual => {
                let occurrences = ctx.count(ch) as i64;
                let kind = match self.operator {
                    Op::OccurrencesLessThan => Comparison::LessThan,
                    Op::OccurrencesLessOrEqual => Comparison::LessOrEqual,
                    Op::OccurrencesGreaterThan => Comparison::GreaterThan,
                    _ => Comparison::GreaterOrEqual,
                };
                compare(kind, occurrences, low, high)
            }
            Op::ValueSameAsPrevious => ctx.previous() == Some(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_value_comparisons() {
        let ctx = CharContext::at_end_of(&[]);
        let lt = CharacterCondition::new(ConditionOperator::ValueLessThan, 'b' as i32, 0);
        assert!(lt.is_met('a', &ctx));
        assert!(!lt.is_met('b', &ctx));

        let ge = CharacterCondition::new(ConditionOperator::ValueGreaterOrEqual, 'b' as i32, 0);
        assert!(ge.is_met('b', &ctx));
        assert!(!ge.is_met('a', &ctx));
    }

    #[test]
    fn test_between_bounds() {
        let ctx = CharContext::at_end_of(&[]);
        let inclusive =
            CharacterCondition::new(ConditionOperator::ValueBetweenInclusive, '0' as i32, '9' as i32);
        let exclusive =
            CharacterCondition::new(ConditionOperator::ValueBetweenExclusive, '0' as i32, '9' as i32);

        assert!(inclusive.is_met('0', &ctx));
        assert!(inclusive.is_met('9', &ctx));
        assert!(!exclusive.is_met('0', &ctx));
        assert!(!exclusive.is_met('9', &ctx));
        assert!(exclusive.is_met('5', &ctx));
    }

    #[test]
    fn test_value_in_string() {
        let ctx = CharContext::at_end_of(&[]);
        let cond = CharacterCondition::value_in("aeiou");
        assert!(cond.is_met('e', &ctx));
        assert!(!cond.is_met('x', &ctx));
    }

    #[test]
    fn test_index_uses_position_in_operation() {
        let before = chars("hello");
        let cond = CharacterCondition::new(ConditionOperator::IndexEquals, 0, 0);

        assert!(cond.is_met('x', &CharContext::new(&before, &[], 0)));
        assert!(!cond.is_met('x', &CharContext::new(&before, &[], 1)));
    }

    #[test]
    fn test_index_between_bounds() {
        let inclusive = CharacterCondition::new(ConditionOperator::IndexBetweenInclusive, 1, 3);
        let exclusive = CharacterCondition::new(ConditionOperator::IndexBetweenExclusive, 1, 3);
        let met_at = |cond: &CharacterCondition| -> Vec<bool> {
            (0..5)
                .map(|index| cond.is_met('x', &CharContext::new(&[], &[], index)))
                .collect()
        };

        assert_eq!(met_at(&inclusive), vec![false, true, true, true, false]);
        assert_eq!(
            met_at(&exclusive),
            vec![false, false, true, false, false]
        );
    }

    #[test]
    fn test_occurrence_bounds_at_edges() {
        let less_than_two = CharacterCondition::new(ConditionOperator::OccurrencesLessThan, 2, 0);
        let at_least_two =
            CharacterCondition::new(ConditionOperator::OccurrencesGreaterOrEqual, 2, 0);

        let one = chars("a-b");
        let two = chars("-a");
        let two_after = chars("-");
        let three = chars("--x-");

        let once = CharContext::new(&one, &[], 0);
        let twice = CharContext::new(&two, &two_after, 0);
        let thrice = CharContext::new(&three, &[], 0);

        assert!(less_than_two.is_met('-', &once));
        assert!(!less_than_two.is_met('-', &twice));
        assert!(!less_than_two.is_met('-', &thrice));

        assert!(!at_least_two.is_met('-', &once));
        assert!(at_least_two.is_met('-', &twice));
        assert!(at_least_two.is_met('-', &thrice));
    }

    #[test]
    fn test_occurrences_count_existing_buffer() {
        let before = chars("1.5");
        let ctx = CharContext::new(&before, &[], 0);
        let at_most_zero = CharacterCondition::new(ConditionOperator::OccurrencesLessOrEqual, 0, 0);
        let more_than_zero =
            CharacterCondition::new(ConditionOperator::OccurrencesGreaterThan, 0, 0);

        assert!(!at_most_zero.is_met('.', &ctx));
        assert!(more_than_zero.is_met('.', &ctx));
        assert!(at_most_zero.is_met(',', &ctx));
    }

    #[test]
    fn test_same_as_previous() {
        let before = chars("ab");
        let cond = CharacterCondition::new(ConditionOperator::ValueSameAsPrevious, 0, 0);

        assert!(cond.is_met('b', &CharContext::new(&before, &[], 0)));
        assert!(!cond.is_met('a', &CharContext::new(&before, &[], 0)));
        assert!(!cond.is_met('a', &CharContext::at_end_of(&[])));
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(
            ConditionOperator::from_ordinal(0),
            Some(ConditionOperator::ValueEquals)
        );
        assert_eq!(
            ConditionOperator::from_ordinal(19),
            Some(ConditionOperator::ValueSameAsPrevious)
        );
        assert_eq!(ConditionOperator::from_ordinal(20), None);
        assert_eq!(ConditionOperator::from_ordinal(-1), None);
        assert_eq!(
            "Value_In_String".parse::<ConditionOperator>(),
            Ok(ConditionOperator::ValueInString)
        );
        assert!("value_is_nice".parse::<ConditionOperator>().is_err());
    }
}
