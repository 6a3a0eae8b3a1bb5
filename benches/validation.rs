//! Benchmarks for the text edit transaction hot path
//!
//! Run with: cargo bench validation

use keybridge::validation::{
    CharacterAction, CharacterCondition, CharacterRule, CharacterValidation, CharacterValidator,
    ConditionOperator, LineType, TextValidator,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn custom_rules() -> TextValidator {
    TextValidator::custom(
        CharacterValidator::new(
            vec![
                CharacterRule::new(
                    vec![CharacterCondition::new(ConditionOperator::ValueSameAsPrevious, 0, 0)],
                    CharacterAction::Block,
                ),
                CharacterRule::new(
                    vec![
                        CharacterCondition::value_equals('.'),
                        CharacterCondition::new(ConditionOperator::OccurrencesGreaterThan, 0, 0),
                    ],
                    CharacterAction::Block,
                ),
                CharacterRule::new(
                    vec![CharacterCondition::new(
                        ConditionOperator::ValueBetweenInclusive,
                        'a' as i32,
                        'z' as i32,
                    )],
                    CharacterAction::ToUppercase,
                ),
            ],
            CharacterAction::Allow,
        ),
        LineType::SingleLine,
    )
}

// ============================================================================
// Single keystrokes
// ============================================================================

#[divan::bench(args = [10, 1_000, 10_000])]
fn keystroke_at_end(bencher: divan::Bencher, len: usize) {
    let validator = custom_rules();
    let text = "ab.".repeat(len / 3);
    let caret = text.chars().count();
    bencher.bench(|| validator.validate(divan::black_box(&text), "x", caret, caret));
}

#[divan::bench]
fn keystroke_decimal_mode() {
    let validator = TextValidator::new(CharacterValidation::Decimal, LineType::SingleLine);
    validator.validate(divan::black_box("1234.5"), "6", 6, 6);
}

// ============================================================================
// Pastes
// ============================================================================

#[divan::bench(args = [100, 10_000])]
fn paste_custom_rules(bencher: divan::Bencher, len: usize) {
    let validator = custom_rules();
    let paste = "hello. world ".repeat(len / 13);
    bencher.bench(|| validator.validate("", divan::black_box(&paste), 0, 0));
}

#[divan::bench(args = [100, 10_000])]
fn paste_with_limit(bencher: divan::Bencher, len: usize) {
    let validator = TextValidator::new(CharacterValidation::None, LineType::MultiLineNewline)
        .with_character_limit(len / 2);
    let paste = "x".repeat(len);
    bencher.bench(|| validator.validate("", divan::black_box(&paste), 0, 0));
}
