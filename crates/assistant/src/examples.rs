//! Example questions offered to the user.

/// Questions a user can pick instead of typing one.
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What is the expense ratio for HDFC Flexi Cap Direct Plan?",
    "Exit load for HDFC Small Cap Fund?",
    "How do I download my capital-gains statement on Groww?",
];

/// Look up an example by its 1-based position.
pub fn example(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| EXAMPLE_QUESTIONS.get(i))
        .copied()
}
