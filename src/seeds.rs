//! Built-in question bank, used whenever no bank is configured.

use crate::domain::Question;

/// Excel interview questions served by default.
pub fn seed_questions() -> Vec<Question> {
  vec![
    Question {
      id: 0,
      question: "What is the difference between VLOOKUP and INDEX-MATCH in Excel?".into(),
      ideal_answer: "VLOOKUP searches for a value in the first column of a range and returns a value in the same row. INDEX-MATCH is more flexible, allowing lookups both vertically and horizontally, and does not require the lookup column to be first.".into(),
    },
    Question {
      id: 1,
      question: "How would you find duplicate values in an Excel column?".into(),
      ideal_answer: "Use Conditional Formatting → Highlight Cells Rules → Duplicate Values or use COUNTIF to filter values that occur more than once.".into(),
    },
    Question {
      id: 2,
      question: "Explain how to use a Pivot Table in Excel.".into(),
      ideal_answer: "A Pivot Table allows you to summarize large datasets. You can drag fields into rows, columns, values, and filters to calculate sums, counts, averages, etc.".into(),
    },
  ]
}
