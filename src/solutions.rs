/// Day 5: boarding passes.
///
/// Decodes binary-partitioned `F/B/L/R` seat sequences into seat ids and
/// answers both parts of the puzzle: the highest id on any pass, and the
/// one vacant seat whose neighbours are both occupied.
pub mod boarding;
/// Day 1: expense report.
///
/// Searches the expense report for the pair (or triple) of entries that sum
/// to the target value and reports their product.
pub mod expense;
/// Day 18: math homework.
///
/// Applies the expression evaluator to every line of the homework file and
/// sums the per-line results. The evaluation rules themselves live in the
/// [`evaluator`](crate::evaluator) module.
pub mod homework;
/// Day 4: passport batch processing.
///
/// Splits the batch file into passport records and counts the ones that
/// carry all required fields, or whose field values also pass the stricter
/// validation rules of the bonus part.
pub mod passport;
/// Day 2: password policies.
///
/// Parses `lo-hi letter: password` records and counts the passwords that
/// satisfy their policy, under either the occurrence-count or the
/// position-match reading.
pub mod password;
