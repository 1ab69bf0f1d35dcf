// customs declaration forms: groups of people answering 26 yes-or-no questions

pub mod answers;
pub mod error;
pub mod group;
pub mod io;

pub use error::Error;
pub use group::{Group, Questionnaire};

/// Runs the whole pipeline over already loaded text, returning the sum of questions anyone
/// answered "yes" to and the sum of questions everyone answered "yes" to, over all groups.
pub fn solve(text: &str) -> (usize, usize) {
    let questionnaire = Questionnaire::from_lines(io::lines(text));
    log::info!("parsed {} groups", questionnaire.len());

    if log::log_enabled!(log::Level::Debug) {
        for (idx, group) in questionnaire.groups().iter().enumerate() {
            log::debug!(
                "group {} of {} persons: anyone {}, everyone {}",
                idx,
                group.len(),
                group.anyone_count(),
                group.everyone_count()
            );
        }
    }

    (questionnaire.sum_anyone(), questionnaire.sum_everyone())
}

#[test]
fn example_from_the_form() {
    let input = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb";
    assert_eq!(solve(input), (11, 6));
}

#[test]
fn leading_byte_order_mark() {
    assert_eq!(solve("\u{feff}abc\n"), (3, 3));
}

#[test]
fn single_group_without_separators() {
    assert_eq!(solve("abcx\nabcy\nabcz"), (6, 3));
}

#[test]
fn nothing_to_count() {
    assert_eq!(solve(""), (0, 0));
    assert_eq!(solve("\n\n\n"), (0, 0));
    assert_eq!(solve(" \r\n\t\n"), (0, 0));
}
