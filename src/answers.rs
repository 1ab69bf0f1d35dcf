use itertools::Itertools;
use std::collections::HashSet;

/// The distinct questions a person, or a whole group, answered "yes" to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashSet<char>);

impl Answers {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Questions anyone answered; empty for no persons.
    pub fn union_all<I: IntoIterator<Item = Answers>>(persons: I) -> Answers {
        persons
            .into_iter()
            .fold(Answers::default(), |mut acc, next| {
                acc.0.extend(next.0);
                acc
            })
    }

    /// Questions everyone answered, or `None` for no persons at all.
    pub fn intersect_all<I: IntoIterator<Item = Answers>>(persons: I) -> Option<Answers> {
        // the first person is the candidate, everyone else can only take questions away
        persons.into_iter().fold1(|mut acc, next| {
            acc.0.retain(|q| next.0.contains(q));
            acc
        })
    }
}

impl From<&str> for Answers {
    fn from(line: &str) -> Self {
        Answers(line.chars().collect())
    }
}

#[cfg(test)]
fn persons(lines: &[&str]) -> Vec<Answers> {
    lines.iter().map(|&l| Answers::from(l)).collect()
}

#[test]
fn duplicates_count_once() {
    let a = Answers::from("abca");
    assert_eq!(a.len(), 3);
    assert_eq!(a, Answers::from("cab"));
}

#[test]
fn union_of_example_group() {
    let union = Answers::union_all(persons(&["abcx", "abcy", "abcz"]));
    assert_eq!(union, Answers::from("abcxyz"));
}

#[test]
fn intersection_of_example_group() {
    let common = Answers::intersect_all(persons(&["abcx", "abcy", "abcz"]));
    assert_eq!(common, Some(Answers::from("cba")));
}

#[test]
fn disjoint_persons_share_nothing() {
    let common = Answers::intersect_all(persons(&["a", "b", "c"])).unwrap();
    assert!(common.is_empty());
}

#[test]
fn no_persons() {
    assert!(Answers::union_all(Vec::new()).is_empty());
    assert_eq!(Answers::intersect_all(Vec::new()), None);
}
