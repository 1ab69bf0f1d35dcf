use crate::answers::Answers;

/// Answers of one travel group, one line per person. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    persons: Vec<String>,
}

impl Group {
    /// Returns `None` for an empty set of persons.
    pub fn new(persons: Vec<String>) -> Option<Self> {
        if persons.is_empty() {
            None
        } else {
            Some(Group { persons })
        }
    }

    pub fn persons(&self) -> &[String] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Always false, a group has at least one person.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn answers(&self) -> impl Iterator<Item = Answers> + '_ {
        self.persons.iter().map(|p| Answers::from(p.as_str()))
    }

    /// Number of questions to which anyone in the group answered "yes".
    pub fn anyone_count(&self) -> usize {
        Answers::union_all(self.answers()).len()
    }

    /// Number of questions to which everyone in the group answered "yes".
    pub fn everyone_count(&self) -> usize {
        if let [only] = &self.persons[..] {
            return Answers::from(only.as_str()).len();
        }
        Answers::intersect_all(self.answers())
            .map(|a| a.len())
            .unwrap_or(0)
    }
}

/// Iterator adapter collecting runs of non-empty lines into groups. Any number of empty lines
/// ends a run; the last run is emitted even without a trailing empty line.
pub struct EmptyLineSeparated<I> {
    inner: I,
}

impl<I> EmptyLineSeparated<I> {
    pub fn new(inner: I) -> Self {
        EmptyLineSeparated { inner }
    }
}

impl<'a, I> Iterator for EmptyLineSeparated<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Group;

    fn next(&mut self) -> Option<Self::Item> {
        let mut persons = Vec::new();
        let mut skipped = 0;

        for line in self.inner.by_ref() {
            if !line.is_empty() {
                persons.push(line.to_owned());
            } else if persons.is_empty() {
                skipped += 1;
            } else {
                break;
            }
        }

        if skipped > 0 {
            log::trace!("skipped {} empty lines", skipped);
        }

        Group::new(persons)
    }
}

/// All groups of the input, built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Questionnaire {
    groups: Vec<Group>,
}

impl Questionnaire {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Questionnaire {
            groups: EmptyLineSeparated::new(lines.into_iter()).collect(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum over groups of the questions anyone answered "yes" to.
    pub fn sum_anyone(&self) -> usize {
        self.groups.iter().map(Group::anyone_count).sum()
    }

    /// Sum over groups of the questions everyone answered "yes" to.
    pub fn sum_everyone(&self) -> usize {
        self.groups.iter().map(Group::everyone_count).sum()
    }
}

#[cfg(test)]
fn group(persons: &[&str]) -> Group {
    Group::new(persons.iter().map(|&s| s.to_owned()).collect()).unwrap()
}

#[test]
fn groups_of_the_example() {
    let input = ["abc", "", "a", "b", "c", "", "ab", "ac", "", "a", "a", "a", "a", "", "b"];
    let q = Questionnaire::from_lines(input.iter().copied());

    let expected = vec![
        group(&["abc"]),
        group(&["a", "b", "c"]),
        group(&["ab", "ac"]),
        group(&["a", "a", "a", "a"]),
        group(&["b"]),
    ];

    assert_eq!(q.groups(), &expected[..]);

    let anyone = q.groups().iter().map(Group::anyone_count).collect::<Vec<_>>();
    let everyone = q.groups().iter().map(Group::everyone_count).collect::<Vec<_>>();
    assert_eq!(anyone, [3, 3, 3, 1, 1]);
    assert_eq!(everyone, [3, 0, 1, 1, 1]);
}

#[test]
fn runs_of_empty_lines_do_not_make_empty_groups() {
    let input = ["", "", "ab", "", "", "", "b", "", ""];
    let q = Questionnaire::from_lines(input.iter().copied());
    assert_eq!(q.groups(), &[group(&["ab"]), group(&["b"])][..]);
}

#[test]
fn last_group_without_separator() {
    let q = Questionnaire::from_lines(vec!["a", "", "xy", "yz"]);
    assert_eq!(q.len(), 2);
    assert_eq!(q.groups()[1], group(&["xy", "yz"]));
}

#[test]
fn no_groups() {
    assert!(Questionnaire::from_lines(Vec::<&str>::new()).is_empty());
    assert!(Questionnaire::from_lines(vec!["", "", ""]).is_empty());
    assert_eq!(Questionnaire::default().sum_anyone(), 0);
    assert_eq!(Questionnaire::default().sum_everyone(), 0);
}

#[test]
fn empty_group_is_rejected() {
    assert_eq!(Group::new(vec![]), None);

    let g = group(&["a"]);
    assert_eq!(g.len(), 1);
    assert!(!g.is_empty());
}

#[test]
fn single_person_counts_agree() {
    for &line in &["abc", "aab", "zyxzyx", "q"] {
        let g = group(&[line]);
        let distinct = Answers::from(line).len();
        assert_eq!(g.anyone_count(), distinct);
        assert_eq!(g.everyone_count(), distinct);
    }
}

#[test]
fn everyone_never_exceeds_anyone() {
    let groups = [
        group(&["abcx", "abcy", "abcz"]),
        group(&["a", "b"]),
        group(&["qwerty", "ytrewq", "wet"]),
        group(&["z", "z", "za"]),
    ];
    for g in &groups {
        assert!(g.everyone_count() <= g.anyone_count(), "{:?}", g);
    }
}

#[test]
fn regrouping_is_idempotent() {
    use itertools::Itertools;

    let input = ["", "ab", "ac", "", "", "b", "", "", "", "xyz", "x", ""];
    let first = Questionnaire::from_lines(input.iter().copied());

    let rejoined = first
        .groups()
        .iter()
        .map(|g| g.persons().join("\n"))
        .join("\n\n");

    let second = Questionnaire::from_lines(rejoined.split('\n'));
    assert_eq!(first, second);
}
