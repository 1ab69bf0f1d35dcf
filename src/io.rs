use crate::Error;
use std::io::Read;
use std::path::PathBuf;

/// Where the puzzle input is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` is accepted as an alias for stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        }
    }

    fn name(&self) -> String {
        match self {
            Input::Stdin => String::from("<stdin>"),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// Reads the whole input as UTF-8 text.
pub fn load(input: &Input) -> Result<String, Error> {
    let text = match input {
        Input::Stdin => {
            let stdin = std::io::stdin();
            let stdin = stdin.lock();
            read_to_string(stdin)
        }
        Input::File(path) => std::fs::File::open(path).and_then(read_to_string),
    }
    .map_err(|e| Error::unavailable(input.name(), e))?;

    log::info!("read {} bytes from {}", text.len(), input.name());
    Ok(text)
}

/// Invalid UTF-8 surfaces as `std::io::ErrorKind::InvalidData`.
pub fn read_to_string<R: Read>(mut input: R) -> Result<String, std::io::Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Splits text into trimmed lines. `\r\n` counts as a single break, as do lone `\n` and `\r`
/// and the less common vertical tab, form feed, NEL and unicode line and paragraph separators.
///
/// A final line break yields one trailing empty line, which groups the same as no line at all.
/// A leading byte order mark is dropped.
pub fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split(is_other_line_break))
        .map(str::trim)
}

fn is_other_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[test]
fn crlf_is_one_break() {
    let found = lines("ab\r\nac\r\n\r\nb").collect::<Vec<_>>();
    assert_eq!(found, ["ab", "ac", "", "b"]);
}

#[test]
fn lone_cr_and_unicode_breaks() {
    let found = lines("a\rb\u{2028}c\u{85}d").collect::<Vec<_>>();
    assert_eq!(found, ["a", "b", "c", "d"]);
}

#[test]
fn trailing_newline_is_a_single_empty_line() {
    let found = lines("abc\n").collect::<Vec<_>>();
    assert_eq!(found, ["abc", ""]);
}

#[test]
fn byte_order_mark_is_not_an_answer() {
    let found = lines("\u{feff}abc\r\nb").collect::<Vec<_>>();
    assert_eq!(found, ["abc", "b"]);
}

#[test]
fn lines_are_trimmed() {
    let found = lines("  abc \t\n   \n").collect::<Vec<_>>();
    assert_eq!(found, ["abc", "", ""]);
}

#[test]
fn input_from_arg() {
    assert_eq!(Input::from_arg(None), Input::Stdin);
    assert_eq!(Input::from_arg(Some("-")), Input::Stdin);
    assert_eq!(
        Input::from_arg(Some("input.txt")),
        Input::File(PathBuf::from("input.txt"))
    );
}
