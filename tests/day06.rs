use customs::io::{self, Input};
use customs::{Error, Questionnaire};
use std::io::Write;

fn example_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/example.txt")
}

#[test]
fn example_file() {
    let text = io::load(&Input::File(example_path())).unwrap();

    let q = Questionnaire::from_lines(io::lines(&text));
    assert_eq!(q.len(), 5);

    assert_eq!(customs::solve(&text), (11, 6));
}

#[test]
fn example_with_crlf_and_extra_blank_lines() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(
        tmp,
        "\r\n\r\nabc\r\n\r\n\r\na\r\nb\r\nc\r\n\r\nab\r\nac\r\n\r\na\r\na\r\na\r\na\r\n\r\n\r\nb\r\n\r\n"
    )
    .unwrap();
    tmp.flush().unwrap();

    let text = io::load(&Input::File(tmp.path().to_owned())).unwrap();
    assert_eq!(customs::solve(&text), (11, 6));
}

#[test]
fn file_starting_with_byte_order_mark() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"\xef\xbb\xbfabcx\nabcy\nabcz\n\nq\n").unwrap();
    tmp.flush().unwrap();

    let text = io::load(&Input::File(tmp.path().to_owned())).unwrap();

    let q = Questionnaire::from_lines(io::lines(&text));
    assert_eq!(q.groups()[0].persons(), ["abcx", "abcy", "abcz"]);

    assert_eq!(customs::solve(&text), (7, 4));
}

#[test]
fn blank_only_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"\n\n  \n").unwrap();
    tmp.flush().unwrap();

    let text = io::load(&Input::File(tmp.path().to_owned())).unwrap();
    assert_eq!(customs::solve(&text), (0, 0));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");

    match io::load(&Input::File(path)) {
        Err(Error::InputUnavailable { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        x => panic!("unexpected: {:?}", x),
    }
}

#[test]
fn not_utf8() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&[b'a', b'b', 0xff, 0xfe, b'\n']).unwrap();
    tmp.flush().unwrap();

    match io::load(&Input::File(tmp.path().to_owned())) {
        Err(Error::InputUnavailable { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        x => panic!("unexpected: {:?}", x),
    }
}

#[test]
fn read_from_any_reader() {
    let text = io::read_to_string(&b"abcx\nabcy\nabcz\n"[..]).unwrap();
    assert_eq!(customs::solve(&text), (6, 3));
}
