use std::fs;
use std::io::{BufReader, Cursor};
use token_scanner::TokenScanner;

fn collect(scanner: &mut TokenScanner) -> Vec<String> {
    scanner
        .by_ref()
        .collect::<Result<_, _>>()
        .expect("input should scan")
}

#[cfg(test)]
mod streaming_tests {
    use super::*;

    #[test]
    fn test_reader_matches_string_input() {
        let text = "go north\ntake lamp, key\n\n/* look */ look\n";
        let mut from_text = TokenScanner::new(text);
        from_text.ignore_whitespace();
        from_text.ignore_comments();

        let mut from_reader = TokenScanner::from_reader(Cursor::new(text.to_string()));
        from_reader.ignore_whitespace();
        from_reader.ignore_comments();

        let expected = ["go", "north", "take", "lamp", ",", "key", "look"];
        assert_eq!(collect(&mut from_text), expected);
        assert_eq!(collect(&mut from_reader), expected);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let mut scanner = TokenScanner::from_reader(Cursor::new("a /* one\ntwo\nthree */ b"));
        scanner.ignore_whitespace();
        scanner.ignore_comments();
        assert_eq!(collect(&mut scanner), ["a", "b"]);
    }

    #[test]
    fn test_operator_spanning_lines_backtracks() {
        let mut scanner = TokenScanner::from_reader(Cursor::new("<\n="));
        scanner.add_operator("<=");
        scanner.add_operator("<\n=");
        assert_eq!(collect(&mut scanner), ["<\n="]);

        scanner.set_reader(Cursor::new("<\n-"));
        assert_eq!(collect(&mut scanner), ["<", "\n", "-"]);
    }

    #[test]
    fn test_position_is_relative_to_current_line() {
        let mut scanner = TokenScanner::from_reader(Cursor::new("first line\nsecond\n"));
        scanner.ignore_whitespace();
        assert_eq!(scanner.next_token().unwrap(), "first");
        assert_eq!(scanner.next_token().unwrap(), "line");
        assert_eq!(scanner.next_token().unwrap(), "second");
        assert_eq!(scanner.position().unwrap(), 6);
        assert_eq!(scanner.to_string(), "TokenScanner(\"second\n\")");
    }

    #[test]
    fn test_set_input_switches_from_reader_to_text() {
        let mut scanner = TokenScanner::from_reader(Cursor::new("ignored forever"));
        scanner.ignore_whitespace();
        assert_eq!(scanner.next_token().unwrap(), "ignored");
        scanner.set_input("fresh text");
        assert_eq!(collect(&mut scanner), ["fresh", "text"]);
        assert!(scanner.take_io_error().is_none());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "token_scanner_from_file_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "x = 1.5\ny = 'two'\n").expect("temp file should be writable");

        let mut scanner = TokenScanner::from_file(&path).expect("file should open");
        scanner.ignore_whitespace();
        scanner.scan_numbers();
        scanner.scan_strings();
        let tokens = collect(&mut scanner);
        fs::remove_file(&path).ok();

        assert_eq!(tokens, ["x", "=", "1.5", "y", "=", "'two'"]);
    }

    #[test]
    fn test_from_missing_file() {
        let path = std::env::temp_dir().join("token_scanner_definitely_missing/none.txt");
        assert!(TokenScanner::from_file(path).is_err());
    }

    #[test]
    fn test_buf_reader_over_bytes() {
        let bytes: &'static [u8] = b"alpha\r\nbeta\r\n";
        let mut scanner = TokenScanner::from_reader(BufReader::new(bytes));
        scanner.ignore_whitespace();
        assert_eq!(collect(&mut scanner), ["alpha", "beta"]);
    }
}
