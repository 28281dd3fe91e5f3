#[cfg(test)]
mod verify {
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    fn codebox(args: &[&str], input: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_codebox"))
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child
            .wait_with_output()
            .unwrap()
    }

    #[test]
    fn render_from_standard_input() {
        let output = codebox(&["render", "--mode", "plain-text", "-"], "<p>a</p><pre>x\ny</pre>");

        assert!(output
            .status
            .success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "<p>a</p>[Code listing, lines: 2]");
    }

    #[test]
    fn render_full_html() {
        let output = codebox(&["render", "-"], "<pre data-file=\"q.sql\">SELECT 1</pre>");

        assert!(output
            .status
            .success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<div class=\"codeBoxHeadline\">SQL: q.sql</div>"));
        assert!(stdout.contains("<span class=\"source sql\">"));
    }

    #[test]
    fn disabled_language_is_plain() {
        let output = codebox(&["render", "--disable", "sql", "-"], "<pre>SELECT 1</pre>");

        assert!(output
            .status
            .success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<div class=\"codeBoxHeadline\">Plain text</div>"));
        assert!(!stdout.contains("source sql"));
    }

    #[test]
    fn missing_file_fails() {
        let output = codebox(&["render", "/nonexistent/listing.html"], "");

        assert_eq!(
            output
                .status
                .code(),
            Some(1)
        );
        assert!(output
            .stdout
            .is_empty());
        assert!(!output
            .stderr
            .is_empty());
    }

    #[test]
    fn highlight_into_a_pipe_is_plain() {
        let output = codebox(&["highlight", "-"], "\n\nSELECT 1\n\n");

        assert!(output
            .status
            .success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "SELECT 1\n");
    }

    #[test]
    fn highlight_with_raw_control_chars() {
        let output = codebox(&["highlight", "-R", "--language", "sql", "-"], "SELECT 1");

        assert!(output
            .status
            .success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\x1b["));
        assert!(stdout.contains("SELECT"));
    }
}
