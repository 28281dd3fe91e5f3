#[cfg(test)]
mod verify {
    use std::cell::RefCell;

    use codebox::highlighting::{Highlighters, Language, HIGHLIGHT_LIMIT};
    use codebox::language::*;
    use codebox::parsing::Document;
    use codebox::rendering::{capture, Processor};
    use codebox::templating::{CodeTemplate, Localize, Variables, SIMPLIFIED_CODE};

    /// Remembers every message requested of it.
    #[derive(Default)]
    struct Recording {
        requests: RefCell<Vec<(String, Option<usize>)>>,
        reply: &'static str,
    }

    impl Localize for &Recording {
        fn dynamic_variable(&self, key: &str, variables: &Variables<'_>) -> String {
            self.requests
                .borrow_mut()
                .push((key.to_string(), variables.get("lines").copied()));
            self.reply
                .to_string()
        }
    }

    fn full(html: &str) -> String {
        Processor::new(OutputMode::FullHtml)
            .unwrap()
            .process(html)
            .unwrap()
    }

    #[test]
    fn full_html_listing() {
        let output = full(r#"<p>Intro</p><pre data-file="q.sql">SELECT * FROM foo</pre><p>Outro</p>"#);

        assert!(output.starts_with("<p>Intro</p><div class=\"codeBox"));
        assert!(output.ends_with("</div><p>Outro</p>"));
        assert!(output.contains("<span class=\"source sql\">"));
        assert!(output.contains(">SELECT</span>"));
        assert!(output.contains("<div class=\"codeBoxHeadline\">SQL: q.sql</div>"));
        assert!(output.contains("<li id=\"codeLine_1_"));
        assert!(!output.contains("wcfNode-"));
        assert!(!output.contains("<pre"));
    }

    #[test]
    fn user_text_is_escaped() {
        let output = full("<pre data-file=\"&lt;x&gt;\">if (a &lt; b) { alert('&lt;script&gt;'); }</pre>");

        assert!(!output.contains("<script>"));
        assert!(!output.contains("<x>"));
        assert!(output.contains("&lt;script&gt;"));
        assert!(output.contains(": &lt;x&gt;</div>"));
    }

    #[test]
    fn bare_angle_brackets_survive() {
        let mut processor = Processor::new(OutputMode::FullHtml)
            .unwrap()
            .with_highlighters(Highlighters::none());

        let output = processor
            .process("<pre>if (a < b && c > d) { x(); }</pre>")
            .unwrap();
        assert!(output.contains(
            "<span class=\"codeBoxLine\">if (a &lt; b &amp;&amp; c &gt; d) { x(); }</span>"
        ));
    }

    #[test]
    fn pre_in_attributes_is_not_a_listing() {
        let input = r#"<a title="<pre>x</pre>">link</a>"#;
        let output = Processor::new(OutputMode::PlainText)
            .unwrap()
            .process(input)
            .unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn pre_in_comments_is_not_a_listing() {
        let input = "<!-- <pre>x</pre> --><p>y</p>";
        let output = Processor::new(OutputMode::PlainText)
            .unwrap()
            .process(input)
            .unwrap();
        assert_eq!(output, input);

        let input = "<script>let s = '<pre>x</pre>';</script><p>y</p>";
        let output = Processor::new(OutputMode::PlainText)
            .unwrap()
            .process(input)
            .unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn starting_line() {
        let output = full("<pre data-line=\"5\">a\nb</pre>");

        assert!(output.contains("<ol start=\"5\">"));
        assert!(output.contains("id=\"codeLine_5_"));
        assert!(output.contains("id=\"codeLine_6_"));
        assert!(!output.contains("id=\"codeLine_7_"));

        let output = full("<pre data-line=\"-3\">a</pre>");
        assert!(output.contains("<ol start=\"1\">"));
    }

    #[test]
    fn blank_edges_are_trimmed() {
        let output = full("<pre>\n\n  foo\n\n</pre>");

        assert!(output.contains("data-lines=\"1\""));
        assert!(output.contains("<span class=\"codeBoxLine\">  foo</span>"));
    }

    #[test]
    fn multiline_comment_lines_are_balanced() {
        let output = full("<pre data-highlighter=\"c\">/* one\ntwo */\nint x;</pre>");

        let lines: Vec<&str> = output
            .split("<span class=\"codeBoxLine\">")
            .skip(1)
            .collect();
        assert_eq!(lines.len(), 3);
        for line in &lines[..2] {
            assert!(line.contains("<span class=\"comment block c\">"), "{}", line);
        }
        assert!(!lines[2].contains("comment block"));

        let opened = output
            .matches("<span")
            .count();
        let closed = output
            .matches("</span>")
            .count();
        assert_eq!(opened, closed);
    }

    #[test]
    fn identical_listings_get_distinct_anchors() {
        let output = full("<pre>echo</pre><pre>echo</pre>");

        let anchors: Vec<&str> = output
            .match_indices("id=\"codeLine_1_")
            .map(|(i, _)| {
                let rest = &output[i + 4..];
                &rest[..rest
                    .find('"')
                    .unwrap()]
            })
            .collect();

        assert_eq!(anchors.len(), 2);
        assert_ne!(anchors[0], anchors[1]);
        assert_eq!(anchors[1], format!("{}_1", anchors[0]));
    }

    #[test]
    fn registry_lives_as_long_as_the_processor() {
        let mut processor = Processor::new(OutputMode::FullHtml).unwrap();

        processor
            .process("<pre>x</pre>")
            .unwrap();
        let second = processor
            .process("<pre>x</pre>")
            .unwrap();
        assert!(second.contains("_1\">"));
        assert_eq!(
            processor
                .registry()
                .len(),
            2
        );

        let fresh = full("<pre>x</pre>");
        assert!(!fresh.contains("_1\">"));
    }

    #[test]
    fn disabled_highlighter_renders_plain() {
        let mut processor = Processor::new(OutputMode::FullHtml)
            .unwrap()
            .with_highlighters(Highlighters::default().without(Language::Sql));

        let output = processor
            .process("<pre>SELECT 1</pre>")
            .unwrap();
        assert!(output.contains("<div class=\"codeBoxHeadline\">Plain text</div>"));
        assert!(!output.contains("source sql"));
        assert!(!output.contains("class=\"keyword"));
    }

    #[test]
    fn oversized_listing_is_plain() {
        let content = format!("&lt;?php {}", "x".repeat(HIGHLIGHT_LIMIT));
        let output = full(&format!("<pre data-highlighter=\"php\">{}</pre>", content));

        assert!(output.contains("<div class=\"codeBoxHeadline\">Plain text</div>"));
        assert!(!output.contains("source php"));
        assert!(output.contains("&lt;?php xxx"));
    }

    #[test]
    fn summary_in_plain_text_mode() {
        let recording = Recording {
            reply: "[3 lines]",
            ..Default::default()
        };
        let mut processor = Processor::new(OutputMode::PlainText)
            .unwrap()
            .with_messages(&recording);

        let output = processor
            .process("<p>x</p><pre>a\nb\nc</pre>")
            .unwrap();

        assert_eq!(output, "<p>x</p>[3 lines]");
        assert_eq!(
            *recording
                .requests
                .borrow(),
            vec![(SIMPLIFIED_CODE.to_string(), Some(3))]
        );
    }

    #[test]
    fn summary_counts_unstripped_lines() {
        let recording = Recording {
            reply: "",
            ..Default::default()
        };
        let mut processor = Processor::new(OutputMode::SimplifiedHtml)
            .unwrap()
            .with_messages(&recording);

        processor
            .process("<pre>a\n\n</pre>")
            .unwrap();
        assert_eq!(
            recording
                .requests
                .borrow()[0]
                .1,
            Some(3)
        );
    }

    #[test]
    fn summary_is_text_not_markup() {
        let recording = Recording {
            reply: "<b>code</b>",
            ..Default::default()
        };
        let mut processor = Processor::new(OutputMode::SimplifiedHtml)
            .unwrap()
            .with_messages(&recording);

        let output = processor
            .process("<pre>a</pre>")
            .unwrap();
        assert_eq!(output, "&lt;b&gt;code&lt;/b&gt;");
    }

    #[test]
    fn default_summary_message() {
        let output = Processor::new(OutputMode::PlainText)
            .unwrap()
            .process("<pre>a\nb</pre>")
            .unwrap();
        assert_eq!(output, "[Code listing, lines: 2]");
    }

    #[test]
    fn raw_html_passes_through_in_every_mode() {
        let input = r#"<pre class="woltlabHtml">&lt;iframe src="x"&gt;&lt;/iframe&gt;</pre>"#;

        for mode in [OutputMode::FullHtml, OutputMode::SimplifiedHtml, OutputMode::PlainText] {
            let output = Processor::new(mode)
                .unwrap()
                .process(input)
                .unwrap();
            assert_eq!(output, "<iframe src=\"x\"></iframe>");
        }
    }

    #[test]
    fn custom_template() {
        let template = CodeTemplate::with_text("[{highlighter}{{ for line in lines }}|{line.content | unescaped}{{ endfor }}]").unwrap();
        let mut processor = Processor::new(OutputMode::FullHtml)
            .unwrap()
            .with_template(template);

        let output = processor
            .process("<pre data-highlighter=\"shell\">echo $HOME\nls</pre>")
            .unwrap();
        assert!(output.starts_with("[Bash|<span class=\"source shell bash\">"));
        assert!(output.ends_with("</span>]"));
        assert_eq!(
            output
                .matches('|')
                .count(),
            2
        );
        assert!(output.contains("echo"));
        assert!(output.contains("HOME"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn resolving_against_wrong_captures_fails() {
        let mut document = Document::parse("<pre>a</pre>");
        let _captures = capture(&mut document);

        let mut other = Document::parse("<pre>b</pre>");
        let captures = capture(&mut other);

        let mut processor = Processor::new(OutputMode::FullHtml).unwrap();
        let result = processor.resolve_document(&mut document, captures);
        assert!(matches!(result, Err(RenderingError::MissingPlaceholder(_))));
    }

    #[test]
    fn documents_without_listings_are_unchanged() {
        let input = "<p>Hello <b>world</b> &amp; <code>inline</code></p>";
        assert_eq!(full(input), input);
    }
}
