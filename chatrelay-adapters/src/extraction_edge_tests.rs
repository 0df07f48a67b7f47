//! Extraction edge case tests.
//!
//! These tests run each platform's full chain against small page snapshots
//! covering primary layouts, fallbacks, and failure modes.

use chatrelay_core::{Conversation, PlatformKind, Role};
use chatrelay_dom::{ExtractError, ExtractSettings, PageDocument};

use crate::adapter::PlatformAdapter;
use crate::registry::AdapterRegistry;

fn extract(kind: PlatformKind, html: &str) -> Result<Conversation, ExtractError> {
    extract_with(kind, html, &ExtractSettings::default())
}

fn extract_with(
    kind: PlatformKind,
    html: &str,
    settings: &ExtractSettings,
) -> Result<Conversation, ExtractError> {
    let doc = PageDocument::parse(html);
    AdapterRegistry::get(kind).unwrap().extract_messages(&doc, settings)
}

fn roles(conv: &Conversation) -> Vec<Role> {
    conv.iter().map(|m| m.role).collect()
}

fn winning_strategy(kind: PlatformKind, html: &str) -> Option<String> {
    let doc = PageDocument::parse(html);
    let outcome = AdapterRegistry::get(kind)
        .unwrap()
        .extract_outcome(&doc, &ExtractSettings::default());
    outcome.successful_strategy().map(String::from)
}

mod chatgpt_edge_tests {
    use super::*;

    // ========================================================================
    // Primary Layout
    // ========================================================================

    #[test]
    fn test_conversation_turns() {
        let html = r#"<main>
            <article data-testid="conversation-turn-1">
                <h5>You said:</h5>
                <div data-message-author-role="user"><div>How do I sort a list in Python?</div></div>
            </article>
            <article data-testid="conversation-turn-2">
                <div data-message-author-role="assistant">
                    <div class="markdown prose"><p>Use sorted(my_list).</p></div>
                </div>
            </article>
        </main>"#;
        let conv = extract(PlatformKind::ChatGpt, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert!(conv.messages()[0].content.contains("How do I sort a list in Python?"));
        assert_eq!(conv.messages()[1].content, "Use sorted(my_list).");
        assert_eq!(winning_strategy(PlatformKind::ChatGpt, html).as_deref(), Some("chatgpt.turns"));
    }

    #[test]
    fn test_code_block_and_list_keep_layout() {
        let html = "<main>\
            <article data-testid='conversation-turn-1'>\
                <div data-message-author-role='user'><div>Write   a function</div></div>\
            </article>\
            <article data-testid='conversation-turn-2'>\
                <div data-message-author-role='assistant'><div class='markdown prose'>\
                    <p>Try:</p>\
                    <pre><code class='language-python'>def f(x):\n    if x:\n        return 1\n    return 0\n</code></pre>\
                    <ul><li>first</li><li>second</li></ul>\
                </div></div>\
            </article>\
        </main>";
        let conv = extract(PlatformKind::ChatGpt, html).unwrap();
        assert_eq!(conv.messages()[0].content, "Write a function");
        assert_eq!(
            conv.messages()[1].content,
            "Try:\ndef f(x):\n    if x:\n        return 1\n    return 0\nfirst\nsecond"
        );
    }

    #[test]
    fn test_user_testid_without_author_attribute() {
        let html = r#"<article data-testid="conversation-turn-user-1">question</article>
            <article data-testid="conversation-turn-2">answer</article>"#;
        let conv = extract(PlatformKind::ChatGpt, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    // ========================================================================
    // Fallbacks
    // ========================================================================

    #[test]
    fn test_plain_articles() {
        let html = r#"<article><div data-message-author-role="user">Hi</div></article>
            <article><p>Hello!</p></article>"#;
        let conv = extract(PlatformKind::ChatGpt, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(winning_strategy(PlatformKind::ChatGpt, html).as_deref(), Some("chatgpt.articles"));
    }

    #[test]
    fn test_no_articles() {
        let err = extract(PlatformKind::ChatGpt, "<main><p>Welcome back</p></main>").unwrap_err();
        assert!(matches!(err, ExtractError::NoMessagesFound));
    }
}

mod claude_edge_tests {
    use super::*;
    use chatrelay_core::INLINE_IMAGE_SENTINEL;

    #[test]
    fn test_render_count_turns() {
        let html = r#"<main>
            <div data-test-render-count="1">
                <div data-is-user-message="true"><p>Summarize this</p><img src="data:image/png;base64,AAA"></div>
            </div>
            <div data-test-render-count="2">
                <button>Copy</button>
                <div class="font-claude-message"><p>Here is a summary.</p></div>
            </div>
        </main>"#;
        let conv = extract(PlatformKind::Claude, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(conv.messages()[0].content, "Summarize this");
        assert_eq!(conv.messages()[0].attachments[0].url, INLINE_IMAGE_SENTINEL);
        assert_eq!(conv.messages()[1].content, "Here is a summary.");
    }

    #[test]
    fn test_preformatted_blank_lines_and_ordered_list() {
        let html = "<main>\
            <div data-test-render-count='1'>\
                <div data-is-user-message='true'><p>Fix this config</p></div>\
            </div>\
            <div data-test-render-count='2'>\
                <div class='font-claude-message'>\
                    <p>Config:</p>\
                    <pre>server:\n  port: 8080\n\n  host: localhost\n</pre>\
                    <ol><li>Save it</li><li>Restart</li></ol>\
                    <table><tr><th>key</th><th>value</th></tr><tr><td>port</td><td>8080</td></tr></table>\
                </div>\
            </div>\
        </main>";
        let conv = extract(PlatformKind::Claude, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(
            conv.messages()[1].content,
            "Config:\nserver:\n  port: 8080\n\n  host: localhost\nSave it\nRestart\nkey value\nport 8080"
        );
    }

    #[test]
    fn test_message_body_fallback() {
        let html = r#"
            <div data-is-user-message="true"><div class="font-claude-message">Q</div></div>
            <div><div class="font-claude-message">A <a href="blob:https://claude.ai/1" download="a.txt">a.txt</a></div></div>"#;
        let conv = extract(PlatformKind::Claude, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(conv.messages()[1].attachments.len(), 1);
        assert_eq!(conv.messages()[1].attachments[0].name.as_deref(), Some("a.txt"));
    }

    #[test]
    fn test_unrecognized_layout() {
        let html = r#"<main><div class="new-layout">Some conversation text</div></main>"#;
        let err = extract(PlatformKind::Claude, html).unwrap_err();
        assert!(matches!(err, ExtractError::UnrecognizedLayout { ref platform } if platform == "Claude"));
    }

    #[test]
    fn test_empty_page() {
        let err = extract(PlatformKind::Claude, "<main></main>").unwrap_err();
        assert!(matches!(err, ExtractError::NoMessagesFound));
    }

    #[test]
    fn test_attachment_only_turn() {
        let html = r#"<div data-test-render-count="1" data-is-user-message="true"><img src="https://claude.ai/img.png"></div>"#;
        let conv = extract(PlatformKind::Claude, html).unwrap();
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].content, "(attachment)");
        assert_eq!(conv.messages()[0].attachments.len(), 1);
    }
}

mod gemini_edge_tests {
    use super::*;

    #[test]
    fn test_message_blocks() {
        let html = r#"
            <div class="user-turn"><div class="message-content">What is Rust?</div></div>
            <div class="model-turn"><div class="message-content">Rust is a systems language.</div></div>"#;
        let conv = extract(PlatformKind::Gemini, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_data_test_id_marks_user() {
        let html = r#"<div data-test-id="user-turn"><div class="message-content">Hi</div></div>"#;
        let conv = extract(PlatformKind::Gemini, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User]);
    }

    #[test]
    fn test_query_response_elements() {
        let html = "<user-query><p>What is Rust?</p></user-query>\
                    <model-response><p>A language.</p></model-response>";
        let conv = extract(PlatformKind::Gemini, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(
            winning_strategy(PlatformKind::Gemini, html).as_deref(),
            Some("gemini.query_response")
        );
    }

    #[test]
    fn test_paragraph_scan_in_conversation_region() {
        let html = r#"<div class="conversation">
            <div class="chat-response">This is the first long block</div>
            <div class="chat-response">short</div>
            <div class="chat-response">Second long block here</div>
        </div>"#;
        let conv = extract(PlatformKind::Gemini, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);

        let err = extract_with(PlatformKind::Gemini, html, &ExtractSettings::strict()).unwrap_err();
        assert!(matches!(err, ExtractError::NoMessagesFound));
    }
}

mod grok_edge_tests {
    use super::*;

    #[test]
    fn test_class_tokens() {
        let html = r#"<div class="message-bubble user">Hello Grok</div><div class="message-bubble">Hi there</div>"#;
        let conv = extract(PlatformKind::Grok, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_data_role() {
        let html = r#"<div data-role="user">Q</div><div data-role="assistant">A</div>"#;
        let conv = extract(PlatformKind::Grok, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_role_classes_skip_tiny_text() {
        let html = r#"<div class="human">Question here</div><div class="assistant-reply">Answer</div><div class="assistant">x</div>"#;
        let conv = extract(PlatformKind::Grok, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(winning_strategy(PlatformKind::Grok, html).as_deref(), Some("grok.role_classes"));
    }

    #[test]
    fn test_paragraphs_take_parent_attachments() {
        let html = r#"<main>
            <section><p>Look at this chart</p><img src="chart.png"></section>
            <section><p>It trends upward.</p></section>
        </main>"#;
        let conv = extract(PlatformKind::Grok, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(conv.messages()[0].attachments[0].url, "chart.png");
        assert!(conv.messages()[1].attachments.is_empty());
    }
}

mod poe_edge_tests {
    use super::*;

    #[test]
    fn test_message_rows() {
        let html = r#"<div class="Message_row human"><p>Hi Poe</p></div><div class="Message_row bot"><p>Hello!</p></div>"#;
        let conv = extract(PlatformKind::Poe, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_descendant_marks_user() {
        let html = r#"<div class="Message_row"><span class="human-avatar"></span>Hi</div>"#;
        let conv = extract(PlatformKind::Poe, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User]);
    }

    #[test]
    fn test_chat_blocks() {
        let html = r#"<div class="chat-row human">Question</div><div class="chat-row bot">Answer</div>"#;
        let conv = extract(PlatformKind::Poe, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(winning_strategy(PlatformKind::Poe, html).as_deref(), Some("poe.blocks"));
    }

    #[test]
    fn test_bubbles() {
        let html = r#"<main><div class="bubble-a">First bubble text</div><div class="bubble-b">Second bubble</div></main>"#;
        let conv = extract(PlatformKind::Poe, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        assert_eq!(winning_strategy(PlatformKind::Poe, html).as_deref(), Some("poe.paragraphs"));
    }
}

mod generic_edge_tests {
    use super::*;

    #[test]
    fn test_author_attributes() {
        let html = r#"<div data-role="user">What's new?</div><div data-message-author-role="assistant">Lots.</div>"#;
        for kind in [PlatformKind::Perplexity, PlatformKind::Copilot, PlatformKind::Meta, PlatformKind::You] {
            let conv = extract(kind, html).unwrap();
            assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
        }
    }

    #[test]
    fn test_message_classes() {
        let html = r#"<div class="message user">q</div><div class="message">a</div>"#;
        let conv = extract(PlatformKind::Perplexity, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_paragraphs() {
        let html = "<main><p>Tell me a joke</p><p>Why did the crab cross?</p></main>";
        let conv = extract(PlatformKind::You, html).unwrap();
        assert_eq!(roles(&conv), vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn test_nothing_recognized() {
        let err = extract(PlatformKind::Meta, "<main><span>hi</span></main>").unwrap_err();
        assert!(matches!(err, ExtractError::NoMessagesFound));
    }
}
