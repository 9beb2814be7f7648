use brushwork_assets::{AssetId, AssetPipeline, RecordingPipeline};
use brushwork_html::{Error as HtmlError, MemoryRegistry, Options, Processor, ShortcodeRegistry};

type Error = Box<dyn std::error::Error>;

fn convert_to_string(processor: &Processor, content: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    processor.convert(&mut output, content)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_standalone_page_carries_exactly_the_needed_assets() -> Result<(), Error> {
    let options = Options::builder()
        .base_url("https://cdn.example.com/highlighter")
        .title("Demo")
        .build();
    let processor = Processor::new(options);

    let content =
        "Here: [render_syntax_highlighter language=\"Python\"]print(1)[/render_syntax_highlighter]";
    let html = convert_to_string(&processor, content)?;

    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains("<pre class=\"brush: python;\">print(1)</pre>"));

    // Styles: default theme, core, extend - each exactly once.
    for stylesheet in ["css/shThemeDefault.css", "css/shCore.css", "css/extend.css"] {
        let link = format!(
            "<link rel=\"stylesheet\" href=\"https://cdn.example.com/highlighter/{stylesheet}\">"
        );
        assert_eq!(html.matches(&link).count(), 1, "missing or duplicated {stylesheet}");
    }

    // Scripts: core then the one referenced brush, plus the activation snippet.
    assert_eq!(html.matches("js/shCore.js").count(), 1);
    assert_eq!(html.matches("js/brushes/shBrushPython.js").count(), 1);
    assert!(html.contains("SyntaxHighlighter.all();"));

    // Nothing else from the catalog leaked in.
    assert!(!html.contains("shBrushSql"));
    assert!(!html.contains("shThemeMidnight"));
    Ok(())
}

#[test]
fn test_page_without_occurrences_has_no_highlighter_assets() -> Result<(), Error> {
    let processor = Processor::default();
    let html = convert_to_string(&processor, "just prose")?;

    assert!(html.contains("just prose"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("shCore"));
    assert!(!html.contains("SyntaxHighlighter.all();"));
    Ok(())
}

#[test]
fn test_embedded_mode_emits_fragments_only() -> Result<(), Error> {
    let options = Options::builder().embedded(true).build();
    let processor = Processor::new(options);

    let content = "[render_syntax_highlighter]echo 1;[/render_syntax_highlighter]";
    let html = convert_to_string(&processor, content)?;
    pretty_assertions::assert_eq!(html, "<pre class=\"brush: php;\">echo 1;</pre>");
    Ok(())
}

#[test]
fn test_conversion_is_pure() -> Result<(), Error> {
    let processor = Processor::default();
    let content = "[render_syntax_highlighter language=\"Diff\"]-a\n+b[/render_syntax_highlighter]";
    let first = convert_to_string(&processor, content)?;
    let second = convert_to_string(&processor, content)?;
    pretty_assertions::assert_eq!(first, second);
    Ok(())
}

/// A registry standing in for a host whose shortcode framework is absent.
#[derive(Debug, Default)]
struct UnavailableRegistry;

impl ShortcodeRegistry for UnavailableRegistry {
    type Error = String;

    fn register_shortcode(&mut self, _tag: &str) -> Result<(), Self::Error> {
        Err("shortcode framework not loaded".to_string())
    }
}

/// A pipeline standing in for a host that rejects asset declarations.
#[derive(Debug, Default)]
struct RejectingPipeline;

impl AssetPipeline for RejectingPipeline {
    type Error = String;

    fn register_script(
        &mut self,
        _id: &AssetId,
        _path: &str,
        _dependencies: &[AssetId],
    ) -> Result<(), Self::Error> {
        Err("asset pipeline unavailable".to_string())
    }

    fn register_style(
        &mut self,
        _id: &AssetId,
        _path: &str,
        _dependencies: &[AssetId],
    ) -> Result<(), Self::Error> {
        Err("asset pipeline unavailable".to_string())
    }

    fn enqueue_script(&mut self, _id: &AssetId) -> Result<(), Self::Error> {
        Err("asset pipeline unavailable".to_string())
    }

    fn enqueue_style(&mut self, _id: &AssetId) -> Result<(), Self::Error> {
        Err("asset pipeline unavailable".to_string())
    }
}

#[test]
#[tracing_test::traced_test]
fn test_missing_registry_disables_integration_with_one_notice() {
    let processor = Processor::default();
    let mut registry = UnavailableRegistry;
    let mut pipeline = RecordingPipeline::new();

    let result = processor.init(&mut registry, &mut pipeline);
    assert!(matches!(result, Err(HtmlError::Host(_))));
    // Nothing was registered on the asset side.
    assert!(
        pipeline
            .registered_script(&brushwork_assets::core_script_id())
            .is_none()
    );
    assert!(logs_contain("disabling syntax highlighter integration"));
}

#[test]
#[tracing_test::traced_test]
fn test_failing_pipeline_disables_integration() {
    let processor = Processor::default();
    let mut registry = MemoryRegistry::new();
    let mut pipeline = RejectingPipeline;

    let result = processor.init(&mut registry, &mut pipeline);
    assert!(matches!(result, Err(HtmlError::Host(_))));
    assert!(logs_contain("disabling syntax highlighter integration"));
}
