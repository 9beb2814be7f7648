use brushwork_assets::{
    ActivationSet, Brush, RecordingPipeline, Theme, core_script_id, core_stylesheet_id,
    extend_stylesheet_id, register_assets,
};

type Error = Box<dyn std::error::Error>;

#[test]
fn test_scan_and_enqueue_end_to_end() -> Result<(), Error> {
    let mut pipeline = RecordingPipeline::new();
    register_assets(&mut pipeline)?;

    let content =
        "Here: [render_syntax_highlighter language=\"Python\"]print(1)[/render_syntax_highlighter]";
    let set = ActivationSet::from_content(content);
    set.enqueue(&mut pipeline)?;

    pretty_assertions::assert_eq!(
        pipeline.enqueued_scripts(),
        &[core_script_id(), Brush::Python.script_id()]
    );
    pretty_assertions::assert_eq!(
        pipeline.enqueued_styles(),
        &[
            Theme::Default.stylesheet_id(),
            core_stylesheet_id(),
            extend_stylesheet_id(),
        ]
    );
    Ok(())
}

#[test]
fn test_no_occurrences_enqueues_nothing() -> Result<(), Error> {
    let mut pipeline = RecordingPipeline::new();
    register_assets(&mut pipeline)?;

    let set = ActivationSet::from_content("a page without code samples");
    set.enqueue(&mut pipeline)?;

    assert!(pipeline.enqueued_scripts().is_empty());
    assert!(pipeline.enqueued_styles().is_empty());
    Ok(())
}

#[rstest::rstest]
#[case::recognized("Python", Brush::Python)]
#[case::case_folded("python", Brush::Python)]
#[case::unrecognized("Cobol", Brush::Php)]
fn test_every_selected_script_is_registered(
    #[case] language: &str,
    #[case] expected: Brush,
) -> Result<(), Error> {
    let mut pipeline = RecordingPipeline::new();
    register_assets(&mut pipeline)?;

    let content = format!(
        "[render_syntax_highlighter language=\"{language}\"]x[/render_syntax_highlighter]"
    );
    let set = ActivationSet::from_content(&content);
    // Enqueue succeeds because resolution falls back to the catalog
    // defaults instead of passing unknown names through.
    set.enqueue(&mut pipeline)?;
    assert!(pipeline.enqueued_scripts().contains(&expected.script_id()));
    Ok(())
}

#[test]
fn test_separate_documents_do_not_share_state() -> Result<(), Error> {
    let first = ActivationSet::from_content(
        "[render_syntax_highlighter language=\"Sql\"]select 1[/render_syntax_highlighter]",
    );
    let second = ActivationSet::from_content(
        "[render_syntax_highlighter language=\"Ruby\"]puts 1[/render_syntax_highlighter]",
    );

    assert!(first.scripts().contains(&Brush::Sql.script_id()));
    assert!(!first.scripts().contains(&Brush::Ruby.script_id()));
    assert!(second.scripts().contains(&Brush::Ruby.script_id()));
    assert!(!second.scripts().contains(&Brush::Sql.script_id()));

    // Both still pull in the shared core assets independently.
    assert!(first.scripts().contains(&core_script_id()));
    assert!(second.scripts().contains(&core_script_id()));
    Ok(())
}
