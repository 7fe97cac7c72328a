//! Integration tests rendering TypeDoc output end to end

use refmark_core::{
    select_output, Config, Document, Emit, Group, GroupResolver, MarkdownRenderer, NodeIndex,
    OutputAssembler, ReflectionKind, ReflectionNode, RenderContext,
};

const FIXTURE: &str = include_str!("fixtures/out.json");

fn fixture() -> Document {
    Document::parse(FIXTURE).unwrap()
}

#[test]
fn test_fixture_loads() {
    let document = fixture();
    assert_eq!(document.children.len(), 3);
    assert_eq!(document.groups.len(), 4);

    let index = NodeIndex::build(&document);
    assert_eq!(index.len(), 7);
    assert_eq!(index.lookup(3).unwrap().summary(), Some("Adds two numbers"));
}

#[test]
fn test_assemble_every_group() {
    let groups = OutputAssembler::default().assemble(&fixture()).unwrap();
    let titles: Vec<_> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Classes", "Interfaces", "", "Functions"]);

    let classes = &groups[0].body;
    assert!(classes.starts_with("# Classes\n\n## Calculator\n\n<details>\n<summary>Class</summary>"));
    assert!(classes.contains("A tiny calculator."));
    assert!(classes.contains("### constructor\n\n_Constructor_\n\nNo description"));
    assert!(classes.contains("### add\n\n_Method_\n\nAdds two numbers"));
    assert!(classes.trim_end().ends_with("</details>"));

    let interfaces = &groups[1].body;
    assert!(interfaces.contains("Calculator options.\n\nEvery field is optional."));
    assert!(interfaces.contains("<tr><td>precision*</td><td>Digits after the decimal point</td></tr>"));
    assert!(interfaces.contains("<tr><td>rounding*</td><td>No description</td></tr>"));

    assert_eq!(groups[3].body, "# Functions\n\n");
}

#[test]
fn test_untitled_group_with_unnamed_member() {
    let groups = OutputAssembler::default().assemble(&fixture()).unwrap();
    let body = &groups[2].body;
    assert!(body.starts_with("# Untitled Group\n\n"));
    assert!(body.contains("## No name for reflection #8 (Variable)"));
    assert!(body.contains("No description"));
}

#[test]
fn test_first_group_only_by_default() {
    let document = Document::new(
        vec![ReflectionNode::new(1, ReflectionKind::Method).with_name("run")],
        vec![Group::new("Methods", vec![1]), Group::new("Empty", vec![])],
    );

    let groups = OutputAssembler::default().assemble(&document).unwrap();
    assert_eq!(groups.len(), 2);

    let output = select_output(&groups, Config::default().render.emit);
    assert_eq!(output, groups[0].body);
    assert!(!output.contains("# Empty"));

    let everything = select_output(&groups, Emit::All);
    assert!(everything.contains("# Methods"));
    assert!(everything.contains("# Empty"));
}

#[test]
fn test_configured_assembler() {
    let config = Config::parse("[render]\nuntitled-group = \"Misc\"\nmax-depth = 3\n").unwrap();
    let groups = OutputAssembler::from_config(&config.render)
        .assemble(&fixture())
        .unwrap();
    assert!(groups[2].body.starts_with("# Misc\n\n"));

    let too_shallow = Config::parse("[render]\nmax-depth = 2\n").unwrap();
    assert!(OutputAssembler::from_config(&too_shallow.render)
        .assemble(&fixture())
        .is_err());
}

#[test]
fn test_resolver_and_renderer_compose() {
    let document = fixture();
    let index = NodeIndex::build(&document);
    let resolver = GroupResolver::new(&index);
    let renderer = MarkdownRenderer::new();

    let members = resolver.resolve_group(&document.groups[1]);
    assert_eq!(members.len(), 1);

    let first = renderer.render(members[0], RenderContext::root()).unwrap();
    let second = renderer.render(members[0], RenderContext::root()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("## Options\n"));
}

#[test]
fn test_shallow_limit_keeps_interface_tables() {
    let document = Document::new(
        vec![ReflectionNode::new(1, ReflectionKind::Interface)
            .with_name("Point")
            .with_child(ReflectionNode::new(2, ReflectionKind::Property).with_name("x"))],
        vec![Group::new("Interfaces", vec![1])],
    );

    let config = Config::parse("[render]\nmax-depth = 2\n").unwrap();
    let groups = OutputAssembler::from_config(&config.render)
        .assemble(&document)
        .unwrap();
    let output = select_output(&groups, Emit::First);
    assert!(output.starts_with("# Interfaces\n\n## Point\n"));
    assert!(output.contains("<thead><th>Name</th><th>Description</th></thead>"));
    assert_eq!(output.matches("<tr>").count(), 1);
}
