use pms_core::{
    render_to_string, Atomic, AttributeRecord, Composite, PmsConfig, Prefixed, PrintVisitor,
    Visitable,
};
use std::sync::Arc;

fn atomic(name: &str, description: &str, attributes: &[&str]) -> Arc<Atomic> {
    let records = attributes
        .iter()
        .map(|attribute| AttributeRecord::named(*attribute))
        .collect();
    Arc::new(Atomic::new(name, description, records).expect("atomic should build"))
}

fn downscaled() -> Composite {
    let dummy = atomic("dummy", "Dummy set", &["a", "b"]);
    let common = atomic("common", "Common subset", &["title"]);
    let driving = Composite::new(
        "driving",
        "Driving model",
        vec![Prefixed::with_prefix("gcm", Arc::clone(&dummy)).with_role("GCM")],
    )
    .expect("driving should build");

    Composite::new(
        "downscaled",
        "Downscaled output",
        vec![
            Prefixed::bare(common),
            Prefixed::with_prefix("driving", Arc::new(driving)).with_role("Inputs"),
            Prefixed::with_prefix("pfx", dummy),
        ],
    )
    .expect("downscaled should build")
}

#[test]
fn renders_indented_tree_with_roles_and_qualified_names() {
    let text = render_to_string(&downscaled(), &PmsConfig::default());

    let expected = "\
Downscaled output [downscaled]
   Common subset [common]
      title
   Inputs: Driving model [driving]
      GCM: Dummy set [dummy]
         driving__gcm__a
         driving__gcm__b
   Dummy set [dummy]
      pfx__a
      pfx__b
";
    assert_eq!(text, expected);
}

#[test]
fn honours_configured_indentation_and_separator() {
    let config = PmsConfig {
        prefix_separator: ".".to_string(),
        indentation: "\t".to_string(),
        ..PmsConfig::default()
    };
    let root = Prefixed::with_prefix("pfx", atomic("dummy", "Dummy set", &["a"]))
        .with_role("Primary");

    let text = render_to_string(&root, &config);
    assert_eq!(text, "Primary: Dummy set [dummy]\n\tpfx.a\n");
}

#[test]
fn writes_into_caller_supplied_sink() {
    let mut visitor = PrintVisitor::new(Vec::<u8>::new());
    downscaled().accept(&mut visitor);
    let bytes = visitor.finish().expect("vec sink should not fail");

    let text = String::from_utf8(bytes).expect("utf8 output");
    assert_eq!(text.lines().count(), 10);
    assert!(text.starts_with("Downscaled output [downscaled]\n"));
}

#[test]
fn empty_composite_prints_only_its_header() {
    let empty = Composite::new("empty", "Nothing yet", vec![]).expect("empty composite");
    assert_eq!(
        render_to_string(&empty, &PmsConfig::default()),
        "Nothing yet [empty]\n"
    );
}
