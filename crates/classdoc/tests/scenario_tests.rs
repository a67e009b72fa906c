use classdoc::{BlockMode, DocblockError, Outcome, Pipeline, extract, render_extraction};

fn run(source: &str) -> String {
    match Pipeline::default()
        .process_source("src/Example.js", source)
        .expect("pipeline should succeed")
    {
        Outcome::Rewritten(text) => text,
        Outcome::Unchanged => source.to_string(),
        Outcome::Skipped => panic!("nothing should be skipped by default"),
    }
}

#[test]
fn undocumented_methods_render_flat_list() {
    let source = "class Greeter {\n  hello() {}\n  wave() {}\n  bye() {}\n}\n";

    assert_eq!(
        run(source),
        "/**\n * Methods:\n * - hello()\n * - wave()\n * - bye()\n */\n\n\
         class Greeter {\n  hello() {}\n  wave() {}\n  bye() {}\n}\n"
    );
}

#[test]
fn adjacent_doc_comments_become_summaries() {
    let source = r#"class Counter {
  /** does X */
  increment() {}
  /** does X */
  decrement() {}
  /** does X */
  reset() {}
}
"#;

    let output = run(source);
    assert!(output.starts_with(
        "/**\n * Methods:\n * - increment() — does X\n * - decrement() — does X\n * - reset() — does X\n */\n\nclass Counter {"
    ));
}

#[test]
fn section_markers_group_following_methods() {
    let source = r#"class Service {
  /* SECTION: Init */
  init() {}

  /* SECTION: Teardown */
  stop() {}

  flush() {}

  dispose() {}
}
"#;

    let extraction = extract("service.js", source).expect("valid source");
    assert_eq!(extraction.anchors.len(), 2);
    assert_eq!(render_extraction(&extraction).mode, BlockMode::Contents);

    let output = run(source);
    let expected_block = "/**\n * Contents\n *\n * [Init]\n * - init()\n *\n * [Teardown]\n * - stop()\n * - flush()\n * - dispose()\n */\n\n";
    assert!(output.starts_with(expected_block), "got:\n{output}");
    assert!(!output.contains("Methods:"));
    assert!(output.contains("/* SECTION: Init */"));
}

#[test]
fn rerun_after_adding_method_replaces_block() {
    let original = "class Queue {\n  push() {}\n}\n";
    let first = run(original);
    assert_eq!(first, "/**\n * Methods:\n * - push()\n */\n\nclass Queue {\n  push() {}\n}\n");

    let edited = first.replace("  push() {}\n", "  push() {}\n  /** Removes the head. */\n  pop() {}\n");
    let second = run(&edited);

    assert_eq!(
        second,
        "/**\n * Methods:\n * - push()\n * - pop() — Removes the head.\n */\n\n\
         class Queue {\n  push() {}\n  /** Removes the head. */\n  pop() {}\n}\n"
    );
    assert_eq!(second.matches("Methods:").count(), 1);
}

#[test]
fn unparseable_source_is_a_parse_error() {
    let error = Pipeline::default()
        .process_source("broken.js", "class Broken {\n  method( {\n}\n")
        .expect_err("parse should fail");

    assert!(matches!(error, DocblockError::Parse { .. }));
    assert!(error.to_string().contains("broken.js"));
}

#[test]
fn mode_switch_removes_previous_shape() {
    let methods_first = run("class A {\n  a() {}\n  b() {}\n}\n");
    assert!(methods_first.contains(" * Methods:"));

    let sectioned = methods_first.replace("  b() {}", "  /* SECTION: Later */\n  b() {}");
    let output = run(&sectioned);

    assert!(output.starts_with("/**\n * Contents\n *\n * [Later]\n * - b()\n */\n\n"));
    assert!(!output.contains("Methods:"));
}

#[test]
fn blank_line_or_marker_breaks_summary_adjacency() {
    let source = r#"class Gaps {
  /** Far away. */

  spaced() {}

  /** Hidden by the marker. */
  /* SECTION: Api */
  marked() {}

  /** Close by. */
  // a line comment does not interrupt
  near() {}
}
"#;

    let extraction = extract("gaps.js", source).expect("valid source");
    let summaries: Vec<(&str, &str)> = extraction
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.summary.as_str()))
        .collect();

    assert_eq!(
        summaries,
        vec![("spaced", ""), ("marked", ""), ("near", "Close by.")]
    );
}

#[test]
fn nearest_comment_wins_over_earlier_ones() {
    let source = r#"/** File header. */
class Doc {
  /**
   * @param {string} value
   * Stores the value.
   * More detail.
   */
  store(value) {}
}
"#;

    let extraction = extract("doc.js", source).expect("valid source");
    assert_eq!(extraction.methods[0].summary, "Stores the value.");
}

#[test]
fn methods_keep_declaration_order() {
    let source = r#"class Mixed {
  static create() {}
  get size() { return 0; }
  #tick = () => {};
  constructor() {}
  async load() {}
  *entries() {}
}
"#;

    let extraction = extract("mixed.js", source).expect("valid source");
    let names: Vec<&str> = extraction.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["create", "size", "tick", "constructor", "load", "entries"]);
    assert!(extraction
        .methods
        .windows(2)
        .all(|pair| pair[0].position < pair[1].position));
}

#[test]
fn typescript_sources_are_supported() {
    let source = r#"export class Repo<T> {
  private items: T[] = [];
  /** Adds one item. */
  public add(item: T): void {}
  readonly find = (id: string): T | undefined => undefined;
}
"#;

    let extraction = extract("repo.ts", source).expect("valid source");
    let names: Vec<&str> = extraction.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["add", "find"]);
    assert_eq!(extraction.methods[0].summary, "Adds one item.");
}

#[test]
fn trailing_default_export_gets_blank_line() {
    let source = "class Store {\n  get() {}\n}\nexport default Store;\n";
    assert_eq!(
        run(source),
        "/**\n * Methods:\n * - get()\n */\n\nclass Store {\n  get() {}\n}\n\nexport default Store;\n"
    );
}

#[test]
fn comment_terminator_in_method_name_is_escaped() {
    let source = "class A {\n  'a*/b'() {}\n  c() {}\n}\n";

    let output = run(source);
    assert_eq!(
        output,
        "/**\n * Methods:\n * - a*\\/b()\n * - c()\n */\n\nclass A {\n  'a*/b'() {}\n  c() {}\n}\n"
    );
    assert!(matches!(
        Pipeline::default().process_source("src/Example.js", &output),
        Ok(Outcome::Unchanged)
    ));
}

#[test]
fn undocumented_method_does_not_inherit_previous_doc() {
    let source = "class A {\n  /** Does a. */\n  a() {}\n  b() {}\n}\n";

    let extraction = extract("a.js", source).expect("valid source");
    let summaries: Vec<(&str, &str)> = extraction
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.summary.as_str()))
        .collect();
    assert_eq!(summaries, vec![("a", "Does a."), ("b", "")]);
}
