//! Tests for rendering completed trees

mod common;

use std::fs;
use std::thread;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use common::*;
use tagtree::util::testing;
use tagtree::{build, render, AttributeOrder, Element, RenderSettings, Renderer, ToOutline};

fn intro_doc() -> Element {
    build::<Doc, _>(|doc| {
        doc.section(|s| {
            s.id("intro");
            s.text("hello");
        });
    })
}

fn page() -> Element {
    build::<Html, _>(|html| {
        html.lang("en");
        html.head(|head| {
            head.title(|t| {
                t.text("Home");
            });
        });
        html.body(|body| {
            body.class("main");
            body.h1(|h| {
                h.text("Welcome");
            });
            body.p(|p| {
                p.text("Read the");
                p.a(|a| {
                    a.href("/docs").text("docs");
                });
                p.text(".");
            });
        });
    })
}

#[test]
fn given_doc_with_section_when_rendering_then_matches_expected_lines() {
    testing::init_test_setup();

    // Act
    let out = render(&intro_doc());

    // Assert
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<doc>",
            "  <section id=\"intro\">",
            "    hello",
            "  </section>",
            "</doc>",
        ]
    );
    assert!(out.ends_with("</doc>\n"));
}

#[test]
fn given_page_when_rendering_then_nested_structure_is_indented() {
    let expected = "\
<html lang=\"en\">
  <head>
    <title>
      Home
    </title>
  </head>
  <body class=\"main\">
    <h1>
      Welcome
    </h1>
    <p>
      Read the
      <a href=\"/docs\">
        docs
      </a>
      .
    </p>
  </body>
</html>
";
    assert_eq!(render(&page()), expected);
}

#[test]
fn given_same_tree_when_rendering_repeatedly_then_output_is_identical() {
    let tree = page();
    let first = render(&tree);
    for _ in 0..3 {
        assert_eq!(render(&tree), first);
    }
    assert_eq!(tree.to_string(), first);
}

#[test]
fn given_completed_tree_when_rendering_from_several_threads_then_all_agree() {
    let tree = page();
    let expected = render(&tree);

    let outputs: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| render(&tree))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.iter().all(|o| *o == expected));
}

#[test]
fn given_mixed_content_when_rendering_then_text_surrounds_child_subtree() {
    let tree = build::<P, _>(|p| {
        p.text("X");
        p.b(|b| {
            b.text("inner");
        });
        p.text("Y");
    });

    let out = render(&tree);
    let x = out.find("  X\n").unwrap();
    let b_open = out.find("<b>").unwrap();
    let b_close = out.find("</b>").unwrap();
    let y = out.find("  Y\n").unwrap();
    assert!(x < b_open && b_open < b_close && b_close < y);
    assert_eq!(out, "<p>\n  X\n  <b>\n    inner\n  </b>\n  Y\n</p>\n");
}

#[test]
fn given_overwritten_attribute_when_rendering_then_only_last_value_appears() {
    let tree = build::<Section, _>(|s| {
        s.attr("a", "1");
        s.attr("a", "2");
    });

    let out = render(&tree);
    assert_eq!(out, "<section a=\"2\">\n</section>\n");
    assert!(!out.contains("a=\"1\""));
}

#[rstest]
#[case(AttributeOrder::Lexical, "<a class=\"c\" href=\"h\" title=\"t\">\n</a>\n")]
#[case(AttributeOrder::Insertion, "<a title=\"t\" href=\"h\" class=\"c\">\n</a>\n")]
fn given_attribute_order_when_rendering_then_order_is_stable(
    #[case] order: AttributeOrder,
    #[case] expected: &str,
) {
    let tree = build::<A, _>(|a| {
        a.attr("title", "t");
        a.href("h");
        a.attr("class", "c");
    });

    let renderer = Renderer::new(RenderSettings::default().with_attribute_order(order));
    assert_eq!(renderer.render(&tree), expected);
    assert_eq!(renderer.render(&tree), expected);
}

#[rstest]
#[case(0, "<doc>\n<section id=\"intro\">\nhello\n</section>\n</doc>\n")]
#[case(4, "<doc>\n    <section id=\"intro\">\n        hello\n    </section>\n</doc>\n")]
fn given_indent_width_when_rendering_then_unit_is_consistent(
    #[case] width: usize,
    #[case] expected: &str,
) {
    let renderer = Renderer::new(RenderSettings::default().with_indent_width(width));
    assert_eq!(renderer.render(&intro_doc()), expected);
}

#[test]
fn given_settings_file_when_rendering_then_file_settings_apply() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagtree.toml");
    fs::write(&path, "indent_unit = \"\\t\"\n").unwrap();

    // Act
    let no_env: Vec<(String, String)> = Vec::new();
    let settings = RenderSettings::load_from(None, Some(path.as_path()), no_env).unwrap();
    let out = Renderer::new(settings).render(&intro_doc());

    // Assert
    assert_eq!(out, "<doc>\n\t<section id=\"intro\">\n\t\thello\n\t</section>\n</doc>\n");
}

#[test]
fn given_render_to_writer_when_rendering_then_appends_to_existing_content() {
    let mut out = String::from("prefix\n");
    Renderer::default().render_to(&intro_doc(), &mut out).unwrap();
    assert!(out.starts_with("prefix\n<doc>\n"));
}

#[test]
fn given_tree_when_converting_to_outline_then_structure_is_shown() {
    let outline = intro_doc().to_outline();
    let drawn = outline.to_string();

    assert_eq!(outline.root, "doc");
    assert!(drawn.contains("section id=\"intro\""));
    assert!(drawn.contains("\"hello\""));
}
