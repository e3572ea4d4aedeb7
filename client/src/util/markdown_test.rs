use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown("# Title\n\nSome *words*.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>words</em>"));
}

#[test]
fn escapes_raw_html() {
    let html = render_markdown("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn renders_tables() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
}
