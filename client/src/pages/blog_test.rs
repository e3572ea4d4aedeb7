use super::*;

fn post(id: &str, published: bool, created_at: &str, excerpt: Option<&str>) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: format!("Post {id}"),
        slug: format!("post-{id}"),
        content: "Body text that goes on for a while.".to_owned(),
        excerpt: excerpt.map(str::to_owned),
        published,
        created_at: Some(created_at.to_owned()),
    }
}

#[test]
fn published_posts_drops_drafts_and_sorts_newest_first() {
    let posts = vec![
        post("a", true, "2024-01-01T00:00:00Z", None),
        post("b", false, "2024-03-01T00:00:00Z", None),
        post("c", true, "2024-02-01T00:00:00Z", None),
    ];
    let ids: Vec<String> = published_posts(&posts).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn summary_prefers_excerpt() {
    assert_eq!(summary(&post("a", true, "2024-01-01", Some("Short intro"))), "Short intro");
}

#[test]
fn summary_falls_back_to_body_when_excerpt_blank() {
    assert_eq!(summary(&post("a", true, "2024-01-01", Some("   "))), "Body text that goes on for a while.");
}
