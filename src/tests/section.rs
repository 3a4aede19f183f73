use super::{dedup_slug, link_hierarchy, slugify, Section};

fn section(title: &str, level: usize) -> Section {
    Section {
        id: slugify(title),
        title: title.to_string(),
        level,
        line_start: 0,
        line_end: 0,
        file_path: "doc.md".to_string(),
        parent_index: None,
        children_indices: Vec::new(),
    }
}

#[test]
fn test_slugify_matches_heading_anchor_style() {
    assert_eq!(slugify("Getting Started"), "getting-started");
    assert_eq!(slugify("  What's new?  "), "what-s-new");
    assert_eq!(slugify("FAQ: git rebase --onto"), "faq-git-rebase-onto");
    assert_eq!(slugify("???"), "section");
}

#[test]
fn test_dedup_slug_appends_suffixes() {
    let mut taken = Vec::new();
    assert_eq!(dedup_slug("setup".to_string(), &mut taken), "setup");
    assert_eq!(dedup_slug("setup".to_string(), &mut taken), "setup-1");
    assert_eq!(dedup_slug("setup".to_string(), &mut taken), "setup-2");
    assert_eq!(dedup_slug("usage".to_string(), &mut taken), "usage");
}

#[test]
fn test_link_hierarchy_follows_levels() {
    let mut sections = vec![
        section("Intro", 1),
        section("Background", 2),
        section("Detail", 3),
        section("Methods", 2),
        section("Results", 1),
    ];
    link_hierarchy(&mut sections);

    assert_eq!(sections[0].parent_index, None);
    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[2].parent_index, Some(1));
    assert_eq!(sections[3].parent_index, Some(0));
    assert_eq!(sections[4].parent_index, None);
    assert_eq!(sections[0].children_indices, vec![1, 3]);
    assert_eq!(sections[1].children_indices, vec![2]);
}
