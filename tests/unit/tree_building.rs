use dirjson::listing::{InsertStrategy, ListingConfig};
use dirjson::tree::{insert_by_segments, TreeNode};
use dirjson::{build_tree, build_tree_with_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn names(node: &TreeNode) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}

fn segment_config() -> ListingConfig {
    ListingConfig::default().with_strategy(InsertStrategy::Segment)
}

#[test]
fn test_project_example() {
    let td = TempDir::new().unwrap();
    let root = td.path().join("project");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("sub/b.txt"), "b").unwrap();

    for config in [ListingConfig::default(), segment_config()] {
        let tree = build_tree_with_config(&root, &config).unwrap();
        assert_eq!(tree.name, "project");
        assert!(tree.is_dir);
        assert_eq!(names(&tree), ["a.txt", "sub"]);

        let a = tree.child("a.txt").unwrap();
        assert!(!a.is_dir);
        assert!(a.children.is_empty());

        let sub = tree.child("sub").unwrap();
        assert!(sub.is_dir);
        assert_eq!(names(sub), ["b.txt"]);
        assert_eq!(
            PathBuf::from(&sub.children[0].path),
            root.join("sub").join("b.txt")
        );
    }
}

#[test]
fn test_empty_root() {
    let td = TempDir::new().unwrap();
    let tree = build_tree(td.path()).unwrap();
    assert!(tree.children.is_empty());
    assert_eq!(tree.path, td.path().to_string_lossy());
}

#[test]
fn test_flat_directory_has_depth_one() {
    let td = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(td.path().join(name), name).unwrap();
    }

    let tree = build_tree(td.path()).unwrap();
    assert_eq!(tree.depth(), 1);
    assert_eq!(names(&tree), ["a.txt", "b.txt", "c.txt"]);
    assert!(tree.children.iter().all(|c| !c.is_dir && c.children.is_empty()));
}

#[test]
fn test_mirrors_hierarchy() {
    let td = TempDir::new().unwrap();
    let root = td.path();
    fs::create_dir_all(root.join("src/bin")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("src/lib.rs"), "").unwrap();
    fs::write(root.join("src/bin/main.rs"), "").unwrap();
    fs::write(root.join("README"), "").unwrap();

    let tree = build_tree(root).unwrap();
    assert_eq!(names(&tree), ["README", "docs", "src"]);
    assert!(tree.child("docs").unwrap().children.is_empty());
    assert!(tree.child("docs").unwrap().is_dir);
    assert_eq!(names(tree.child("src").unwrap()), ["bin", "lib.rs"]);
    assert!(tree.descendant(&["src", "bin", "main.rs"]).is_some());
    assert_eq!(tree.count_kinds(), (3, 3));
}

fn collision_fixture(base: &Path) -> PathBuf {
    // `data` is a directory at the top and a file inside `nested`.
    let root = base.join("data");
    fs::create_dir_all(root.join("data")).unwrap();
    fs::create_dir_all(root.join("nested")).unwrap();
    fs::write(root.join("data/inner.txt"), "").unwrap();
    fs::write(root.join("nested/data"), "").unwrap();
    root
}

#[test]
fn test_name_collisions_are_deterministic_under_segment_search() {
    let td = TempDir::new().unwrap();
    let root = collision_fixture(td.path());

    let first = build_tree_with_config(&root, &segment_config()).unwrap();
    let second = build_tree_with_config(&root, &segment_config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_name_collisions_are_exact_under_index() {
    let td = TempDir::new().unwrap();
    let root = collision_fixture(td.path());

    let tree = build_tree(&root).unwrap();
    assert_eq!(tree.name, "data");
    assert_eq!(names(&tree), ["data", "nested"]);
    assert_eq!(names(tree.child("data").unwrap()), ["inner.txt"]);
    let nested_data = tree.descendant(&["nested", "data"]).unwrap();
    assert!(!nested_data.is_dir);
    assert_eq!(tree.descendant_count(), 4);
}

#[test]
fn test_segment_search_fans_out_on_ambiguous_tree() {
    let mut root = TreeNode::directory("r", "r");
    let mut left = TreeNode::directory("a", "r/a");
    left.children.push(TreeNode::directory("x", "r/a/x"));
    let mut right = TreeNode::directory("a", "r/a");
    right.children.push(TreeNode::directory("x", "r/a/x"));
    root.children.push(left);
    root.children.push(right);

    let node = TreeNode::file("f", "r/a/x/f");
    let first = insert_by_segments(&mut root.clone(), &["r", "a", "x"], &node);
    let second = insert_by_segments(&mut root, &["r", "a", "x"], &node);
    assert_eq!(first, 2);
    assert_eq!(first, second);
}

#[test]
fn test_max_depth_truncates_tree() {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("a/b/c")).unwrap();

    let config = ListingConfig::default().with_max_depth(Some(2));
    let tree = build_tree_with_config(td.path(), &config).unwrap();
    assert_eq!(tree.depth(), 2);
    assert!(tree.descendant(&["a", "b"]).unwrap().children.is_empty());
}
