use lse_core::{build_index, top_matches, KeywordIndex, MemorySource, StopWords};

fn deep_world_index() -> KeywordIndex {
    let source = MemorySource::new()
        .with_document("doc1", "Deep deep world.")
        .with_document("doc2", "World world world!");
    build_index(&source, &["doc1", "doc2"], StopWords::new()).unwrap()
}

fn corpus_index() -> KeywordIndex {
    let source = MemorySource::new()
        .with_document("a", "red red red red blue")
        .with_document("b", "red red blue blue blue blue blue")
        .with_document("c", "red red red blue blue blue")
        .with_document("d", "blue blue")
        .with_document("e", "red")
        .with_document("f", "red red");
    build_index(&source, &["a", "b", "c", "d", "e", "f"], StopWords::new()).unwrap()
}

#[test]
fn union_is_ranked_and_deduplicated() {
    let index = deep_world_index();
    assert_eq!(top_matches(&index, "deep", "world", 5), Some(vec!["doc2".to_string(), "doc1".to_string()]));
}

#[test]
fn unknown_keywords_give_no_result() {
    let index = deep_world_index();
    assert_eq!(top_matches(&index, "missing1", "missing2", 5), None);
}

#[test]
fn single_known_keyword_returns_its_list() {
    let index = deep_world_index();
    let expected = Some(vec!["doc2".to_string(), "doc1".to_string()]);
    assert_eq!(top_matches(&index, "world", "missing", 5), expected);
    assert_eq!(top_matches(&index, "missing", "world", 5), expected);
    assert_eq!(top_matches(&index, "missing", "world", 1), Some(vec!["doc2".to_string()]));
}

#[test]
fn top5_is_bounded_and_idempotent() {
    let index = corpus_index();
    let first = index.top5_search("red", "blue").unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first, index.top5_search("red", "blue").unwrap());
    // b: blue 5, a: red 4, c: red 3 (ties blue 3), f: red 2 (ties d: blue 2)
    assert_eq!(first, vec!["b", "a", "c", "f", "d"]);
}

#[test]
fn keyword_order_breaks_ties() {
    let index = corpus_index();
    let result = index.top_matches("blue", "red", 6).unwrap();
    assert_eq!(result, vec!["b", "a", "c", "d", "f", "e"]);
}
