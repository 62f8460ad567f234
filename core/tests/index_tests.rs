use search_core::{build_index, insert_last_occurrence, top_k, Document, IndexBuilder, NoiseWords, Occurrence, Result};

fn words(text: &str) -> Vec<String> { text.split_whitespace().map(str::to_string).collect() }

fn corpus() -> Vec<Result<Document<Vec<String>>>> {
    vec![
        Ok(Document { id: "docA".into(), tokens: words("Dog. dog dog, dog! DOG the cat is") }),
        Ok(Document { id: "docB".into(), tokens: words("dog dog dog; Cat cat. cat cat") }),
        Ok(Document { id: "docC".into(), tokens: words("cat: cat? bird") }),
    ]
}

fn noise() -> NoiseWords { ["the", "is"].into_iter().collect() }

#[test]
fn answers_or_query_across_documents() {
    let index = build_index(corpus(), noise()).unwrap();
    assert_eq!(index.document_count(), 3);
    assert!(!index.contains("the"));
    assert_eq!(top_k(&index, "dog", "cat", 5), Some(vec!["docA", "docB", "docC"]));
    assert_eq!(top_k(&index, "cat", "dog", 5), Some(vec!["docA", "docB", "docC"]));
    assert_eq!(top_k(&index, "bird", "fish", 5), Some(vec!["docC"]));
    assert_eq!(top_k(&index, "fish", "the", 5), None);
}

#[test]
fn equal_frequencies_favour_first_keyword() {
    let mut b = IndexBuilder::new(NoiseWords::new());
    b.add_document("left", ["alpha", "alpha"]);
    b.add_document("right", ["beta", "beta"]);
    let index = b.finish();
    assert_eq!(top_k(&index, "alpha", "beta", 5), Some(vec!["left", "right"]));
    assert_eq!(top_k(&index, "beta", "alpha", 5), Some(vec!["right", "left"]));
}

#[test]
fn results_are_bounded_and_unique() {
    let mut b = IndexBuilder::new(NoiseWords::new());
    for i in 0..8u32 {
        let mut tokens = vec!["red".to_string(); (i + 1) as usize];
        tokens.extend(vec!["blue".to_string(); (8 - i) as usize]);
        b.add_document(&format!("doc{i}"), tokens);
    }
    let index = b.finish();
    let docs = top_k(&index, "red", "blue", 5).unwrap();
    assert_eq!(docs.len(), 5);
    let mut unique = docs.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
    assert_eq!(docs[0], "doc7");
    assert_eq!(docs[1], "doc0");
}

#[test]
fn lists_stay_sorted_after_every_merge() {
    let freqs = [3u32, 7, 1, 7, 4, 4, 9, 2, 3, 8, 1, 5];

    let mut list: Vec<Occurrence> = Vec::new();
    for (i, f) in freqs.iter().enumerate() {
        list.push(Occurrence::new(format!("d{i}"), *f));
        insert_last_occurrence(&mut list);
        assert_eq!(list.len(), i + 1);
        assert!(
            list.windows(2).all(|w| w[0].frequency >= w[1].frequency),
            "unsorted after inserting d{i}: {list:?}"
        );
    }

    let mut b = IndexBuilder::new(NoiseWords::new());
    for (i, f) in freqs.iter().enumerate() {
        b.add_document(&format!("d{i}"), vec!["word"; *f as usize]);
    }
    let index = b.finish();
    assert_eq!(index.keywords().collect::<Vec<_>>(), vec!["word"]);
    assert_eq!(index.occurrences("word").unwrap(), list.as_slice());
}

#[test]
fn insertion_trace_is_deterministic() {
    let prefix: Vec<Occurrence> = [9u32, 8, 6, 6, 4, 2, 1]
        .iter()
        .enumerate()
        .map(|(i, f)| Occurrence::new(format!("p{i}"), *f))
        .collect();
    let run = |freq: u32| {
        let mut list = prefix.clone();
        list.push(Occurrence::new("new", freq));
        let trace = insert_last_occurrence(&mut list);
        let at = list.iter().position(|o| o.document == "new").unwrap();
        (trace, at)
    };
    for freq in 0..11 {
        assert_eq!(run(freq), run(freq));
    }
    // hi=0 low=6: mid 3 (6 == 6) stops at once, new entry goes in front of p3.
    assert_eq!(run(6), (Some(vec![3]), 3));
    // mid 3 (6 > 5) -> hi 4; mid 5 (2 < 5) -> low 4; mid 4 (4 < 5) -> low 3.
    assert_eq!(run(5), (Some(vec![3, 5, 4]), 4));
    assert_eq!(run(10), (Some(vec![3, 1, 0]), 0));
    assert_eq!(run(0), (Some(vec![3, 5, 6]), 7));
}

#[test]
fn failed_document_aborts_build() {
    let docs: Vec<Result<Document<Vec<String>>>> = vec![
        Ok(Document { id: "ok".into(), tokens: words("fine") }),
        Err(search_core::IndexError::SourceUnavailable {
            path: "missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }),
    ];
    assert!(build_index(docs, NoiseWords::new()).is_err());
}
